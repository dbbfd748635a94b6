use pamfax_client::model::credentials::ApiCredentials;

#[test]
fn test_query_without_token() {
    let credentials = ApiCredentials::new("key", "secret");
    assert_eq!(
        credentials.to_query(),
        "?apikey=key&apisecret=secret&apioutputformat=API_FORMAT_JSON"
    );
    assert_eq!(credentials.user_token(), None);
}

#[test]
fn test_query_with_token() {
    let anonymous = ApiCredentials::new("key", "secret");
    let logged_in = anonymous.with_user_token("tok-123");

    assert_eq!(
        logged_in.to_query(),
        "?apikey=key&apisecret=secret&apioutputformat=API_FORMAT_JSON&usertoken=tok-123"
    );
    assert_eq!(logged_in.user_token(), Some("tok-123"));
    // the original value is left untouched
    assert_eq!(anonymous.user_token(), None);
    assert_eq!(logged_in.api_key(), "key");
    assert_eq!(logged_in.output_format(), "API_FORMAT_JSON");
}

#[test]
fn test_query_values_are_encoded() {
    let credentials = ApiCredentials::new("my key", "a&b");
    assert!(
        credentials
            .to_query()
            .starts_with("?apikey=my+key&apisecret=a%26b&")
    );
}

#[test]
fn test_debug_hides_secrets() {
    let credentials = ApiCredentials::new("key", "s3cr3t").with_user_token("t0k3n");
    let debug = format!("{credentials:?}");
    assert!(debug.contains("key"));
    assert!(!debug.contains("s3cr3t"));
    assert!(!debug.contains("t0k3n"));
}
