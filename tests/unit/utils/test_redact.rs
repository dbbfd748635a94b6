use pamfax_client::utils::redact::redact_secrets;
use std::borrow::Cow;

#[test]
fn test_redact_login_url() {
    let url = "/Session/VerifyUser?apikey=key&apisecret=s3cr3t&apioutputformat=API_FORMAT_JSON&username=alice&password=wonderland";
    assert_eq!(
        redact_secrets(url),
        "/Session/VerifyUser?apikey=key&apisecret=***&apioutputformat=API_FORMAT_JSON&username=alice&password=***"
    );
}

#[test]
fn test_redact_user_token_and_old_password() {
    let url = "/UserInfo/SetPassword?apikey=key&usertoken=abc&password=new&old_password=old";
    assert_eq!(
        redact_secrets(url),
        "/UserInfo/SetPassword?apikey=key&usertoken=***&password=***&old_password=***"
    );
}

#[test]
fn test_redact_nothing_to_hide() {
    let url = "/Common/ListZones?apikey=key";
    assert!(matches!(redact_secrets(url), Cow::Borrowed(u) if u == url));
}
