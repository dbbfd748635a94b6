use assert_json_diff::assert_json_eq;
use pamfax_client::application::config::{ClientIdentity, RestApiConfig};
use pamfax_client::error::AppError;
use pamfax_client::model::http::{HttpClient, normalize_response, repair_duplicate_key};
use pamfax_client::model::responses::ApiResponse;
use serde_json::json;
use std::borrow::Cow;

#[test]
fn test_repair_removes_second_duplicate_key() {
    let body = r#"{"result":{"code":"success"},"FaxContainerFile":{"a":1},"FaxContainerFile":{"b":2}}"#;
    let repaired = repair_duplicate_key(body);
    assert!(matches!(repaired, Cow::Owned(_)));

    let value: serde_json::Value = serde_json::from_str(&repaired).unwrap();
    assert_json_eq!(
        value,
        json!({"result": {"code": "success"}, "FaxContainerFile": {"a": 1}})
    );
}

#[test]
fn test_repair_leaves_single_key_untouched() {
    let body = r#"{"FaxContainerFile":{"a":1}}"#;
    assert!(matches!(repair_duplicate_key(body), Cow::Borrowed(b) if b == body));
}

#[test]
fn test_repair_only_fires_for_exactly_two_occurrences() {
    let body = r#"{"FaxContainerFile":1,"FaxContainerFile":2,"FaxContainerFile":3}"#;
    assert_eq!(repair_duplicate_key(body), body);
}

#[test]
fn test_normalize_json_with_charset() {
    let response = normalize_response(
        "application/json; charset=utf-8",
        br#"{"result":{"code":"success","message":""}}"#,
    )
    .unwrap();
    assert!(response.is_success());
}

#[test]
fn test_normalize_repairs_before_parsing() {
    let body = br#"{"result":{"code":"success"},"FaxContainer":{"state":"editing"},"FaxContainerFile":{"uuid":"x"},"FaxContainerFile":{"uuid":"y"}}"#;
    let response = normalize_response("application/json", body).unwrap();
    assert_json_eq!(
        response.into_json().unwrap(),
        json!({
            "result": {"code": "success"},
            "FaxContainer": {"state": "editing"},
            "FaxContainerFile": {"uuid": "x"}
        })
    );
}

#[test]
fn test_normalize_binary_keeps_bytes_and_content_type() {
    let body = b"%PDF-1.4\x00\x01binary";
    let response = normalize_response("application/pdf", body).unwrap();
    assert_eq!(
        response,
        ApiResponse::Binary {
            content: body.to_vec(),
            content_type: "application/pdf".to_string(),
        }
    );
}

#[test]
fn test_normalize_missing_content_type_is_binary() {
    let response = normalize_response("", b"{}").unwrap();
    let (content, content_type) = response.into_binary().unwrap();
    assert_eq!(content, b"{}".to_vec());
    assert_eq!(content_type, "");
}

#[test]
fn test_normalize_invalid_json_fails() {
    let result = normalize_response("application/json", b"{not json");
    assert!(matches!(result, Err(AppError::Json(_))));
}

#[test]
fn test_http_client_trims_trailing_slash() {
    let rest_api = RestApiConfig {
        base_url: "https://sandbox-api.pamfax.biz/".to_string(),
        timeout: 5,
    };
    let client = HttpClient::new(&rest_api, ClientIdentity::default()).unwrap();
    assert_eq!(client.base_url(), "https://sandbox-api.pamfax.biz");
    assert_eq!(client.identity().origin, "script");
}
