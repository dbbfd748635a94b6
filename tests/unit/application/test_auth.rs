use pamfax_client::application::auth::extract_user_token;
use pamfax_client::error::AppError;
use pamfax_client::model::responses::ApiResponse;
use serde_json::json;

#[test]
fn test_extract_user_token_on_success() {
    let response = ApiResponse::Json(json!({
        "result": {"code": "success", "message": ""},
        "UserToken": {"token": "tok-123"},
        "User": {"username": "alice"}
    }));
    let (token, user) = extract_user_token(response).unwrap();
    assert_eq!(token, "tok-123");
    assert_eq!(user.unwrap()["username"], "alice");
}

#[test]
fn test_extract_user_token_on_failure() {
    let response = ApiResponse::Json(json!({
        "result": {"code": "bad_credentials", "message": "Wrong password", "type": "error"}
    }));
    match extract_user_token(response) {
        Err(AppError::LoginFailed { code, message }) => {
            assert_eq!(code, "bad_credentials");
            assert_eq!(message, "Wrong password");
        }
        other => panic!("expected LoginFailed, got {other:?}"),
    }
}

#[test]
fn test_extract_user_token_without_token() {
    let response = ApiResponse::Json(json!({"result": {"code": "success"}}));
    assert!(matches!(
        extract_user_token(response),
        Err(AppError::UnexpectedResponse(_))
    ));
}

#[test]
fn test_extract_user_token_from_binary() {
    let response = ApiResponse::Binary {
        content: b"<html>".to_vec(),
        content_type: "text/html".to_string(),
    };
    assert!(matches!(
        extract_user_token(response),
        Err(AppError::UnexpectedResponse(_))
    ));
}

#[test]
fn test_extract_user_token_without_result() {
    let response = ApiResponse::Json(json!({"UserToken": {"token": "tok"}}));
    assert!(matches!(
        extract_user_token(response),
        Err(AppError::UnexpectedResponse(_))
    ));
}
