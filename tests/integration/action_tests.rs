use crate::common;
use assert_json_diff::assert_json_include;
use mockito::Matcher;
use pamfax_client::prelude::*;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

#[tokio::test]
async fn test_action_sends_credentials_and_params() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let mock = server
        .mock("GET", common::action_path("FaxJob", "AddRecipient"))
        .match_query(common::authenticated_query(&[
            ("number", "+4930123456"),
            ("name", "Alice Smith"),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::success_body(json!({
            "FaxRecipient": {"number": "+4930123456", "name": "Alice Smith"}
        })))
        .create_async()
        .await;

    let response = assert_ok!(client.add_recipient("+4930123456", Some("Alice Smith")).await);

    mock.assert_async().await;
    assert!(response.is_success());
    assert_json_include!(
        actual: response.into_json().unwrap(),
        expected: json!({"FaxRecipient": {"number": "+4930123456"}})
    );
}

#[tokio::test]
async fn test_list_parameters_are_indexed() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let mock = server
        .mock("GET", common::action_path("FaxJob", "AddRecipients"))
        .match_query(common::authenticated_query(&[
            ("numbers[0]", "+4930111"),
            ("numbers[1]", "+4930222"),
            ("names[0]", "Bob"),
            ("names[1]", "Carol"),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::success_body(json!({})))
        .create_async()
        .await;

    let response = client
        .add_recipients(&["+4930111", "+4930222"], Some(&["Bob", "Carol"]))
        .await;

    mock.assert_async().await;
    assert!(assert_ok!(response).is_success());
}

#[tokio::test]
async fn test_map_parameters_are_keyed() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let mock = server
        .mock("GET", common::action_path("UserInfo", "SetOnlineStorageSettings"))
        .match_query(common::authenticated_query(&[
            ("provider", "DropBoxStorage"),
            ("settings[inbox_enabled]", "1"),
            ("settings[inbox_path]", "/Faxes"),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::success_body(json!({})))
        .create_async()
        .await;

    let response = client
        .set_online_storage_settings(
            "DropBoxStorage",
            &[("inbox_enabled", "1"), ("inbox_path", "/Faxes")],
        )
        .await;

    assert_ok!(response);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_uses_client_identity_defaults() {
    let mut server = common::start_server().await;
    common::mock_login(&mut server).await;
    let config = common::test_config(&server).with_user_ip("203.0.113.7");
    let client = assert_ok!(PamFax::new(config).await);
    let mock = server
        .mock("GET", common::action_path("FaxJob", "Create"))
        .match_query(common::authenticated_query(&[
            ("user_ip", "203.0.113.7"),
            ("user_agent", USER_AGENT),
            ("origin", DEFAULT_ORIGIN),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::success_body(json!({
            "FaxContainer": {"uuid": "fax-1", "state": "editing"}
        })))
        .create_async()
        .await;

    let response = assert_ok!(client.create(None, None, None).await);

    mock.assert_async().await;
    assert_eq!(response.as_json().unwrap()["FaxContainer"]["uuid"], "fax-1");
}

#[tokio::test]
async fn test_create_explicit_arguments_win() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let mock = server
        .mock("GET", common::action_path("FaxJob", "Create"))
        .match_query(common::authenticated_query(&[
            ("user_ip", "198.51.100.1"),
            ("user_agent", "my-app/2.0"),
            ("origin", "scan"),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::success_body(json!({})))
        .create_async()
        .await;

    let response = client
        .create(Some("198.51.100.1"), Some("my-app/2.0"), Some("scan"))
        .await;

    assert_ok!(response);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_binary_response_is_returned_raw() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let png = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    let mock = server
        .mock("GET", common::action_path("Common", "GetPagePreview"))
        .match_query(common::authenticated_query(&[
            ("uuid", "file-1"),
            ("page_no", "1"),
            ("max_width", "200"),
        ]))
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(png.clone())
        .create_async()
        .await;

    let response = assert_ok!(client.get_page_preview("file-1", 1, Some(200), None).await);

    mock.assert_async().await;
    let (content, content_type) = response.into_binary().unwrap();
    assert_eq!(content, png);
    assert_eq!(content_type, "image/png");
}

#[tokio::test]
async fn test_duplicate_key_document_is_repaired() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let body = r#"{"result":{"code":"success","count":1,"message":""},"FaxContainer":{"state":"editing"},"FaxContainerFile":{"uuid":"a"},"FaxContainerFile":{"uuid":"b"}}"#;
    let mock = server
        .mock("GET", common::action_path("FaxJob", "GetFaxState"))
        .match_query(common::authenticated_query(&[]))
        .with_status(200)
        .with_header("content-type", "application/json; charset=utf-8")
        .with_body(body)
        .create_async()
        .await;

    let response = assert_ok!(client.get_fax_state().await);

    mock.assert_async().await;
    let document = response.into_json().unwrap();
    assert_eq!(document["FaxContainerFile"]["uuid"], "a");
    assert_eq!(document["FaxContainer"]["state"], "editing");
}

#[tokio::test]
async fn test_http_error_status_is_returned() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let mock = server
        .mock("GET", common::action_path("Common", "ListZones"))
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("maintenance")
        .expect(1)
        .create_async()
        .await;

    let error = assert_err!(client.list_zones().await);

    mock.assert_async().await;
    match error {
        AppError::Http { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_application_error_is_left_to_the_caller() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let mock = server
        .mock("GET", common::action_path("FaxHistory", "GetFaxDetails"))
        .match_query(common::authenticated_query(&[("uuid", "missing")]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"result": {"code": "fax_not_found", "message": "Fax not found", "type": "error"}})
                .to_string(),
        )
        .create_async()
        .await;

    let response = assert_ok!(client.get_fax_details("missing").await);

    mock.assert_async().await;
    assert!(!response.is_success());
    assert_eq!(response.result().unwrap().code, "fax_not_found");
}

#[tokio::test]
async fn test_groups_are_reachable_individually() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let zones = server
        .mock("GET", common::action_path("Common", "ListZones"))
        .match_query(common::authenticated_query(&[]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::success_body(json!({"Zones": {"content": []}})))
        .create_async()
        .await;
    let price = server
        .mock("GET", common::action_path("NumberInfo", "GetPagePrice"))
        .match_query(common::authenticated_query(&[("faxnumber", "+4930123")]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::success_body(json!({"NumberInfo": {"price_per_page": 0.1}})))
        .create_async()
        .await;

    assert_ok!(client.common().list_zones().await);
    assert_ok!(client.number_info().get_page_price("+4930123", None).await);

    zones.assert_async().await;
    price.assert_async().await;
}
