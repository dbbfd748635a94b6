use crate::common;
use mockito::{Mock, ServerGuard};
use pamfax_client::prelude::*;
use serde_json::json;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};

async fn mock_fax_state(server: &mut ServerGuard, container_state: &str, hits: usize) -> Mock {
    server
        .mock("GET", common::action_path("FaxJob", "GetFaxState"))
        .match_query(common::authenticated_query(&[]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::success_body(json!({
            "FaxContainer": {"state": container_state},
            "Files": {"content": [{"name": "fax.pdf", "state": "converted"}]}
        })))
        .expect(hits)
        .create_async()
        .await
}

#[tokio::test]
async fn test_wait_until_ready_to_send() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let state = mock_fax_state(&mut server, "ready_to_send", 1).await;

    let document = assert_ok!(
        client
            .wait_until_ready_to_send(&PollConfig::fixed(3, 10), &CancellationToken::new())
            .await
    );

    state.assert_async().await;
    assert!(is_ready_to_send(&document));
}

#[tokio::test]
async fn test_wait_until_converted() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let state = mock_fax_state(&mut server, "editing", 1).await;

    let document = assert_ok!(
        client
            .wait_until_converted(&PollConfig::fixed(3, 10), &CancellationToken::new())
            .await
    );

    state.assert_async().await;
    assert!(!client.is_converting(&document));
}

#[tokio::test]
async fn test_poll_gives_up_after_max_attempts() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let state = mock_fax_state(&mut server, "editing", 3).await;

    let error = assert_err!(
        client
            .wait_until_ready_to_send(&PollConfig::fixed(3, 10), &CancellationToken::new())
            .await
    );

    state.assert_async().await;
    assert!(matches!(error, AppError::PollExhausted { attempts: 3 }));
}

#[tokio::test]
async fn test_poll_honors_cancellation_before_first_fetch() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let state = mock_fax_state(&mut server, "ready_to_send", 0).await;
    let cancel = CancellationToken::new();
    cancel.cancel();

    let error = assert_err!(
        client
            .wait_until_ready_to_send(&PollConfig::fixed(3, 10), &cancel)
            .await
    );

    state.assert_async().await;
    assert!(matches!(error, AppError::Cancelled));
}

#[tokio::test]
async fn test_poll_honors_cancellation_while_waiting() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let _state = mock_fax_state(&mut server, "editing", 1).await;
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    // one fetch, then a long sleep interrupted by the cancellation
    let error = assert_err!(
        client
            .wait_until_ready_to_send(&PollConfig::fixed(10, 60_000), &cancel)
            .await
    );

    assert!(matches!(error, AppError::Cancelled));
}

#[tokio::test]
async fn test_get_state_immediate() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let state = mock_fax_state(&mut server, "editing", 1).await;

    let response = assert_ok!(client.get_state(FetchMode::Immediate).await);

    state.assert_async().await;
    assert_eq!(
        fax_container_state(response.as_json().unwrap()),
        Some("editing")
    );
}

#[tokio::test]
async fn test_get_state_blocking_returns_first_document() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let state = mock_fax_state(&mut server, "editing", 1).await;

    let response = assert_ok!(
        client
            .get_state(FetchMode::blocking(PollConfig::fixed(5, 10)))
            .await
    );

    state.assert_async().await;
    assert!(response.is_success());
}

#[tokio::test]
async fn test_get_state_blocking_returns_application_error() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let state = server
        .mock("GET", common::action_path("FaxJob", "GetFaxState"))
        .match_query(common::authenticated_query(&[]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"result": {"code": "no_fax_in_session", "message": "No fax in this session"}})
                .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let response = assert_ok!(
        client
            .get_state(FetchMode::blocking(PollConfig::fixed(3, 10)))
            .await
    );

    state.assert_async().await;
    let result = response.result().unwrap();
    assert_eq!(result.code, "no_fax_in_session");
    assert_eq!(result.message, "No fax in this session");
}

#[tokio::test]
async fn test_get_state_blocking_is_bounded() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let state = server
        .mock("GET", common::action_path("FaxJob", "GetFaxState"))
        .match_query(common::authenticated_query(&[]))
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>maintenance</html>")
        .expect(2)
        .create_async()
        .await;

    let error = assert_err!(
        client
            .get_state(FetchMode::blocking(PollConfig::fixed(2, 10)))
            .await
    );

    state.assert_async().await;
    assert!(matches!(error, AppError::PollExhausted { attempts: 2 }));
}

#[tokio::test]
async fn test_get_state_blocking_honors_cancellation() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let state = mock_fax_state(&mut server, "editing", 0).await;
    let cancel = CancellationToken::new();
    cancel.cancel();

    let error = assert_err!(
        client
            .get_state(FetchMode::Blocking {
                poll: PollConfig::fixed(5, 10),
                cancel,
            })
            .await
    );

    state.assert_async().await;
    assert!(matches!(error, AppError::Cancelled));
}

#[tokio::test]
async fn test_poll_aborts_on_transport_error() {
    let mut server = common::start_server().await;
    let client = common::logged_in_client(&mut server).await;
    let state = server
        .mock("GET", common::action_path("FaxJob", "GetFaxState"))
        .match_query(common::authenticated_query(&[]))
        .with_status(502)
        .expect(1)
        .create_async()
        .await;

    let error = assert_err!(
        client
            .wait_until_ready_to_send(&PollConfig::fixed(5, 10), &CancellationToken::new())
            .await
    );

    state.assert_async().await;
    assert!(matches!(error, AppError::Http { .. }));
}
