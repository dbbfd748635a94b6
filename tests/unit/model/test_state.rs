use pamfax_client::model::state::{fax_container_state, is_converting, is_ready_to_send};
use serde_json::json;

#[test]
fn test_is_converting_with_converting_file() {
    let state = json!({"Files": {"content": [
        {"name": "a.pdf", "state": "converted"},
        {"name": "b.doc", "state": "converting"}
    ]}});
    assert!(is_converting(&state));
}

#[test]
fn test_is_converting_with_empty_state() {
    let state = json!({"Files": {"content": [{"name": "a.pdf", "state": ""}]}});
    assert!(is_converting(&state));
}

#[test]
fn test_is_converting_with_missing_state() {
    let state = json!({"Files": {"content": [{"name": "a.pdf"}]}});
    assert!(is_converting(&state));
}

#[test]
fn test_is_not_converting_when_all_converted() {
    let state = json!({"Files": {"content": [
        {"name": "a.pdf", "state": "converted"},
        {"name": "b.pdf", "state": "success"}
    ]}});
    assert!(!is_converting(&state));
}

#[test]
fn test_is_not_converting_without_files() {
    assert!(!is_converting(&json!({"Files": {"content": []}})));
    assert!(!is_converting(&json!({"Files": {}})));
    assert!(!is_converting(&json!({"result": {"code": "success"}})));
}

#[test]
fn test_ready_to_send() {
    let ready = json!({"FaxContainer": {"state": "ready_to_send"}});
    let editing = json!({"FaxContainer": {"state": "editing"}});

    assert!(is_ready_to_send(&ready));
    assert!(!is_ready_to_send(&editing));
    assert!(!is_ready_to_send(&json!({})));
    assert_eq!(fax_container_state(&editing), Some("editing"));
    assert_eq!(fax_container_state(&json!({})), None);
}
