use crate::constants::{STATE_CONVERTING, STATE_READY_TO_SEND};
use serde_json::Value;

/// Whether any file of a `FaxJob/GetFaxState` document is still being converted
///
/// A file counts as converting when its `state` is empty, missing or
/// `converting`. Documents without `Files.content` have nothing to convert.
pub fn is_converting(fax_state: &Value) -> bool {
    fax_state
        .get("Files")
        .and_then(|files| files.get("content"))
        .and_then(Value::as_array)
        .is_some_and(|files| {
            files.iter().any(|file| {
                let state = file.get("state").and_then(Value::as_str).unwrap_or("");
                state.is_empty() || state == STATE_CONVERTING
            })
        })
}

/// State of the fax container, e.g. `editing` or `ready_to_send`
pub fn fax_container_state(fax_state: &Value) -> Option<&str> {
    fax_state
        .get("FaxContainer")
        .and_then(|container| container.get("state"))
        .and_then(Value::as_str)
}

/// Whether the fax container reports `ready_to_send`
pub fn is_ready_to_send(fax_state: &Value) -> bool {
    fax_container_state(fax_state) == Some(STATE_READY_TO_SEND)
}
