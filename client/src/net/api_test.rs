use super::*;

fn reply(response: Option<&str>, error: Option<&str>) -> ChatReply {
    ChatReply { status: None, response: response.map(str::to_owned), error: error.map(str::to_owned) }
}

#[test]
fn ok_reply_yields_response_text() {
    assert_eq!(reply_outcome(true, Some(reply(Some("hi"), None))), Ok("hi".to_owned()));
}

#[test]
fn error_reply_yields_relay_error_text() {
    let body = reply(None, Some("Model not found. Run: ollama pull llama3.2"));
    assert_eq!(reply_outcome(false, Some(body)), Err("Model not found. Run: ollama pull llama3.2".to_owned()));
}

#[test]
fn error_status_without_error_field_uses_fallback() {
    assert_eq!(reply_outcome(false, Some(ChatReply::default())), Err("Failed to get response".to_owned()));
    assert_eq!(reply_outcome(false, None), Err("Failed to get response".to_owned()));
}

#[test]
fn ok_status_without_response_field_is_error() {
    assert_eq!(reply_outcome(true, None), Err("Failed to get response".to_owned()));
}
