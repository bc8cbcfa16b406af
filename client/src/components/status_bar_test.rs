use super::*;

#[test]
fn status_label_connected() {
    assert_eq!(status_label(true), "Connected to Ollama");
}

#[test]
fn status_label_disconnected() {
    assert_eq!(status_label(false), "Not connected");
}
