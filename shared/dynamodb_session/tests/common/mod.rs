//! Shared test utilities

use std::sync::Mutex;

use dynamodb_session::classify::ErrorSink;

/// Sink that records every message it receives
#[derive(Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Returns a snapshot of the recorded messages
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ErrorSink for RecordingSink {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }
}
