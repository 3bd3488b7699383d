use std::time::{Duration, Instant};

/// Default lifetime of a status message
pub const DEFAULT_MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Transient message shown in the message bar until it expires
#[derive(Debug, Clone)]
pub struct StatusMessage {
    text: String,
    set_at: Instant,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            set_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, timeout: Duration) -> bool {
        self.set_at.elapsed() >= timeout
    }

    /// The text, or `None` once `timeout` has elapsed
    pub fn visible(&self, timeout: Duration) -> Option<&str> {
        if self.is_expired(timeout) {
            None
        } else {
            Some(&self.text)
        }
    }
}
