//! Error body shared by every failing endpoint.

use serde::{Deserialize, Serialize};

/// JSON error envelope.
///
/// `error` is a stable machine-readable reason code; `message` is a
/// human-readable description that never carries secrets.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
