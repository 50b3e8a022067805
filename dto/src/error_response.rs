use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body of every non-2xx API answer.
/// `error` is a stable, machine-readable kind; `message` is meant for humans.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct ErrorResponse {
    error: String,
    message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
