use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Static message content: a subject and an HTML-capable body.
/// Missing fields are read as blank, which makes the template incomplete.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone, Default)]
#[serde(default)]
pub struct EmailTemplate {
    subject: String,
    body: String,
}

impl EmailTemplate {
    pub fn new(subject: String, body: String) -> Self {
        Self { subject, body }
    }

    /// Neither subject nor body may be blank for a message to be sent.
    pub fn is_complete(&self) -> bool {
        !self.subject.trim().is_empty() && !self.body.trim().is_empty()
    }
}
