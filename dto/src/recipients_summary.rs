use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What is currently loaded for the next bulk send.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecipientsSummary {
    email_count: usize,
    file_name: Option<String>,
    uploaded_at: Option<NaiveDateTime>,
}

impl RecipientsSummary {
    pub fn new(
        email_count: usize,
        file_name: Option<String>,
        uploaded_at: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            email_count,
            file_name,
            uploaded_at,
        }
    }
}
