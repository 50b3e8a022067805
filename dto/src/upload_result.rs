use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    success: bool,
    email_count: usize,
}

impl UploadResponse {
    pub fn new(email_count: usize) -> Self {
        Self {
            success: true,
            email_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct SuccessResponse {
    success: bool,
}

impl Default for SuccessResponse {
    fn default() -> Self {
        Self { success: true }
    }
}

#[cfg(test)]
mod tests {
    use crate::upload_result::UploadResponse;

    #[test]
    fn should_serialize_email_count_in_camel_case() {
        let json = serde_json::to_string(&UploadResponse::new(2)).unwrap();

        assert_eq!(r#"{"success":true,"emailCount":2}"#, json);
    }
}
