use crate::credentials::EmailCredentials;
use crate::template::EmailTemplate;
use derive_getters::{Dissolve, Getters};
use serde::{Deserialize, Serialize};

/// Body of a test-send request.
/// Every field is optional on the wire so that a missing one is reported
/// as an invalid request rather than as an unreadable body.
#[derive(Debug, Serialize, Deserialize, Getters, Dissolve, Default, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SendTestRequest {
    credentials: Option<EmailCredentials>,
    template: Option<EmailTemplate>,
    test_email: Option<String>,
}

#[cfg(any(test, feature = "test"))]
impl SendTestRequest {
    pub fn new(
        credentials: Option<EmailCredentials>,
        template: Option<EmailTemplate>,
        test_email: Option<String>,
    ) -> Self {
        Self {
            credentials,
            template,
            test_email,
        }
    }
}

/// Body of a bulk-send request. Recipients are not part of it:
/// they come from the last uploaded file.
#[derive(Debug, Serialize, Deserialize, Getters, Dissolve, Default, PartialEq, Clone)]
pub struct SendBulkRequest {
    credentials: Option<EmailCredentials>,
    template: Option<EmailTemplate>,
}

#[cfg(any(test, feature = "test"))]
impl SendBulkRequest {
    pub fn new(credentials: Option<EmailCredentials>, template: Option<EmailTemplate>) -> Self {
        Self {
            credentials,
            template,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::credentials::EmailCredentials;
    use crate::send_request::{SendBulkRequest, SendTestRequest};
    use crate::template::EmailTemplate;

    #[test]
    fn should_deserialize_test_request() {
        let json = r#"{"credentials":{"email":"sender@address.com","password":"password"},"template":{"subject":"Hello","body":"<p>World</p>"},"testEmail":"test@address.com"}"#;

        let request: SendTestRequest = serde_json::from_str(json).unwrap();

        assert_eq!(
            SendTestRequest::new(
                Some(EmailCredentials::new(
                    "sender@address.com".to_owned(),
                    "password".to_owned()
                )),
                Some(EmailTemplate::new(
                    "Hello".to_owned(),
                    "<p>World</p>".to_owned()
                )),
                Some("test@address.com".to_owned()),
            ),
            request
        );
    }

    #[test]
    fn should_deserialize_bulk_request_with_missing_fields() {
        let request: SendBulkRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(SendBulkRequest::default(), request);
    }
}
