pub mod credentials;
pub mod dispatch_result;
pub mod error_response;
pub mod recipients_summary;
pub mod send_request;
pub mod template;
pub mod upload_result;
