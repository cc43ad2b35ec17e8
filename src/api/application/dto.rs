use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";
pub const SUBMITTED_MESSAGE: &str = "Application submitted successfully!";

/// JSON body returned for every submission outcome
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub status: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<i64>,
}

impl SubmissionResponse {
    pub fn submitted(application_id: i64) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: SUBMITTED_MESSAGE.to_string(),
            application_id: Some(application_id),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            message: message.into(),
            application_id: None,
        }
    }
}
