use actix_multipart::form::MultipartFormConfig;

use crate::api::application::{ServiceError, models::missing_field_names};

/// Url-encoded form config shared by the whole app.
///
/// Validation failures become the standard "Missing required fields" 400;
/// anything that stops the body from decoding becomes "Invalid form payload".
pub fn form_config(limit: usize) -> actix_web_validator::FormConfig {
    actix_web_validator::FormConfig::default()
        .limit(limit)
        .error_handler(|err, _req| match err {
            actix_web_validator::Error::Validate(validation_errors) => {
                ServiceError::Validation(missing_field_names(&validation_errors)).into()
            }
            other => ServiceError::InvalidPayload(other.to_string()).into(),
        })
}

/// Multipart config with the same error body as url-encoded forms.
///
/// Every field is buffered as text, so the in-memory limit must match the
/// total limit for multipart to accept what the url-encoded route accepts.
pub fn multipart_config(limit: usize) -> MultipartFormConfig {
    MultipartFormConfig::default()
        .total_limit(limit)
        .memory_limit(limit)
        .error_handler(|err, _req| ServiceError::InvalidPayload(err.to_string()).into())
}
