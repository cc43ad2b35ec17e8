use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::db::ApplicationStore;
use super::dto::SubmissionResponse;
use super::models::{ApplicationForm, missing_field_names};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid form payload";
pub const REDACTED_DETAIL: &str = "internal error";

/// The write that failed during a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStep {
    InsertApplication,
    IncrementAppliedJobs,
}

impl fmt::Display for WriteStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteStep::InsertApplication => f.write_str("insert_application"),
            WriteStep::IncrementAppliedJobs => f.write_str("increment_applied_jobs"),
        }
    }
}

/// Service-level errors
#[derive(Debug)]
pub enum ServiceError {
    /// A required field was absent or empty
    Validation(String),

    /// The request body could not be decoded
    InvalidPayload(String),

    /// A store write failed. `detail` is what the client is shown.
    Persistence { step: WriteStep, detail: String },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ServiceError::InvalidPayload(msg) => write!(f, "Invalid payload: {}", msg),
            ServiceError::Persistence { step, detail } => {
                write!(f, "Database error during {}: {}", step, detail)
            }
        }
    }
}

impl std::error::Error for ServiceError {}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) | ServiceError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ServiceError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::Validation(msg) => {
                warn!("Validation error: {}", msg);
                HttpResponse::BadRequest().json(SubmissionResponse::error(MISSING_FIELDS_MESSAGE))
            }
            ServiceError::InvalidPayload(msg) => {
                warn!("Invalid payload: {}", msg);
                HttpResponse::BadRequest().json(SubmissionResponse::error(INVALID_PAYLOAD_MESSAGE))
            }
            // Driver details were already logged where the failure happened
            ServiceError::Persistence { detail, .. } => HttpResponse::InternalServerError()
                .json(SubmissionResponse::error(format!("Database error: {}", detail))),
        }
    }
}

/// Submission workflow: validate, insert, bump the applicant counter.
pub struct ApplicationService {
    store: Arc<dyn ApplicationStore>,
    expose_database_errors: bool,
}

impl ApplicationService {
    /// Create a new ApplicationService over an injected store
    pub fn new(store: Arc<dyn ApplicationStore>, expose_database_errors: bool) -> Self {
        Self {
            store,
            expose_database_errors,
        }
    }

    /// Submit a job application
    ///
    /// # Business Logic
    /// - Rejects the form before touching the store if `user_id`, `job_id`
    ///   or `email` is missing
    /// - Inserts the application row
    /// - Increments the user's `applied_jobs_count`
    ///
    /// The two writes are not wrapped in a transaction. If the counter update
    /// fails, the application row stays and the caller still gets an error.
    ///
    /// # Returns
    /// - `Ok(SubmissionResponse)` - Application stored
    /// - `Err(ServiceError)` - Validation or persistence failure
    pub async fn submit(&self, form: ApplicationForm) -> Result<SubmissionResponse, ServiceError> {
        let application = form
            .into_new_application()
            .map_err(|errors| ServiceError::Validation(missing_field_names(&errors)))?;

        info!(
            "Service: Submitting application user_id={}, job_id={}",
            application.user_id, application.job_id
        );

        let row = self
            .store
            .insert_application(&application)
            .await
            .map_err(|e| self.persistence_error(WriteStep::InsertApplication, e))?;

        match self.store.increment_applied_jobs(&application.user_id).await {
            Ok(0) => warn!(
                "Service: No user row matched user_id={}, applied_jobs_count unchanged",
                application.user_id
            ),
            Ok(_) => {}
            Err(e) => {
                error!(
                    "Service: Application id={} was stored but the counter update failed",
                    row.id
                );
                return Err(self.persistence_error(WriteStep::IncrementAppliedJobs, e));
            }
        }

        info!("Service: Application submitted with id={}", row.id);
        Ok(SubmissionResponse::submitted(row.id))
    }

    fn persistence_error(&self, step: WriteStep, err: sqlx::Error) -> ServiceError {
        error!("Database error during {}: {}", step, err);

        let detail = if self.expose_database_errors {
            err.to_string()
        } else {
            REDACTED_DETAIL.to_string()
        };
        ServiceError::Persistence { step, detail }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_expected_status_codes() {
        let validation = ServiceError::Validation("email".to_string());
        let payload = ServiceError::InvalidPayload("bad".to_string());
        let persistence = ServiceError::Persistence {
            step: WriteStep::InsertApplication,
            detail: "boom".to_string(),
        };

        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(payload.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(persistence.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn persistence_display_names_the_failed_step() {
        let err = ServiceError::Persistence {
            step: WriteStep::IncrementAppliedJobs,
            detail: "connection reset".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Database error during increment_applied_jobs: connection reset"
        );
    }
}
