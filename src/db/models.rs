use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Database representation of a stored job application
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationRow {
    pub id: i64,
    pub user_id: String,
    pub job_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
    pub experience: String,
    pub additional_notes: String,
    pub applied_at: DateTime<Utc>,
}
