use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::api::application::NewApplication;
use crate::db::models::ApplicationRow;

/// Repository for job application writes
pub struct ApplicationRepository;

impl ApplicationRepository {
    /// Insert an application and return the stored record.
    ///
    /// `applied_at` is assigned by the database at insert time.
    pub async fn create(
        pool: &Pool<Postgres>,
        application: &NewApplication,
    ) -> Result<ApplicationRow, sqlx::Error> {
        debug!(
            "Inserting application: user_id={}, job_id={}",
            application.user_id, application.job_id
        );

        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            INSERT INTO job_applications (
                user_id, job_id, name, email, phone,
                cover_letter, experience, additional_notes, applied_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
            RETURNING id, user_id, job_id, name, email, phone,
                      cover_letter, experience, additional_notes, applied_at
            "#,
        )
        .bind(&application.user_id)
        .bind(&application.job_id)
        .bind(&application.name)
        .bind(&application.email)
        .bind(&application.phone)
        .bind(&application.cover_letter)
        .bind(&application.experience)
        .bind(&application.additional_notes)
        .fetch_one(pool)
        .await?;

        debug!("Application inserted with id={}", row.id);
        Ok(row)
    }

    /// Bump `applied_jobs_count` on the user row.
    /// Returns the number of rows affected (0 when no user matches).
    pub async fn increment_applied_jobs(
        pool: &Pool<Postgres>,
        user_id: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET applied_jobs_count = applied_jobs_count + 1 WHERE id = $1",
        )
        .bind(user_id)
        .execute(pool)
        .await?;

        debug!(
            "applied_jobs_count incremented for user_id={}: {} rows",
            user_id,
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }
}
