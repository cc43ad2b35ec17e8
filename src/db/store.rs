use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::api::application::NewApplication;
use crate::db::application_repository::ApplicationRepository;
use crate::db::models::ApplicationRow;

/// Persistence operations the submission flow depends on.
///
/// The two writes are separate calls; callers decide ordering and there is
/// no transaction spanning them.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn insert_application(
        &self,
        application: &NewApplication,
    ) -> Result<ApplicationRow, sqlx::Error>;

    /// Returns the number of user rows updated.
    async fn increment_applied_jobs(&self, user_id: &str) -> Result<u64, sqlx::Error>;

    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgApplicationStore {
    pool: Pool<Postgres>,
}

impl PgApplicationStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn insert_application(
        &self,
        application: &NewApplication,
    ) -> Result<ApplicationRow, sqlx::Error> {
        ApplicationRepository::create(&self.pool, application).await
    }

    async fn increment_applied_jobs(&self, user_id: &str) -> Result<u64, sqlx::Error> {
        ApplicationRepository::increment_applied_jobs(&self.pool, user_id).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
