//! Result store: computed summaries and translations, one row per successful
//! pipeline run in the `summarise` table. Best-effort; see `persist`.

use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::instrument;
use uuid::Uuid;

use crate::repositories::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub url: String,
    pub summary: String,
    pub urdu: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn insert(&self, record: &ResultRecord) -> Result<(), StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

#[derive(Clone, Debug)]
pub struct ResultRepository {
    pool: PgPool,
    timeout: Duration,
}

impl ResultRepository {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Lazily connected pool: the service starts even while Postgres is down.
    pub fn connect_lazy(database_url: &str, timeout: Duration) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(timeout)
            .connect_lazy(database_url)?;

        Ok(Self::new(pool, timeout))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ResultStore for ResultRepository {
    #[instrument(skip_all, fields(url = %record.url))]
    async fn insert(&self, record: &ResultRecord) -> Result<(), StoreError> {
        let query = sqlx::query(
            r#"
            INSERT INTO summarise (id, url, summary, urdu)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&record.url)
        .bind(&record.summary)
        .bind(&record.urdu)
        .execute(&self.pool);

        tokio::time::timeout(self.timeout, query)
            .await
            .map_err(|_| StoreError::Timeout)??;

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        tokio::time::timeout(self.timeout, sqlx::query("SELECT 1").execute(&self.pool))
            .await
            .map_err(|_| StoreError::Timeout)??;

        Ok(())
    }
}
