//! Raw-text store: every successfully fetched page's extracted text, kept in
//! a MongoDB collection. This is the system of record for "we processed this
//! URL", so callers treat its failures as fatal.

use async_trait::async_trait;
use mongodb::{
    Client, Collection, Database,
    bson::{self, doc},
    options::ClientOptions,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;

use crate::repositories::StoreError;

/// One extracted page, written once per successful fetch. No dedup: the same
/// URL requested twice produces two records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub url: String,
    pub full_text: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RawTextStore: Send + Sync {
    async fn insert(&self, record: &RawRecord) -> Result<(), StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTextDocument {
    url: String,
    full_text: String,
    created_at: bson::DateTime,
}

#[derive(Clone, Debug)]
pub struct RawTextRepository {
    db: Database,
    collection: Collection<RawTextDocument>,
    timeout: Duration,
}

impl RawTextRepository {
    pub fn new(db: Database, collection: &str, timeout: Duration) -> Self {
        let collection = db.collection::<RawTextDocument>(collection);
        Self {
            db,
            collection,
            timeout,
        }
    }

    /// Build a client for `uri`. The driver connects lazily, so an unreachable
    /// server surfaces on the first write rather than here.
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some("blogsum".to_string());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options)?;
        Ok(Self::new(client.database(database), collection, timeout))
    }
}

#[async_trait]
impl RawTextStore for RawTextRepository {
    #[instrument(skip_all, fields(url = %record.url))]
    async fn insert(&self, record: &RawRecord) -> Result<(), StoreError> {
        let document = RawTextDocument {
            url: record.url.clone(),
            full_text: record.full_text.clone(),
            created_at: bson::DateTime::now(),
        };

        tokio::time::timeout(self.timeout, self.collection.insert_one(document))
            .await
            .map_err(|_| StoreError::Timeout)??;

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        tokio::time::timeout(self.timeout, self.db.run_command(doc! { "ping": 1 }))
            .await
            .map_err(|_| StoreError::Timeout)??;

        Ok(())
    }
}
