use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("postgres error: {0}")]
    Postgres(#[from] sqlx::Error),

    #[error("store write timed out")]
    Timeout,
}
