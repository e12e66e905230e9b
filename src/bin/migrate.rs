use anyhow::Result;
use blogsum::config::Config;
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    let pool: Pool<Postgres> = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(config.store_timeout())
        .connect(config.database_url())
        .await?;

    // runs all pending migrations; no-op if up-to-date
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(())
}
