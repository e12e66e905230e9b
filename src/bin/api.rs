use anyhow::{Context, Result};
use blogsum::{
    app_state::AppState,
    config::Config,
    fetcher::HttpFetcher,
    lexicon::Lexicon,
    persist::DualStoreWriter,
    pipeline::SummaryPipeline,
    repositories::{RawTextRepository, ResultRepository},
    routes,
};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let raw_store = RawTextRepository::connect(
        config.mongo_uri(),
        config.mongo_database(),
        config.mongo_collection(),
        config.store_timeout(),
    )
    .await
    .context("failed to configure raw-text store")?;

    // lazy: the result store may be down at startup without blocking service
    let result_store = ResultRepository::connect_lazy(config.database_url(), config.store_timeout())
        .context("failed to configure result store")?;

    let fetcher = HttpFetcher::new(config.fetch_timeout()).context("failed to build HTTP client")?;

    let pipeline = SummaryPipeline::new(
        Arc::new(fetcher),
        Arc::new(Lexicon::urdu()),
        DualStoreWriter::new(Arc::new(raw_store), Arc::new(result_store)),
    );
    let app = routes::router(AppState::new(pipeline));

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr()))?;
    info!(addr = config.bind_addr(), "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // without a signal handler keep serving until the process is killed
        error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
