//! Fetch → extract → summarize → translate → persist, for one URL.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, instrument};
use url::Url;
use utoipa::ToSchema;

use crate::{
    extractor,
    fetcher::{FetchError, PageFetcher},
    lexicon::Lexicon,
    persist::DualStoreWriter,
    repositories::{RawRecord, ResultRecord},
    summarizer::summarize,
    translator::translate,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub url: String,
}

impl PageRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Parse the URL, accepting only absolute http(s) addresses.
    pub fn validate(&self) -> Result<Url, PipelineError> {
        if self.url.is_empty() {
            return Err(PipelineError::InvalidInput("URL cannot be empty".to_string()));
        }
        let url = Url::parse(&self.url)
            .map_err(|e| PipelineError::InvalidInput(format!("malformed URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(PipelineError::InvalidInput(format!(
                "unsupported scheme: {}",
                url.scheme()
            )));
        }
        Ok(url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub summary: String,
    pub urdu_translation: String,
    pub full_blog: String,
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("fetch failed: {0}")]
    FetchFailed(#[from] FetchError),

    #[error("raw-text store write failed")]
    HardPersistFailed,
}

#[derive(Clone)]
pub struct SummaryPipeline {
    fetcher: Arc<dyn PageFetcher>,
    lexicon: Arc<Lexicon>,
    writer: DualStoreWriter,
}

impl SummaryPipeline {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        lexicon: Arc<Lexicon>,
        writer: DualStoreWriter,
    ) -> Self {
        Self {
            fetcher,
            lexicon,
            writer,
        }
    }

    pub fn writer(&self) -> &DualStoreWriter {
        &self.writer
    }

    #[instrument(skip_all, fields(url = %request.url))]
    pub async fn handle(&self, request: PageRequest) -> Result<SummaryResponse, PipelineError> {
        let url = request.validate()?;

        let response = match self.fetcher.fetch(&url).await {
            Ok(response) => response,
            Err(err) => {
                error!(error = %err, retriable = err.should_retry(), "fetch failed");
                return Err(err.into());
            }
        };

        let page = extractor::extract_page(&response);
        if page.url != url {
            debug!(final_url = %page.url, "followed redirects");
        }
        let full_text = page.full_text;
        let summary = summarize(&full_text);
        let urdu_translation = translate(&summary, &self.lexicon);

        // records carry the URL as submitted, not the post-redirect one
        let raw = RawRecord {
            url: request.url.clone(),
            full_text: full_text.clone(),
        };
        let result = ResultRecord {
            url: request.url,
            summary: summary.clone(),
            urdu: urdu_translation.clone(),
        };

        let outcome = self.writer.persist(raw, result).await;
        if !outcome.hard_ok {
            return Err(PipelineError::HardPersistFailed);
        }

        info!(
            bytes = full_text.len(),
            degraded = outcome.is_degraded(),
            "page summarised"
        );

        Ok(SummaryResponse {
            summary,
            urdu_translation,
            full_blog: full_text,
        })
    }
}
