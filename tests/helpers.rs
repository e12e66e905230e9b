#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use blogsum::{
    app_state::AppState,
    fetcher::HttpFetcher,
    lexicon::Lexicon,
    persist::DualStoreWriter,
    pipeline::SummaryPipeline,
    repositories::{RawRecord, RawTextStore, ResultRecord, ResultStore, StoreError},
    routes,
};

/// In-memory stand-in for either store; optionally fails every write.
pub struct MemoryStore<T> {
    records: Mutex<Vec<T>>,
    attempts: AtomicUsize,
    failing: bool,
}

impl<T: Clone> MemoryStore<T> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(Vec::new()),
            attempts: AtomicUsize::new(0),
            failing: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(Vec::new()),
            attempts: AtomicUsize::new(0),
            failing: true,
        })
    }

    pub fn records(&self) -> Vec<T> {
        self.records.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    fn push(&self, record: &T) -> Result<(), StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(StoreError::Timeout);
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing {
            Err(StoreError::Timeout)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RawTextStore for MemoryStore<RawRecord> {
    async fn insert(&self, record: &RawRecord) -> Result<(), StoreError> {
        self.push(record)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}

#[async_trait]
impl ResultStore for MemoryStore<ResultRecord> {
    async fn insert(&self, record: &ResultRecord) -> Result<(), StoreError> {
        self.push(record)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}

pub type RawStore = MemoryStore<RawRecord>;
pub type ResultsStore = MemoryStore<ResultRecord>;

pub fn test_app(raw_store: Arc<RawStore>, result_store: Arc<ResultsStore>) -> Router {
    let fetcher = HttpFetcher::new(Duration::from_secs(5)).expect("Failed to build fetcher");
    let pipeline = SummaryPipeline::new(
        Arc::new(fetcher),
        Arc::new(Lexicon::urdu()),
        DualStoreWriter::new(raw_store, result_store),
    );

    routes::router(AppState::new(pipeline))
}
