//! Two-phase write across the raw-text store and the result store.
//!
//! Phase one writes the extracted page to the raw-text store, the system of
//! record. If that fails nothing else is written and the request fails.
//! Phase two writes the summary and translation to the result store, an
//! analytics sink; its failure is logged and otherwise ignored.

use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::repositories::{RawRecord, RawTextStore, ResultRecord, ResultStore};

/// What happened to each write. `soft_ok` is only `true` when the result
/// store was actually written, so it is always `false` when `hard_ok` is
/// `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistOutcome {
    pub hard_ok: bool,
    pub soft_ok: bool,
}

impl PersistOutcome {
    pub const HARD_FAILED: Self = Self {
        hard_ok: false,
        soft_ok: false,
    };

    /// Raw text stored but the result store write failed.
    pub fn is_degraded(&self) -> bool {
        self.hard_ok && !self.soft_ok
    }
}

#[derive(Clone)]
pub struct DualStoreWriter {
    raw_store: Arc<dyn RawTextStore>,
    result_store: Arc<dyn ResultStore>,
}

impl DualStoreWriter {
    pub fn new(raw_store: Arc<dyn RawTextStore>, result_store: Arc<dyn ResultStore>) -> Self {
        Self {
            raw_store,
            result_store,
        }
    }

    #[instrument(skip_all, fields(url = %raw.url))]
    pub async fn persist(&self, raw: RawRecord, result: ResultRecord) -> PersistOutcome {
        if let Err(err) = self.raw_store.insert(&raw).await {
            error!(error = %err, "raw-text store write failed");
            return PersistOutcome::HARD_FAILED;
        }

        let soft_ok = match self.result_store.insert(&result).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "result store write failed, continuing");
                false
            }
        };

        info!(soft_ok, "records persisted");

        PersistOutcome {
            hard_ok: true,
            soft_ok,
        }
    }

    pub fn raw_store(&self) -> &Arc<dyn RawTextStore> {
        &self.raw_store
    }

    pub fn result_store(&self) -> &Arc<dyn ResultStore> {
        &self.result_store
    }
}
