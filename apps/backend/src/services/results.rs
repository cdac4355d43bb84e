//! Transient storage for finished study results.
//!
//! Results are kept per user and list; a newer result replaces the older one.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use recall_core::ResultsSummary;
use uuid::Uuid;

/// Key under which a study result is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResultsKey {
    pub user_id: Uuid,
    pub list_id: Uuid,
}

/// Storage port for study results.
pub trait ResultsStore: Send + Sync {
    fn put(&self, key: ResultsKey, results: ResultsSummary);
    fn get(&self, key: ResultsKey) -> Option<ResultsSummary>;
    /// Drop every user's results for a list.
    fn remove_list(&self, list_id: Uuid);
}

/// In-process results store.
#[derive(Default)]
pub struct MemoryResultsStore {
    results: RwLock<HashMap<ResultsKey, ResultsSummary>>,
}

impl MemoryResultsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultsStore for MemoryResultsStore {
    fn put(&self, key: ResultsKey, results: ResultsSummary) {
        self.results
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, results);
    }

    fn get(&self, key: ResultsKey) -> Option<ResultsSummary> {
        self.results
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    fn remove_list(&self, list_id: Uuid) {
        self.results
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|key, _| key.list_id != list_id);
    }
}
