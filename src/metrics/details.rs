use std::sync::{Mutex, PoisonError};

use super::types::RequestOutcome;

/// Append-only list of per-request outcomes, kept only when detail capture
/// is enabled.
///
/// Entries are stored in append order, which follows completion order and is
/// therefore not stable across runs.
#[derive(Debug, Default)]
pub struct DetailLog {
    entries: Mutex<Vec<RequestOutcome>>,
}

impl DetailLog {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    pub fn append(&self, outcome: RequestOutcome) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(outcome);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<RequestOutcome> {
        self.entries
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<RequestOutcome> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
