use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::types::{BucketKey, RequestOutcome, StatusReport};

#[derive(Debug, Clone, Copy)]
struct BucketStats {
    count: u64,
    min_ms: u64,
    max_ms: u64,
    sum_ms: u64,
}

impl BucketStats {
    const fn first(duration_ms: u64) -> Self {
        Self {
            count: 0,
            min_ms: duration_ms,
            max_ms: duration_ms,
            sum_ms: 0,
        }
    }

    fn add(&mut self, duration_ms: u64) {
        self.count = self.count.saturating_add(1);
        self.sum_ms = self.sum_ms.saturating_add(duration_ms);
        self.min_ms = self.min_ms.min(duration_ms);
        self.max_ms = self.max_ms.max(duration_ms);
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "average is derived once, after all integer updates"
    )]
    fn finalize(&self, key: BucketKey) -> StatusReport {
        let average_ms = if self.count == 0 {
            0.0
        } else {
            self.sum_ms as f64 / self.count as f64
        };
        StatusReport {
            status: key.to_string(),
            count: self.count,
            min_ms: self.min_ms,
            max_ms: self.max_ms,
            total_ms: self.sum_ms,
            average_ms,
        }
    }
}

/// Running per-bucket latency statistics shared by all request units.
///
/// The map is never exposed; every update goes through [`record`], which is a
/// single serialized read-modify-write.
///
/// [`record`]: AggregationTable::record
#[derive(Debug, Default)]
pub struct AggregationTable {
    buckets: Mutex<BTreeMap<BucketKey, BucketStats>>,
}

impl AggregationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one duration sample to `key`, creating the bucket on first use.
    pub fn record(&self, key: BucketKey, duration_ms: u64) {
        let mut buckets = self.lock();
        buckets
            .entry(key)
            .or_insert_with(|| BucketStats::first(duration_ms))
            .add(duration_ms);
    }

    /// Records an outcome into its status bucket and the total bucket.
    ///
    /// The two updates are independent; only their final values are
    /// meaningful.
    pub fn record_outcome(&self, outcome: &RequestOutcome) {
        self.record(outcome.bucket(), outcome.duration_ms);
        self.record(BucketKey::Total, outcome.duration_ms);
    }

    /// Number of outcomes recorded into the total bucket so far.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.lock()
            .get(&BucketKey::Total)
            .map_or(0, |stats| stats.count)
    }

    /// Computes averages and returns the buckets ordered by key.
    ///
    /// Consumes the table so no `record` call can race with it.
    #[must_use]
    pub fn finalize(self) -> Vec<StatusReport> {
        let buckets = self
            .buckets
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        finalize_buckets(&buckets)
    }

    /// Copies the current buckets into a standalone table.
    #[must_use]
    pub fn detached(&self) -> Self {
        Self {
            buckets: Mutex::new(self.lock().clone()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<BucketKey, BucketStats>> {
        self.buckets.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn finalize_buckets(buckets: &BTreeMap<BucketKey, BucketStats>) -> Vec<StatusReport> {
    buckets
        .iter()
        .map(|(key, stats)| stats.finalize(*key))
        .collect()
}
