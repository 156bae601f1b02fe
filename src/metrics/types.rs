use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::timestamp::serialize_timestamp;

/// Key of the synthetic bucket that aggregates every outcome.
pub const TOTAL_BUCKET: &str = "total";

/// Outcome of one logical request unit.
///
/// Transport failures (refused connection, timeout, cancellation) are
/// represented with status `0` and duration `0` rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequestOutcome {
    pub status_code: u16,
    #[serde(rename = "duration_in_ms")]
    pub duration_ms: u64,
    #[serde(
        rename = "request_start_timestamp",
        serialize_with = "serialize_timestamp"
    )]
    pub started_at: DateTime<Utc>,
    #[serde(
        rename = "request_end_timestamp",
        serialize_with = "serialize_timestamp"
    )]
    pub finished_at: DateTime<Utc>,
}

impl RequestOutcome {
    /// Sentinel status recorded for requests that never produced a response.
    pub const FAILED_STATUS: u16 = 0;

    #[must_use]
    pub fn completed(
        status_code: u16,
        elapsed: Duration,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            status_code,
            duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            started_at,
            finished_at,
        }
    }

    #[must_use]
    pub fn failed(started_at: DateTime<Utc>) -> Self {
        Self {
            status_code: Self::FAILED_STATUS,
            duration_ms: 0,
            started_at,
            finished_at: Utc::now(),
        }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.status_code == Self::FAILED_STATUS
    }

    #[must_use]
    pub const fn bucket(&self) -> BucketKey {
        BucketKey::Status(self.status_code)
    }
}

/// Aggregation bucket identity.
///
/// Ordering puts status codes first (numerically) and the total bucket last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BucketKey {
    Status(u16),
    Total,
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKey::Status(code) => write!(f, "{}", code),
            BucketKey::Total => f.write_str(TOTAL_BUCKET),
        }
    }
}

/// Finalized statistics for one bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub status: String,
    pub count: u64,
    #[serde(rename = "min_time_in_ms")]
    pub min_ms: u64,
    #[serde(rename = "max_time_in_ms")]
    pub max_ms: u64,
    #[serde(rename = "total_time_in_ms")]
    pub total_ms: u64,
    #[serde(rename = "average_time_in_ms")]
    pub average_ms: f64,
}

impl StatusReport {
    #[must_use]
    pub fn is_total(&self) -> bool {
        self.status == TOTAL_BUCKET
    }
}

/// Final output of a completed run. Built once and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub id: String,
    pub url: String,
    pub requests: usize,
    pub concurrency: usize,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp_start: DateTime<Utc>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp_end: DateTime<Utc>,
    pub test_duration_in_seconds: u64,
    #[serde(skip)]
    pub elapsed: Duration,
    pub data: Vec<RequestOutcome>,
    pub report: Vec<StatusReport>,
}

impl RunReport {
    #[must_use]
    pub fn total(&self) -> Option<&StatusReport> {
        self.report.iter().find(|bucket| bucket.is_total())
    }

    #[must_use]
    pub fn status(&self, status: &str) -> Option<&StatusReport> {
        self.report.iter().find(|bucket| bucket.status == status)
    }
}
