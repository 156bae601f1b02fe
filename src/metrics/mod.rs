//! Request outcomes, per-status aggregation, and the final run report.
mod details;
mod table;
mod timestamp;
mod types;

#[cfg(test)]
mod tests;

pub use details::DetailLog;
pub use table::AggregationTable;
pub use timestamp::{format_timestamp, serialize_timestamp};
pub use types::{BucketKey, RequestOutcome, RunReport, StatusReport, TOTAL_BUCKET};
