use chrono::{DateTime, Utc};
use serde::Serializer;

/// Sub-second digits kept in rendered timestamps.
const FRACTION_DIVISOR: u32 = 100;

/// Formats a UTC timestamp as `YYYY-MM-DD HH:MM:SS.fffffff`.
///
/// The fraction is always seven digits so rendered reports have a fixed
/// width.
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    let fraction = timestamp
        .timestamp_subsec_nanos()
        .checked_div(FRACTION_DIVISOR)
        .unwrap_or(0)
        .min(9_999_999);
    format!("{}.{:07}", timestamp.format("%Y-%m-%d %H:%M:%S"), fraction)
}

/// Serde adapter for [`format_timestamp`].
///
/// # Errors
///
/// Propagates serializer failures.
pub fn serialize_timestamp<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(timestamp))
}
