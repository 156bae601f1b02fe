use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::error::{AppError, AppResult, SinkError};
use crate::metrics::{RunReport, StatusReport};

pub(super) const STATUS_OK: &str = "200";

pub(super) fn write_line(output: &mut String, line: &str) -> AppResult<()> {
    writeln!(output, "{}", line).map_err(|err| AppError::sink(SinkError::WriteLine { source: err }))
}

/// `DD/MM/YYYY HH:MM:SS`, UTC.
pub(super) fn format_clock(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y %H:%M:%S").to_string()
}

pub(super) fn format_seconds(report: &RunReport) -> String {
    format!("{:.2}", report.elapsed.as_secs_f64())
}

pub(super) fn format_average(bucket: &StatusReport) -> String {
    format!("{:.2}", bucket.average_ms)
}

/// Buckets grouped the way every presenter lays them out.
pub(super) struct Sections<'report> {
    pub total: Option<&'report StatusReport>,
    pub ok: Option<&'report StatusReport>,
    /// Everything else, ordered by status code.
    pub others: Vec<&'report StatusReport>,
}

impl<'report> Sections<'report> {
    pub(super) fn split(report: &'report RunReport) -> Self {
        let mut total = None;
        let mut ok = None;
        let mut others = Vec::new();
        for bucket in &report.report {
            if bucket.is_total() {
                total = Some(bucket);
            } else if bucket.status == STATUS_OK {
                ok = Some(bucket);
            } else {
                others.push(bucket);
            }
        }
        others.sort_by_key(|bucket| bucket.status.parse::<u16>().unwrap_or(u16::MAX));
        Self { total, ok, others }
    }
}

pub(super) fn is_server_error(bucket: &StatusReport) -> bool {
    bucket.status.starts_with('5')
}
