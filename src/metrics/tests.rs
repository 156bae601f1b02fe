use super::*;
use crate::error::{AppError, AppResult};
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;

const FLOAT_TOLERANCE: f64 = 1e-9;

fn find<'report>(reports: &'report [StatusReport], status: &str) -> AppResult<&'report StatusReport> {
    reports
        .iter()
        .find(|report| report.status == status)
        .ok_or_else(|| AppError::validation(format!("Missing bucket {}", status)))
}

#[test]
fn record_tracks_count_min_max_sum() -> AppResult<()> {
    let table = AggregationTable::new();
    for duration in [30, 10, 20] {
        table.record(BucketKey::Status(200), duration);
    }
    let reports = table.finalize();
    let bucket = find(&reports, "200")?;
    if bucket.count != 3 || bucket.min_ms != 10 || bucket.max_ms != 30 || bucket.total_ms != 60 {
        return Err(AppError::validation(format!("Unexpected bucket: {:?}", bucket)));
    }
    if (bucket.average_ms - 20.0).abs() > FLOAT_TOLERANCE {
        return Err(AppError::validation("Unexpected average"));
    }
    Ok(())
}

#[test]
fn record_outcome_updates_status_and_total() -> AppResult<()> {
    let table = AggregationTable::new();
    let now = Utc::now();
    table.record_outcome(&RequestOutcome::completed(
        200,
        Duration::from_millis(12),
        now,
        now,
    ));
    table.record_outcome(&RequestOutcome::completed(
        503,
        Duration::from_millis(40),
        now,
        now,
    ));
    table.record_outcome(&RequestOutcome::failed(now));

    if table.total_count() != 3 {
        return Err(AppError::validation("Expected three total records"));
    }
    let reports = table.finalize();
    let total = find(&reports, TOTAL_BUCKET)?;
    let others: u64 = reports
        .iter()
        .filter(|report| !report.is_total())
        .map(|report| report.count)
        .sum();
    if total.count != others {
        return Err(AppError::validation("Total count must equal sum of buckets"));
    }
    let failed = find(&reports, "0")?;
    if failed.count != 1 || failed.total_ms != 0 {
        return Err(AppError::validation("Expected one zero-duration failure"));
    }
    if total.min_ms != 0 || total.max_ms != 40 || total.total_ms != 52 {
        return Err(AppError::validation(format!("Unexpected total: {:?}", total)));
    }
    Ok(())
}

#[test]
fn finalize_orders_status_buckets_before_total() -> AppResult<()> {
    let table = AggregationTable::new();
    for status in [500, 200, 0, 404] {
        table.record(BucketKey::Status(status), 1);
        table.record(BucketKey::Total, 1);
    }
    let order: Vec<String> = table
        .finalize()
        .into_iter()
        .map(|report| report.status)
        .collect();
    if order != ["0", "200", "404", "500", "total"] {
        return Err(AppError::validation(format!("Unexpected order: {:?}", order)));
    }
    Ok(())
}

#[test]
fn concurrent_records_are_not_lost() -> AppResult<()> {
    let table = Arc::new(AggregationTable::new());
    std::thread::scope(|scope| {
        for worker in 0..50u64 {
            let table = Arc::clone(&table);
            scope.spawn(move || {
                for sample in 0..20u64 {
                    let duration = worker.saturating_add(sample);
                    table.record(BucketKey::Status(200), duration);
                    table.record(BucketKey::Total, duration);
                }
            });
        }
    });

    let table = Arc::try_unwrap(table)
        .map_err(|_shared| AppError::validation("Table still shared after join"))?;
    let reports = table.finalize();
    for status in ["200", TOTAL_BUCKET] {
        let bucket = find(&reports, status)?;
        if bucket.count != 1000 {
            return Err(AppError::validation(format!(
                "Expected 1000 records in {}, got {}",
                status, bucket.count
            )));
        }
        if bucket.min_ms != 0 || bucket.max_ms != 68 {
            return Err(AppError::validation("Unexpected min/max"));
        }
        if bucket.average_ms < bucket.min_ms as f64 || bucket.average_ms > bucket.max_ms as f64 {
            return Err(AppError::validation("Average outside [min, max]"));
        }
        let expected = bucket.total_ms as f64 / bucket.count as f64;
        if (bucket.average_ms - expected).abs() > FLOAT_TOLERANCE {
            return Err(AppError::validation("Average must equal sum / count"));
        }
    }
    Ok(())
}

#[test]
fn detached_table_keeps_recorded_values() -> AppResult<()> {
    let table = AggregationTable::new();
    table.record(BucketKey::Status(201), 7);
    let copy = table.detached();
    table.record(BucketKey::Status(201), 9);
    let reports = copy.finalize();
    if find(&reports, "201")?.count != 1 {
        return Err(AppError::validation("Detached copy must not see later records"));
    }
    Ok(())
}

#[test]
fn detail_log_appends_in_order() -> AppResult<()> {
    let log = DetailLog::with_capacity(2);
    if !log.is_empty() {
        return Err(AppError::validation("Expected empty log"));
    }
    let now = Utc::now();
    log.append(RequestOutcome::completed(200, Duration::from_millis(1), now, now));
    log.append(RequestOutcome::failed(now));
    let entries = log.into_entries();
    let statuses: Vec<u16> = entries.iter().map(|entry| entry.status_code).collect();
    if statuses != [200, 0] {
        return Err(AppError::validation(format!("Unexpected entries: {:?}", statuses)));
    }
    Ok(())
}

#[test]
fn format_timestamp_uses_seven_fraction_digits() -> AppResult<()> {
    let timestamp = Utc
        .with_ymd_and_hms(2024, 3, 5, 7, 8, 9)
        .single()
        .ok_or_else(|| AppError::validation("Invalid test timestamp"))?;
    let rendered = format_timestamp(&timestamp);
    if rendered != "2024-03-05 07:08:09.0000000" {
        return Err(AppError::validation(format!("Unexpected format: {}", rendered)));
    }

    let with_nanos = timestamp + chrono::Duration::nanoseconds(123_456_789);
    let rendered = format_timestamp(&with_nanos);
    if rendered != "2024-03-05 07:08:09.1234567" {
        return Err(AppError::validation(format!("Unexpected format: {}", rendered)));
    }
    Ok(())
}

#[test]
fn outcome_serializes_with_report_field_names() -> AppResult<()> {
    let timestamp = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| AppError::validation("Invalid test timestamp"))?;
    let outcome = RequestOutcome::completed(404, Duration::from_millis(15), timestamp, timestamp);
    let value = serde_json::to_value(outcome)?;
    if value.get("status_code").and_then(serde_json::Value::as_u64) != Some(404) {
        return Err(AppError::validation("Missing status_code"));
    }
    if value.get("duration_in_ms").and_then(serde_json::Value::as_u64) != Some(15) {
        return Err(AppError::validation("Missing duration_in_ms"));
    }
    if value
        .get("request_start_timestamp")
        .and_then(serde_json::Value::as_str)
        != Some("2024-01-01 00:00:00.0000000")
    {
        return Err(AppError::validation("Unexpected request_start_timestamp"));
    }
    Ok(())
}
