use std::path::PathBuf;

use super::format::{Sections, format_average, format_clock, format_seconds, write_line};
use crate::error::{AppError, AppResult, SinkError};
use crate::metrics::{RunReport, StatusReport};

const TABLE_HEADER: &str = "| Count | Min Time | Max Time | Total Time | Average Time |";
const TABLE_RULE: &str = "|-------|----------|----------|------------|---------------|";
const STATUS_TABLE_HEADER: &str =
    "| Status | Count | Min Time | Max Time | Total Time | Average Time |";
const STATUS_TABLE_RULE: &str =
    "|--------|-------|----------|----------|------------|---------------|";

/// Markdown output sits next to the JSON report as `<output>.md`.
#[must_use]
pub fn markdown_path(output: &str) -> PathBuf {
    PathBuf::from(format!("{}.md", output))
}

/// Renders the report as Markdown tables.
///
/// # Errors
///
/// Returns an error if the output buffer cannot be written.
pub fn to_markdown(report: &RunReport) -> AppResult<String> {
    let mut output = String::new();

    write_line(&mut output, "## 📊 Stress Test Report")?;
    write_line(&mut output, &format!("**ID:** `{}`", report.id))?;
    write_line(&mut output, &format!("**URL:** {}", report.url))?;
    write_line(&mut output, &format!("**Requests:** {}", report.requests))?;
    write_line(&mut output, &format!("**Concurrency:** {}", report.concurrency))?;
    write_line(
        &mut output,
        &format!("**Start:** {}", format_clock(&report.timestamp_start)),
    )?;
    write_line(
        &mut output,
        &format!("**End:** {}", format_clock(&report.timestamp_end)),
    )?;
    write_line(
        &mut output,
        &format!("**Duration:** {} seconds", format_seconds(report)),
    )?;

    let sections = Sections::split(report);

    write_line(&mut output, "")?;
    write_line(&mut output, "### 📌 Total Summary")?;
    write_line(&mut output, TABLE_HEADER)?;
    write_line(&mut output, TABLE_RULE)?;
    if let Some(total) = sections.total {
        write_line(&mut output, &bucket_row(total))?;
    }

    write_line(&mut output, "")?;
    if let Some(ok) = sections.ok {
        write_line(&mut output, "### ✅ Status 200")?;
        write_line(&mut output, TABLE_HEADER)?;
        write_line(&mut output, TABLE_RULE)?;
        write_line(&mut output, &bucket_row(ok))?;
    } else {
        write_line(&mut output, "⚠️ No request returned status 200")?;
    }

    if !sections.others.is_empty() {
        write_line(&mut output, "")?;
        write_line(&mut output, "### 📦 Other Status")?;
        write_line(&mut output, STATUS_TABLE_HEADER)?;
        write_line(&mut output, STATUS_TABLE_RULE)?;
        for bucket in sections.others {
            write_line(
                &mut output,
                &format!("| {} {}", bucket.status, bucket_row(bucket)),
            )?;
        }
    }

    Ok(output)
}

fn bucket_row(bucket: &StatusReport) -> String {
    format!(
        "| {} | {}ms | {}ms | {}ms | {}ms |",
        bucket.count,
        bucket.min_ms,
        bucket.max_ms,
        bucket.total_ms,
        format_average(bucket)
    )
}

/// Writes `<output>.md` and returns the path written.
///
/// # Errors
///
/// Returns an error when rendering fails or the file cannot be written.
pub async fn save_report_markdown(report: &RunReport, output: &str) -> AppResult<PathBuf> {
    let path = markdown_path(output);
    let markdown = to_markdown(report)?;
    tokio::fs::write(&path, markdown).await.map_err(|err| {
        AppError::sink(SinkError::WriteReport {
            path: path.clone(),
            source: err,
        })
    })?;
    Ok(path)
}
