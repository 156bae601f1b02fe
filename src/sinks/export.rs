use std::path::PathBuf;

use super::json::save_report_json;
use super::markdown::save_report_markdown;
use crate::error::AppResult;
use crate::metrics::RunReport;

/// Result of writing both report files. Each side fails independently.
#[derive(Debug)]
pub struct ExportOutcome {
    pub json: AppResult<PathBuf>,
    pub markdown: AppResult<PathBuf>,
}

impl ExportOutcome {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.json.is_ok() && self.markdown.is_ok()
    }
}

/// Writes the JSON and Markdown reports derived from `output`.
///
/// Failures are logged and returned; they never affect the report itself.
pub async fn export_report(report: &RunReport, output: &str) -> ExportOutcome {
    let json = save_report_json(report, output).await;
    match &json {
        Ok(path) => tracing::info!("Saved JSON report to {}", path.display()),
        Err(err) => tracing::error!("Failed to save JSON report: {}", err),
    }

    let markdown = save_report_markdown(report, output).await;
    match &markdown {
        Ok(path) => tracing::info!("Saved Markdown report to {}", path.display()),
        Err(err) => tracing::error!("Failed to save Markdown report: {}", err),
    }

    ExportOutcome { json, markdown }
}
