use std::path::PathBuf;

use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::{AppError, AppResult, SinkError};
use crate::metrics::RunReport;

const JSON_EXTENSION: &str = ".json";

/// `output`, with `.json` appended unless it already ends with it.
#[must_use]
pub fn json_path(output: &str) -> PathBuf {
    if output.ends_with(JSON_EXTENSION) {
        PathBuf::from(output)
    } else {
        PathBuf::from(format!("{}{}", output, JSON_EXTENSION))
    }
}

/// Writes the report as pretty-printed JSON and returns the path written.
///
/// # Errors
///
/// Returns an error when serialization fails or the file cannot be written.
pub async fn save_report_json(report: &RunReport, output: &str) -> AppResult<PathBuf> {
    let path = json_path(output);
    let json = serde_json::to_vec_pretty(report)
        .map_err(|err| AppError::sink(SinkError::SerializeJson { source: err }))?;

    let write = async {
        let file = tokio::fs::File::create(&path).await?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&json).await?;
        writer.flush().await
    };
    write.await.map_err(|err| {
        AppError::sink(SinkError::WriteReport {
            path: path.clone(),
            source: err,
        })
    })?;

    Ok(path)
}
