use std::borrow::Cow;
use std::path::PathBuf;

use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::info;

use crate::domain::RequestResult;
use crate::error::{AppError, AppResult, ExportError};

use super::RunReport;

const CSV_HEADER: &[u8] = b"ID,Name,Method,Status,Latency(ms)\n";

/// Writes one CSV row per result, in collection order.
///
/// # Errors
///
/// Returns an error naming `path` when the file cannot be created or written.
pub async fn export_csv(path: &str, results: &[RequestResult]) -> AppResult<()> {
    write_csv(path, results).await.map_err(|err| {
        AppError::export(ExportError::WriteCsv {
            path: PathBuf::from(path),
            source: err,
        })
    })?;
    info!("Wrote {} results to {}", results.len(), path);
    Ok(())
}

async fn write_csv(path: &str, results: &[RequestResult]) -> Result<(), std::io::Error> {
    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    writer.write_all(CSV_HEADER).await?;
    for result in results {
        let line = format!(
            "{},{},{},{},{}\n",
            result.id,
            csv_field(&result.name),
            result.method,
            csv_field(&result.status.to_string()),
            result.latency_ms
        );
        writer.write_all(line.as_bytes()).await?;
    }
    writer.flush().await?;
    Ok(())
}

fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Writes the summary table and raw results as a single JSON document.
///
/// # Errors
///
/// Returns an error naming `path` when serialization or the write fails.
pub async fn export_json(path: &str, report: &RunReport) -> AppResult<()> {
    let records_json: Vec<serde_json::Value> = report
        .results
        .iter()
        .map(|result| {
            serde_json::json!({
                "id": result.id,
                "name": result.name,
                "method": result.method.as_str(),
                "status": result.status.to_string(),
                "success": result.status.is_success(),
                "latency_ms": result.latency_ms
            })
        })
        .collect();

    let summary_json: Vec<serde_json::Value> = report
        .summary
        .iter()
        .map(|row| {
            serde_json::json!({
                "name": row.name,
                "method": row.method.as_str(),
                "count": row.count,
                "avg_latency_ms": row.avg_latency_display(),
                "success": row.success,
                "failed": row.failed
            })
        })
        .collect();

    let payload = serde_json::json!({
        "elapsed_ms": report.elapsed_ms(),
        "summary": summary_json,
        "records": records_json
    });

    let json = serde_json::to_vec_pretty(&payload)
        .map_err(|err| AppError::export(ExportError::SerializeJson { source: err }))?;
    write_bytes(path, &json).await.map_err(|err| {
        AppError::export(ExportError::WriteJson {
            path: PathBuf::from(path),
            source: err,
        })
    })?;
    info!("Wrote JSON export to {}", path);
    Ok(())
}

async fn write_bytes(path: &str, bytes: &[u8]) -> Result<(), std::io::Error> {
    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes).await?;
    writer.flush().await?;
    Ok(())
}
