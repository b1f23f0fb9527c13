//! Hot-trend report export.
//!
//! The report is a fixed summary stamped with the generation time; it does
//! not aggregate the loaded lists.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;

use crate::constants::REPORT_FILE_PREFIX;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotTrendReport {
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub generated_at: String,
    pub report_type: String,
    pub data_summary: String,
}

impl HotTrendReport {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            generated_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            report_type: t!("report.type").to_string(),
            data_summary: t!("report.summary").to_string(),
        }
    }
}

/// `hot-trends-report_YYYY-MM-DD.json`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("{}_{}.json", REPORT_FILE_PREFIX, date.format("%Y-%m-%d"))
}

/// Write the report as pretty JSON into `dir`, creating it if needed.
/// A report from the same day is overwritten.
pub fn write_report(dir: &Path, now: DateTime<Utc>) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating export directory {}", dir.display()))?;

    let path = dir.join(report_file_name(now.date_naive()));
    let json = serde_json::to_string_pretty(&HotTrendReport::new(now))
        .context("serializing hot-trend report")?;
    std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;

    tracing::info!(path = %path.display(), "hot-trend report exported");
    Ok(path)
}
