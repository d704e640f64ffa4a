//! Report writing.
//!
//! This module names and writes the report file for a run. Two formats are
//! supported: the plain `(score, 'domain')` text listing and JSONL.

mod jsonl;
mod text;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::config::{ReportFormat, FEED_DATE_FORMAT, REPORT_FILE_PREFIX};
use crate::metric::Metric;
use crate::scoring::ScoredCandidate;

pub use jsonl::{write_jsonl, ReportRow};
pub use text::{format_text_line, write_text};

/// Report file name: `newDomains_<YYYY-MM-DD>_<metric>.<ext>`.
pub fn report_file_name(date: NaiveDate, metric: Metric, format: ReportFormat) -> String {
    format!(
        "{}_{}_{}.{}",
        REPORT_FILE_PREFIX,
        date.format(FEED_DATE_FORMAT),
        metric.name(),
        format.extension()
    )
}

/// Writes the ranked `results` into `output_dir` and returns the report path.
///
/// The directory is created if missing; an existing report for the same day
/// and metric is overwritten.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written.
pub fn write_report(
    output_dir: &Path,
    date: NaiveDate,
    metric: Metric,
    format: ReportFormat,
    results: &[ScoredCandidate],
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory {}", output_dir.display())
    })?;

    let path = output_dir.join(report_file_name(date, metric, format));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create report file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        ReportFormat::Text => write_text(&mut writer, metric, results)
            .with_context(|| format!("Failed to write report {}", path.display()))?,
        ReportFormat::Jsonl => write_jsonl(&mut writer, metric, results)
            .with_context(|| format!("Failed to write report {}", path.display()))?,
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush report {}", path.display()))?;

    log::info!("Wrote {} entries to {}", results.len(), path.display());
    Ok(path)
}
