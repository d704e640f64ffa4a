//! JSONL report.
//!
//! Each line is a complete JSON object describing one accepted candidate.
//! This format is convenient for piping to `jq` or loading into other tools.

use std::io::Write;

use serde::Serialize;

use crate::domain::label;
use crate::metric::Metric;
use crate::scoring::ScoredCandidate;

/// One report line.
#[derive(Debug, Serialize)]
pub struct ReportRow<'a> {
    /// 1-based position in the ranked result
    pub rank: usize,
    /// Full candidate domain
    pub domain: &'a str,
    /// Label that was compared against the wordlist
    pub label: &'a str,
    /// Score on the metric's own scale
    pub score: f64,
    /// Score mapped to [0, 1]
    pub normalized_score: f64,
    /// Metric name
    pub metric: &'static str,
}

impl<'a> ReportRow<'a> {
    /// Builds the row for the entry at 0-based `index`.
    pub fn new(index: usize, metric: Metric, entry: &'a ScoredCandidate) -> Self {
        Self {
            rank: index + 1,
            domain: &entry.domain,
            label: label(&entry.domain),
            score: entry.score,
            normalized_score: metric.normalize(entry.score),
            metric: metric.name(),
        }
    }
}

/// Writes `results` to `writer` as JSON Lines.
///
/// # Errors
///
/// Returns an error if serialization or the underlying write fails.
pub fn write_jsonl<W: Write>(
    writer: &mut W,
    metric: Metric,
    results: &[ScoredCandidate],
) -> anyhow::Result<()> {
    for (index, entry) in results.iter().enumerate() {
        serde_json::to_writer(&mut *writer, &ReportRow::new(index, metric, entry))?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
