//! Plain text report: one `(score, 'domain')` tuple per line.

use std::io::Write;

use crate::metric::Metric;
use crate::scoring::ScoredCandidate;

/// Formats a single report line.
///
/// Edit-distance scores are whole numbers and print without a fractional
/// part; ratio scores print with full precision (`1.0`, `0.8333333333333334`).
pub fn format_text_line(metric: Metric, entry: &ScoredCandidate) -> String {
    match metric {
        Metric::EditDistance => format!("({}, '{}')", entry.score as i64, entry.domain),
        Metric::SequenceRatio | Metric::Jaccard => {
            format!("({:?}, '{}')", entry.score, entry.domain)
        }
    }
}

/// Writes `results` to `writer`, one line per entry.
pub fn write_text<W: Write>(
    writer: &mut W,
    metric: Metric,
    results: &[ScoredCandidate],
) -> std::io::Result<()> {
    for entry in results {
        writeln!(writer, "{}", format_text_line(metric, entry))?;
    }
    Ok(())
}
