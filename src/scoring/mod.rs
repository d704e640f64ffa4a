//! Scoring engine and ranker.
//!
//! Every candidate's label is scored against every wordlist term; the best
//! score is kept and compared with the acceptance threshold. Accepted
//! candidates are then ranked by score, highest first, keeping input order
//! among equal scores.

use crate::config::{ThresholdMode, DEFAULT_THRESHOLD};
use crate::domain::label;
use crate::error_handling::ScoringError;
use crate::metric::Metric;

/// A candidate domain paired with its best score against the wordlist.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// Best score on the active metric's scale
    pub score: f64,
    /// The full candidate domain as supplied
    pub domain: String,
}

/// Acceptance threshold policy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Threshold {
    /// `DEFAULT_THRESHOLD` (0.5) on every metric's own scale.
    #[default]
    Legacy,
    /// The metric's own [`Metric::default_threshold`].
    MetricDefault,
    /// An explicit cutoff on the metric's scale.
    Fixed(f64),
}

impl Threshold {
    /// Builds the policy from CLI/config values. An explicit value wins over the mode.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::InvalidConfiguration` for a NaN or infinite value.
    pub fn from_config(mode: ThresholdMode, value: Option<f64>) -> Result<Self, ScoringError> {
        match value {
            Some(v) if !v.is_finite() => Err(ScoringError::InvalidConfiguration(format!(
                "threshold must be a finite number, got {v}"
            ))),
            Some(v) => Ok(Threshold::Fixed(v)),
            None => Ok(match mode {
                ThresholdMode::Legacy => Threshold::Legacy,
                ThresholdMode::Metric => Threshold::MetricDefault,
            }),
        }
    }

    /// The cutoff applied to scores of `metric`.
    pub fn resolve(self, metric: Metric) -> f64 {
        match self {
            Threshold::Legacy => DEFAULT_THRESHOLD,
            Threshold::MetricDefault => metric.default_threshold(),
            Threshold::Fixed(v) => v,
        }
    }
}

/// Best score of `candidate`'s label against `wordlist`.
///
/// Starts at 0, so an empty wordlist (or only negative edit-distance scores)
/// yields 0. Stops early once the metric's maximum is reached.
pub fn best_score<S: AsRef<str>>(metric: Metric, wordlist: &[S], candidate: &str) -> f64 {
    let item = label(candidate);
    let ceiling = metric.max_score();
    let mut best = 0.0_f64;

    for term in wordlist {
        let score = metric.score(item, term.as_ref());
        if score > best {
            best = score;
            if best >= ceiling {
                break;
            }
        }
    }

    best
}

/// Scores every candidate and keeps those whose best score reaches the threshold.
///
/// Output follows input order; pass it to [`rank`] for the ordered result set.
/// Empty inputs produce an empty result.
pub fn score_all<S, D>(
    metric: Metric,
    threshold: Threshold,
    wordlist: &[S],
    candidates: &[D],
) -> Vec<ScoredCandidate>
where
    S: AsRef<str>,
    D: AsRef<str>,
{
    let cutoff = threshold.resolve(metric);
    log::debug!(
        "Scoring {} candidates against {} terms with {} (threshold {})",
        candidates.len(),
        wordlist.len(),
        metric,
        cutoff
    );

    candidates
        .iter()
        .filter_map(|candidate| {
            let domain = candidate.as_ref();
            let score = best_score(metric, wordlist, domain);
            if score >= cutoff {
                log::trace!("Accepted {domain} with score {score}");
                Some(ScoredCandidate {
                    score,
                    domain: domain.to_string(),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Sorts by score, highest first. Stable: equal scores keep their input order.
pub fn rank(mut scored: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
