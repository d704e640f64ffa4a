//! String similarity metrics.
//!
//! Three interchangeable scoring functions, each on its own scale:
//! - [`Metric::SequenceRatio`]: block-matching ratio in [0, 1]
//! - [`Metric::EditDistance`]: `100 - levenshtein(a, b)`, at most 100, unbounded below
//! - [`Metric::Jaccard`]: character-set overlap in [0, 1]
//!
//! A metric is chosen once from a CLI flag and passed down by value. Scores
//! from different metrics are not comparable; use [`Metric::normalize`] when a
//! common [0, 1] scale is needed.

mod jaccard;
mod sequence;

use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::config::DEFAULT_THRESHOLD;
use crate::error_handling::ScoringError;

pub use jaccard::jaccard;
pub use sequence::sequence_ratio;

/// Score given to identical strings by the edit-distance metric.
pub const EDIT_DISTANCE_CEILING: f64 = 100.0;

/// Default edit-distance cutoff: at most two edits away from a term.
pub const EDIT_DISTANCE_DEFAULT_THRESHOLD: f64 = EDIT_DISTANCE_CEILING - 2.0;

/// Edit-distance metric: `100 - levenshtein(a, b)` over chars.
pub fn edit_distance_score(a: &str, b: &str) -> f64 {
    EDIT_DISTANCE_CEILING - strsim::levenshtein(a, b) as f64
}

/// The similarity metric used for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Metric {
    /// Block-matching sequence ratio (`s`)
    SequenceRatio,
    /// Inverted Levenshtein distance (`e`)
    EditDistance,
    /// Jaccard similarity of character sets (`j`)
    Jaccard,
}

impl Metric {
    /// Scores `a` against `b` on this metric's scale.
    pub fn score(self, a: &str, b: &str) -> f64 {
        match self {
            Metric::SequenceRatio => sequence_ratio(a, b),
            Metric::EditDistance => edit_distance_score(a, b),
            Metric::Jaccard => jaccard(a, b),
        }
    }

    /// Highest score the metric can produce (identical inputs).
    pub fn max_score(self) -> f64 {
        match self {
            Metric::SequenceRatio | Metric::Jaccard => 1.0,
            Metric::EditDistance => EDIT_DISTANCE_CEILING,
        }
    }

    /// Cutoff suited to this metric's scale.
    pub fn default_threshold(self) -> f64 {
        match self {
            Metric::SequenceRatio | Metric::Jaccard => DEFAULT_THRESHOLD,
            Metric::EditDistance => EDIT_DISTANCE_DEFAULT_THRESHOLD,
        }
    }

    /// Maps a score on this metric's scale to [0, 1].
    pub fn normalize(self, score: f64) -> f64 {
        match self {
            Metric::SequenceRatio | Metric::Jaccard => score.clamp(0.0, 1.0),
            Metric::EditDistance => (score / EDIT_DISTANCE_CEILING).clamp(0.0, 1.0),
        }
    }

    /// Name used in report file names.
    pub fn name(self) -> &'static str {
        match self {
            Metric::SequenceRatio => "similarity",
            Metric::EditDistance => "editdistance",
            Metric::Jaccard => "jaccard",
        }
    }

    /// Single-letter CLI flag.
    pub fn flag(self) -> char {
        match self {
            Metric::SequenceRatio => 's',
            Metric::EditDistance => 'e',
            Metric::Jaccard => 'j',
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = ScoringError;

    /// Accepts `s`/`e`/`j` and the report names. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" | "similarity" => Ok(Metric::SequenceRatio),
            "e" | "editdistance" => Ok(Metric::EditDistance),
            "j" | "jaccard" => Ok(Metric::Jaccard),
            other => {
                let expected: Vec<String> = Metric::iter()
                    .map(|m| format!("{} ({})", m.flag(), m.name()))
                    .collect();
                Err(ScoringError::InvalidConfiguration(format!(
                    "unknown similarity type '{other}', expected one of: {}",
                    expected.join(", ")
                )))
            }
        }
    }
}
