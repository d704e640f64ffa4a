//! domain_similarity library: look-alike detection for newly registered domains
//!
//! This library compares newly registered domains against a watchlist of brand
//! or product names and reports the ones that look alike, ranked by score.
//!
//! # Example
//!
//! ```no_run
//! use domain_similarity::{run_similarity, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     wordlist: PathBuf::from("brands.txt"),
//!     output_dir: PathBuf::from("./reports"),
//!     metric: "s".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_similarity(config).await?;
//! println!("{} look-alikes in {}", report.matches, report.report_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! The scoring core is synchronous and usable on its own:
//!
//! ```
//! use domain_similarity::{rank, score_all, Metric, Threshold};
//!
//! let wordlist = ["paypal", "amazon"];
//! let candidates = ["paypa1.com", "totallyunrelated.net"];
//! let ranked = rank(score_all(Metric::SequenceRatio, Threshold::Legacy, &wordlist, &candidates));
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].domain, "paypa1.com");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod domain;
pub mod error_handling;
pub mod export;
pub mod feed;
pub mod initialization;
pub mod metric;
pub mod scoring;
pub mod wordlist;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt, ReportFormat, ThresholdMode};
pub use error_handling::{FeedError, ScoringError};
pub use metric::Metric;
pub use run::{run_similarity, SimilarityReport};
pub use scoring::{rank, score_all, ScoredCandidate, Threshold};

// Internal run module (wires the collaborators around the scoring core)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use chrono::{NaiveDate, Utc};
    use log::{error, info, warn};

    use crate::config::Config;
    use crate::export::write_report;
    use crate::feed::{fetch_domains, previous_utc_day, read_candidates};
    use crate::initialization::init_client;
    use crate::metric::Metric;
    use crate::scoring::{rank, score_all, Threshold};
    use crate::wordlist::load_wordlist;

    /// Results of a similarity run.
    #[derive(Debug, Clone)]
    pub struct SimilarityReport {
        /// Metric used for scoring
        pub metric: Metric,
        /// Threshold applied, on the metric's scale
        pub threshold: f64,
        /// Feed day the report is named after
        pub date: NaiveDate,
        /// Number of wordlist terms
        pub wordlist_terms: usize,
        /// Number of candidate domains scored
        pub candidates: usize,
        /// Number of candidates at or above the threshold
        pub matches: usize,
        /// Path of the written report
        pub report_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Candidates from the local source if configured, otherwise from the feed.
    ///
    /// A failed feed download is logged and treated as an empty day.
    async fn load_candidates(config: &Config, date: NaiveDate) -> Result<Vec<String>> {
        if let Some(path) = &config.domains {
            return read_candidates(path).await;
        }

        let client = init_client(config.timeout_seconds)
            .context("Failed to initialize HTTP client")?;
        match fetch_domains(&client, &config.feed_url, date).await {
            Ok(domains) => {
                info!("Retrieved {} newly registered domains for {}", domains.len(), date);
                Ok(domains)
            }
            Err(e) => {
                error!("Failed to retrieve domain feed for {}: {}", date, e);
                Ok(Vec::new())
            }
        }
    }

    /// Runs a similarity pass with the provided configuration.
    ///
    /// Parses the metric and threshold first, so a bad flag fails before any
    /// I/O or scoring. Then loads the wordlist, obtains candidates, scores,
    /// ranks and writes the report.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The metric flag or threshold is invalid (`ScoringError::InvalidConfiguration`)
    /// - The wordlist or a local candidate file cannot be read
    /// - The report cannot be written
    ///
    /// An unreachable feed is not an error; it yields an empty report.
    pub async fn run_similarity(config: Config) -> Result<SimilarityReport> {
        let start = Instant::now();

        let metric: Metric = config.metric.parse()?;
        let threshold = Threshold::from_config(config.threshold_mode, config.threshold)?;
        let cutoff = threshold.resolve(metric);
        info!("Using {} similarity with threshold {}", metric, cutoff);

        let date = config.date.unwrap_or_else(|| previous_utc_day(Utc::now()));

        let wordlist = load_wordlist(&config.wordlist).await?;
        let candidates = load_candidates(&config, date).await?;
        if candidates.is_empty() {
            warn!("No candidate domains to score");
        }

        let results = rank(score_all(metric, threshold, &wordlist, &candidates));
        info!(
            "{} of {} domains scored at or above {}",
            results.len(),
            candidates.len(),
            cutoff
        );

        let report_path = write_report(&config.output_dir, date, metric, config.format, &results)?;

        Ok(SimilarityReport {
            metric,
            threshold: cutoff,
            date,
            wordlist_terms: wordlist.len(),
            candidates: candidates.len(),
            matches: results.len(),
            report_path,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }
}
