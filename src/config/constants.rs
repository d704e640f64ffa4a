//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including feed locations, timeouts, size limits and scoring cutoffs.

/// Acceptance threshold applied to every metric in legacy mode.
///
/// Meaningful for the [0, 1] metrics only. On the edit-distance scale almost
/// every candidate clears it; `--threshold-mode metric` uses per-metric cutoffs.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Base URL of the daily newly-registered-domain feed.
///
/// The full URL is `<base>/<base64("YYYY-MM-DD.zip")>/nrd`.
pub const DEFAULT_FEED_BASE_URL: &str =
    "https://whoisds.com/whois-database/newly-registered-domains";

/// Path suffix appended after the encoded date.
pub const FEED_PATH_SUFFIX: &str = "nrd";

/// User-Agent sent when downloading the feed.
pub const FEED_USER_AGENT: &str = "Threat Intelligence Research";

/// Feed download timeout in seconds
pub const FEED_TIMEOUT_SECS: u64 = 60;

/// Maximum feed archive size in bytes (64MB)
/// Larger responses are rejected to prevent memory exhaustion
pub const MAX_FEED_DOWNLOAD_SIZE: usize = 64 * 1024 * 1024;

/// Maximum size of a single decompressed archive entry (256MB)
pub const MAX_FEED_ENTRY_SIZE: u64 = 256 * 1024 * 1024;

/// Prefix of every report file name.
pub const REPORT_FILE_PREFIX: &str = "newDomains";

/// Date format used in feed URLs and report names.
pub const FEED_DATE_FORMAT: &str = "%Y-%m-%d";

// Retry strategy
/// Initial delay in milliseconds before first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 1000;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 20;
/// Maximum number of retries after the first attempt
pub const RETRY_MAX_ATTEMPTS: usize = 3;

/// HTTP 429 Too Many Requests
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
