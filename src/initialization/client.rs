//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::FEED_USER_AGENT;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for the feed download.
///
/// Creates a `reqwest::Client` configured with:
/// - The research User-Agent expected by the feed provider
/// - Per-request timeout of `timeout_seconds`
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(timeout_seconds: u64) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(FEED_USER_AGENT)
        .build()?;
    Ok(client)
}
