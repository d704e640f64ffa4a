//! Newly-registered-domain feed.
//!
//! This module provides:
//! - Feed URL construction for a given day (`feed_url`, `previous_utc_day`)
//! - Download with retries on transient failures (`fetch_feed`)
//! - Zip extraction into a domain list (`extract_domains`)
//! - Local candidate files and stdin as an alternative source (`read_candidates`)

mod archive;

use std::path::Path;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, NaiveDate, Utc};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio_retry::RetryIf;

use crate::config::{FEED_PATH_SUFFIX, MAX_FEED_DOWNLOAD_SIZE};
use crate::error_handling::{get_retry_strategy, FeedError};

pub use archive::{extract_domains, parse_domain_lines};

/// The UTC calendar day before `now`.
pub fn previous_utc_day(now: DateTime<Utc>) -> NaiveDate {
    let today = now.date_naive();
    today.pred_opt().unwrap_or(today)
}

/// Feed URL for `date`: `<base>/<base64("YYYY-MM-DD.zip")>/nrd`.
pub fn feed_url(base: &str, date: NaiveDate) -> String {
    let key = STANDARD.encode(format!("{date}.zip"));
    format!("{}/{}/{}", base.trim_end_matches('/'), key, FEED_PATH_SUFFIX)
}

/// Single download attempt with size enforcement.
async fn download_feed(
    client: &reqwest::Client,
    url: &str,
    max_size: usize,
) -> Result<Vec<u8>, FeedError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    if let Some(content_length) = response.content_length() {
        if content_length > max_size as u64 {
            return Err(FeedError::TooLarge {
                size: content_length,
                max: max_size as u64,
            });
        }
    }

    let bytes = response.bytes().await?;

    // content-length may be missing or wrong
    if bytes.len() > max_size {
        return Err(FeedError::TooLarge {
            size: bytes.len() as u64,
            max: max_size as u64,
        });
    }

    Ok(bytes.to_vec())
}

/// Downloads the feed archive at `url`, capped at `MAX_FEED_DOWNLOAD_SIZE`.
///
/// Transient failures (transport errors, 429, 5xx) are retried with
/// exponential backoff; permanent ones are returned immediately.
///
/// # Errors
///
/// Returns the last `FeedError` once retries are exhausted.
pub async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FeedError> {
    fetch_feed_with_limit(client, url, MAX_FEED_DOWNLOAD_SIZE).await
}

/// [`fetch_feed`] with an explicit body size cap in bytes.
///
/// # Errors
///
/// Returns `FeedError::TooLarge` without retrying once the body exceeds `max_size`.
pub async fn fetch_feed_with_limit(
    client: &reqwest::Client,
    url: &str,
    max_size: usize,
) -> Result<Vec<u8>, FeedError> {
    log::info!("Downloading domain feed from {}", url);

    let bytes = RetryIf::spawn(
        get_retry_strategy(),
        || async move {
            let result = download_feed(client, url, max_size).await;
            if let Err(e) = &result {
                log::warn!("Feed download attempt failed: {}", e);
            }
            result
        },
        |e: &FeedError| e.is_retriable(),
    )
    .await?;

    log::info!("Downloaded {} bytes", bytes.len());
    Ok(bytes)
}

/// Downloads and unpacks the feed for `date`.
///
/// # Errors
///
/// Returns a `FeedError` if the download fails or the archive is unreadable.
pub async fn fetch_domains(
    client: &reqwest::Client,
    base_url: &str,
    date: NaiveDate,
) -> Result<Vec<String>, FeedError> {
    let url = feed_url(base_url, date);
    let bytes = fetch_feed(client, &url).await?;
    extract_domains(&bytes)
}

/// Reads candidate domains from a local file, or stdin when `path` is `-`.
///
/// Zip archives (same layout as the feed) are detected by their magic bytes;
/// anything else is read as one domain per line.
///
/// # Errors
///
/// Returns an error if the source cannot be read or a zip archive is corrupt.
pub async fn read_candidates(path: &Path) -> Result<Vec<String>> {
    if path.as_os_str() == "-" {
        log::info!("Reading candidate domains from stdin");
        return read_candidates_from(tokio::io::stdin(), "stdin").await;
    }

    log::info!("Reading candidate domains from {}", path.display());
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open candidate domains {}", path.display()))?;
    read_candidates_from(file, &path.display().to_string()).await
}

/// Reads candidate domains from any async reader; `source` names it in errors.
///
/// # Errors
///
/// Returns an error if reading fails or a zip archive is corrupt.
pub async fn read_candidates_from<R>(mut reader: R, source: &str) -> Result<Vec<String>>
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .await
        .with_context(|| format!("Failed to read candidate domains from {source}"))?;

    if archive::is_zip(&bytes) {
        extract_domains(&bytes).with_context(|| format!("Failed to extract candidate archive {source}"))
    } else {
        Ok(parse_domain_lines(&bytes))
    }
}
