//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types raised by the scoring core.
///
/// Empty wordlists and empty candidate lists are not errors; they produce an
/// empty result set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// The metric flag or threshold is not usable. Raised before any scoring work.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Error types for retrieving and unpacking the domain feed.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The feed server answered with a non-success status.
    #[error("Feed request to {url} failed with status {status}")]
    HttpStatus {
        /// Requested URL
        url: String,
        /// Response status code
        status: u16,
    },

    /// The transport failed (connect, timeout, body read).
    #[error("Feed request error: {0}")]
    Request(#[from] ReqwestError),

    /// The archive (or one of its entries) exceeds the configured limit.
    #[error("Feed too large: {size} bytes (max: {max} bytes)")]
    TooLarge {
        /// Observed size
        size: u64,
        /// Allowed size
        max: u64,
    },

    /// The body is not a readable zip archive.
    #[error("Feed archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// An archive entry could not be read.
    #[error("Feed entry read error: {0}")]
    Io(#[from] std::io::Error),
}

impl FeedError {
    /// Whether retrying the download could succeed.
    ///
    /// Transport failures, 429 and 5xx responses are transient; everything
    /// else (4xx, oversize, corrupt archive) is permanent.
    pub fn is_retriable(&self) -> bool {
        match self {
            FeedError::HttpStatus { status, .. } => {
                *status == crate::config::HTTP_STATUS_TOO_MANY_REQUESTS
                    || (500..600).contains(status)
            }
            FeedError::Request(e) => {
                if let Some(status) = e.status() {
                    let code = status.as_u16();
                    return code == crate::config::HTTP_STATUS_TOO_MANY_REQUESTS
                        || (500..600).contains(&code);
                }
                e.is_timeout() || e.is_connect() || e.is_request() || e.is_body()
            }
            FeedError::TooLarge { .. } | FeedError::Archive(_) | FeedError::Io(_) => false,
        }
    }
}
