//! Error handling and retry policy.
//!
//! This module provides:
//! - Error type definitions for initialization, scoring and feed retrieval
//! - Retry strategy configuration for the feed download

mod retry;
mod types;

// Re-export public API
pub use retry::get_retry_strategy;
pub use types::{FeedError, InitializationError, ScoringError};
