//! Watchlist loading.

use std::path::Path;

use anyhow::{Context, Result};

/// Splits wordlist text into terms: one per line, trimmed, blank lines dropped.
pub fn parse_wordlist(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the wordlist file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub async fn load_wordlist(path: &Path) -> Result<Vec<String>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read wordlist from {}", path.display()))?;

    let terms = parse_wordlist(&text);
    if terms.is_empty() {
        log::warn!("Wordlist {} contains no terms", path.display());
    } else {
        log::info!("Loaded {} terms from {}", terms.len(), path.display());
    }
    Ok(terms)
}
