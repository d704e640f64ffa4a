//! Feed archive extraction.
//!
//! The daily feed is a zip archive whose entries are plain text files with one
//! domain per line.

use std::io::{Cursor, Read};

use crate::config::MAX_FEED_ENTRY_SIZE;
use crate::error_handling::FeedError;

/// Magic bytes at the start of a zip local file header.
pub(crate) const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Whether `bytes` look like a zip archive.
pub(crate) fn is_zip(bytes: &[u8]) -> bool {
    bytes.starts_with(ZIP_MAGIC)
}

/// Splits raw feed text into domains.
///
/// Trailing `\r`/`\n` are stripped and blank lines skipped. Invalid UTF-8 is
/// replaced rather than rejected.
pub fn parse_domain_lines(bytes: &[u8]) -> Vec<String> {
    bytes
        .split(|b| *b == b'\n')
        .map(|line| String::from_utf8_lossy(line).trim_end_matches(['\r', '\n']).to_string())
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Reads every file entry of the zip archive in `zip_bytes` and returns its domains,
/// in archive order.
///
/// # Errors
///
/// Returns `FeedError::Archive` if the bytes are not a readable zip archive,
/// `FeedError::TooLarge` if an entry decompresses past `MAX_FEED_ENTRY_SIZE`.
pub fn extract_domains(zip_bytes: &[u8]) -> Result<Vec<String>, FeedError> {
    log::debug!("Extracting domains from zip archive ({} bytes)", zip_bytes.len());

    let mut archive = zip::ZipArchive::new(Cursor::new(zip_bytes))?;
    let mut domains = Vec::new();

    for index in 0..archive.len() {
        let entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();

        let mut contents = Vec::new();
        entry
            .take(MAX_FEED_ENTRY_SIZE + 1)
            .read_to_end(&mut contents)?;
        if contents.len() as u64 > MAX_FEED_ENTRY_SIZE {
            return Err(FeedError::TooLarge {
                size: contents.len() as u64,
                max: MAX_FEED_ENTRY_SIZE,
            });
        }

        let entry_domains = parse_domain_lines(&contents);
        log::info!("Read {} domains from {}", entry_domains.len(), name);
        domains.extend(entry_domains);
    }

    Ok(domains)
}
