//! Candidate label extraction.
//!
//! The label is the part of a domain compared against the wordlist: everything
//! before the first `.`. The registrable suffix never takes part in scoring, so
//! `paypa1.com` and `paypa1.net` score identically.

/// Returns the substring of `domain` before its first `.`.
///
/// Domains without a `.` are returned unchanged. A leading `.` yields an empty
/// label.
pub fn label(domain: &str) -> &str {
    match domain.split_once('.') {
        Some((first, _)) => first,
        None => domain,
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
