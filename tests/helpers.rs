// Shared test helpers for writing inputs and building feed archives.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use domain_similarity::{Config, LogFormat, LogLevel, ReportFormat, ThresholdMode};

/// Writes `lines` to `dir/name`, one per line, and returns the path.
#[allow(dead_code)] // Used by other test files
pub fn write_lines(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create test file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write line");
    }
    file.flush().expect("Failed to flush file");
    path
}

/// Builds an in-memory zip archive with the specified files.
#[allow(dead_code)] // Used by other test files
pub fn build_zip(files: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in files {
        writer
            .start_file(*name, zip::write::SimpleFileOptions::default())
            .expect("Failed to start zip entry");
        writer
            .write_all(content.as_bytes())
            .expect("Failed to write zip entry");
    }
    writer
        .finish()
        .expect("Failed to finish zip archive")
        .into_inner()
}

/// Config for a test run against local files.
#[allow(dead_code)] // Used by other test files
pub fn test_config(wordlist: PathBuf, output_dir: PathBuf, metric: &str) -> Config {
    Config {
        wordlist,
        output_dir,
        metric: metric.to_string(),
        threshold_mode: ThresholdMode::Legacy,
        threshold: None,
        domains: None,
        date: chrono::NaiveDate::from_ymd_opt(2024, 1, 2),
        format: ReportFormat::Text,
        timeout_seconds: 5,
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        ..Default::default()
    }
}
