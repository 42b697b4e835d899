use std::fs;
use std::path::Path;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::extractor::Extractor;
use crate::types::FileReport;

/// Reads the trailing scan window of a log file.
///
/// Bytes that are not valid UTF-8 are substituted with the replacement
/// character rather than aborting the scan. Content before the window is
/// never examined.
///
/// # Errors
/// Returns error if the file cannot be read
pub fn read_window(path: &Path, scan_window: usize) -> Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    if lines.len() > scan_window {
        lines.drain(..lines.len() - scan_window);
    }
    Ok(lines)
}

/// Derives the service name from a log file name: the prefix up to the first
/// `-`, or the whole name when there is none.
#[must_use]
pub fn service_name(file_name: &str) -> String {
    file_name
        .split('-')
        .next()
        .unwrap_or(file_name)
        .to_string()
}

/// Scans one log file end to end: windowed read, extraction, section record.
///
/// # Errors
/// Returns error if the file cannot be read; the caller decides whether the
/// failure aborts the whole run or just this file.
pub fn scan_file(path: &Path, config: &AnalysisConfig) -> Result<FileReport> {
    let file_name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    let lines = read_window(path, config.scan_window)?;
    let extractor = Extractor::new(config.clone());
    let extraction = extractor.extract(lines.iter().map(String::as_str));

    Ok(FileReport {
        service: service_name(&file_name),
        file_name,
        extraction,
    })
}
