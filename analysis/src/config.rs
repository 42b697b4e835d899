use regex::Regex;

use crate::error::Result;
use crate::patterns::LOG_ENTRY_PATTERN;

/// Configuration options for the extraction pass.
///
/// The defaults reproduce the production setup: a space-bracketed `ERROR`
/// level marker, a bare `Exception` marker, a trailing window of 5000 lines,
/// and a leading YYYY-MM-DD date as the record boundary. Everything is a
/// plain field so the extractor can be driven against arbitrary line
/// sequences in tests.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Substrings that mark a line as an error trigger.
    pub error_markers: Vec<String>,
    /// Pattern matching the start of a new top-level log record.
    pub entry_pattern: Regex,
    /// Maximum number of trailing lines inspected per file.
    pub scan_window: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            error_markers: vec![" ERROR ".to_string(), "Exception".to_string()],
            entry_pattern: LOG_ENTRY_PATTERN.clone(),
            scan_window: 5000,
        }
    }
}

impl AnalysisConfig {
    /// Replaces the record-boundary pattern, validating it first.
    ///
    /// # Errors
    /// Returns error if the pattern does not compile
    pub fn with_entry_pattern(mut self, pattern: &str) -> Result<Self> {
        self.entry_pattern = Regex::new(pattern)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_scan_window(mut self, scan_window: usize) -> Self {
        self.scan_window = scan_window;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markers_and_window() {
        let config = AnalysisConfig::default();
        assert_eq!(config.error_markers, vec![" ERROR ", "Exception"]);
        assert_eq!(config.scan_window, 5000);
        assert!(config.entry_pattern.is_match("2024-01-01 INFO ready"));
    }

    #[test]
    fn test_with_entry_pattern_rejects_invalid_regex() {
        let result = AnalysisConfig::default().with_entry_pattern("(");
        assert!(result.is_err());
    }

    #[test]
    fn test_with_scan_window_overrides_default() {
        let config = AnalysisConfig::default().with_scan_window(100);
        assert_eq!(config.scan_window, 100);
    }
}
