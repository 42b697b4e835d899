use once_cell::sync::Lazy;
use regex::Regex;

/// A top-level log record starts with a YYYY-MM-DD date. Anything else is
/// treated as a continuation of the previous record.
pub static LOG_ENTRY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("Failed to compile log entry regex")
});
