//! Error-block extraction for fetched service logs.
//!
//! The extractor walks the trailing window of a log file in a single pass,
//! grouping an ERROR/Exception line together with its stack-trace
//! continuations into blocks. The formatter renders the per-file sections of
//! the plain-text analysis report.

pub mod config;
pub mod error;
pub mod extractor;
pub mod formatter;
pub mod patterns;
pub mod scan;
pub mod types;

pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use extractor::Extractor;
pub use formatter::{ReportFormatter, TextReportFormatter};
pub use types::{AnalysisReport, ErrorBlock, Extraction, FileReport};
