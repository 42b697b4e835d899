use chrono::{DateTime, Local};

/// A contiguous run of lines belonging to one error/exception event,
/// including its stack trace. Immutable once flushed into an [`Extraction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBlock {
    pub lines: Vec<String>,
}

/// Extractor output for one scanned file: the flushed blocks in emission
/// order plus the number of triggers that opened a block.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub blocks: Vec<ErrorBlock>,
    pub error_count: usize,
}

/// Report section for a single log file
#[derive(Debug, Clone)]
pub struct FileReport {
    /// File-name prefix up to the first `-`
    pub service: String,
    pub file_name: String,
    pub extraction: Extraction,
}

/// The finished report handed to the formatter; never modified afterwards
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Local>,
    pub source_dir: String,
    pub files: Vec<FileReport>,
}

impl AnalysisReport {
    pub fn new(source_dir: impl Into<String>) -> Self {
        Self {
            generated_at: Local::now(),
            source_dir: source_dir.into(),
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, file: FileReport) {
        self.files.push(file);
    }

    #[must_use]
    pub fn total_error_count(&self) -> usize {
        self.files.iter().map(|f| f.extraction.error_count).sum()
    }
}
