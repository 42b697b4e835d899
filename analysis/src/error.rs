use thiserror::Error;

/// Errors that can occur while scanning log files
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to read log file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Invalid pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<AnalysisError>),
}

impl AnalysisError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadError(err) => format!("File operation failed: {err}"),
            Self::PatternError(err) => format!("Invalid pattern: {err}"),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

/// Type alias for Result with `AnalysisError`
pub type Result<T> = std::result::Result<T, AnalysisError>;
