//! Error types for report generation

use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that can occur while generating or saving a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Failed to spawn the analyzer or touch the report file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The analyzer ran but exited with a failure status
    #[error("Analyzer exited with {status}: {stderr}")]
    AnalyzerFailed {
        /// Exit status reported by the analyzer process
        status: ExitStatus,
        /// Captured standard error of the analyzer
        stderr: String,
    },

    /// Analyzer output or the report list could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
