//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A target file already exists and overwrite was not requested.
    #[error("file already exists at {path}")]
    AlreadyExists { path: PathBuf },

    /// Template rendering failed.
    #[error("template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Post-write normalization failed. Non-fatal by policy: the generated
    /// file stays on disk and the failure is surfaced as a warning.
    #[error("formatting failed for {path}: {reason}")]
    FormatFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyExists { path } => vec![
                format!("A file already exists at: {}", path.display()),
                "Use --override to replace generated files (destructive)".into(),
                "Existing content was left untouched".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check that --dir points at the project root".into(),
            ],
            Self::FormatFailed { .. } => vec![
                "The file was written but could not be formatted".into(),
                "Check that gofmt is installed and on your PATH".into(),
            ],
            Self::RenderingFailed { .. } => {
                vec!["Check the error details above".into()]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::FormatFailed { .. } => ErrorCategory::Internal,
        }
    }
}
