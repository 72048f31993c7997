use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The inserter scanned the whole file without completing its state
    /// machine: either the start pattern never matched, or the end pattern
    /// never closed the armed region.
    #[error("anchor pattern not found: {pattern}")]
    AnchorNotFound { pattern: String },

    #[error("invalid entity name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: String },

    #[error("field #{index} has an empty name")]
    EmptyFieldName { index: usize },

    #[error("unknown storage backend: {0}")]
    UnknownStorage(String),

    #[error("unknown module: {0}")]
    UnknownModule(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AnchorNotFound { pattern } => vec![
                format!("The target file has no line matching: {pattern}"),
                "Insertion targets must come from a project generated by layergen".into(),
                "The file was left unmodified".into(),
            ],
            Self::InvalidEntityName { reason, .. } => vec![
                format!("Details: {reason}"),
                "Entity names are exported Go identifiers: start with an uppercase letter".into(),
                "Examples: User, Role, MenuAction".into(),
            ],
            Self::EmptyFieldName { index } => vec![
                format!("Check the field at position {index} in your field file"),
                "Every field needs a non-empty `name`".into(),
            ],
            Self::UnknownStorage(_) => vec![
                "Supported storage backends: gorm, mongo".into(),
            ],
            Self::UnknownModule(_) => vec![
                "Supported modules: schema, model, bll, api, mock, router (or 'all')".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AnchorNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidEntityName { .. }
            | Self::EmptyFieldName { .. }
            | Self::UnknownStorage(_)
            | Self::UnknownModule(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
