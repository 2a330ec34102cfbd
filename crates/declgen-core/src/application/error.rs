//! Application layer errors.
//!
//! These errors represent failures in orchestration and rendering, not
//! business rules. Business-rule errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading or executing templates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The requested template is not in the template set.
    #[error("template '{name}' not found")]
    TemplateNotFound { name: String },

    /// A template in the set failed to parse.
    #[error("failed to parse template '{name}': {reason}")]
    TemplateParse { name: String, reason: String },

    /// Execution aborted part way; bytes already written stay written.
    #[error("failed to render template '{name}': {reason}")]
    RenderingFailed { name: String, reason: String },

    /// The output sink refused a write.
    #[error("failed to write rendered output: {reason}")]
    Sink { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name } => vec![
                format!("No template named '{}' is loaded", name),
                "Check templates.local_path points at a complete template directory".into(),
            ],
            Self::TemplateParse { name, .. } => vec![
                format!("Template '{}' has a syntax error", name),
                "Remove templates.local_path to fall back to the built-in templates".into(),
            ],
            Self::RenderingFailed { name, .. } => vec![
                format!("Template '{}' referenced something the context lacks", name),
                "Run with -vv to see the render context being used".into(),
            ],
            Self::Sink { .. } => vec![
                "Check that the output file is writable".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::TemplateParse { .. } => ErrorCategory::Configuration,
            Self::RenderingFailed { .. } | Self::Sink { .. } => ErrorCategory::Internal,
        }
    }
}
