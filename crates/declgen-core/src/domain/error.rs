// ============================================================================
// domain/error.rs - DECLARATION DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (tests compare them directly)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Invalid input (400-level equivalent)
    // ========================================================================
    #[error("interface index must be an integer between 0 and 7, excluding 1: got {index}")]
    InvalidInterfaceIndex { index: i32 },

    #[error("interface count must be an integer between 1 and 8 inclusive: got {count}")]
    InvalidInterfaceCount { count: i32 },

    #[error("failed to parse {value:?} as IP address or CIDR: {reason}")]
    InvalidAddress { value: String, reason: String },

    #[error("invalid licensing parameter: {field} must not be empty")]
    InvalidLicensingParameter { field: &'static str },

    // ========================================================================
    // Validation-pattern mismatches
    // ========================================================================
    #[error("{field} doesn't pass AS3 validation: {value:?}")]
    PatternMismatch { field: &'static str, value: String },

    // ========================================================================
    // Context finalisation
    // ========================================================================
    #[error("failed to serialize render context: {reason}")]
    Serialization { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInterfaceIndex { .. } => vec![
                "Interface 1 is the management NIC and is never data-plane addressable".into(),
                "Valid indices are 0 and 2 through 7".into(),
            ],
            Self::InvalidInterfaceCount { count } => vec![
                format!("{} interfaces were requested", count),
                "Try: --interfaces with a value between 1 and 8".into(),
            ],
            Self::InvalidAddress { value, .. } => vec![
                format!("'{}' is neither an IP address nor a CIDR block", value),
                "Examples: 10.0.10.10, 10.0.10.0/24, 2001:cafe::10/64".into(),
            ],
            Self::InvalidLicensingParameter { field } => vec![
                format!("Provide a value for the {}", field),
                "Omit the licensing flags entirely to generate an unlicensed declaration".into(),
            ],
            Self::PatternMismatch { field: "tenant", .. } => vec![
                "Tenant names start with a letter and use only letters, digits, '_', '.' or '-'"
                    .into(),
                "Keep it to 48 characters or fewer".into(),
            ],
            Self::PatternMismatch { field, .. } => vec![
                format!("The {} contains characters AS3 rejects", field),
                "Avoid control characters, quotes, backslashes and markup characters".into(),
            ],
            Self::Serialization { .. } => {
                vec!["This appears to be a bug in the context model".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInterfaceIndex { .. }
            | Self::InvalidInterfaceCount { .. }
            | Self::InvalidAddress { .. }
            | Self::InvalidLicensingParameter { .. }
            | Self::PatternMismatch { .. } => ErrorCategory::Validation,
            Self::Serialization { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
