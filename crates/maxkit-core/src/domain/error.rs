//! Domain layer errors.

use thiserror::Error;

use super::target::TARGET_PREFIX;

/// Errors raised by pure domain logic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The raw target string cannot be normalized into a part identifier.
    ///
    /// Raised only for malformed input (empty, or characters outside the
    /// alphanumeric set) — an unknown-but-well-formed target is a catalog
    /// miss, not a format error.
    #[error("malformed target '{input}': expected a part number like {TARGET_PREFIX}32655 or a bare suffix like 32655")]
    InvalidTargetFormat { input: String },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidTargetFormat { input } => vec![
                format!("'{input}' contains characters outside letters and digits"),
                format!("Pass a full part number ({TARGET_PREFIX}32655) or its numeric suffix (32655)"),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTargetFormat { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}
