//! Unified error handling for maxkit core.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

pub use crate::domain::error::ErrorCategory;

/// Root error type for maxkit core operations.
#[derive(Debug, Error, Clone)]
pub enum MaxkitError {
    /// Malformed input (domain layer).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Resolution or instantiation failure (application layer).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl MaxkitError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Error category for display/exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Convenient result type alias.
pub type MaxkitResult<T> = Result<T, MaxkitError>;
