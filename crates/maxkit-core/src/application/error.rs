//! Application layer errors.
//!
//! These represent failures in orchestration against a concrete SDK
//! installation and filesystem, not business logic. Malformed-input errors
//! are `DomainError` from `crate::domain`.
//!
//! Every failure is raised at the point of detection with no local recovery —
//! a scaffolding run is single-shot, and the CLI layer owns presentation.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::error::ErrorCategory;

/// Errors that occur while resolving against the SDK or writing the project.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The SDK root is missing or does not look like an SDK installation.
    #[error("SDK installation not found at {path}: {reason}")]
    SdkNotFound { path: PathBuf, reason: String },

    /// The resolved target has no directory under the SDK's examples root.
    #[error("unknown target '{target}'")]
    UnknownTarget {
        target: String,
        /// Valid targets in this installation, sorted.
        available: Vec<String>,
    },

    /// The target exists but has no example with this name.
    #[error("unknown template '{template}' for target {target}")]
    UnknownTemplate {
        target: String,
        template: String,
        available: Vec<String>,
    },

    /// The target exists but has no board support package with this name.
    #[error("unknown board support package '{bsp}' for target {target}")]
    UnknownBsp {
        target: String,
        bsp: String,
        available: Vec<String>,
    },

    /// Destination already exists and is not an empty directory.
    #[error("destination {path} already exists and is not empty")]
    DestinationExists { path: PathBuf },

    /// Copy or rewrite failed while materializing the project.
    #[error("failed to instantiate project at {path}: {reason}")]
    Instantiation { path: PathBuf, reason: String },

    /// Editor integration artifacts could not be written.
    #[error("failed to generate editor integration at {path}: {reason}")]
    IntegrationGeneration { path: PathBuf, reason: String },

    /// A filesystem operation failed outside the instantiation step.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SdkNotFound { path, .. } => vec![
                format!("No SDK installation at: {}", path.display()),
                "Point MAXIM_PATH (or --sdk-path) at your MaximSDK directory".into(),
            ],
            Self::UnknownTarget { target, available } => {
                suggest_alternatives("targets", target, available)
            }
            Self::UnknownTemplate {
                template,
                available,
                ..
            } => suggest_alternatives("templates", template, available),
            Self::UnknownBsp { bsp, available, .. } => {
                suggest_alternatives("BSPs", bsp, available)
            }
            Self::DestinationExists { path } => vec![
                format!("Directory already contains files: {}", path.display()),
                "Choose a different project name or remove the directory first".into(),
            ],
            Self::Instantiation { .. } => vec![
                "The destination was left untouched; fix the cause and re-run".into(),
                "Check write permissions and available disk space".into(),
            ],
            Self::IntegrationGeneration { path, .. } => vec![
                format!("Could not write under: {}", path.display()),
                "The project itself was created; re-run to regenerate editor files".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the path is readable".into(),
            ],
        }
    }

    /// Error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SdkNotFound { .. } => ErrorCategory::Configuration,
            Self::UnknownTarget { .. } | Self::UnknownTemplate { .. } | Self::UnknownBsp { .. } => {
                ErrorCategory::NotFound
            }
            Self::DestinationExists { .. } => ErrorCategory::Validation,
            Self::Instantiation { .. }
            | Self::IntegrationGeneration { .. }
            | Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}

/// Render an "available …" suggestion list, with a did-you-mean line when a
/// close name exists (case-insensitive containment either way).
fn suggest_alternatives(noun: &str, missed: &str, available: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(2);

    let missed_lower = missed.to_lowercase();
    if let Some(similar) = available.iter().find(|cand| {
        let cand_lower = cand.to_lowercase();
        cand_lower == missed_lower
            || cand_lower.contains(&missed_lower)
            || missed_lower.contains(&cand_lower)
    }) {
        out.push(format!("Did you mean '{similar}'?"));
    }

    if available.is_empty() {
        out.push(format!("This installation provides no {noun}"));
    } else {
        out.push(format!("Available {noun}: {}", available.join(", ")));
    }

    out
}
