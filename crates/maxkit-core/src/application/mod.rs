//! Application layer for maxkit.
//!
//! This layer contains:
//! - **Services**: the validate → instantiate → editor pipeline
//! - **Ports**: trait definitions for the SDK catalog and the filesystem
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but holds no layout or
//! normalization knowledge itself; that lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{Filesystem, SdkCatalog};
pub use services::{ScaffoldOutcome, ScaffoldService};
