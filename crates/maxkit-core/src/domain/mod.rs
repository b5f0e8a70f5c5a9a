//! Core domain layer for maxkit.
//!
//! Pure logic only: target identifier normalization, project intent, and
//! knowledge of the SDK's directory layout. No filesystem access happens
//! here — the application layer reaches the disk through ports.

pub mod error;
pub mod project;
pub mod sdk;
pub mod target;

pub use error::DomainError;
pub use project::{
    DEFAULT_BSP, DEFAULT_TEMPLATE, InstantiatedProject, ProjectSpec, TemplateSource,
    ToolchainPaths,
};
pub use target::{TARGET_PREFIX, TargetId};
