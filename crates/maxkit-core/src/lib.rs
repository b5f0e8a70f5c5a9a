//! Maxkit Core - resolution and instantiation pipeline
//!
//! This crate provides the domain and application layers for the maxkit
//! project scaffolding tool, following a ports-and-adapters split.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           maxkit-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          ScaffoldService                │
//! │   validate → instantiate → editor       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Application Ports (Traits)          │
//! │      (SdkCatalog, Filesystem)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     maxkit-adapters (Infrastructure)    │
//! │   (SdkDirCatalog, LocalFilesystem)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (`TargetId`, `ProjectSpec`, SDK layout knowledge) has no
//! I/O; everything that touches a disk arrives through the two port traits.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use maxkit_core::prelude::*;
//!
//! let target = TargetId::resolve("32655").unwrap();
//! let spec = ProjectSpec::new("./my_proj", "my_proj", target);
//!
//! // catalog / filesystem come from maxkit-adapters
//! # fn adapters() -> (Box<dyn SdkCatalog>, Box<dyn Filesystem>) { unimplemented!() }
//! let (catalog, filesystem) = adapters();
//! let service = ScaffoldService::new(catalog, filesystem);
//! service.create(&spec).unwrap();
//! ```

// Domain layer (target identifiers, project intent, SDK layout)
pub mod domain;

// Application layer (orchestration, ports)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldOutcome, ScaffoldService,
        ports::{Filesystem, SdkCatalog},
    };
    pub use crate::domain::{
        DEFAULT_BSP, DEFAULT_TEMPLATE, InstantiatedProject, ProjectSpec, TargetId, TemplateSource,
        ToolchainPaths,
    };
    pub use crate::error::{MaxkitError, MaxkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
