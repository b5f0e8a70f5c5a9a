//! Scaffold service - main application orchestrator.
//!
//! Drives the whole pipeline for one spec:
//! 1. Validate the (target, template, BSP) triple against the catalog
//! 2. Instantiate the template at the destination
//! 3. Optionally generate editor integration artifacts

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, SdkCatalog},
        services::{editor, instantiate, validate},
    },
    domain::ProjectSpec,
    error::MaxkitResult,
};

/// What a successful run produced, for display by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    /// Destination root holding the new project.
    pub root: PathBuf,
    /// Relative paths of the files that were copied.
    pub files: Vec<PathBuf>,
    /// Template the project was created from.
    pub template: String,
    /// Whether editor integration artifacts were written.
    pub vscode: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    catalog: Box<dyn SdkCatalog>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(catalog: Box<dyn SdkCatalog>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            catalog,
            filesystem,
        }
    }

    /// Create a new project from the spec. This is the main use case.
    #[instrument(
        skip_all,
        fields(
            target = %spec.target(),
            template = %spec.template(),
            bsp = %spec.bsp(),
            dest = %spec.dest().display(),
        )
    )]
    pub fn create(&self, spec: &ProjectSpec) -> MaxkitResult<ScaffoldOutcome> {
        let source = validate::validate(spec, self.catalog.as_ref())?;
        info!(source = %source.path().display(), "Template validated");

        let project = instantiate::instantiate(self.filesystem.as_ref(), &source, spec)?;

        if spec.vscode() {
            let toolchain = self.catalog.toolchain(spec.target(), spec.bsp());
            editor::generate(self.filesystem.as_ref(), spec, &toolchain)?;
        }

        info!("Scaffold completed successfully");
        Ok(ScaffoldOutcome {
            root: project.root,
            files: project.files,
            template: source.template().to_string(),
            vscode: spec.vscode(),
        })
    }

    /// The catalog this service resolves against (for listing commands).
    pub fn catalog(&self) -> &dyn SdkCatalog {
        self.catalog.as_ref()
    }
}
