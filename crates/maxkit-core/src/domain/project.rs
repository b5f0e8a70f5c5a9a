//! Project intent and its resolved forms.
//!
//! [`ProjectSpec`] captures what the user asked for; [`TemplateSource`] is the
//! validated SDK location it resolves to; [`InstantiatedProject`] is what the
//! instantiator reports back after the copy lands.

use std::path::{Path, PathBuf};

use super::target::TargetId;

/// Template name used when the user does not ask for one.
pub const DEFAULT_TEMPLATE: &str = "Hello_World";

/// Board support package used when the user does not ask for one.
///
/// This is also the BSP the SDK's bundled examples reference in their build
/// files, so it doubles as the "source" side of BSP rewriting.
pub const DEFAULT_BSP: &str = "EvKit_V1";

/// User intent for one scaffolding run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    dest: PathBuf,
    name: String,
    target: TargetId,
    template: String,
    bsp: String,
    vscode: bool,
}

impl ProjectSpec {
    /// Create a spec with the standard template and BSP and editor
    /// integration enabled.
    pub fn new(dest: impl Into<PathBuf>, name: impl Into<String>, target: TargetId) -> Self {
        Self {
            dest: dest.into(),
            name: name.into(),
            target,
            template: DEFAULT_TEMPLATE.to_string(),
            bsp: DEFAULT_BSP.to_string(),
            vscode: true,
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn with_bsp(mut self, bsp: impl Into<String>) -> Self {
        self.bsp = bsp.into();
        self
    }

    pub fn with_vscode(mut self, vscode: bool) -> Self {
        self.vscode = vscode;
        self
    }

    /// Destination directory the project will be created at.
    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// Project name (the destination's leaf component).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &TargetId {
        &self.target
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn bsp(&self) -> &str {
        &self.bsp
    }

    /// Whether editor integration artifacts should be generated.
    pub fn vscode(&self) -> bool {
        self.vscode
    }
}

/// Resolved filesystem location of an example template inside the SDK tree.
///
/// Only the validator constructs these; holding one means the (target,
/// template) pair was checked against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    target: TargetId,
    template: String,
    path: PathBuf,
}

impl TemplateSource {
    pub(crate) fn new(target: TargetId, template: impl Into<String>, path: PathBuf) -> Self {
        Self {
            target,
            template: template.into(),
            path,
        }
    }

    pub fn target(&self) -> &TargetId {
        &self.target
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Absolute-or-as-given path to the example directory.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Result of a successful instantiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstantiatedProject {
    /// Destination root that now holds the project.
    pub root: PathBuf,
    /// Relative paths of every file that was copied.
    pub files: Vec<PathBuf>,
}

/// Per-target toolchain locations inside the SDK, consumed by the editor
/// integration generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainPaths {
    /// SDK installation root the other paths were derived from.
    pub sdk_root: PathBuf,
    /// Directory holding `arm-none-eabi-gcc` and friends.
    pub gcc_bin: PathBuf,
    /// OpenOCD installation directory (debug server).
    pub openocd: PathBuf,
    /// C include directories for the (target, BSP) pair.
    pub include_dirs: Vec<PathBuf>,
}
