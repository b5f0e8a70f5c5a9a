//! Application ports (traits) for external dependencies.
//!
//! Ports define what the pipeline needs from the outside world; adapters in
//! `maxkit-adapters` implement them:
//!
//! - `SdkCatalog`: `SdkDirCatalog` (production), `InMemoryCatalog` (testing)
//! - `Filesystem`: `LocalFilesystem` (production), mock (unit tests)

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::{TargetId, ToolchainPaths, sdk};
use crate::error::MaxkitResult;

/// Read-only view of one SDK installation.
///
/// Constructed once per invocation from an explicit root path and never
/// mutated afterwards. Implementations may cache directory scans for their
/// own lifetime so that validation results and error suggestion lists stay
/// consistent within a run.
pub trait SdkCatalog: Send + Sync {
    /// The installation root this catalog was opened on.
    fn root(&self) -> &Path;

    /// All targets the installation ships examples for, sorted.
    fn targets(&self) -> MaxkitResult<BTreeSet<TargetId>>;

    /// Example templates available for `target`; empty set (not an error)
    /// when the target directory exists but holds no examples.
    fn templates(&self, target: &TargetId) -> MaxkitResult<BTreeSet<String>>;

    /// Board support packages available for `target`.
    fn bsps(&self, target: &TargetId) -> MaxkitResult<BTreeSet<String>>;

    /// Toolchain locations for a (target, bsp) pair, derived from the root.
    fn toolchain(&self, target: &TargetId, bsp: &str) -> ToolchainPaths {
        sdk::toolchain(self.root(), target, bsp)
    }
}

/// Port for filesystem operations.
///
/// Paths are passed through as given (relative or absolute); the instantiator
/// composes them from the spec and template source.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if a directory has no entries.
    fn dir_is_empty(&self, path: &Path) -> MaxkitResult<bool>;

    /// Create a directory and all parents.
    fn create_dir_all(&self, path: &Path) -> MaxkitResult<()>;

    /// Recursively copy `src` into `dst`, preserving relative structure and
    /// file permissions. Returns the relative paths of every file copied.
    fn copy_tree(&self, src: &Path, dst: &Path) -> MaxkitResult<Vec<PathBuf>>;

    /// Read a file as UTF-8 text. `Ok(None)` when the content is binary.
    fn read_utf8(&self, path: &Path) -> MaxkitResult<Option<String>>;

    /// Write text content to a file.
    fn write_file(&self, path: &Path, content: &str) -> MaxkitResult<()>;

    /// Rename `from` to `to` (atomic on the same filesystem).
    fn rename(&self, from: &Path, to: &Path) -> MaxkitResult<()>;

    /// Remove an empty directory.
    fn remove_dir(&self, path: &Path) -> MaxkitResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> MaxkitResult<()>;
}
