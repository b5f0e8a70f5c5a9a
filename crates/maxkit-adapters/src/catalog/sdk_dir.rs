//! Directory-scanning SDK catalog.

use std::{
    collections::{BTreeSet, HashMap},
    fs, io,
    path::{Path, PathBuf},
    sync::RwLock,
};

use tracing::{debug, warn};

use maxkit_core::{
    application::{ApplicationError, ports::SdkCatalog},
    domain::{TargetId, sdk},
    error::MaxkitResult,
};

/// Production catalog over an installed SDK tree.
///
/// The target set is scanned when the catalog is opened; template and BSP
/// sets are scanned lazily per target and cached for the catalog's lifetime,
/// so validation results and error suggestion lists come from the same scan
/// within one invocation.
#[derive(Debug)]
pub struct SdkDirCatalog {
    root: PathBuf,
    targets: BTreeSet<TargetId>,
    templates: RwLock<HashMap<TargetId, BTreeSet<String>>>,
    bsps: RwLock<HashMap<TargetId, BTreeSet<String>>>,
}

impl SdkDirCatalog {
    /// Open a catalog on an SDK installation root.
    ///
    /// The root must exist and contain the expected top-level layout
    /// (`Examples/` and `Libraries/Boards/`); anything else fails with
    /// `SdkNotFound`. Beyond that the root is taken as a precondition
    /// supplied by the caller — no version or content checks happen here.
    pub fn open(root: impl Into<PathBuf>) -> MaxkitResult<Self> {
        let root = root.into();

        if !root.is_dir() {
            return Err(sdk_not_found(&root, "directory does not exist"));
        }

        let examples = sdk::examples_root(&root);
        if !examples.is_dir() {
            return Err(sdk_not_found(
                &root,
                &format!("missing {}/ (not an SDK installation?)", sdk::EXAMPLES_DIR),
            ));
        }

        let boards = sdk::boards_root(&root);
        if !boards.is_dir() {
            return Err(sdk_not_found(
                &root,
                &format!(
                    "missing {}/{}/ (not an SDK installation?)",
                    sdk::LIBRARIES_DIR,
                    sdk::BOARDS_DIR
                ),
            ));
        }

        let mut targets = BTreeSet::new();
        for name in subdirectories(&examples)? {
            match TargetId::resolve(&name) {
                Ok(target) => {
                    targets.insert(target);
                }
                // Stray directories (docs, shared sources) are not targets.
                Err(_) => warn!(name, "Skipping non-target directory under examples root"),
            }
        }

        debug!(root = %root.display(), targets = targets.len(), "SDK catalog opened");

        Ok(Self {
            root,
            targets,
            templates: RwLock::new(HashMap::new()),
            bsps: RwLock::new(HashMap::new()),
        })
    }

    /// Scan `dir` once and memoize the result under `target`.
    fn cached_scan(
        &self,
        cache: &RwLock<HashMap<TargetId, BTreeSet<String>>>,
        target: &TargetId,
        dir: PathBuf,
    ) -> MaxkitResult<BTreeSet<String>> {
        if let Some(found) = cache.read().expect("catalog cache poisoned").get(target) {
            return Ok(found.clone());
        }

        // A target directory missing on one side of the tree (examples vs
        // boards) yields an empty set, not an error.
        let scanned = if dir.is_dir() {
            subdirectories(&dir)?
        } else {
            BTreeSet::new()
        };

        cache
            .write()
            .expect("catalog cache poisoned")
            .insert(target.clone(), scanned.clone());
        Ok(scanned)
    }
}

impl SdkCatalog for SdkDirCatalog {
    fn root(&self) -> &Path {
        &self.root
    }

    fn targets(&self) -> MaxkitResult<BTreeSet<TargetId>> {
        Ok(self.targets.clone())
    }

    fn templates(&self, target: &TargetId) -> MaxkitResult<BTreeSet<String>> {
        let dir = sdk::examples_root(&self.root).join(target.as_str());
        self.cached_scan(&self.templates, target, dir)
    }

    fn bsps(&self, target: &TargetId) -> MaxkitResult<BTreeSet<String>> {
        let dir = sdk::boards_root(&self.root).join(target.as_str());
        self.cached_scan(&self.bsps, target, dir)
    }
}

/// Names of the immediate subdirectories of `dir`, hidden entries excluded.
fn subdirectories(dir: &Path) -> MaxkitResult<BTreeSet<String>> {
    let entries = fs::read_dir(dir).map_err(|e| map_io_error(dir, e))?;

    let mut names = BTreeSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| map_io_error(dir, e))?;
        let is_dir = entry
            .file_type()
            .map_err(|e| map_io_error(&entry.path(), e))?
            .is_dir();
        if !is_dir {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if !name.starts_with('.') {
                names.insert(name.to_string());
            }
        }
    }
    Ok(names)
}

fn sdk_not_found(root: &Path, reason: &str) -> maxkit_core::error::MaxkitError {
    ApplicationError::SdkNotFound {
        path: root.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}

fn map_io_error(path: &Path, e: io::Error) -> maxkit_core::error::MaxkitError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
