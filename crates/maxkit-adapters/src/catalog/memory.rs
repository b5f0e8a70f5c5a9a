//! In-memory SDK catalog for testing.

use std::{
    collections::{BTreeSet, HashMap},
    path::{Path, PathBuf},
};

use maxkit_core::{
    application::ports::SdkCatalog, domain::TargetId, error::MaxkitResult,
};

/// Fabricated catalog holding fixed target/template/BSP sets.
///
/// Lets pipeline tests run against an SDK that never touches a disk; the
/// directory-scanning twin is [`super::SdkDirCatalog`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    root: PathBuf,
    templates: HashMap<TargetId, BTreeSet<String>>,
    bsps: HashMap<TargetId, BTreeSet<String>>,
}

impl InMemoryCatalog {
    /// Create an empty catalog rooted at a fictional path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            templates: HashMap::new(),
            bsps: HashMap::new(),
        }
    }

    /// Register a target with its template and BSP names.
    pub fn with_target(
        mut self,
        target: TargetId,
        templates: impl IntoIterator<Item = impl Into<String>>,
        bsps: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.templates.insert(
            target.clone(),
            templates.into_iter().map(Into::into).collect(),
        );
        self.bsps
            .insert(target, bsps.into_iter().map(Into::into).collect());
        self
    }
}

impl SdkCatalog for InMemoryCatalog {
    fn root(&self) -> &Path {
        &self.root
    }

    fn targets(&self) -> MaxkitResult<BTreeSet<TargetId>> {
        Ok(self.templates.keys().cloned().collect())
    }

    fn templates(&self, target: &TargetId) -> MaxkitResult<BTreeSet<String>> {
        Ok(self.templates.get(target).cloned().unwrap_or_default())
    }

    fn bsps(&self, target: &TargetId) -> MaxkitResult<BTreeSet<String>> {
        Ok(self.bsps.get(target).cloned().unwrap_or_default())
    }
}
