//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use maxkit_core::{application::ports::Filesystem, error::MaxkitResult};

/// Production filesystem implementation.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn dir_is_empty(&self, path: &Path) -> MaxkitResult<bool> {
        let mut entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;
        Ok(entries.next().is_none())
    }

    fn create_dir_all(&self, path: &Path) -> MaxkitResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn copy_tree(&self, src: &Path, dst: &Path) -> MaxkitResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(src).follow_links(false) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(src).to_path_buf();
                map_io_error(&path, e.into(), "walk template tree")
            })?;

            let rel = match entry.path().strip_prefix(src) {
                Ok(rel) => rel.to_path_buf(),
                Err(e) => return Err(map_io_error(entry.path(), other_error(e), "relativize path")),
            };

            let target = dst.join(&rel);
            let file_type = entry.file_type();

            if file_type.is_dir() {
                // Covers the root itself (empty rel) and every subdirectory.
                std::fs::create_dir_all(&target)
                    .map_err(|e| map_io_error(&target, e, "create directory"))?;
            } else if file_type.is_file() {
                // fs::copy carries the source's permission bits over.
                std::fs::copy(entry.path(), &target)
                    .map_err(|e| map_io_error(&target, e, "copy file"))?;
                files.push(rel);
            } else {
                warn!(path = %entry.path().display(), "Skipping non-regular file in template");
            }
        }

        Ok(files)
    }

    fn read_utf8(&self, path: &Path) -> MaxkitResult<Option<String>> {
        let bytes = std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))?;
        Ok(String::from_utf8(bytes).ok())
    }

    fn write_file(&self, path: &Path, content: &str) -> MaxkitResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn rename(&self, from: &Path, to: &Path) -> MaxkitResult<()> {
        std::fs::rename(from, to).map_err(|e| map_io_error(to, e, "rename"))
    }

    fn remove_dir(&self, path: &Path) -> MaxkitResult<()> {
        std::fs::remove_dir(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn remove_dir_all(&self, path: &Path) -> MaxkitResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory tree"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> maxkit_core::error::MaxkitError {
    use maxkit_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}

fn other_error(e: impl std::error::Error) -> io::Error {
    io::Error::other(e.to_string())
}
