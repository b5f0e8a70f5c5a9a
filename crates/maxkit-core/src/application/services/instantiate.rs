//! Project instantiation: staged copy, rewrite, atomic rename.
//!
//! The copy is built in a hidden sibling staging directory and renamed onto
//! the destination only when complete, so the destination either receives the
//! full template tree or nothing at all. The instantiator adds no files of
//! its own: a successful destination's relative file set equals the
//! template's exactly.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DEFAULT_BSP, InstantiatedProject, ProjectSpec, TemplateSource},
    error::{MaxkitError, MaxkitResult},
};

/// Build-system file the SDK examples carry their configuration in.
const PROJECT_MK: &str = "project.mk";

/// Trailing marker comment the stock `project.mk` ends with.
const CONFIG_MARKER: &str = "# Add your config here!";

/// Materialize `source` at the spec's destination.
///
/// Preconditions: the destination must not exist, or must be an empty
/// directory. Failure during the copy removes the staging directory
/// (best-effort) and reports `Instantiation`; existing destination content is
/// never touched.
pub fn instantiate(
    fs: &dyn Filesystem,
    source: &TemplateSource,
    spec: &ProjectSpec,
) -> MaxkitResult<InstantiatedProject> {
    let dest = spec.dest();

    let mut dest_is_empty_dir = false;
    if fs.exists(dest) {
        if fs.is_dir(dest) && fs.dir_is_empty(dest)? {
            dest_is_empty_dir = true;
        } else {
            return Err(ApplicationError::DestinationExists {
                path: dest.to_path_buf(),
            }
            .into());
        }
    }

    let staging = staging_dir(dest, spec.name());
    if fs.exists(&staging) {
        // Leftover from an interrupted earlier run.
        debug!(staging = %staging.display(), "Removing stale staging directory");
        fs.remove_dir_all(&staging)?;
    }

    let files = match build_staging(fs, source, spec, &staging) {
        Ok(files) => files,
        Err(e) => {
            cleanup_staging(fs, &staging);
            return Err(instantiation_error(dest, e));
        }
    };

    // Commit: swap the finished staging tree into place.
    if let Err(e) = commit(fs, &staging, dest, dest_is_empty_dir) {
        cleanup_staging(fs, &staging);
        return Err(instantiation_error(dest, e));
    }

    info!(
        dest = %dest.display(),
        files = files.len(),
        template = source.template(),
        "Project instantiated"
    );

    Ok(InstantiatedProject {
        root: dest.to_path_buf(),
        files,
    })
}

/// Hidden sibling of the destination, e.g. `./.my_proj.staging`.
fn staging_dir(dest: &Path, name: &str) -> PathBuf {
    dest.with_file_name(format!(".{name}.staging"))
}

/// Copy the template into `staging` and rewrite its contents for the spec.
fn build_staging(
    fs: &dyn Filesystem,
    source: &TemplateSource,
    spec: &ProjectSpec,
    staging: &Path,
) -> MaxkitResult<Vec<PathBuf>> {
    let files = fs.copy_tree(source.path(), staging)?;
    debug!(files = files.len(), "Template tree copied to staging");

    let rules = rewrite_rules(source, spec);
    if !rules.is_empty() {
        for rel in &files {
            rewrite_file(fs, &staging.join(rel), &rules)?;
        }
    }

    if files.iter().any(|p| p == Path::new(PROJECT_MK)) {
        configure_project_mk(fs, &staging.join(PROJECT_MK), spec)?;
    }

    Ok(files)
}

/// Literal replacement pairs making the copy self-contained: the template's
/// source path becomes the project path, and the stock BSP becomes the chosen
/// one. Identity rules are dropped up front.
fn rewrite_rules(source: &TemplateSource, spec: &ProjectSpec) -> Vec<(String, String)> {
    let mut rules = Vec::with_capacity(2);

    let src = source.path().display().to_string();
    let dst = spec.dest().display().to_string();
    if src != dst {
        rules.push((src, dst));
    }

    if spec.bsp() != DEFAULT_BSP {
        rules.push((DEFAULT_BSP.to_string(), spec.bsp().to_string()));
    }

    rules
}

/// Apply `rules` to one staged file. Binary files pass through untouched.
fn rewrite_file(fs: &dyn Filesystem, path: &Path, rules: &[(String, String)]) -> MaxkitResult<()> {
    let Some(content) = fs.read_utf8(path)? else {
        return Ok(());
    };

    if !rules.iter().any(|(from, _)| content.contains(from)) {
        return Ok(());
    }

    let mut rewritten = content;
    for (from, to) in rules {
        rewritten = rewritten.replace(from, to);
    }

    debug!(file = %path.display(), "Rewrote template references");
    fs.write_file(path, &rewritten)
}

/// Append the project's own configuration to the staged `project.mk`, so the
/// copy builds standalone without the example's surrounding tree.
fn configure_project_mk(
    fs: &dyn Filesystem,
    path: &Path,
    spec: &ProjectSpec,
) -> MaxkitResult<()> {
    let Some(content) = fs.read_utf8(path)? else {
        // A binary project.mk is not a template we can configure; leave it.
        warn!(file = %path.display(), "project.mk is not text; skipping configuration");
        return Ok(());
    };

    let mut lines: Vec<&str> = content.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    if lines.last().is_some_and(|l| l.trim() == CONFIG_MARKER) {
        lines.pop();
    }

    let mut out = lines.join("\n");
    out.push_str(&format!(
        "\nPROJECT={}\nBOARD={}\nTARGET={}\n\n# Add any additional configs here!\n",
        spec.name(),
        spec.bsp(),
        spec.target(),
    ));

    fs.write_file(path, &out)
}

/// Move the finished staging tree onto the destination.
///
/// An existing-but-empty destination directory is removed immediately before
/// the rename; renaming onto an existing directory is not portable.
fn commit(
    fs: &dyn Filesystem,
    staging: &Path,
    dest: &Path,
    dest_is_empty_dir: bool,
) -> MaxkitResult<()> {
    if dest_is_empty_dir {
        fs.remove_dir(dest)?;
    } else if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() && !fs.exists(parent) {
            fs.create_dir_all(parent)?;
        }
    }

    fs.rename(staging, dest)
}

fn cleanup_staging(fs: &dyn Filesystem, staging: &Path) {
    if !fs.exists(staging) {
        return;
    }
    if let Err(e) = fs.remove_dir_all(staging) {
        warn!(staging = %staging.display(), error = %e, "Failed to remove staging directory");
    }
}

fn instantiation_error(dest: &Path, e: MaxkitError) -> MaxkitError {
    match e {
        // Precondition-style failures keep their own kind.
        MaxkitError::Application(ApplicationError::DestinationExists { .. }) => e,
        other => ApplicationError::Instantiation {
            path: dest.to_path_buf(),
            reason: other.to_string(),
        }
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::TargetId;

    fn source() -> TemplateSource {
        TemplateSource::new(
            TargetId::resolve("32655").unwrap(),
            "Hello_World",
            PathBuf::from("/sdk/Examples/MAX32655/Hello_World"),
        )
    }

    fn spec() -> ProjectSpec {
        ProjectSpec::new("./my_proj", "my_proj", TargetId::resolve("32655").unwrap())
    }

    #[test]
    fn non_empty_destination_is_rejected_before_any_copy() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|p| p == Path::new("./my_proj"));
        fs.expect_is_dir().returning(|_| true);
        fs.expect_dir_is_empty().returning(|_| Ok(false));
        // No copy_tree/rename expectations: any call would panic the mock.

        let err = instantiate(&fs, &source(), &spec()).unwrap_err();
        assert!(matches!(
            err,
            MaxkitError::Application(ApplicationError::DestinationExists { .. })
        ));
    }

    #[test]
    fn destination_file_is_rejected() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|p| p == Path::new("./my_proj"));
        fs.expect_is_dir().returning(|_| false);

        let err = instantiate(&fs, &source(), &spec()).unwrap_err();
        assert!(matches!(
            err,
            MaxkitError::Application(ApplicationError::DestinationExists { .. })
        ));
    }

    #[test]
    fn copy_failure_cleans_staging_and_reports_instantiation() {
        let mut fs = MockFilesystem::new();
        // Destination and staging absent throughout; the failed copy_tree left
        // nothing behind, so the cleanup probe also sees no staging dir.
        fs.expect_exists().returning(|_| false);
        fs.expect_copy_tree().returning(|_, dst| {
            Err(ApplicationError::Filesystem {
                path: dst.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });

        let err = instantiate(&fs, &source(), &spec()).unwrap_err();
        match err {
            MaxkitError::Application(ApplicationError::Instantiation { path, reason }) => {
                assert_eq!(path, PathBuf::from("./my_proj"));
                assert!(reason.contains("disk full"));
            }
            other => panic!("expected Instantiation, got {other:?}"),
        }
    }

    #[test]
    fn staging_dir_is_hidden_sibling() {
        assert_eq!(
            staging_dir(Path::new("./proj"), "proj"),
            PathBuf::from("./.proj.staging")
        );
        assert_eq!(
            staging_dir(Path::new("/a/b/demo"), "demo"),
            PathBuf::from("/a/b/.demo.staging")
        );
    }

    #[test]
    fn rewrite_rules_skip_identity_pairs() {
        // Default BSP chosen: only the path rule remains.
        let rules = rewrite_rules(&source(), &spec());
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].1, "./my_proj");

        let rules = rewrite_rules(&source(), &spec().with_bsp("FTHR_Apps_P1"));
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1], (DEFAULT_BSP.to_string(), "FTHR_Apps_P1".to_string()));
    }
}
