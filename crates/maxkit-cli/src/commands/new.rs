//! Implementation of the `maxkit new` command.
//!
//! Responsibility: translate CLI arguments into a `ProjectSpec`, call the
//! core scaffold service, and display results. No resolution or copy logic
//! lives here.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, instrument, warn};

use maxkit_adapters::{LocalFilesystem, SdkDirCatalog};
use maxkit_core::{
    application::ScaffoldService,
    domain::{DEFAULT_BSP, DEFAULT_TEMPLATE, ProjectSpec, TargetId},
};

use crate::{
    cli::{GlobalArgs, NewArgs},
    commands::resolve_sdk_root,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `maxkit new` command.
///
/// Dispatch sequence:
/// 1. Parse and validate the project name / destination path
/// 2. Resolve the target and the SDK root, build the `ProjectSpec`
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Execute scaffolding via `ScaffoldService`
/// 6. CLI extras (README, git init) and next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve project path
    let (project_name, dest) = resolve_project_path(&args.name)?;
    validate_project_name(&project_name)?;

    // 2. Build the spec
    let target = TargetId::resolve(&args.target).map_err(maxkit_core::error::MaxkitError::from)?;
    let template = args
        .template
        .clone()
        .or_else(|| config.defaults.template.clone())
        .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string());
    let bsp = args
        .bsp
        .clone()
        .or_else(|| config.defaults.bsp.clone())
        .unwrap_or_else(|| DEFAULT_BSP.to_string());

    let spec = ProjectSpec::new(&dest, &project_name, target)
        .with_template(template)
        .with_bsp(bsp)
        .with_vscode(!args.no_vscode);

    let sdk_root = resolve_sdk_root(&global, &config)?;

    debug!(
        target = %spec.target(),
        template = spec.template(),
        bsp = spec.bsp(),
        sdk_root = %sdk_root.display(),
        "Project spec resolved"
    );

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&spec, &sdk_root, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            project_name,
            dest.display(),
        ))?;
        output.info(&format!("  Target:   {}", spec.target()))?;
        output.info(&format!("  Template: {}", spec.template()))?;
        output.info(&format!("  BSP:      {}", spec.bsp()))?;
        output.info(&format!("  VS Code:  {}", spec.vscode()))?;
        return Ok(());
    }

    // 5. Open the catalog and scaffold
    let catalog = SdkDirCatalog::open(&sdk_root).map_err(CliError::Core)?;
    let service = ScaffoldService::new(Box::new(catalog), Box::new(LocalFilesystem::new()));

    output.header(&format!("Creating '{project_name}'..."))?;
    info!(project = %project_name, dest = %dest.display(), "Scaffold started");

    let outcome = service.create(&spec).map_err(CliError::Core)?;

    info!(project = %project_name, files = outcome.files.len(), "Scaffold completed");

    // 6. CLI-layer extras, outside the core pipeline on purpose: the
    //    instantiated tree mirrors the template exactly.
    if !args.no_readme {
        write_readme(&dest, &project_name)?;
    }
    if !args.no_git {
        init_git(&dest, &output)?;
    }

    output.success(&format!(
        "Project '{project_name}' created from {} ({} files)",
        outcome.template,
        outcome.files.len(),
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {project_name}"))?;
        output.print("  make")?;
    }

    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Split a name-or-path argument into (leaf name, destination path).
pub fn resolve_project_path(name: &str) -> CliResult<(String, PathBuf)> {
    let path = Path::new(name);

    let project_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidProjectName {
            name: name.into(),
            reason: "cannot extract valid project name".into(),
        })?
        .to_string();

    Ok((project_name, path.to_path_buf()))
}

fn validate_project_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "use only letters, digits, '-' and '_'".into(),
        });
    }
    Ok(())
}

// ── CLI-layer extras ──────────────────────────────────────────────────────────

fn write_readme(dest: &Path, name: &str) -> CliResult<()> {
    let readme = dest.join("README.md");
    if readme.exists() {
        // The template shipped its own; keep it.
        return Ok(());
    }
    std::fs::write(&readme, format!("# {name}\n")).map_err(|e| CliError::IoError {
        message: format!("failed to write {}", readme.display()),
        source: e,
    })
}

/// Initialize a git repository in the project. Failure (git missing, etc.)
/// downgrades to a warning: the project itself is already complete.
fn init_git(dest: &Path, output: &OutputManager) -> CliResult<()> {
    let status = Command::new("git").arg("init").arg(dest).output();
    match status {
        Ok(out) if out.status.success() => Ok(()),
        Ok(out) => {
            warn!(stderr = %String::from_utf8_lossy(&out.stderr), "git init failed");
            output.warning("git init failed; project created without a repository")?;
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "git not available");
            output.warning("git not found; project created without a repository")?;
            Ok(())
        }
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    spec: &ProjectSpec,
    sdk_root: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:  {}", spec.name()))?;
    out.print(&format!("  Target:   {}", spec.target()))?;
    out.print(&format!("  Template: {}", spec.template()))?;
    out.print(&format!("  BSP:      {}", spec.bsp()))?;
    out.print(&format!("  SDK:      {}", sdk_root.display()))?;
    out.print(&format!("  Location: {}", spec.dest().display()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── resolve_project_path ──────────────────────────────────────────────────

    #[test]
    fn simple_name_resolves_in_place() {
        let (name, dest) = resolve_project_path("my_proj").unwrap();
        assert_eq!(name, "my_proj");
        assert_eq!(dest, PathBuf::from("my_proj"));
    }

    #[test]
    fn relative_path_keeps_full_destination() {
        let (name, dest) = resolve_project_path("../my_proj").unwrap();
        assert_eq!(name, "my_proj");
        assert_eq!(dest, PathBuf::from("../my_proj"));
    }

    #[test]
    fn nested_path_works_on_all_platforms() {
        let sep = std::path::MAIN_SEPARATOR;
        let path = format!("foo{sep}bar{sep}my_proj");

        let (name, dest) = resolve_project_path(&path).unwrap();
        assert_eq!(name, "my_proj");
        assert_eq!(dest, PathBuf::from("foo").join("bar").join("my_proj"));
    }

    // ── validate_project_name ─────────────────────────────────────────────────

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            validate_project_name(""),
            Err(CliError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn dotfile_name_is_invalid() {
        assert!(matches!(
            validate_project_name(".hidden"),
            Err(CliError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn name_with_spaces_is_invalid() {
        assert!(validate_project_name("my proj").is_err());
    }

    #[test]
    fn valid_names_pass() {
        for name in &["my-proj", "my_proj", "blinky123", "UART_Demo"] {
            assert!(validate_project_name(name).is_ok(), "failed for: {name}");
        }
    }
}
