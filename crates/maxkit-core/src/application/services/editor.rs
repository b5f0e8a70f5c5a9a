//! Editor integration artifacts.
//!
//! Emits VS Code configuration into the project's `.vscode/` directory:
//! workspace settings, build/clean/flash task definitions, and C include
//! paths, all derived from the resolved toolchain locations.
//!
//! Idempotent by construction: the artifacts are serialized from fixed-order
//! structs with no timestamps or identifiers, so re-running with the same
//! inputs produces byte-identical files.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ProjectSpec, ToolchainPaths},
    error::MaxkitResult,
};

const VSCODE_DIR: &str = ".vscode";

/// Write the `.vscode/` artifacts for a validated spec.
///
/// Validation already happened upstream and is not repeated here; the only
/// failure mode is a write failure, reported as `IntegrationGeneration`.
#[instrument(skip_all, fields(dest = %spec.dest().display()))]
pub fn generate(
    fs: &dyn Filesystem,
    spec: &ProjectSpec,
    toolchain: &ToolchainPaths,
) -> MaxkitResult<()> {
    let vscode = spec.dest().join(VSCODE_DIR);

    let result = (|| -> MaxkitResult<()> {
        fs.create_dir_all(&vscode)?;
        fs.write_file(&vscode.join("settings.json"), &render(&settings(spec, toolchain)))?;
        fs.write_file(&vscode.join("tasks.json"), &render(&tasks(spec, toolchain)))?;
        fs.write_file(
            &vscode.join("c_cpp_properties.json"),
            &render(&cpp_properties(spec, toolchain)),
        )?;
        Ok(())
    })();

    match result {
        Ok(()) => {
            debug!("Editor integration written");
            Ok(())
        }
        Err(e) => Err(ApplicationError::IntegrationGeneration {
            path: vscode,
            reason: e.to_string(),
        }
        .into()),
    }
}

fn render<T: Serialize>(value: &T) -> String {
    // Serialization of these plain structs cannot fail; keep the artifact
    // readable with pretty printing and a trailing newline.
    let mut out = serde_json::to_string_pretty(value).unwrap_or_default();
    out.push('\n');
    out
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

// ── settings.json ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Settings {
    #[serde(rename = "MAXIM_PATH")]
    maxim_path: String,
    target: String,
    board: String,
    #[serde(rename = "terminal.integrated.env.linux")]
    terminal_env: TerminalEnv,
}

#[derive(Serialize)]
struct TerminalEnv {
    #[serde(rename = "PATH")]
    path: String,
}

fn settings(spec: &ProjectSpec, toolchain: &ToolchainPaths) -> Settings {
    Settings {
        maxim_path: display(&toolchain.sdk_root),
        target: spec.target().to_string(),
        board: spec.bsp().to_string(),
        terminal_env: TerminalEnv {
            path: format!("{}:${{env:PATH}}", display(&toolchain.gcc_bin)),
        },
    }
}

// ── tasks.json ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct TaskFile {
    version: &'static str,
    tasks: Vec<Task>,
}

#[derive(Serialize)]
struct Task {
    label: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    command: String,
    args: Vec<String>,
    #[serde(rename = "problemMatcher")]
    problem_matcher: Vec<&'static str>,
}

fn tasks(spec: &ProjectSpec, toolchain: &ToolchainPaths) -> TaskFile {
    let make_env = vec![
        format!("MAXIM_PATH={}", display(&toolchain.sdk_root)),
        format!("TARGET={}", spec.target()),
        format!("BOARD={}", spec.bsp()),
    ];

    let make_task = |label, goal: &str| Task {
        label,
        kind: "shell",
        command: "make".into(),
        args: [goal.to_string(), "-j".into()]
            .into_iter()
            .chain(make_env.iter().cloned())
            .collect(),
        problem_matcher: vec!["$gcc"],
    };

    let flash = Task {
        label: "flash",
        kind: "shell",
        command: display(&toolchain.openocd.join("openocd")),
        args: vec![
            "-s".into(),
            display(&toolchain.openocd.join("scripts")),
            "-f".into(),
            "interface/cmsis-dap.cfg".into(),
            "-f".into(),
            format!("target/{}.cfg", spec.target().as_str().to_lowercase()),
            "-c".into(),
            format!("program build/{}.elf verify exit", spec.name()),
        ],
        problem_matcher: vec![],
    };

    TaskFile {
        version: "2.0.0",
        tasks: vec![make_task("build", "all"), make_task("clean", "clean"), flash],
    }
}

// ── c_cpp_properties.json ─────────────────────────────────────────────────────

#[derive(Serialize)]
struct CppProperties {
    configurations: Vec<CppConfiguration>,
    version: u32,
}

#[derive(Serialize)]
struct CppConfiguration {
    name: &'static str,
    #[serde(rename = "includePath")]
    include_path: Vec<String>,
    defines: Vec<String>,
    #[serde(rename = "compilerPath")]
    compiler_path: String,
    #[serde(rename = "cStandard")]
    c_standard: &'static str,
}

fn cpp_properties(spec: &ProjectSpec, toolchain: &ToolchainPaths) -> CppProperties {
    let mut include_path = vec!["${workspaceFolder}/**".to_string()];
    include_path.extend(toolchain.include_dirs.iter().map(|p| display(p)));

    CppProperties {
        configurations: vec![CppConfiguration {
            name: "MSDK",
            include_path,
            defines: vec![format!("TARGET={}", spec.target())],
            compiler_path: display(&toolchain.gcc_bin.join("arm-none-eabi-gcc")),
            c_standard: "c11",
        }],
        version: 4,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::{TargetId, sdk};

    fn fixture() -> (ProjectSpec, ToolchainPaths) {
        let target = TargetId::resolve("32655").unwrap();
        let toolchain = sdk::toolchain(Path::new("/sdk"), &target, "EvKit_V1");
        let spec = ProjectSpec::new("/work/my_proj", "my_proj", target);
        (spec, toolchain)
    }

    #[test]
    fn rendering_is_deterministic() {
        let (spec, toolchain) = fixture();
        assert_eq!(
            render(&settings(&spec, &toolchain)),
            render(&settings(&spec, &toolchain))
        );
        assert_eq!(
            render(&tasks(&spec, &toolchain)),
            render(&tasks(&spec, &toolchain))
        );
        assert_eq!(
            render(&cpp_properties(&spec, &toolchain)),
            render(&cpp_properties(&spec, &toolchain))
        );
    }

    #[test]
    fn settings_carry_target_and_board() {
        let (spec, toolchain) = fixture();
        let json = render(&settings(&spec, &toolchain));
        assert!(json.contains("\"MAXIM_PATH\": \"/sdk\""));
        assert!(json.contains("\"target\": \"MAX32655\""));
        assert!(json.contains("\"board\": \"EvKit_V1\""));
    }

    #[test]
    fn include_paths_come_from_toolchain() {
        let (spec, toolchain) = fixture();
        let json = render(&cpp_properties(&spec, &toolchain));
        assert!(json.contains("/sdk/Libraries/PeriphDrivers/Include/MAX32655"));
        assert!(json.contains("arm-none-eabi-gcc"));
    }

    #[test]
    fn flash_task_targets_lowercase_cfg() {
        let (spec, toolchain) = fixture();
        let json = render(&tasks(&spec, &toolchain));
        assert!(json.contains("target/max32655.cfg"));
        assert!(json.contains("build/my_proj.elf"));
    }

    #[test]
    fn write_failure_reports_integration_generation() {
        use crate::application::ports::MockFilesystem;
        use crate::error::MaxkitError;

        let (spec, toolchain) = fixture();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|p| {
            Err(ApplicationError::Filesystem {
                path: p.to_path_buf(),
                reason: "read-only filesystem".into(),
            }
            .into())
        });

        let err = generate(&fs, &spec, &toolchain).unwrap_err();
        match err {
            MaxkitError::Application(ApplicationError::IntegrationGeneration {
                path,
                reason,
            }) => {
                assert_eq!(path, PathBuf::from("/work/my_proj/.vscode"));
                assert!(reason.contains("read-only"));
            }
            other => panic!("expected IntegrationGeneration, got {other:?}"),
        }
    }
}
