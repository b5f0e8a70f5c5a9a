//! End-to-end tests for the `maxkit` binary.
//!
//! Each test fabricates an SDK tree in a tempdir and points the binary at it
//! through `MAXIM_PATH`, so no real installation is required.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fake_sdk() -> TempDir {
    let sdk = TempDir::new().unwrap();
    let root = sdk.path();

    for (target, templates, bsps) in [
        ("MAX32655", &["Hello_World", "GPIO"][..], &["EvKit_V1"][..]),
        ("MAX32690", &["Hello_World"][..], &["EvKit_V1", "AppsBrd"][..]),
    ] {
        for template in templates {
            let dir = root.join("Examples").join(target).join(template);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("main.c"), "int main(void) { return 0; }\n").unwrap();
            fs::write(dir.join("Makefile"), "BOARD ?= EvKit_V1\n").unwrap();
            fs::write(dir.join("project.mk"), "# Add your config here!\n").unwrap();
        }
        for bsp in bsps {
            fs::create_dir_all(root.join("Libraries/Boards").join(target).join(bsp)).unwrap();
        }
    }

    sdk
}

/// Command pointed at `sdk`, running inside `cwd`, environment isolated.
fn maxkit(sdk: &Path, cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("maxkit").unwrap();
    cmd.current_dir(cwd)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("MAXIM_PATH", sdk);
    cmd
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_lists_new_command_flags() {
    let mut cmd = Command::cargo_bin("maxkit").unwrap();
    cmd.args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--target"))
        .stdout(predicate::str::contains("--bsp"))
        .stdout(predicate::str::contains("--template"))
        .stdout(predicate::str::contains("--no-vscode"));
}

#[test]
fn version_flag_prints_package_version() {
    let mut cmd = Command::cargo_bin("maxkit").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn create_with_bare_suffix_target_succeeds() {
    let sdk = fake_sdk();
    let work = TempDir::new().unwrap();

    maxkit(sdk.path(), work.path())
        .args(["new", "my_proj", "-t", "32655", "--yes", "--no-git", "--no-readme"])
        .assert()
        .success();

    let proj = work.path().join("my_proj");
    assert!(proj.join("main.c").exists());
    assert!(proj.join("Makefile").exists());

    // Editor integration is on by default and carries the resolved pair.
    let settings = fs::read_to_string(proj.join(".vscode/settings.json")).unwrap();
    assert!(settings.contains("\"target\": \"MAX32655\""));
    assert!(settings.contains("\"board\": \"EvKit_V1\""));
}

#[test]
fn readme_is_created_by_default() {
    let sdk = fake_sdk();
    let work = TempDir::new().unwrap();

    maxkit(sdk.path(), work.path())
        .args(["new", "blinky", "-t", "MAX32690", "--yes", "--no-git"])
        .assert()
        .success();

    let readme = fs::read_to_string(work.path().join("blinky/README.md")).unwrap();
    assert_eq!(readme, "# blinky\n");
}

#[test]
fn project_mk_is_configured_for_the_project() {
    let sdk = fake_sdk();
    let work = TempDir::new().unwrap();

    maxkit(sdk.path(), work.path())
        .args(["new", "my_proj", "-t", "32690", "-b", "AppsBrd", "--yes", "--no-git"])
        .assert()
        .success();

    let project_mk = fs::read_to_string(work.path().join("my_proj/project.mk")).unwrap();
    assert!(project_mk.contains("PROJECT=my_proj"));
    assert!(project_mk.contains("BOARD=AppsBrd"));
    assert!(project_mk.contains("TARGET=MAX32690"));
}

#[test]
fn unknown_target_exits_not_found_and_lists_alternatives() {
    let sdk = fake_sdk();
    let work = TempDir::new().unwrap();

    maxkit(sdk.path(), work.path())
        .args(["new", "my_proj", "-t", "99999", "--yes"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("MAX99999"))
        .stderr(predicate::str::contains("MAX32655"))
        .stderr(predicate::str::contains("MAX32690"));

    assert!(!work.path().join("my_proj").exists());
}

#[test]
fn unknown_template_exits_not_found() {
    let sdk = fake_sdk();
    let work = TempDir::new().unwrap();

    maxkit(sdk.path(), work.path())
        .args(["new", "my_proj", "-t", "32655", "--template", "UART", "--yes"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("UART"))
        .stderr(predicate::str::contains("Hello_World"));
}

#[test]
fn existing_non_empty_destination_is_refused_untouched() {
    let sdk = fake_sdk();
    let work = TempDir::new().unwrap();
    let proj = work.path().join("my_proj");
    fs::create_dir_all(&proj).unwrap();
    fs::write(proj.join("notes.txt"), "mine").unwrap();

    maxkit(sdk.path(), work.path())
        .args(["new", "my_proj", "-t", "32655", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(proj.join("notes.txt")).unwrap(), "mine");
    assert!(!proj.join("main.c").exists());
}

#[test]
fn malformed_target_is_a_user_error() {
    let sdk = fake_sdk();
    let work = TempDir::new().unwrap();

    maxkit(sdk.path(), work.path())
        .args(["new", "my_proj", "-t", "MAX-32655", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("malformed target"));
}

#[test]
fn missing_sdk_configuration_is_a_config_error() {
    let work = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("maxkit").unwrap();
    cmd.current_dir(work.path())
        .env("NO_COLOR", "1")
        .env_remove("MAXIM_PATH")
        // Point at an isolated (empty) config so a developer's real config
        // can't leak an SDK path into the test.
        .args(["new", "my_proj", "-t", "32655", "--yes"]);

    let empty_config = work.path().join("empty.toml");
    fs::write(&empty_config, "").unwrap();
    cmd.arg("--config").arg(&empty_config);

    cmd.assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("MAXIM_PATH"));
}

#[test]
fn dry_run_writes_nothing() {
    let sdk = fake_sdk();
    let work = TempDir::new().unwrap();

    maxkit(sdk.path(), work.path())
        .args(["new", "my_proj", "-t", "32655", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!work.path().join("my_proj").exists());
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_shows_targets() {
    let sdk = fake_sdk();
    let work = TempDir::new().unwrap();

    maxkit(sdk.path(), work.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("MAX32655"))
        .stdout(predicate::str::contains("MAX32690"));
}

#[test]
fn list_target_shows_templates_and_bsps() {
    let sdk = fake_sdk();
    let work = TempDir::new().unwrap();

    maxkit(sdk.path(), work.path())
        .args(["list", "-t", "32690"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello_World"))
        .stdout(predicate::str::contains("AppsBrd"));
}

#[test]
fn list_json_is_parseable() {
    let sdk = fake_sdk();
    let work = TempDir::new().unwrap();

    let output = maxkit(sdk.path(), work.path())
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let targets = parsed["targets"].as_array().unwrap();
    assert!(targets.iter().any(|t| t == "MAX32655"));
}

#[test]
fn list_unknown_target_fails_with_alternatives() {
    let sdk = fake_sdk();
    let work = TempDir::new().unwrap();

    maxkit(sdk.path(), work.path())
        .args(["list", "-t", "99999"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("MAX32655"));
}
