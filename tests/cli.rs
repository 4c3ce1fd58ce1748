//! Integration tests for the stylegate binary.
//!
//! These tests run the real executable against throwaway project
//! directories. The update notifier is disabled for every run.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

/// Get a command for running stylegate in `dir`.
fn stylegate(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stylegate").unwrap();
    cmd.current_dir(dir)
        .env("NO_UPDATE_NOTIFIER", "1")
        .env_remove("STYLEGATE_ROOT");
    cmd
}

/// A directory holding a minimal Cargo manifest.
fn cargo_project() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    fs::write(
        dir.path().join("Cargo.toml"),
        "[package]\nname = \"demo\"\nversion = \"0.1.0\"\nedition = \"2021\"\n",
    )
    .unwrap();
    dir
}

// =============================================================================
// Usage
// =============================================================================

#[test]
fn no_arguments_prints_usage() {
    let dir = TempDir::new().unwrap();
    stylegate(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("$ stylegate <verb> [options]"));
}

#[test]
fn help_flag_prints_usage_and_fails() {
    let dir = TempDir::new().unwrap();
    stylegate(dir.path())
        .arg("--help")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Verb can be:"));
}

#[test]
fn unknown_verb_is_named() {
    let dir = TempDir::new().unwrap();
    stylegate(dir.path())
        .arg("frobnicate")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Unknown verb: frobnicate"));
}

#[test]
fn two_verbs_are_rejected() {
    let dir = cargo_project();
    stylegate(dir.path())
        .args(["clean", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected exactly one verb"));
    assert!(!dir.path().join("stylegate.toml").exists());
}

#[test]
fn unknown_flag_is_rejected() {
    let dir = TempDir::new().unwrap();
    stylegate(dir.path())
        .args(["check", "--frobnicate"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--frobnicate"));
}

#[test]
fn version_flag_works() {
    let dir = TempDir::new().unwrap();
    stylegate(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("stylegate "));
}

// =============================================================================
// Verbs
// =============================================================================

#[test]
fn clean_dry_run_keeps_target() {
    let dir = cargo_project();
    fs::create_dir_all(dir.path().join("target/debug")).unwrap();

    stylegate(dir.path())
        .args(["clean", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would remove:"));

    assert!(dir.path().join("target/debug").exists());
}

#[test]
fn clean_honors_cwd_flag() {
    let outer = TempDir::new().unwrap();
    let project = outer.path().join("app");
    fs::create_dir_all(project.join("target")).unwrap();

    stylegate(outer.path())
        .args(["clean", "--cwd", "app"])
        .assert()
        .success();

    assert!(!project.join("target").exists());
}

#[test]
fn init_without_manifest_fails() {
    let dir = TempDir::new().unwrap();
    stylegate(dir.path())
        .args(["init", "-y"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No Cargo.toml found"));
}

#[test]
fn init_writes_configuration() {
    let dir = cargo_project();
    stylegate(dir.path())
        .args(["init", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote stylegate.toml"));

    for name in ["stylegate.toml", "rustfmt.toml", "clippy.toml"] {
        assert!(dir.path().join(name).is_file(), "{} missing", name);
    }
}

#[cfg(target_os = "linux")]
#[test]
fn pending_update_check_does_not_delay_exit() {
    let dir = cargo_project();
    let cache = TempDir::new().unwrap();

    // empty cache: a registry refresh is started and left pending
    stylegate(dir.path())
        .env_remove("NO_UPDATE_NOTIFIER")
        .env_remove("CI")
        .env("XDG_CACHE_HOME", cache.path())
        .args(["clean", "--dry-run"])
        .timeout(Duration::from_secs(4))
        .assert()
        .success();
}

#[cfg(unix)]
mod external_tools {
    use super::*;

    fn project_with_tools(lint: &str, format: &str) -> TempDir {
        let dir = cargo_project();
        fs::write(
            dir.path().join("stylegate.toml"),
            format!(
                "[lint]\nprogram = \"sh\"\ncheck_args = [\"-c\", \"{lint}\"]\nfix_args = [\"-c\", \"{lint}\"]\n\n\
                 [format]\nprogram = \"sh\"\ncheck_args = [\"-c\", \"{format}\"]\nfix_args = [\"-c\", \"{format}\"]\n"
            ),
        )
        .unwrap();
        dir
    }

    #[test]
    fn check_passes_when_both_tools_pass() {
        let dir = project_with_tools("exit 0", "touch formatted");
        stylegate(dir.path()).arg("check").assert().success();
        assert!(dir.path().join("formatted").exists());
    }

    #[test]
    fn failing_lint_skips_format() {
        let dir = project_with_tools("exit 3", "touch formatted");
        stylegate(dir.path())
            .arg("check")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("lint failed"));
        assert!(!dir.path().join("formatted").exists());
    }

    #[test]
    fn failing_format_fails_fix() {
        let dir = project_with_tools("exit 0", "exit 1");
        stylegate(dir.path()).arg("fix").assert().code(1);
    }
}
