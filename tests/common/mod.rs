//! Integration tests for workspace-chores
//!
//! These tests build real directory trees of Cargo.toml files and drive
//! the compiled binary through its command-line interface.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Manifest content used by most fixtures, version `0.1.6`.
#[allow(unused)]
pub fn manifest(name: &str) -> String {
    format!(
        r#"[package]
name = "{name}"
version = "0.1.6"
edition = "2021"

[dependencies]
serde = {{ version = "1", features = ["derive"] }}
"#
    )
}

/// Builds a tree with two crates under `crates/` and one under `examples/`.
#[allow(unused)]
pub fn create_test_tree() -> TempDir {
    let temp = TempDir::new().unwrap();

    for dir in ["crates/vex-core", "crates/vex-api", "examples/demo"] {
        let pkg = temp.path().join(dir);
        fs::create_dir_all(&pkg).unwrap();
        let name = Path::new(dir).file_name().unwrap().to_string_lossy();
        fs::write(pkg.join("Cargo.toml"), manifest(&name)).unwrap();
    }

    temp
}

/// Helper to run a bump command against a tree.
#[allow(unused)]
pub fn run_bump(
    root: &Path,
    old: &str,
    new: &str,
    extra_args: &[&str],
) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("workspace-chores");
    cmd.arg("bump")
        .arg(old)
        .arg(new)
        .args(extra_args)
        .current_dir(root);

    cmd.assert()
}

/// Helper to run a readme splice command.
#[allow(unused)]
pub fn run_readme(root: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("workspace-chores");
    cmd.arg("readme").args(extra_args).current_dir(root);

    cmd.assert()
}
