mod common;

use common::run_readme;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_fixture(temp: &TempDir, lines: usize) {
    let content: String = (0..lines).map(|i| format!("line {i}\n")).collect();
    fs::write(temp.path().join("README.md"), content).unwrap();
    fs::write(temp.path().join("bullets.txt"), "- one\n- two\n").unwrap();
}

#[test]
fn replaces_target_range() {
    let temp = TempDir::new().unwrap();
    write_fixture(&temp, 6);

    run_readme(
        temp.path(),
        &["--start", "2", "--end", "4", "--with", "bullets.txt"],
    )
    .success()
    .stdout(predicate::str::contains("Replaced lines 2..4"));

    let result = fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert_eq!(result, "line 0\nline 1\n- one\n- two\nline 4\nline 5\n");
}

#[test]
fn defaults_to_readme_md() {
    let temp = TempDir::new().unwrap();
    write_fixture(&temp, 3);

    run_readme(
        temp.path(),
        &["--start", "0", "--end", "1", "--with", "bullets.txt"],
    )
    .success();

    let result = fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert!(result.starts_with("- one\n- two\n"));
}

#[test]
fn short_file_fails_without_corruption() {
    let temp = TempDir::new().unwrap();
    write_fixture(&temp, 3);
    let before = fs::read_to_string(temp.path().join("README.md")).unwrap();

    run_readme(
        temp.path(),
        &["--start", "46", "--end", "51", "--with", "bullets.txt"],
    )
    .failure()
    .stderr(predicate::str::contains("out of bounds"));

    assert_eq!(
        fs::read_to_string(temp.path().join("README.md")).unwrap(),
        before
    );
}

#[test]
fn inverted_range_fails() {
    let temp = TempDir::new().unwrap();
    write_fixture(&temp, 6);

    run_readme(
        temp.path(),
        &["--start", "4", "--end", "2", "--with", "bullets.txt"],
    )
    .failure()
    .stderr(predicate::str::contains("Invalid line range"));
}

#[test]
fn missing_file_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bullets.txt"), "- one\n").unwrap();

    run_readme(
        temp.path(),
        &[
            "--start",
            "0",
            "--end",
            "1",
            "--with",
            "bullets.txt",
            "missing.md",
        ],
    )
    .failure();
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    write_fixture(&temp, 6);
    let before = fs::read_to_string(temp.path().join("README.md")).unwrap();

    run_readme(
        temp.path(),
        &[
            "--start",
            "2",
            "--end",
            "4",
            "--with",
            "bullets.txt",
            "--dry-run",
        ],
    )
    .success()
    .stdout(predicate::str::contains("Would replace"));

    assert_eq!(
        fs::read_to_string(temp.path().join("README.md")).unwrap(),
        before
    );
}

#[test]
fn identical_replacement_reports_no_change() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("README.md"), "a\nb\nc\n").unwrap();
    fs::write(temp.path().join("bullets.txt"), "b\n").unwrap();

    run_readme(
        temp.path(),
        &["--start", "1", "--end", "2", "--with", "bullets.txt"],
    )
    .success()
    .stdout(predicate::str::contains("No change needed"));
}
