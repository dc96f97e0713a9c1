#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn shelf_cmd(data: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("shelf"));
    cmd.env("SHELF_DATA", data.path().as_os_str())
        .env_remove("SHELF_LOG");
    cmd
}

fn add_book(data: &TempDir, accession: &str, title: &str, status: &str) {
    shelf_cmd(data)
        .args([
            "add",
            "--accession",
            accession,
            "--title",
            title,
            "--publisher",
            "Ace",
            "--authors",
            "Frank Herbert",
            "--location",
            "Shelf 3",
            "--status",
            status,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Book added: {}", title)));
}

#[test]
fn test_empty_catalog_list() {
    let data = TempDir::new().unwrap();
    shelf_cmd(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("No books yet"));
}

#[test]
fn test_add_then_list_and_persist() {
    let data = TempDir::new().unwrap();
    add_book(&data, "A001", "Dune", "available");
    add_book(&data, "A002", "Emma", "issued");

    shelf_cmd(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Emma by Frank Herbert"))
        .stdout(predicate::str::contains("2. Dune by Frank Herbert"))
        .stdout(predicate::str::contains("2 books · 1 available · 1 issued"));

    let raw = fs::read_to_string(data.path().join("library-books.json")).unwrap();
    assert!(raw.contains("\"accessionNumber\": \"A001\""));
}

#[test]
fn test_add_with_missing_fields_fails() {
    let data = TempDir::new().unwrap();
    shelf_cmd(&data)
        .args(["add", "--title", "Dune"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Accession number is required"))
        .stderr(predicate::str::contains("Location name is required"));

    assert!(!data.path().join("library-books.json").exists());
}

#[test]
fn test_filters_keep_canonical_positions() {
    let data = TempDir::new().unwrap();
    add_book(&data, "A001", "Dune", "available");
    add_book(&data, "A002", "Emma", "issued");
    add_book(&data, "A003", "Ulysses", "available");

    shelf_cmd(&data)
        .args(["list", "--status", "issued"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. Emma"))
        .stdout(predicate::str::contains("Dune").not());

    shelf_cmd(&data)
        .args(["list", "--search", "DUNE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3. Dune"));

    shelf_cmd(&data)
        .args(["list", "--search", "nothing like this"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found"));
}

#[test]
fn test_edit_changes_only_given_fields() {
    let data = TempDir::new().unwrap();
    add_book(&data, "A001", "Dune", "available");

    shelf_cmd(&data)
        .args(["edit", "1", "--status", "issued"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book updated (1): Dune"));

    let output = shelf_cmd(&data)
        .args(["view", "1", "--json"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["index"], 1);
    assert_eq!(value[0]["book"]["status"], "Issued");
    assert_eq!(value[0]["book"]["title"], "Dune");
    assert_eq!(value[0]["book"]["locationName"], "Shelf 3");
}

#[test]
fn test_delete_asks_first() {
    let data = TempDir::new().unwrap();
    add_book(&data, "A001", "Dune", "available");

    shelf_cmd(&data)
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    shelf_cmd(&data)
        .args(["delete", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book deleted (1): Dune"));

    shelf_cmd(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("No books yet"));
}

#[test]
fn test_delete_unknown_position_fails() {
    let data = TempDir::new().unwrap();
    add_book(&data, "A001", "Dune", "available");
    shelf_cmd(&data)
        .args(["delete", "5", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Book not found: 5"));
}

#[test]
fn test_theme_is_persisted() {
    let data = TempDir::new().unwrap();
    shelf_cmd(&data)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));

    shelf_cmd(&data)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark"));

    shelf_cmd(&data)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));
    assert_eq!(
        fs::read_to_string(data.path().join("dark-mode.json")).unwrap(),
        "true"
    );
}

#[test]
fn test_corrupted_catalog_warns_and_starts_empty() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("library-books.json"), "{oops").unwrap();

    shelf_cmd(&data)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("could not be read"))
        .stdout(predicate::str::contains("No books yet"));
}

#[test]
fn test_stats_and_config() {
    let data = TempDir::new().unwrap();
    add_book(&data, "A001", "Dune", "issued");

    shelf_cmd(&data)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 book · 0 available · 1 issued"));

    shelf_cmd(&data)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("books_key"))
        .stdout(predicate::str::contains("library-books"));
}

#[test]
fn test_data_flag_overrides_env() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();
    shelf_cmd(&env_dir)
        .args([
            "add",
            "-a",
            "A1",
            "-t",
            "Dune",
            "-p",
            "Ace",
            "--authors",
            "FH",
            "-l",
            "S1",
            "--data",
        ])
        .arg(flag_dir.path())
        .assert()
        .success();

    assert!(flag_dir.path().join("library-books.json").exists());
    assert!(!env_dir.path().join("library-books.json").exists());
}
