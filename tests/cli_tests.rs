//! Command-line behavior of the `fo-lookup` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const CATALOG: &str = "\
Citable Reference,Description
FO 371/4383,\"Code 12, Files 10 - 20\"
FO 371/4384,\"Code 120, File 7\"
FO 371/4385,\"Code 126, File 5\"
";

fn write_catalog(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("fo.csv");
    std::fs::write(&path, CATALOG).unwrap();
    path
}

fn fo_lookup() -> Command {
    let mut cmd = Command::cargo_bin("fo-lookup").unwrap();
    cmd.env_remove("FO_LOOKUP_DATASET");
    cmd
}

#[test]
fn test_search_prints_table() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);

    fo_lookup()
        .arg("--dataset")
        .arg(&catalog)
        .args(["search", "FO 371/15/12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Citable Reference"))
        .stdout(predicate::str::contains("FO 371/4383"))
        .stdout(predicate::str::contains("FO 371/4384").not());
}

#[test]
fn test_search_prints_status_message() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);

    fo_lookup()
        .arg("--dataset")
        .arg(&catalog)
        .args(["search", "FO 371/25/12"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No match found for 'Code 12' with file 25 in the description.",
        ));

    fo_lookup()
        .arg("--dataset")
        .arg(&catalog)
        .args(["search", "FO 371/5/126"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search for 'Code 126' is excluded."));
}

#[test]
fn test_search_json_output() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);

    let output = fo_lookup()
        .arg("--dataset")
        .arg(&catalog)
        .args(["search", "FO 371/7/120", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["rows"].as_array().unwrap().len(), 1);
    assert_eq!(json["rows"][0]["Citable Reference"], "FO 371/4384");
}

#[test]
fn test_search_tsv_status() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);

    fo_lookup()
        .arg("--dataset")
        .arg(&catalog)
        .args(["search", "FO 371", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("status\tmessage\nmalformed_query\t"));
}

#[test]
fn test_dataset_from_env() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);

    fo_lookup()
        .env("FO_LOOKUP_DATASET", &catalog)
        .arg("dataset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows: 3"))
        .stdout(predicate::str::contains("Rows with a file or file range: 3"));
}

#[test]
fn test_missing_catalog_fails() {
    let dir = TempDir::new().unwrap();

    fo_lookup()
        .arg("--dataset")
        .arg(dir.path().join("missing.csv"))
        .args(["search", "FO 371/15/12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("was not found"));
}

#[test]
fn test_verbose_reports_load_once() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);

    let output = fo_lookup()
        .arg("--verbose")
        .arg("--dataset")
        .arg(&catalog)
        .args(["search", "FO 371/15/12"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Loaded 3 rows from").count(), 1);
    // Log lines never leak into the result table
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Loaded"));
}
