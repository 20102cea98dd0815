//! End-to-end CLI tests: generate a ledger, run reports against it.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlens() -> Command {
    Command::cargo_bin("spendlens").expect("binary builds")
}

fn generate_ledger(dir: &TempDir) -> std::path::PathBuf {
    let ledger = dir.path().join("ledger.csv");
    spendlens()
        .args([
            "generate",
            "--output",
            ledger.to_str().unwrap(),
            "--months",
            "6",
            "--per-month",
            "40",
            "--seed",
            "42",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 240 records"));
    ledger
}

#[test]
fn generate_then_report_category_totals() {
    let dir = TempDir::new().unwrap();
    let ledger = generate_ledger(&dir);

    spendlens()
        .args(["report", "category-totals", "--file", ledger.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spending by Category"));
}

#[test]
fn report_all_runs_every_report() {
    let dir = TempDir::new().unwrap();
    let ledger = generate_ledger(&dir);

    spendlens()
        .args(["report", "all", "--file", ledger.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spending by Category"))
        .stdout(predicate::str::contains("Total Cashback Received"))
        .stdout(predicate::str::contains("Spending Trend Over Time"))
        .stdout(predicate::str::contains("Grocery Spending by Weekday"))
        .stdout(predicate::str::contains("Top Category by Share of Spending"));
}

#[test]
fn report_total_cashback_runs_standalone() {
    let dir = TempDir::new().unwrap();
    let ledger = generate_ledger(&dir);

    spendlens()
        .args(["report", "total-cashback", "--file", ledger.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Cashback Received"));
}

#[test]
fn report_json_output() {
    let dir = TempDir::new().unwrap();
    let ledger = generate_ledger(&dir);

    let output = spendlens()
        .args([
            "report",
            "monthly-totals",
            "--json",
            "--file",
            ledger.to_str().unwrap(),
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert!(parsed["rows"].is_array());
}

#[test]
fn report_csv_export() {
    let dir = TempDir::new().unwrap();
    let ledger = generate_ledger(&dir);
    let export = dir.path().join("totals.csv");

    spendlens()
        .args([
            "report",
            "payment-mode-totals",
            "--file",
            ledger.to_str().unwrap(),
            "--output",
            export.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report exported to"));

    let contents = fs::read_to_string(&export).unwrap();
    assert!(contents.starts_with("Payment_Mode,Total_Spent"));
}

#[test]
fn empty_ledger_reports_cleanly() {
    let dir = TempDir::new().unwrap();
    let ledger = dir.path().join("empty.csv");
    fs::write(
        &ledger,
        "Date,Category,Payment_Mode,Description,Amount_Paid,Cashback\n",
    )
    .unwrap();

    spendlens()
        .args([
            "report",
            "top-category-share",
            "--file",
            ledger.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No spending recorded"));

    spendlens()
        .args(["report", "all", "--file", ledger.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn malformed_row_fails_the_load() {
    let dir = TempDir::new().unwrap();
    let ledger = dir.path().join("bad.csv");
    fs::write(
        &ledger,
        "Date,Category,Payment_Mode,Description,Amount_Paid,Cashback\n\
         2024-01-05,Food,Cash,Lunch,-10.00,0.00\n",
    )
    .unwrap();

    spendlens()
        .args(["report", "category-totals", "--file", ledger.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ingest error"));
}

#[test]
fn default_ledger_path_from_env() {
    let dir = TempDir::new().unwrap();

    spendlens()
        .env("SPENDLENS_DATA_DIR", dir.path())
        .args(["generate", "--months", "1", "--per-month", "10", "--seed", "7"])
        .assert()
        .success();

    spendlens()
        .env("SPENDLENS_DATA_DIR", dir.path())
        .args(["report", "monthly-totals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spending per Month"));
}

#[test]
fn missing_default_ledger_is_a_config_error() {
    let dir = TempDir::new().unwrap();

    spendlens()
        .env("SPENDLENS_DATA_DIR", dir.path())
        .args(["report", "category-totals"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no ledger at"));
}
