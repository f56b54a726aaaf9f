//! Integration tests for the `wardbook` CLI binary.
//!
//! These tests drive add/schedule/cancel/list through the actual binary with
//! per-test store files, covering success messages, clash and not-found
//! errors, bad positions, and argument parsing.

// assert_cmd 2.1.2 deprecates `Command::cargo_bin`; keep it until the
// replacement macro is adopted across the workspace.
#![allow(deprecated)]

use assert_cmd::Command;
use chrono::{Duration, Local};
use predicates::prelude::*;

/// A per-test store path under the system temp directory.
fn store_path(test_name: &str) -> String {
    let path = std::env::temp_dir().join(format!("wardbook-test-{}.json", test_name));
    let _ = std::fs::remove_file(&path);
    path.to_string_lossy().into_owned()
}

/// A date 30 days out, formatted the way the CLI expects. Keeps the
/// past-date check from tripping regardless of when the tests run.
fn future_date() -> String {
    (Local::now() + Duration::days(30))
        .format("%d/%m/%Y")
        .to_string()
}

fn wardbook(store: &str) -> Command {
    let mut cmd = Command::cargo_bin("wardbook").unwrap();
    cmd.args(["--store", store]);
    cmd
}

#[test]
fn add_then_list_shows_patient() {
    let store = store_path("add-list");

    wardbook(&store)
        .args(["add", "Alice Pauline", "--nurse", "Nurse Joy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added patient Alice Pauline"));

    wardbook(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Alice Pauline (nurse: Nurse Joy)"));

    let _ = std::fs::remove_file(&store);
}

#[test]
fn list_with_no_store_reports_empty_roster() {
    let store = store_path("empty-list");

    wardbook(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No patients on the roster"));
}

#[test]
fn schedule_prints_patient_and_slot() {
    let store = store_path("schedule");
    let date = future_date();

    wardbook(&store)
        .args(["add", "Alice Pauline", "--nurse", "Nurse Joy"])
        .assert()
        .success();

    wardbook(&store)
        .args(["schedule", "-p", "1", "-d", &date, "-t", "10:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice Pauline"))
        .stdout(predicate::str::contains(&date))
        .stdout(predicate::str::contains("10:00"));

    // The checkup shows up in the listing.
    wardbook(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{} 10:00", date)));

    let _ = std::fs::remove_file(&store);
}

#[test]
fn schedule_without_nurse_warns() {
    let store = store_path("no-nurse");
    let date = future_date();

    wardbook(&store).args(["add", "Carl Kurz"]).assert().success();

    wardbook(&store)
        .args(["schedule", "-p", "1", "-d", &date, "-t", "10:15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no assigned nurse"));

    let _ = std::fs::remove_file(&store);
}

#[test]
fn double_booking_reports_clash_with_existing_slot() {
    let store = store_path("clash");
    let date = future_date();

    wardbook(&store)
        .args(["add", "Alice Pauline", "--nurse", "Nurse Joy"])
        .assert()
        .success();

    wardbook(&store)
        .args(["schedule", "-p", "1", "-d", &date, "-t", "10:00"])
        .assert()
        .success();

    wardbook(&store)
        .args(["schedule", "-p", "1", "-d", &date, "-t", "10:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already scheduled"))
        .stderr(predicate::str::contains(format!("{} 10:00", date)));

    let _ = std::fs::remove_file(&store);
}

#[test]
fn schedule_then_cancel_round_trips() {
    let store = store_path("cancel");
    let date = future_date();

    wardbook(&store)
        .args(["add", "Alice Pauline", "--nurse", "Nurse Joy"])
        .assert()
        .success();

    wardbook(&store)
        .args(["schedule", "-p", "1", "-d", &date, "-t", "10:00"])
        .assert()
        .success();

    wardbook(&store)
        .args(["cancel", "-p", "1", "-d", &date, "-t", "10:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed checkup for Alice Pauline"));

    // Cancelling again fails: the slot is gone.
    wardbook(&store)
        .args(["cancel", "-p", "1", "-d", &date, "-t", "10:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No checkup is scheduled"));

    let _ = std::fs::remove_file(&store);
}

#[test]
fn bad_patient_position_reports_range() {
    let store = store_path("bad-position");
    let date = future_date();

    wardbook(&store)
        .args(["add", "Alice Pauline"])
        .assert()
        .success();

    wardbook(&store)
        .args(["schedule", "-p", "42", "-d", &date, "-t", "10:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"))
        .stderr(predicate::str::contains("1 patients"));

    let _ = std::fs::remove_file(&store);
}

#[test]
fn off_grid_time_is_rejected() {
    let store = store_path("off-grid");
    let date = future_date();

    wardbook(&store)
        .args(["add", "Alice Pauline"])
        .assert()
        .success();

    wardbook(&store)
        .args(["schedule", "-p", "1", "-d", &date, "-t", "10:07"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("blocks of 00, 15, 30, or 45"));

    let _ = std::fs::remove_file(&store);
}

#[test]
fn malformed_date_fails_argument_parsing() {
    let store = store_path("bad-date");

    wardbook(&store)
        .args(["schedule", "-p", "1", "-d", "2026-12-24", "-t", "10:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected DD/MM/YYYY"));
}

#[test]
fn invalid_patient_name_is_rejected_on_add() {
    let store = store_path("bad-name");

    wardbook(&store)
        .args(["add", "Al1ce"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Names may only contain"));

    // Nothing was saved.
    wardbook(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No patients on the roster"));
}
