use predicates::str::contains;

mod common;
use common::{ct, default_config, write_fixture_csv};
use std::fs;

#[test]
fn test_records_shows_normalized_times() {
    let csv = write_fixture_csv("records_norm");
    let conf = default_config("records_norm");

    // "오후 1시" → 13:00, "오후 5시30분" → 17:30, serial 0.75 → 18:00
    ct()
        .args(["--config", &conf, "records", &csv])
        .assert()
        .success()
        .stdout(contains("13:00"))
        .stdout(contains("17:30"))
        .stdout(contains("18:00"))
        .stdout(contains("4 of 4 records"));
}

#[test]
fn test_records_keeps_raw_outing_text() {
    let csv = write_fixture_csv("records_outing");
    let conf = default_config("records_outing");

    ct()
        .args(["--config", &conf, "records", &csv])
        .assert()
        .success()
        .stdout(contains("14:00~15:00"))
        .stdout(contains("30분"));
}

#[test]
fn test_records_limit() {
    let csv = write_fixture_csv("records_limit");
    let conf = default_config("records_limit");

    ct()
        .args(["--config", &conf, "records", &csv, "--limit", "2"])
        .assert()
        .success()
        .stdout(contains("2 of 4 records"));
}

#[test]
fn test_unparseable_time_passes_through_to_table() {
    let mut content = String::from("학생명,반,요일,등원시간,하원시간\n");
    content.push_str("김민준,1반,월,미정,17:00\n");
    let path = {
        let mut p = std::env::temp_dir();
        p.push("records_raw_caretally.csv");
        fs::write(&p, content).expect("write csv");
        p.to_string_lossy().to_string()
    };
    let conf = default_config("records_raw");

    ct()
        .args(["--config", &conf, "records", &path])
        .assert()
        .success()
        .stdout(contains("미정"));
}

#[test]
fn test_empty_import_fails() {
    let path = {
        let mut p = std::env::temp_dir();
        p.push("records_empty_caretally.csv");
        fs::write(&p, "학생명,반,요일,등원시간,하원시간\n").expect("write csv");
        p.to_string_lossy().to_string()
    };
    let conf = default_config("records_empty");

    ct()
        .args(["--config", &conf, "records", &path])
        .assert()
        .failure()
        .stderr(contains("No attendance rows"));
}

#[test]
fn test_missing_column_fails() {
    let path = {
        let mut p = std::env::temp_dir();
        p.push("records_nocol_caretally.csv");
        fs::write(&p, "학생명,반,요일,등원시간\n김민준,1반,월,13:00\n").expect("write csv");
        p.to_string_lossy().to_string()
    };
    let conf = default_config("records_nocol");

    ct()
        .args(["--config", &conf, "records", &path])
        .assert()
        .failure()
        .stderr(contains("Missing required column"));
}
