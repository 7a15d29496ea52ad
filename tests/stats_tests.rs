use predicates::str::contains;

mod common;
use common::{ct, default_config, write_config, write_fixture_csv};

#[test]
fn test_stats_lists_every_student_once() {
    let csv = write_fixture_csv("stats_all");
    let conf = default_config("stats_all");

    ct()
        .args(["--config", &conf, "stats", &csv])
        .assert()
        .success()
        .stdout(contains("김민준"))
        .stdout(contains("이서연"))
        .stdout(contains("박지호"))
        .stdout(contains("최수아"))
        .stdout(contains("4 students"));
}

#[test]
fn test_stats_flags_short_average_stay() {
    let csv = write_fixture_csv("stats_flag");
    let conf = default_config("stats_flag");

    // default criterion: average stay below 60 minutes; only 박지호 (40)
    ct()
        .args(["--config", &conf, "stats", &csv])
        .assert()
        .success()
        .stdout(contains("대상"))
        .stdout(contains("1 screening target(s)"));
}

#[test]
fn test_stats_durations_in_korean_reading() {
    let csv = write_fixture_csv("stats_korean");
    let conf = default_config("stats_korean");

    // 김민준 240 minutes, 박지호 40 minutes
    ct()
        .args(["--config", &conf, "stats", &csv])
        .assert()
        .success()
        .stdout(contains("4시간 0분"))
        .stdout(contains("0시간 40분"));
}

#[test]
fn test_stats_class_filter() {
    let csv = write_fixture_csv("stats_class");
    let conf = default_config("stats_class");

    ct()
        .args(["--config", &conf, "stats", &csv, "--class", "1반"])
        .assert()
        .success()
        .stdout(contains("김민준"))
        .stdout(contains("2 students"));
}

#[test]
fn test_stats_absence_days_criterion() {
    let csv = write_fixture_csv("stats_absence");
    // `greater 5` flags every student attending fewer than 5 days
    let conf = write_config(
        "stats_absence",
        "criteria:\n  - id: 1\n    kind: absence-days\n    op: greater\n    value: 5\n",
    );

    ct()
        .args(["--config", &conf, "stats", &csv])
        .assert()
        .success()
        .stdout(contains("4 screening target(s)"));
}

#[test]
fn test_stats_without_criteria_flags_nobody() {
    let csv = write_fixture_csv("stats_nocrit");
    let conf = write_config("stats_nocrit", "criteria: []\n");

    ct()
        .args(["--config", &conf, "stats", &csv])
        .assert()
        .success()
        .stdout(contains("0 screening target(s)"));
}
