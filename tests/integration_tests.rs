use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::tttt;

#[test]
fn test_check_formats_digits() {
    tttt()
        .args(["check", "0930"])
        .assert()
        .success()
        .stdout(contains("09:30"));
}

#[test]
fn test_check_strips_noise_and_caps() {
    tttt()
        .args(["check", "1a7b4c5d99"])
        .assert()
        .success()
        .stdout(contains("17:45"));
}

#[test]
fn test_check_flags_out_of_range() {
    tttt()
        .args(["check", "2575"])
        .assert()
        .success()
        .stdout(contains("25:75"))
        .stdout(contains("Time outside 00:00-23:59."));
}

#[test]
fn test_sum_single_row() {
    tttt()
        .args(["sum", "--row", "09:00,17:30,project x"])
        .assert()
        .success()
        .stdout(contains("project x"))
        .stdout(contains("8h 30m"));
}

#[test]
fn test_sum_groups_same_label() {
    tttt()
        .args([
            "sum",
            "--row",
            "09:00,10:15,meetings",
            "--row",
            "14:00,15:45,meetings",
        ])
        .assert()
        .success()
        .stdout(contains("3h 0m"));
}

#[test]
fn test_sum_empty_label_renders_placeholder_last() {
    let out = tttt()
        .args([
            "sum",
            "--row",
            "12:00,13:00",
            "--row",
            "09:00,10:00,alpha",
        ])
        .assert()
        .success()
        .stdout(contains("alpha").and(contains("(empty)")))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&out);
    let alpha_at = text.find("alpha").unwrap();
    let empty_at = text.find("(empty)").unwrap();
    assert!(alpha_at < empty_at, "empty label group must sort last");
}

#[test]
fn test_sum_rejects_reversed_times() {
    tttt()
        .args(["sum", "--row", "17:00,09:00,backwards"])
        .assert()
        .failure()
        .stderr(contains("Row 1:").and(contains("Exit must be after Entry")));
}

#[test]
fn test_sum_reports_all_bad_rows_and_commits_nothing() {
    tttt()
        .args([
            "sum",
            "--row",
            "09:00,17:00,fine",
            "--row",
            "09:00,,missing exit",
            "--row",
            "9:0,17:00,short",
        ])
        .assert()
        .failure()
        .stderr(contains("Row 2:").and(contains("Row 3:")))
        .stdout(contains("fine").not());
}

#[test]
fn test_sum_reads_rows_from_stdin() {
    tttt()
        .arg("sum")
        .write_stdin("09:00,12:00,docs\n\n13:00,17:00,docs\n")
        .assert()
        .success()
        .stdout(contains("docs"))
        .stdout(contains("7h 0m"));
}

#[test]
fn test_sum_normalizes_bare_digit_rows() {
    tttt()
        .args(["sum", "--row", "0900,1730,typed fast"])
        .assert()
        .success()
        .stdout(contains("09:00"))
        .stdout(contains("17:30"))
        .stdout(contains("8h 30m"));
}

#[test]
fn test_sum_rejects_single_field_spec() {
    tttt()
        .args(["sum", "--row", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid row spec"));
}

#[test]
fn test_sum_without_used_rows_prints_placeholder() {
    tttt()
        .arg("sum")
        .write_stdin("\n\n")
        .assert()
        .success()
        .stdout(contains("No saved timestamps yet."));
}
