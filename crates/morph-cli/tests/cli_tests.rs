use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to build a morph command
fn morph_cmd() -> Command {
    Command::cargo_bin("morph").expect("Failed to find morph binary")
}

#[test]
fn test_cli_date_with_output_format() {
    morph_cmd()
        .args(["date", "2023-07-30T15:30:00.000Z", "--format", "dd/MM/yyyy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("30/07/2023"));
}

#[test]
fn test_cli_date_between_token_formats() {
    morph_cmd()
        .args([
            "date",
            "30-07-2023 15:30:00",
            "--from",
            "dd-MM-yyyy HH:mm:ss",
            "--to",
            "yyyy-MM-dd",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-07-30"));
}

#[test]
fn test_cli_date_without_options_prints_iso() {
    morph_cmd()
        .args(["date", "2023-07-30T15:30:00.000Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-07-30T15:30:00.000Z"));
}

#[test]
fn test_cli_date_invalid_input_prints_sentinel() {
    morph_cmd()
        .args(["date", "invalid-date-string", "--format", "yyyy-MM-dd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid Date"));
}

#[test]
fn test_cli_timestamp_between_timezones() {
    morph_cmd()
        .args([
            "timestamp",
            "2023-07-30T02:00:00Z",
            "--from",
            "UTC",
            "--to",
            "IST",
            "--format",
            "yyyy-MM-dd HH:mm:ss",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-07-30 07:30:00"));
}

#[test]
fn test_cli_timestamp_unknown_timezone_prints_sentinel() {
    morph_cmd()
        .args([
            "timestamp",
            "2023-07-30T02:00:00Z",
            "--from",
            "Invalid_Timezone",
            "--to",
            "IST",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid Timezone"));
}

#[test]
fn test_cli_timezones_lists_builtin_labels() {
    morph_cmd()
        .args(["timezones"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UTC"))
        .stdout(predicate::str::contains("IST"))
        .stdout(predicate::str::contains("+05:30"));
}

#[test]
fn test_cli_custom_timezone_table() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let table_path = temp_dir.path().join("table.json");
    std::fs::write(
        &table_path,
        r#"{ "XQT": { "offset": 195, "place": "Test Zone" } }"#,
    )
    .expect("Failed to write table file");

    // 02:00 UTC shifted by +03:15 renders as 05:15.
    morph_cmd()
        .args([
            "--timezones",
            table_path.to_str().unwrap(),
            "timestamp",
            "2023-07-30T02:00:00Z",
            "--to",
            "XQT",
            "--format",
            "HH:mm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("05:15"));
}

#[test]
fn test_cli_malformed_timezone_table_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let table_path = temp_dir.path().join("broken.json");
    std::fs::write(&table_path, "{ not json").expect("Failed to write table file");

    morph_cmd()
        .args([
            "--timezones",
            table_path.to_str().unwrap(),
            "timezones",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load timezone table"));
}

#[test]
fn test_cli_missing_timezone_table_fails() {
    morph_cmd()
        .args(["--timezones", "/nonexistent/table.json", "timezones"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load timezone table"));
}
