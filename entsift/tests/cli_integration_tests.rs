// entsift/tests/cli_integration_tests.rs
//! End-to-end tests driving the compiled `entsift` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

fn entsift() -> Command {
    Command::cargo_bin("entsift").expect("binary should build")
}

fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn analyze_stdin_renders_accepted_entities() {
    entsift()
        .args(["--quiet", "analyze"])
        .write_stdin("JSON beats XIV at 192.168.0.1 on 31.12.2023")
        .assert()
        .success()
        .stdout(predicate::str::contains("[abbreviation]"))
        .stdout(predicate::str::contains("JSON"))
        .stdout(predicate::str::contains("192.168.0.1"))
        .stdout(predicate::str::contains("31.12.2023"))
        .stdout(predicate::str::contains("XIV").not());
}

#[test]
fn analyze_json_stdout_is_machine_readable() {
    let output = entsift()
        .args(["--quiet", "analyze", "--json-stdout"])
        .write_stdin("C# and C# again, plus 999.999.999.999 and 10.0.0.1")
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let entries = report["entries"].as_array().expect("entries array");
    assert_eq!(entries[0]["category"], "abbreviation");
    assert_eq!(entries[1]["category"], "ip-address");
    assert_eq!(entries[2]["category"], "date");

    let ips = entries[1]["entry"]["unique"].as_array().expect("unique list");
    assert_eq!(ips.len(), 1);
    assert_eq!(ips[0], "10.0.0.1");
}

#[test]
fn count_mode_reports_occurrence_counts() {
    let output = entsift()
        .args(["--quiet", "analyze", "--mode", "count", "--json-stdout"])
        .write_stdin("C# C# C# HTML5")
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let abbreviations = &report["entries"][0]["entry"]["counts"];
    assert_eq!(abbreviations[0][0], "C#");
    assert_eq!(abbreviations[0][1], 3);
    assert_eq!(abbreviations[1][0], "HTML5");
    assert_eq!(abbreviations[1][1], 1);
}

#[test]
fn empty_stdin_yields_empty_report() {
    entsift()
        .args(["--quiet", "analyze"])
        .write_stdin("   \n  ")
        .assert()
        .success()
        .stdout(predicate::str::contains("No categories analyzed"));
}

#[test]
fn analyze_reads_input_file() {
    let input = write_file("ping 10.0.0.1 and 256.0.0.1");
    entsift()
        .args(["--quiet", "analyze", "-i"])
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("10.0.0.1"))
        .stdout(predicate::str::contains("256.0.0.1").not());
}

#[test]
fn analyze_writes_json_file() {
    let input = write_file("released 2023-12-31");
    let out = NamedTempFile::new().expect("temp file");
    entsift()
        .args(["--quiet", "analyze", "-i"])
        .arg(input.path())
        .arg("--json-file")
        .arg(out.path())
        .assert()
        .success();

    let report: Value =
        serde_json::from_str(&std::fs::read_to_string(out.path()).expect("report file"))
            .expect("valid JSON");
    let dates = report["entries"][2]["entry"]["unique"].as_array().unwrap();
    assert_eq!(dates[0], "2023-12-31");
}

#[test]
fn custom_config_replaces_default_rules() {
    let config = write_file(
        r#"
rules:
  - category: "hex-color"
    pattern: '#[0-9a-fA-F]{6}\b'
"#,
    );
    entsift()
        .args(["--quiet", "analyze", "--config"])
        .arg(config.path())
        .write_stdin("background: #a1b2c3; color: JSON")
        .assert()
        .success()
        .stdout(predicate::str::contains("#a1b2c3"))
        .stdout(predicate::str::contains("[abbreviation]").not());
}

#[test]
fn bad_config_exits_nonzero_with_diagnostic() {
    let config = write_file(
        r#"
rules:
  - category: "dup"
    pattern: 'a+'
  - category: "dup"
    pattern: 'b+'
"#,
    );
    entsift()
        .args(["--quiet", "analyze", "--config"])
        .arg(config.path())
        .write_stdin("irrelevant")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate category name"));
}

#[test]
fn missing_input_file_exits_nonzero() {
    entsift()
        .args(["--quiet", "analyze", "-i", "/nonexistent/input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn rules_lists_default_categories() {
    entsift()
        .args(["--quiet", "rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abbreviation"))
        .stdout(predicate::str::contains("ip-address"))
        .stdout(predicate::str::contains("date"))
        .stdout(predicate::str::contains("validator: ipv4"));
}

#[test]
fn no_arguments_prints_help() {
    entsift()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
