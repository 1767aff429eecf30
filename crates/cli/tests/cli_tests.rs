//! CLI integration tests

use std::io::Write;
use std::process::Command;

fn cra(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "-p", "cra-cli", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = cra(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("Cloud Resource Analyzer"),
        "Should show app name"
    );
    assert!(stdout.contains("analyze"), "Should show analyze command");
    assert!(stdout.contains("metrics"), "Should show metrics command");
    assert!(stdout.contains("demo"), "Should show demo command");
    assert!(stdout.contains("template"), "Should show template command");
    assert!(stdout.contains("rate"), "Should show rate command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = cra(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("cra"), "Should show binary name");
}

#[test]
fn test_template_lists_required_fields() {
    let output = cra(&["template"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("resource_id"));
    assert!(stdout.contains("real_time_usage"));
}

#[test]
fn test_rate_out_of_range_uses_fallback() {
    let output = cra(&["rate", "9"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("scale of 1-5"));
}

#[test]
fn test_greet_default_response() {
    let output = cra(&["greet", "hello there"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Greetings!"));
}

#[test]
fn test_demo_prints_full_report() {
    let output = cra(&["demo"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "demo should succeed");
    assert!(stdout.contains("# Data Validation Report"));
    assert!(stdout.contains("Total Resources Evaluated: 8"));
    assert!(stdout.contains("Scaling up is recommended for server1"));
}

#[test]
fn test_analyze_file_input() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{"resources": [{{"resource_id": "s1", "current_load": 50, "max_capacity": 100, "real_time_usage": 40}}]}}"#
    )
    .expect("write temp file");

    let path = file.path().to_string_lossy().to_string();
    let output = cra(&["analyze", &path]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "analyze should succeed");
    assert!(stdout.contains("No scaling is required for s1"));
}

#[test]
fn test_analyze_rejects_invalid_document() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{"resources": [{{"resource_id": "s1", "current_load": 150, "max_capacity": 100, "real_time_usage": 40}}]}}"#
    )
    .expect("write temp file");

    let path = file.path().to_string_lossy().to_string();
    let output = cra(&["analyze", &path]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "invalid input should fail");
    assert!(stderr.contains("ERROR: Invalid value for the field(s): current_load in record 1."));
}

#[test]
fn test_metrics_json_output() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{"resources": [{{"resource_id": "s1", "current_load": 65, "max_capacity": 80, "real_time_usage": 70}}]}}"#
    )
    .expect("write temp file");

    let path = file.path().to_string_lossy().to_string();
    let output = cra(&["metrics", &path, "--format", "json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "metrics should succeed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("JSON output");
    assert_eq!(parsed[0]["available_capacity"], 15.0);
    assert_eq!(parsed[0]["utilization_ratio"], 81.25);
    assert_eq!(parsed[0]["additional_capacity_needed"], 35.0);
}
