//! End-to-end tests for `zahefo config` commands.

use std::fs;

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let config_dir = TempDir::new().unwrap();
    let output = run_zahefo(&["config", "show"], config_dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Address: 127.0.0.1:3001"));
    assert!(stdout.contains("Directory: (embedded)"));
}

#[test]
fn test_config_show_json() {
    let config_dir = TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[server]\nport = 8080\n\n[contact]\nsimulated_delay_ms = 0\n",
    )
    .unwrap();

    let output = run_zahefo(&["config", "show", "--json"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["server"]["port"], 8080);
    assert_eq!(json["server"]["host"], "127.0.0.1");
    assert_eq!(json["contact"]["simulated_delay_ms"], 0);
    assert_eq!(json["counter"]["duration_ms"], 2500);
}

#[test]
fn test_config_show_invalid_file() {
    let config_dir = TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[counter]\nvisibility_threshold = 2.0\n",
    )
    .unwrap();

    let output = run_zahefo(&["config", "show"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("visibility threshold"));
}

// ============================================================================
// Path and Init Command Tests
// ============================================================================

#[test]
fn test_config_path() {
    let config_dir = TempDir::new().unwrap();
    let output = run_zahefo(&["config", "path"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let expected = config_dir.path().join("config.toml");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        expected.display().to_string()
    );
}

#[test]
fn test_config_init_writes_defaults() {
    let config_dir = TempDir::new().unwrap();
    let output = run_zahefo(&["config", "init"], config_dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "init should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let written = fs::read_to_string(config_dir.path().join("config.toml")).unwrap();
    assert!(written.contains("[server]"));
    assert!(written.contains("port = 3001"));
    assert!(written.contains("simulated_delay_ms = 1500"));
}

#[test]
fn test_config_init_requires_force_to_overwrite() {
    let config_dir = TempDir::new().unwrap();
    let path = config_dir.path().join("config.toml");
    fs::write(&path, "[server]\nport = 9000\n").unwrap();

    let output = run_zahefo(&["config", "init"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(fs::read_to_string(&path).unwrap().contains("9000"));

    let output = run_zahefo(&["config", "init", "--force"], config_dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(fs::read_to_string(&path).unwrap().contains("port = 3001"));
}
