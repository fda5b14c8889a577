//! End-to-end tests for `zahefo sites`, `zahefo site` and `zahefo services`.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn names(json: &serde_json::Value) -> Vec<&str> {
    json["sites"]
        .as_array()
        .expect("sites array")
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect()
}

// ============================================================================
// Sites Command Tests
// ============================================================================

#[test]
fn test_sites_lists_everything_by_default() {
    let config_dir = TempDir::new().unwrap();
    let output = run_zahefo(&["sites"], config_dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "sites should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Showing 6 of 6 heritage sites"));
    assert!(stdout.contains("Old Fort (Ngome Kongwe)"));
}

#[test]
fn test_sites_json_with_filters() {
    let config_dir = TempDir::new().unwrap();
    let output = run_zahefo(
        &["sites", "--status", "preserved", "--unesco", "--json"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["total"], 6);
    assert_eq!(json["shown"], 1);
    assert_eq!(names(&json), vec!["Old Fort (Ngome Kongwe)"]);
}

#[test]
fn test_sites_query_and_category() {
    let config_dir = TempDir::new().unwrap();
    let output = run_zahefo(
        &["sites", "--category", "Palace", "--query", "wonders", "--json"],
        config_dir.path(),
    );

    let json = stdout_json(&output);
    assert_eq!(names(&json), vec!["House of Wonders (Beit-al-Ajaib)"]);
}

#[test]
fn test_sites_no_match_exits_zero() {
    let config_dir = TempDir::new().unwrap();
    let output = run_zahefo(&["sites", "--query", "atlantis"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No heritage sites found."));
}

#[test]
fn test_sites_from_content_dir() {
    let config_dir = TempDir::new().unwrap();
    let content = content_dir_with_sites(&[
        site_json(1, "Jozani Forest Gate", "Natural Site", "Active", false),
        site_json(2, "Kizimkazi Mosque", "Religious Architecture", "Preserved", true),
    ]);
    let content_arg = content.path().to_str().unwrap();

    let output = run_zahefo(
        &["--content-dir", content_arg, "sites", "--unesco", "--json"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["total"], 2);
    assert_eq!(names(&json), vec!["Kizimkazi Mosque"]);
}

#[test]
fn test_sites_missing_content_dir_is_io_error() {
    let config_dir = TempDir::new().unwrap();
    let output = run_zahefo(
        &["sites", "--content-dir", "/definitely/not/here"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Content directory not found"));
}

#[test]
fn test_sites_duplicate_ids_rejected() {
    let config_dir = TempDir::new().unwrap();
    let content = content_dir_with_sites(&[
        site_json(7, "First", "Palace", "Preserved", false),
        site_json(7, "Second", "Palace", "Preserved", false),
    ]);

    let output = run_zahefo(
        &["sites", "--content-dir", content.path().to_str().unwrap()],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Duplicate heritage site id: 7"));
}

// ============================================================================
// Site Command Tests
// ============================================================================

#[test]
fn test_site_human_readable() {
    let config_dir = TempDir::new().unwrap();
    let output = run_zahefo(&["site", "5"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Old Dispensary"));
    assert!(stdout.contains("Status:    Preserved"));
    assert!(stdout.contains("Highlights:"));
}

#[test]
fn test_site_json() {
    let config_dir = TempDir::new().unwrap();
    let output = run_zahefo(&["site", "3", "--json"], config_dir.path());

    let json = stdout_json(&output);
    assert_eq!(json["id"], 3);
    assert_eq!(json["status"], "Active Heritage Area");
    assert_eq!(json["is_unesco_listed"], true);
}

#[test]
fn test_site_not_found() {
    let config_dir = TempDir::new().unwrap();
    let output = run_zahefo(&["site", "404"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Heritage site not found: 404"));
}

// ============================================================================
// Services Command Tests
// ============================================================================

#[test]
fn test_services_json() {
    let config_dir = TempDir::new().unwrap();
    let output = run_zahefo(&["services", "--json"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    let services = json.as_array().expect("services array");
    assert_eq!(services.len(), 3);
    assert_eq!(services[0]["slug"], "records-management");
}

#[test]
fn test_services_human_readable() {
    let config_dir = TempDir::new().unwrap();
    let output = run_zahefo(&["services"], config_dir.path());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Cultural Heritage Management (/services/heritage-management)"));
}
