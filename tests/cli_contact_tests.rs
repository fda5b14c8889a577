//! End-to-end tests for `zahefo contact validate`.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_valid_submission() {
    let config_dir = TempDir::new().unwrap();
    let output = run_zahefo(
        &[
            "contact",
            "validate",
            "--name",
            "Amina Salim",
            "--email",
            "amina@example.org",
            "--subject",
            "Training request",
            "--message",
            "Our staff would like to join the next archives course.",
            "--service",
            "Training & Capacity Building",
        ],
        config_dir.path(),
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "valid submission should pass. stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Submission is valid"));
}

#[test]
fn test_invalid_submission_json() {
    let config_dir = TempDir::new().unwrap();
    let output = run_zahefo(
        &[
            "contact",
            "validate",
            "--name",
            " J ",
            "--email",
            "j@zanzibar",
            "--subject",
            "Hello",
            "--message",
            "Hi there",
            "--json",
        ],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["valid"], false);
    let errors = json["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors["name"], "Name must be at least 2 characters long");
    assert_eq!(errors["email"], "Please enter a valid email address");
    assert_eq!(errors["message"], "Message must be at least 10 characters long");
}

#[test]
fn test_missing_fields_are_reported() {
    let config_dir = TempDir::new().unwrap();
    let output = run_zahefo(&["contact", "validate"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("4 error(s)"));
    assert!(stdout.contains("subject: Subject must be at least 3 characters long"));
}

#[test]
fn test_phone_and_service_checks() {
    let config_dir = TempDir::new().unwrap();
    let output = run_zahefo(
        &[
            "contact",
            "validate",
            "--name",
            "Amina",
            "--email",
            "amina@example.org",
            "--subject",
            "Question",
            "--message",
            "When are you open for visitors?",
            "--phone",
            "call me maybe",
            "--service",
            "Catering",
            "--json",
        ],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert!(json["errors"]["phone"].is_string());
    assert!(json["errors"]["service"].is_string());
}
