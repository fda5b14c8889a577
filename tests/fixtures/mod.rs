//! Shared test fixtures for E2E and web tests.
#![allow(dead_code)] // Each test binary uses a subset

use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

use zahefo::contact::ContactFormSubmission;

/// Path to the zahefo binary
pub fn zahefo_bin() -> String {
    std::env::var("CARGO_BIN_EXE_zahefo").unwrap_or_else(|_| "target/debug/zahefo".to_string())
}

/// Runs `zahefo` with an isolated (empty) config directory.
pub fn run_zahefo(args: &[&str], config_dir: &Path) -> Output {
    Command::new(zahefo_bin())
        .env("ZAHEFO_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// A heritage site record in fixture-file form.
pub fn site_json(id: u32, name: &str, category: &str, status: &str, unesco: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} is a test heritage site."),
        "year_built": "1900",
        "status": status,
        "image_url": format!("https://example.org/{id}.jpg"),
        "category": category,
        "is_unesco_listed": unesco,
        "highlights": ["Test highlight"]
    })
}

/// Creates a content directory holding only `heritage_sites.json`.
///
/// The other content files fall back to the embedded copies.
pub fn content_dir_with_sites(sites: &[Value]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_json(dir.path(), "heritage_sites.json", &Value::Array(sites.to_vec()));
    dir
}

/// Writes `value` as pretty JSON to `dir/name`.
pub fn write_json(dir: &Path, name: &str, value: &Value) {
    let json = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
    fs::write(dir.join(name), json).expect("Failed to write fixture");
}

/// A submission that passes every rule.
pub fn valid_submission() -> ContactFormSubmission {
    ContactFormSubmission {
        name: "Amina Salim".to_string(),
        email: "amina@example.org".to_string(),
        phone: Some("+255 777 123 456".to_string()),
        subject: "Archive digitization".to_string(),
        service: Some("Records & Information Management".to_string()),
        message: "We would like to discuss digitizing our land records.".to_string(),
    }
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}): {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}
