//! Shared CLI plumbing: error type, exit codes and content loading.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::content::Content;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Input was rejected (invalid form, unknown id, bad arguments)
    ValidationError = 1,
    /// Content, config or output could not be read or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A failed CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Rejected input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O, content or config failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result of a CLI command.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the site configuration, mapping failures to an I/O error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
}

/// Loads content from `content_dir`, else the configured directory, else the
/// embedded fixtures.
pub fn load_content(content_dir: Option<&Path>) -> CliResult<Content> {
    let configured = match content_dir {
        Some(_) => None,
        None => load_config()?.content.dir,
    };
    let dir = content_dir.or(configured.as_deref());

    Content::load(dir).map_err(|e| CliError::io(format!("Failed to load content: {e:#}")))
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
