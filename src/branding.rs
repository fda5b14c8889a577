//! Branding and application identity configuration.
//!
//! Site-wide identity strings live here so the site can be re-branded from a
//! single place. Organization facts (mission, contact details, statistics)
//! are content, not branding, and live in the fixture files instead.

/// Short name shown in the navbar and page titles.
pub const SITE_NAME: &str = "ZAHEFO";

/// The binary/executable name of the CLI.
pub const APP_BINARY_NAME: &str = "zahefo";

/// The directory name for application data (config).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "ZAHEFO";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "ZAHEFO_CONFIG_DIR";

/// Canonical public URL of the site.
pub const SITE_URL: &str = "https://www.zahefo.com";

/// Meta description used in the HTML head.
pub const SITE_DESCRIPTION: &str = "Zanzibar Heritage Foundation - Preserving Cultural Heritage";

/// Builds a page title such as "Heritage | ZAHEFO".
pub fn page_title(section: &str) -> String {
    if section.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{section} | {SITE_NAME}")
    }
}
