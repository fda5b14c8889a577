//! Service catalog entries.

use serde::{Deserialize, Serialize};

use super::{Accent, Icon};

/// A professional service offered by the organization.
///
/// # Validation
///
/// - `slug` must be unique and kebab-case (checked at load time)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Unique identifier
    pub id: u32,
    /// Display title
    pub title: String,
    /// URL slug (e.g. "records-management")
    pub slug: String,
    /// Card icon
    pub icon: Icon,
    /// Presentational accent
    #[serde(default)]
    pub accent: Accent,
    /// One-line tagline
    pub tagline: String,
    /// Long description
    pub description: String,
    /// Ordered feature list
    #[serde(default)]
    pub features: Vec<String>,
    /// Ordered benefit list
    #[serde(default)]
    pub benefits: Vec<String>,
}

impl Service {
    /// Site-relative URL of the service detail page.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/services/{}", self.slug)
    }

    /// Returns true if `slug` is lowercase kebab-case.
    #[must_use]
    pub fn is_valid_slug(slug: &str) -> bool {
        !slug.is_empty()
            && !slug.starts_with('-')
            && !slug.ends_with('-')
            && !slug.contains("--")
            && slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}
