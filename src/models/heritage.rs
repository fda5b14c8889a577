//! Heritage site records.

use serde::{Deserialize, Serialize};

/// Conservation status of a heritage site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteStatus {
    /// Conserved and stable
    #[serde(rename = "Preserved")]
    Preserved,
    /// Restoration work in progress
    #[serde(rename = "Under Restoration")]
    UnderRestoration,
    /// Inhabited historic district under heritage protection
    #[serde(rename = "Active Heritage Area")]
    ActiveHeritageArea,
    /// In everyday use (e.g. a place of worship)
    #[serde(rename = "Active")]
    Active,
}

impl SiteStatus {
    /// All statuses in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Preserved,
        Self::UnderRestoration,
        Self::ActiveHeritageArea,
        Self::Active,
    ];

    /// Human-readable label, identical to the fixture value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Preserved => "Preserved",
            Self::UnderRestoration => "Under Restoration",
            Self::ActiveHeritageArea => "Active Heritage Area",
            Self::Active => "Active",
        }
    }

    /// URL-friendly form of the label, e.g. `under-restoration`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Preserved => "preserved",
            Self::UnderRestoration => "under-restoration",
            Self::ActiveHeritageArea => "active-heritage-area",
            Self::Active => "active",
        }
    }

    /// Parses a label or slug, ignoring ASCII case.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(value) || s.slug().eq_ignore_ascii_case(value))
    }
}

impl std::fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single conserved location.
///
/// # Validation
///
/// - `id` must be unique within the content set (checked at load time)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeritageSite {
    /// Unique identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Long description
    pub description: String,
    /// Free-form era label ("1699", "18th-19th Century")
    pub year_built: String,
    /// Conservation status
    pub status: SiteStatus,
    /// Hero image URL
    pub image_url: String,
    /// Free-form category ("Fortification", "Palace")
    pub category: String,
    /// Whether the site is on the UNESCO World Heritage list
    #[serde(default)]
    pub is_unesco_listed: bool,
    /// Ordered highlight bullet points
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl HeritageSite {
    /// Short excerpt of the description for list cards.
    #[must_use]
    pub fn excerpt(&self, max_chars: usize) -> String {
        if self.description.chars().count() <= max_chars {
            return self.description.clone();
        }

        let cut: String = self.description.chars().take(max_chars).collect();
        let trimmed = match cut.rfind(' ') {
            Some(idx) if idx > 0 => &cut[..idx],
            _ => cut.as_str(),
        };
        format!("{}…", trimmed.trim_end_matches([',', '.', ';']))
    }
}
