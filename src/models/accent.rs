//! Accent colors used to tint cards, stats and badges.

use serde::{Deserialize, Serialize};

/// Presentational accent color.
///
/// Fixtures name the accent; rendering maps it to a CSS modifier class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Amber (brand default)
    #[default]
    Amber,
    /// Blue
    Blue,
    /// Green
    Green,
    /// Purple
    Purple,
    /// Pink
    Pink,
    /// Indigo
    Indigo,
    /// Yellow
    Yellow,
    /// Red
    Red,
}

impl Accent {
    /// Returns the CSS modifier class, e.g. `accent-amber`.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Amber => "accent-amber",
            Self::Blue => "accent-blue",
            Self::Green => "accent-green",
            Self::Purple => "accent-purple",
            Self::Pink => "accent-pink",
            Self::Indigo => "accent-indigo",
            Self::Yellow => "accent-yellow",
            Self::Red => "accent-red",
        }
    }
}
