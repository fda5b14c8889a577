//! Named site sections.
//!
//! Every top-level page is one variant; the navbar and the router are both
//! built from [`Section::ALL`], so adding a section is a compile-checked
//! change in one place.

use serde::Serialize;

/// A top-level page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Landing page with hero and highlights
    Home,
    /// Organization profile, values and board
    About,
    /// Service catalog
    Services,
    /// Heritage site gallery
    Heritage,
    /// Impact statistics and achievements
    Impact,
    /// Contact details and form
    Contact,
}

impl Section {
    /// All sections in navbar order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::About,
        Self::Services,
        Self::Heritage,
        Self::Impact,
        Self::Contact,
    ];

    /// Route path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Services => "/services",
            Self::Heritage => "/heritage",
            Self::Impact => "/impact",
            Self::Contact => "/contact",
        }
    }

    /// Navbar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Heritage => "Heritage",
            Self::Impact => "Impact",
            Self::Contact => "Contact",
        }
    }

    /// Resolves a request path to the section that owns it.
    ///
    /// Detail pages belong to their parent section, so `/services/x` is
    /// `Services`. Trailing slashes are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Self::Home);
        }
        Self::ALL.into_iter().filter(|s| *s != Self::Home).find(|s| {
            trimmed == s.path()
                || trimmed
                    .strip_prefix(s.path())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
