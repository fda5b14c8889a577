//! Organization profile: the singleton record read by most pages.

use serde::{Deserialize, Serialize};

use super::{Accent, Icon};

/// Postal and electronic contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    /// Street address
    pub address: String,
    /// City and island
    pub city: String,
    /// Country
    pub country: String,
    /// Phone number as displayed
    pub phone: String,
    /// Contact email
    pub email: String,
    /// Website host (without scheme)
    pub website: String,
}

impl ContactDetails {
    /// Phone number reduced to a `tel:` URI.
    #[must_use]
    pub fn phone_uri(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

/// Social network profile links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SocialLinks {
    /// Facebook page
    #[serde(default)]
    pub facebook: String,
    /// Twitter / X profile
    #[serde(default)]
    pub twitter: String,
    /// Instagram profile
    #[serde(default)]
    pub instagram: String,
    /// LinkedIn company page
    #[serde(default)]
    pub linkedin: String,
}

impl SocialLinks {
    /// `(network name, url)` pairs for every non-empty link.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Facebook", self.facebook.as_str()),
            ("Twitter", self.twitter.as_str()),
            ("Instagram", self.instagram.as_str()),
            ("LinkedIn", self.linkedin.as_str()),
        ]
        .into_iter()
        .filter(|(_, url)| !url.is_empty())
        .collect()
    }
}

/// Headline statistic ("Years of Excellence", "25+").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// Caption
    pub label: String,
    /// Display value, possibly with prefix/suffix ("25+", "98%")
    pub value: String,
    /// Icon
    pub icon: Icon,
    /// Presentational accent
    #[serde(default)]
    pub accent: Accent,
}

/// Board member entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardMember {
    /// Full name
    pub name: String,
    /// Board role
    pub role: String,
    /// Phone number
    pub phone: String,
    /// Email address
    pub email: String,
    /// Area of expertise
    pub expertise: String,
    /// Short biography
    pub bio: String,
}

impl BoardMember {
    /// Initials used for the avatar placeholder ("Abdalla Khamis" -> "AK").
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .filter(|c| c.is_alphabetic())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Core organizational value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreValue {
    /// Icon
    pub icon: Icon,
    /// Value name
    pub title: String,
    /// One-sentence description
    pub description: String,
}

/// Award received by the organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Year awarded
    pub year: String,
    /// Award title
    pub title: String,
    /// Short description
    pub description: String,
    /// Icon
    pub icon: Icon,
    /// Presentational accent
    #[serde(default)]
    pub accent: Accent,
}

/// Certification or formal partnership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    /// Certification name
    pub name: String,
    /// Issuing body or scope
    pub description: String,
    /// Year obtained
    pub year: String,
}

/// Area of impact with headline metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactArea {
    /// Icon
    pub icon: Icon,
    /// Area title
    pub title: String,
    /// Description paragraph
    pub description: String,
    /// Short metric labels
    #[serde(default)]
    pub metrics: Vec<String>,
}

/// The organization's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationProfile {
    /// Full name
    pub name: String,
    /// Acronym
    pub short_name: String,
    /// Tagline used in the hero
    pub tagline: String,
    /// About paragraph
    pub description: String,
    /// Vision statement
    pub vision: String,
    /// Mission statement
    pub mission: String,
    /// Year of establishment
    pub established: String,
    /// Contact details
    pub contact: ContactDetails,
    /// Social links
    #[serde(default)]
    pub social_links: SocialLinks,
    /// Headline statistics
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// Board members
    #[serde(default)]
    pub board_members: Vec<BoardMember>,
    /// Core values
    #[serde(default)]
    pub values: Vec<CoreValue>,
    /// Awards
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    /// Certifications
    #[serde(default)]
    pub certifications: Vec<Certification>,
    /// Impact areas
    #[serde(default)]
    pub impact_areas: Vec<ImpactArea>,
}
