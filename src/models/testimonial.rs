//! Client testimonials.

use serde::{Deserialize, Serialize};

/// Highest rating a testimonial can carry.
pub const MAX_RATING: u8 = 5;

/// A quote from a partner or client.
///
/// # Validation
///
/// - `rating` must be in `1..=5` (checked at load time)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Unique identifier
    pub id: u32,
    /// Person quoted
    pub name: String,
    /// Their role
    pub role: String,
    /// Their organization
    pub organization: String,
    /// The quote itself
    pub quote: String,
    /// Portrait URL
    pub image_url: String,
    /// Star rating
    pub rating: u8,
}

impl Testimonial {
    /// Returns true if the rating is within `1..=MAX_RATING`.
    #[must_use]
    pub fn has_valid_rating(&self) -> bool {
        (1..=MAX_RATING).contains(&self.rating)
    }

    /// Star string for display, e.g. "★★★★☆".
    #[must_use]
    pub fn stars(&self) -> String {
        let filled = self.rating.min(MAX_RATING) as usize;
        let empty = MAX_RATING as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}
