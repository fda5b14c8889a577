//! Data models for the site content.
//!
//! Every model is immutable fixture data: it is deserialized once at startup
//! and only ever read afterwards. Models are independent of rendering.

pub mod accent;
pub mod heritage;
pub mod icon;
pub mod organization;
pub mod service;
pub mod testimonial;

// Re-export all model types
pub use accent::Accent;
pub use heritage::{HeritageSite, SiteStatus};
pub use icon::Icon;
pub use organization::{
    Achievement, BoardMember, Certification, ContactDetails, CoreValue, ImpactArea,
    OrganizationProfile, SocialLinks, Stat,
};
pub use service::Service;
pub use testimonial::Testimonial;
