//! Fixture content loading.
//!
//! The site ships its content as JSON embedded in the binary. A content
//! directory may replace any of the files to re-skin the site; files missing
//! from the directory fall back to the embedded copy.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::models::{HeritageSite, OrganizationProfile, Service, Testimonial};

/// File name of the heritage-site collection.
pub const HERITAGE_SITES_FILE: &str = "heritage_sites.json";
/// File name of the service catalog.
pub const SERVICES_FILE: &str = "services.json";
/// File name of the organization profile.
pub const ORGANIZATION_FILE: &str = "organization.json";
/// File name of the testimonial collection.
pub const TESTIMONIALS_FILE: &str = "testimonials.json";

const EMBEDDED_HERITAGE_SITES: &str = include_str!("data/heritage_sites.json");
const EMBEDDED_SERVICES: &str = include_str!("data/services.json");
const EMBEDDED_ORGANIZATION: &str = include_str!("data/organization.json");
const EMBEDDED_TESTIMONIALS: &str = include_str!("data/testimonials.json");

/// Extra service options offered by the contact form besides the catalog.
const EXTRA_CONTACT_SERVICES: [&str; 2] = ["Consultation Services", "Other"];

/// The complete, read-only content set.
#[derive(Debug, Clone)]
pub struct Content {
    heritage_sites: Vec<HeritageSite>,
    services: Vec<Service>,
    organization: OrganizationProfile,
    testimonials: Vec<Testimonial>,
}

impl Content {
    /// Loads the content embedded in the binary.
    pub fn load_embedded() -> Result<Self> {
        let content = Self {
            heritage_sites: parse(EMBEDDED_HERITAGE_SITES, HERITAGE_SITES_FILE)?,
            services: parse(EMBEDDED_SERVICES, SERVICES_FILE)?,
            organization: parse(EMBEDDED_ORGANIZATION, ORGANIZATION_FILE)?,
            testimonials: parse(EMBEDDED_TESTIMONIALS, TESTIMONIALS_FILE)?,
        };
        content.validate()?;
        Ok(content)
    }

    /// Loads content from `dir`, falling back to embedded files per file.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            anyhow::bail!("Content directory not found: {}", dir.display());
        }

        let content = Self {
            heritage_sites: read_or_embedded(dir, HERITAGE_SITES_FILE, EMBEDDED_HERITAGE_SITES)?,
            services: read_or_embedded(dir, SERVICES_FILE, EMBEDDED_SERVICES)?,
            organization: read_or_embedded(dir, ORGANIZATION_FILE, EMBEDDED_ORGANIZATION)?,
            testimonials: read_or_embedded(dir, TESTIMONIALS_FILE, EMBEDDED_TESTIMONIALS)?,
        };
        content.validate()?;
        Ok(content)
    }

    /// Loads from `dir` when given, otherwise the embedded content.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::load_from_dir(dir),
            None => Self::load_embedded(),
        }
    }

    /// Checks cross-record invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for site in &self.heritage_sites {
            if !ids.insert(site.id) {
                anyhow::bail!("Duplicate heritage site id: {}", site.id);
            }
        }

        let mut slugs = HashSet::new();
        for service in &self.services {
            if !Service::is_valid_slug(&service.slug) {
                anyhow::bail!(
                    "Service slug '{}' must be kebab-case (lowercase, digits and hyphens)",
                    service.slug
                );
            }
            if !slugs.insert(service.slug.as_str()) {
                anyhow::bail!("Duplicate service slug: {}", service.slug);
            }
        }

        for testimonial in &self.testimonials {
            if !testimonial.has_valid_rating() {
                anyhow::bail!(
                    "Testimonial {} has rating {} (expected 1-5)",
                    testimonial.id,
                    testimonial.rating
                );
            }
        }

        Ok(())
    }

    /// All heritage sites in fixture order.
    #[must_use]
    pub fn heritage_sites(&self) -> &[HeritageSite] {
        &self.heritage_sites
    }

    /// All services in fixture order.
    #[must_use]
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// The organization profile.
    #[must_use]
    pub fn organization(&self) -> &OrganizationProfile {
        &self.organization
    }

    /// All testimonials in fixture order.
    #[must_use]
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// Looks up a heritage site by id.
    #[must_use]
    pub fn site(&self, id: u32) -> Option<&HeritageSite> {
        self.heritage_sites.iter().find(|s| s.id == id)
    }

    /// Looks up a service by slug.
    #[must_use]
    pub fn service(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.slug == slug)
    }

    /// Options for the contact form's "service of interest" field.
    #[must_use]
    pub fn contact_service_options(&self) -> Vec<String> {
        self.services
            .iter()
            .map(|s| s.title.clone())
            .chain(EXTRA_CONTACT_SERVICES.iter().map(ToString::to_string))
            .collect()
    }
}

fn parse<T: DeserializeOwned>(json: &str, name: &str) -> Result<T> {
    serde_json::from_str(json).context(format!("Failed to parse {name}"))
}

fn read_or_embedded<T: DeserializeOwned>(dir: &Path, name: &str, embedded: &str) -> Result<T> {
    let path = dir.join(name);
    if !path.exists() {
        return parse(embedded, name);
    }

    let json = fs::read_to_string(&path)
        .context(format!("Failed to read content file: {}", path.display()))?;
    serde_json::from_str(&json).context(format!("Failed to parse {}", path.display()))
}
