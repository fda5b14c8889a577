//! Heritage site directory commands.

use std::path::Path;

use clap::Args;
use serde::Serialize;

use crate::cli::common::{load_content, print_json, CliError, CliResult};
use crate::directory::{Facets, SiteFilter};
use crate::models::HeritageSite;

/// List heritage sites, optionally filtered
#[derive(Debug, Clone, Args)]
pub struct SitesArgs {
    /// Only sites in this category (exact label, or "all")
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Only sites with this status (label or slug, e.g. "under-restoration")
    #[arg(long, value_name = "STATUS")]
    pub status: Option<String>,

    /// Case-insensitive text matched against name and description
    #[arg(short, long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Only UNESCO-listed sites
    #[arg(long)]
    pub unesco: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Show one heritage site
#[derive(Debug, Clone, Args)]
pub struct SiteArgs {
    /// Heritage site id
    #[arg(value_name = "ID")]
    pub id: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct SiteListOutput<'a> {
    sites: Vec<&'a HeritageSite>,
    total: usize,
    shown: usize,
    categories: Vec<String>,
    statuses: Vec<String>,
}

impl SitesArgs {
    /// Builds the directory filter from the flags.
    #[must_use]
    pub fn filter(&self) -> SiteFilter {
        SiteFilter::from_params(
            self.category.as_deref(),
            self.status.as_deref(),
            self.query.as_deref(),
            None,
        )
        .with_unesco_only(self.unesco)
    }

    /// Execute the sites command
    pub fn execute(&self, content_dir: Option<&Path>) -> CliResult<()> {
        let content = load_content(content_dir)?;
        let all = content.heritage_sites();
        let results = self.filter().apply(all);

        if self.json {
            let facets = Facets::from_sites(all);
            return print_json(&SiteListOutput {
                shown: results.len(),
                total: all.len(),
                sites: results,
                categories: facets.categories,
                statuses: facets.statuses,
            });
        }

        if results.is_empty() {
            println!("No heritage sites found.");
            println!("Clear the filters to see all {} sites.", all.len());
            return Ok(());
        }

        println!("Showing {} of {} heritage sites", results.len(), all.len());
        println!();
        for site in &results {
            let unesco = if site.is_unesco_listed { "  UNESCO" } else { "" };
            println!("{:>3}  {}", site.id, site.name);
            println!(
                "     {} | {} | {}{}",
                site.category, site.status, site.year_built, unesco
            );
        }

        Ok(())
    }
}

impl SiteArgs {
    /// Execute the site command
    pub fn execute(&self, content_dir: Option<&Path>) -> CliResult<()> {
        let content = load_content(content_dir)?;
        let site = content
            .site(self.id)
            .ok_or_else(|| CliError::validation(format!("Heritage site not found: {}", self.id)))?;

        if self.json {
            return print_json(site);
        }

        println!("{}", site.name);
        println!("{}", "=".repeat(site.name.chars().count()));
        println!();
        println!("Category:  {}", site.category);
        println!("Status:    {}", site.status);
        println!("Built:     {}", site.year_built);
        println!(
            "UNESCO:    {}",
            if site.is_unesco_listed { "yes" } else { "no" }
        );
        println!();
        println!("{}", site.description);

        if !site.highlights.is_empty() {
            println!();
            println!("Highlights:");
            for highlight in &site.highlights {
                println!("  - {highlight}");
            }
        }

        Ok(())
    }
}
