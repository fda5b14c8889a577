//! Service catalog command.

use std::path::Path;

use clap::Args;

use crate::cli::common::{load_content, print_json, CliResult};

/// List the service catalog
#[derive(Debug, Clone, Args)]
pub struct ServicesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ServicesArgs {
    /// Execute the services command
    pub fn execute(&self, content_dir: Option<&Path>) -> CliResult<()> {
        let content = load_content(content_dir)?;

        if self.json {
            return print_json(&content.services());
        }

        for service in content.services() {
            println!("{} ({})", service.title, service.path());
            println!("  {}", service.tagline);
            for feature in &service.features {
                println!("  - {feature}");
            }
            println!();
        }

        Ok(())
    }
}
