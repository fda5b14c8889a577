//! CLI command handlers for ZAHEFO.
//!
//! Headless, scriptable access to the site content, the heritage directory
//! filter, contact validation and counter previews.

pub mod common;
pub mod config;
pub mod contact;
pub mod counter;
pub mod services;
pub mod sites;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use contact::ContactArgs;
pub use counter::CounterArgs;
pub use services::ServicesArgs;
pub use sites::{SiteArgs, SitesArgs};
