//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the configuration file path
    Path,
    /// Write the default configuration file
    Init(ConfigInitArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write the default configuration file
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    force: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => execute_path(),
            ConfigCommand::Init(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self) -> CliResult<()> {
        let path = config_file_path()?;
        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "Configuration already exists at {} (use --force to overwrite)",
                path.display()
            )));
        }

        Config::new()
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Wrote default configuration to {}", path.display());
        Ok(())
    }
}

fn execute_path() -> CliResult<()> {
    println!("{}", config_file_path()?.display());
    Ok(())
}

fn config_file_path() -> CliResult<std::path::PathBuf> {
    Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to resolve config path: {e:#}")))
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Configuration");
    println!("=============");
    println!();

    println!("Server:");
    println!("  Address: {}:{}", config.server.host, config.server.port);
    println!();

    println!("Content:");
    match &config.content.dir {
        Some(dir) => println!("  Directory: {}", dir.display()),
        None => println!("  Directory: (embedded)"),
    }
    println!();

    println!("Contact:");
    println!(
        "  Simulated delay: {} ms",
        config.contact.simulated_delay_ms
    );
    println!();

    println!("Counter:");
    println!("  Duration: {} ms", config.counter.duration_ms);
    println!(
        "  Visibility threshold: {}",
        config.counter.visibility_threshold
    );
}
