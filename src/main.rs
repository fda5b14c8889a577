//! ZAHEFO command-line tool.
//!
//! Inspects the site content, runs the heritage directory filter, validates
//! contact submissions and previews counter animations without starting the
//! web server.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zahefo::cli::{
    CliResult, ConfigArgs, ContactArgs, CounterArgs, ServicesArgs, SiteArgs, SitesArgs,
};

/// ZAHEFO - Zanzibar Heritage Foundation site tooling
#[derive(Parser, Debug)]
#[command(name = "zahefo", author, version, about, long_about = None)]
struct Cli {
    /// Directory with JSON fixture files overriding the embedded content
    #[arg(long, global = true, value_name = "DIR")]
    content_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List heritage sites, optionally filtered
    Sites(SitesArgs),
    /// Show one heritage site
    Site(SiteArgs),
    /// List the service catalog
    Services(ServicesArgs),
    /// Contact form commands
    Contact(ContactArgs),
    /// Preview the frames of an animated counter
    Counter(CounterArgs),
    /// Configuration management
    Config(ConfigArgs),
}

impl Cli {
    fn run(&self) -> CliResult<()> {
        let content_dir = self.content_dir.as_deref();
        match &self.command {
            Command::Sites(args) => args.execute(content_dir),
            Command::Site(args) => args.execute(content_dir),
            Command::Services(args) => args.execute(content_dir),
            Command::Contact(args) => args.execute(content_dir),
            Command::Counter(args) => args.execute(),
            Command::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays clean
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.run() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}
