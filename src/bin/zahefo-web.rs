//! ZAHEFO Web Server Binary
//!
//! Serves the heritage foundation website and its JSON API.
//!
//! # Usage
//!
//! ```bash
//! # Start with the configured settings (port 3001 by default)
//! zahefo-web
//!
//! # Override the listener and load fixture overrides
//! zahefo-web --port 8080 --content-dir ./content
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zahefo::config::Config;
use zahefo::content::Content;
use zahefo::web;

/// ZAHEFO Web Server - heritage foundation website
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Directory with JSON fixture files overriding the embedded content
    #[arg(short, long, value_name = "DIR")]
    content_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring invalid configuration: {e:#}");
            Config::default()
        }
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(dir) = args.content_dir {
        config.content.dir = Some(dir);
    }
    config.validate()?;

    let content = Content::load(config.content.dir.as_deref())?;
    match &config.content.dir {
        Some(dir) => info!("Content loaded from {}", dir.display()),
        None => info!("Using embedded content"),
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid listen address")?;

    web::run_server(config, content, addr).await
}
