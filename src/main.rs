//! MPR Site - replay a scripted session against the site's page logic
//!
//! Loads a scenario (document, path and user events), runs it through the
//! page components and prints the resulting report as JSON.

use anyhow::Result;
use clap::Parser;
use mpr_site::config::SiteConfig;
use mpr_site::scenario::Scenario;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "mpr-site", version, about = "Replay a page session script")]
struct Cli {
    /// Scenario file (JSON)
    scenario: PathBuf,

    /// Wait on real timers instead of a virtual clock
    #[arg(long)]
    realtime: bool,

    /// Site configuration file, defaults to the per-user config
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mpr_site=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SiteConfig::load_from(path)?,
        None => SiteConfig::load()?,
    };
    let scenario = Scenario::from_file(&cli.scenario)?;

    let report = if cli.realtime {
        scenario.run_realtime(&config).await?
    } else {
        scenario.run(&config)?
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
