//! orgscout - find out who is behind an email address
//!
//! Loads the landing page of each address's domain and prints what it says
//! about the organisation.

mod config;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use orgscout::{render, HttpFetcher, Scout};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::EnvConfig;

#[derive(Parser)]
#[command(name = "orgscout", version)]
#[command(about = "Find organisation details for the domains of email addresses")]
struct Cli {
    /// Email addresses to look up
    #[arg(num_args = 0..)]
    addresses: Vec<String>,

    /// Print JSON-LD instead of human-readable output
    #[arg(short = 'j', long = "json-ld")]
    json_ld: bool,

    /// Maximum number of addresses processed at once
    #[arg(long)]
    concurrency: Option<usize>,

    /// Fetch timeout in seconds
    #[arg(long = "timeout")]
    timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long)]
    user_agent: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so they never mix with the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,orgscout=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();

    let cli = Cli::parse();

    if cli.addresses.is_empty() {
        eprintln!("{}", "No address specified.".red());
        Cli::command()
            .print_help()
            .context("Failed to print help")?;
        return Ok(ExitCode::FAILURE);
    }

    let config = EnvConfig::from_env()?.into_scout_config(
        cli.concurrency,
        cli.timeout_secs,
        cli.user_agent,
    );
    let fetcher = HttpFetcher::new(&config).context("Failed to build HTTP client")?;
    let scout = Scout::new(fetcher, config);

    let outcomes = scout.run(&cli.addresses).await;

    if cli.json_ld {
        println!(
            "{}",
            render::json_ld(&outcomes).context("Failed to serialize records")?
        );
    } else {
        println!("{}", render::human_readable(&outcomes));
    }

    Ok(ExitCode::SUCCESS)
}
