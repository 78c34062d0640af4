//! Postdeck CLI - browse a post collection from the terminal
//!
//! Fetches the collection once, then lets the user filter by category and
//! page through the results:
//! - `filter <text>` narrows by category name
//! - `first` / `prev` / `next` / `last` move between pages
//! - `--once` prints a single view and exits, for scripting

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use postdeck_core::{BrowserConfig, BrowserStore, HttpPostSource, LoadController};
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod output;
mod session;

use error::CliResult;

/// Postdeck CLI application
#[derive(Parser)]
#[command(name = "postdeck")]
#[command(about = "Browse posts filtered by category, five to a page", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Collection endpoint (overrides the config file)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Posts per page (overrides the config file)
    #[arg(long)]
    page_size: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: output::OutputFormat,

    /// Initial category filter
    #[arg(short, long)]
    query: Option<String>,

    /// Page to show with --once
    #[arg(long, requires = "once")]
    page: Option<usize>,

    /// Print one view once the posts have loaded, then exit
    #[arg(long)]
    once: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for rendered views
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let mut config = BrowserConfig::load(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    config.validate()?;
    tracing::debug!(endpoint = %config.endpoint, page_size = config.page_size, "Config loaded");

    let source = Arc::new(HttpPostSource::new(&config.endpoint)?);
    let mut store = BrowserStore::new(config.page_size()?);
    if let Some(query) = cli.query {
        store.on_query_change(query);
    }

    let (tx, rx) = mpsc::unbounded_channel();
    let load = LoadController::new(source).spawn(tx);

    if cli.once {
        session::run_once(store, rx, load, cli.page, cli.output).await
    } else {
        let stdin = BufReader::new(tokio::io::stdin());
        session::run_interactive(store, rx, load, stdin, cli.output).await?;
        Ok(())
    }
}
