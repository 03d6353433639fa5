// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr only, stdout is reserved for the XML)
// 3. Crawl the site breadth-first up to --depth rounds
// 4. Print the visited pages as a sitemap document
// 5. Exit with proper code (0 = success, 1 = error)
//
// Pages that fail to download don't stop the crawl; they are logged and
// skipped. Only failing to produce the sitemap itself is an error.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;     // src/cli.rs - command-line parsing
mod crawl;   // src/crawl/ - fetching, link discovery and the crawler
mod error;   // src/error.rs - typed errors
mod sitemap; // src/sitemap.rs - XML output

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::Cli;
use crawl::{Crawler, HttpFetcher};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    info!(url = %cli.url, depth = cli.depth, "building sitemap");

    let fetcher = HttpFetcher::new(Duration::from_secs(cli.timeout))
        .context("failed to create HTTP client")?;

    let pages = Crawler::new(fetcher).crawl(&cli.url, cli.depth).await;

    let xml = sitemap::render_sitemap(&pages).context("failed to write sitemap")?;
    print!("{}", xml);

    Ok(())
}
