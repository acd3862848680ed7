//! # News Harvester
//!
//! A keyword-driven news scraper: searches a search engine's news results
//! for a fixed set of keywords, follows each result link, and extracts the
//! full article text plus metadata (author, publish date, images) into CSV
//! and optional JSON output.
//!
//! ## Features
//!
//! - Paginated search-result fetching with primary/fallback selectors
//! - Per-article content extraction over an ordered list of template
//!   layouts, with author/date/image metadata
//! - Language, country, and time filtering (relative period or explicit
//!   date window)
//! - Rotating User-Agent pool and randomized inter-page delays
//! - Per-article failures degrade to placeholder values; the run always
//!   produces whatever it managed to collect
//!
//! ## Usage
//!
//! ```sh
//! news_harvester -k "patent lawyer" -k inventor -n 50 -o news.csv
//! ```
//!
//! ## Architecture
//!
//! The application is a sequential pipeline:
//! 1. **Search**: Fetch one page of news results and parse the items
//! 2. **Extract**: Fetch each item's article and pull content + metadata
//! 3. **Paginate**: Advance pages with a random delay until the results
//!    end or the article limit is hit
//! 4. **Output**: Write the assembled records to CSV (and JSON on request)

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod article;
mod cli;
mod config;
mod error;
mod fetch;
mod locale;
mod models;
mod outputs;
mod scrape;
mod search;
mod selectors;
mod utils;

use cli::Cli;
use config::ScraperConfig;
use fetch::HttpFetcher;
use outputs::{csv, json};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_harvester starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.keywords, ?args.limit, ?args.output, "Parsed CLI arguments");

    // Build and validate the run configuration before touching the network.
    let config = match ScraperConfig::new(
        args.keywords,
        args.limit,
        &args.language,
        &args.country,
        args.period,
        args.after,
        args.before,
    ) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    let fetcher = HttpFetcher::new()?;

    // ---- Scrape ----
    let records = scrape::run(&fetcher, &config).await;

    if records.is_empty() {
        warn!("No news articles found or an error occurred during scraping");
        return Ok(());
    }

    // ---- Outputs ----
    if let Err(e) = csv::write_csv_file(&records, &args.output).await {
        error!(path = %args.output, error = %e, "Failed writing CSV");
        return Err(e);
    }

    if let Some(ref json_path) = args.json_output {
        if let Err(e) = json::write_json_file(&records, json_path).await {
            error!(path = %json_path, error = %e, "Failed writing JSON");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        articles = records.len(),
        "Execution complete"
    );

    Ok(())
}
