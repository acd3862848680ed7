//! Command-line interface definitions.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Language, country, and date filters are validated later against the
//! supported-locale tables when the run configuration is built.

use chrono::NaiveDate;
use clap::Parser;

use crate::config::{DEFAULT_COUNTRY, DEFAULT_LANGUAGE};

/// Command-line arguments for the news harvester.
///
/// # Examples
///
/// ```sh
/// # Five articles about patent law, US English results
/// news_harvester -k "patent lawyer" -k "ip enforcement" -n 5
///
/// # German results from the last six months, JSON alongside the CSV
/// news_harvester -k inventor -l de -c Germany -p 6m --json-output news.json
///
/// # Explicit date window (any period flag would be ignored)
/// news_harvester -k inventor --after 2025-01-01 --before 2025-06-30
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Search keyword; repeat the flag for a keyword disjunction
    #[arg(short, long = "keyword", required = true)]
    pub keywords: Vec<String>,

    /// Maximum number of articles to scrape (unbounded when omitted)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Result language code, e.g. "en", "de"
    #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Result country, by name ("United States") or ISO code ("US")
    #[arg(short, long, default_value = DEFAULT_COUNTRY)]
    pub country: String,

    /// Relative time window, e.g. "1y", "6m"; ignored when --after/--before is set
    #[arg(short, long)]
    pub period: Option<String>,

    /// Only results published on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub after: Option<NaiveDate>,

    /// Only results published on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub before: Option<NaiveDate>,

    /// Output CSV file path
    #[arg(short, long, default_value = "news_data.csv")]
    pub output: String,

    /// Optional JSON output file path
    #[arg(long)]
    pub json_output: Option<String>,
}
