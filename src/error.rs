//! Error types for fetching and configuration.
//!
//! Two failure families exist, with different blast radii:
//!
//! - [`FetchError`]: a transport-level failure (network, timeout, or HTTP
//!   status) on a page fetch. Fatal for the run when it happens on a search
//!   page, local to a single record when it happens on an article page.
//! - [`ConfigError`]: a caller error in the scraper configuration, surfaced
//!   before any network activity.
//!
//! Selector misses are not errors; they resolve to placeholder values so the
//! record shape stays uniform.

use thiserror::Error;

/// A failed page fetch.
///
/// Timeouts surface through the [`FetchError::Transport`] variant like any
/// other network failure; non-2xx responses get their own variant so the
/// status code survives into the log line.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-level failure from reqwest (DNS, connect, timeout, body read).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP status {status} fetching {url}")]
    Status { status: u16, url: String },
}

/// An invalid scraper configuration supplied by the caller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Language code not in the supported enumeration.
    #[error("unsupported language code: {0}")]
    UnsupportedLanguage(String),

    /// Country name or code not in the supported enumeration.
    #[error("unsupported country: {0}")]
    UnsupportedCountry(String),

    /// The keyword list was empty.
    #[error("at least one search keyword is required")]
    NoKeywords,
}
