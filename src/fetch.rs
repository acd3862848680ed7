//! Page fetching behind a small trait seam.
//!
//! The pipeline never talks to the network directly; it goes through the
//! [`FetchPage`] trait. [`HttpFetcher`] is the production implementation
//! (reqwest, per-request timeout, rotating User-Agent), and tests substitute
//! an in-memory fixture fetcher serving static HTML.
//!
//! Search pages and article pages use different timeouts, so the timeout is
//! a per-call argument rather than client state.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::USER_AGENT;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::utils::random_user_agent;

/// Blocking-style page fetch: one URL in, the response body out.
///
/// A timeout is treated identically to any other transport failure; both
/// surface as [`FetchError`]. Callers decide whether a failure is fatal for
/// the run (search page) or local to one record (article page).
pub trait FetchPage {
    /// Fetch `url` and return the response body as text.
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError>;
}

/// HTTP implementation of [`FetchPage`].
///
/// Each request picks a fresh User-Agent from the fixed pool and carries its
/// own timeout. Non-2xx responses are returned as [`FetchError::Status`] so
/// the status code reaches the log line.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

impl FetchPage for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        let user_agent = random_user_agent();
        debug!(%url, ?timeout, user_agent, "Fetching page");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Request returned non-success status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
