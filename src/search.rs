//! Search-results page fetching and item parsing.
//!
//! One search page yields a list of result items, each resolved field by
//! field through the selector chains below. The provider's markup changes
//! over time, so every field carries a primary and a fallback selector; a
//! field whose chain misses gets a fixed placeholder rather than sinking the
//! whole item. The one hard requirement is the link: an item without one is
//! skipped.
//!
//! Callers distinguish three outcomes: a transport failure (`Err`), a page
//! with zero items (`Ok` with an empty list, meaning markup drift or true
//! end of results), and a normal page.

use std::time::Duration;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html};
use tracing::{info, warn};
use url::Url;

use crate::error::FetchError;
use crate::fetch::FetchPage;
use crate::models::SearchResultItem;
use crate::selectors::{Extract, FieldRule, query, query_all, resolve};

/// Result-item container selectors, primary then fallback.
pub const RESULT_ITEM_SELECTORS: &[&str] = &["div.SoaBEf", "div.Gx5Zad"];

const TITLE_RULE: FieldRule = FieldRule {
    selectors: &["div.MBeuO", "div.BNeawe.vvjwJb.AP7Wnd"],
    mode: Extract::Text,
};
const SNIPPET_RULE: FieldRule = FieldRule {
    selectors: &[".GI74Re", ".BNeawe.s3v9rd.AP7Wnd"],
    mode: Extract::Text,
};
const DATE_RULE: FieldRule = FieldRule {
    selectors: &[".LfVVr", ".NUnG9d > span"],
    mode: Extract::Text,
};
const SOURCE_RULE: FieldRule = FieldRule {
    selectors: &[".NUnG9d span", ".BNeawe.UPmit.AP7Wnd"],
    mode: Extract::Text,
};

pub const TITLE_PLACEHOLDER: &str = "Title Not Found";
pub const SNIPPET_PLACEHOLDER: &str = "Snippet Not Found";
pub const DATE_PLACEHOLDER: &str = "Date Not Found";
pub const SOURCE_PLACEHOLDER: &str = "Source Not Found";

/// Relative result links are rewritten against the search host.
static SEARCH_HOST: Lazy<Url> =
    Lazy::new(|| Url::parse("https://www.google.com").unwrap());

/// Fetch one page of search results and parse its items.
///
/// The page index is for logging only; the caller encodes the pagination
/// offset into the URL. A transport failure propagates as `Err`; a page
/// where neither item selector matches anything returns `Ok` with an empty
/// list so the caller can treat it as end-of-results.
pub async fn fetch_search_page<F: FetchPage>(
    fetcher: &F,
    url: &str,
    page: usize,
    timeout: Duration,
) -> Result<Vec<SearchResultItem>, FetchError> {
    info!(page = page + 1, "Fetching search page");
    let html = fetcher.fetch(url, timeout).await?;
    let items = parse_search_results(&html);
    info!(page = page + 1, count = items.len(), "Parsed search result items");
    Ok(items)
}

/// Parse every result item out of a search-results document.
pub fn parse_search_results(html: &str) -> Vec<SearchResultItem> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let mut nodes = query_all(root, RESULT_ITEM_SELECTORS[0]);
    if nodes.is_empty() {
        nodes = query_all(root, RESULT_ITEM_SELECTORS[1]);
        if nodes.is_empty() {
            warn!("No news items found with primary or fallback selectors; markup may have changed");
            return Vec::new();
        }
    }

    let mut items = Vec::with_capacity(nodes.len());
    for node in nodes {
        let Some(link) = item_link(node) else {
            warn!("News item missing link; skipping");
            continue;
        };
        items.push(SearchResultItem {
            link,
            title: resolve(node, &TITLE_RULE).unwrap_or_else(|| TITLE_PLACEHOLDER.to_string()),
            snippet: resolve(node, &SNIPPET_RULE)
                .unwrap_or_else(|| SNIPPET_PLACEHOLDER.to_string()),
            date: resolve(node, &DATE_RULE).unwrap_or_else(|| DATE_PLACEHOLDER.to_string()),
            source: resolve(node, &SOURCE_RULE).unwrap_or_else(|| SOURCE_PLACEHOLDER.to_string()),
        });
    }
    items
}

/// The item's anchor href, absolutized. `None` when the item carries no
/// usable link at all, the one condition that skips the whole item.
fn item_link(item: ElementRef<'_>) -> Option<String> {
    let anchor = query(item, "a")?;
    let href = anchor.value().attr("href")?.trim();
    if href.is_empty() {
        return None;
    }
    match Url::parse(href) {
        Ok(url) => Some(url.to_string()),
        // No scheme: relative to the search host.
        Err(_) => SEARCH_HOST.join(href).ok().map(|url| url.to_string()),
    }
}
