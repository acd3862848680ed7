//! Pagination control: the top-level scrape loop.
//!
//! One run walks search pages in order, and for each result item fetches and
//! extracts the linked article, assembling the combined record. Everything
//! is strictly sequential (one page, then its articles one at a time) with
//! a random pause between successive search pages.
//!
//! Termination is governed by four conditions, all of which return whatever
//! has been accumulated so far:
//! - a transport failure on a search page (fatal for the run, partial
//!   results kept)
//! - a page with zero result items
//! - a page with fewer items than the provider's page size (end-of-results
//!   heuristic)
//! - the caller's article limit, checked before each item so it is a hard
//!   ceiling

use itertools::Itertools;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::article::extract_article;
use crate::config::ScraperConfig;
use crate::fetch::FetchPage;
use crate::models::ArticleRecord;
use crate::search::fetch_search_page;
use crate::utils::{random_delay, truncate_for_log};

/// Number of results the provider serves per search page. A shorter page
/// signals the end of the results.
pub const PAGE_SIZE: usize = 10;

const SEARCH_ENDPOINT: &str = "https://www.google.com/search";

/// Run a full scrape: paginate search results, extract every linked
/// article, and return the assembled records.
///
/// Never returns an error: every failure mode either degrades to a
/// placeholder field or ends pagination early with the records collected so
/// far (possibly none).
pub async fn run<F: FetchPage>(fetcher: &F, config: &ScraperConfig) -> Vec<ArticleRecord> {
    let query = build_query(&config.keywords);
    let locale_fragment = config.locale.query_fragment();
    info!(
        %query,
        language = %config.locale.language,
        country = %config.locale.country,
        limit = ?config.limit,
        "Starting scrape"
    );

    let mut records: Vec<ArticleRecord> = Vec::new();
    let mut page = 0usize;

    loop {
        let url = build_search_url(&query, page, &locale_fragment);
        let items =
            match fetch_search_page(fetcher, &url, page, config.search_timeout).await {
                Ok(items) => items,
                Err(e) => {
                    // Run-fatal, but everything scraped so far is kept.
                    error!(page = page + 1, error = %e, "Search page fetch failed; stopping");
                    break;
                }
            };

        if items.is_empty() {
            info!(page = page + 1, "No result items on page; reached end of results");
            break;
        }
        let items_on_page = items.len();

        for item in items {
            if let Some(limit) = config.limit {
                if records.len() >= limit {
                    info!(limit, "Reached article limit; stopping");
                    return records;
                }
            }

            info!(
                title = %truncate_for_log(&item.title, 80),
                link = %item.link,
                "Scraping article"
            );
            let extract = extract_article(fetcher, &item.link, config.article_timeout).await;
            records.push(ArticleRecord::assemble(item, extract.content, extract.metadata));
        }

        if items_on_page < PAGE_SIZE {
            info!(
                page = page + 1,
                count = items_on_page,
                "Short page; reached end of results"
            );
            break;
        }

        let delay = random_delay(config.delay_min_secs, config.delay_max_secs);
        debug!(?delay, "Pausing before next search page");
        sleep(delay).await;
        page += 1;
    }

    info!(count = records.len(), "Scrape complete");
    records
}

/// Quoted OR-disjunction of the keywords, suffixed with ` news`.
pub fn build_query(keywords: &[String]) -> String {
    let disjunction = keywords.iter().map(|k| format!("\"{k}\"")).join(" OR ");
    format!("{disjunction} news")
}

/// Full search URL for a zero-based page index.
///
/// The pagination offset is `page * 10` and the locale fragment from
/// [`LocaleSpec::query_fragment`](crate::locale::LocaleSpec::query_fragment)
/// is appended verbatim.
pub fn build_search_url(query: &str, page: usize, locale_fragment: &str) -> String {
    format!(
        "{SEARCH_ENDPOINT}?q={}&tbm=nws&start={}{}",
        urlencoding::encode(query),
        page * PAGE_SIZE,
        locale_fragment
    )
}
