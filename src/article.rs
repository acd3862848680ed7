//! Full-article fetching and extraction.
//!
//! Third-party article pages come in a handful of common template layouts,
//! so content and metadata are located through ordered selector chains
//! rather than a single selector. The article document is fetched once and
//! the parsed tree is reused for the content, author, publish-date, and
//! image passes.
//!
//! Nothing here fails the run: a fetch error or a selector miss produces a
//! placeholder value in the returned record and the caller moves on to the
//! next item.

use std::time::Duration;

use scraper::{ElementRef, Html};
use tracing::{debug, error, warn};

use crate::fetch::FetchPage;
use crate::models::ArticleMetadata;
use crate::selectors::{Extract, FieldRule, query, query_all, resolve, text_of};

/// Candidate content containers, most specific template first.
pub const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "div.article-body",
    "div.entry-content",
    "div.post-content",
    "div.story-content",
    "div.article__content",
    r#"div[itemprop="articleBody"]"#,
    "div.content",
    "div#article-content",
    "div#content",
];

const AUTHOR_RULE: FieldRule = FieldRule {
    selectors: &[
        r#"span[itemprop="author"]"#,
        r#"meta[name="author"]"#,
        r#"meta[property="article:author"]"#,
        "p.author",
        "span.author",
        "div.author",
        r#"a[rel="author"]"#,
    ],
    mode: Extract::TextOrAttr("content"),
};

const PUBLISH_DATE_RULE: FieldRule = FieldRule {
    selectors: &[
        r#"time[itemprop="datePublished"]"#,
        r#"meta[itemprop="datePublished"]"#,
        r#"meta[name="date"]"#,
        r#"meta[property="article:published_time"]"#,
        "time.entry-date",
        "span.post-date",
        "div.datePublished",
        "span.date",
    ],
    mode: Extract::TextOrAttr("content"),
};

const IMAGE_SELECTOR: &str = "img[src]";

/// Placeholder content when no container selector matches. Distinct from
/// the network-failure placeholder so the two conditions stay tellable
/// apart in the output.
pub const EXTRACTION_FAILED_PLACEHOLDER: &str =
    "Article content extraction failed. Selectors may need adjustment.";

/// Prefix of the placeholder content recorded when the article fetch fails.
pub const FETCH_FAILED_PREFIX: &str = "Error fetching article content";

/// Body text and metadata extracted from one article page.
#[derive(Debug)]
pub struct ArticleExtract {
    pub content: String,
    pub metadata: ArticleMetadata,
}

/// Fetch an article URL and extract its body text and metadata.
///
/// A transport failure yields a record whose content carries the failure
/// reason and whose metadata is all defaults; it never propagates. On
/// success the content comes from the first matching container in
/// [`CONTENT_SELECTORS`] and the metadata from the author/date/image
/// passes over the same parsed document.
pub async fn extract_article<F: FetchPage>(
    fetcher: &F,
    url: &str,
    timeout: Duration,
) -> ArticleExtract {
    let html = match fetcher.fetch(url, timeout).await {
        Ok(html) => html,
        Err(e) => {
            error!(%url, error = %e, "Failed to fetch article");
            return ArticleExtract {
                content: format!("{FETCH_FAILED_PREFIX}: {e}"),
                metadata: ArticleMetadata::default(),
            };
        }
    };

    let document = Html::parse_document(&html);
    let root = document.root_element();

    let content = match extract_content(root) {
        Some(text) => text,
        None => {
            warn!(%url, "Article content selectors failed");
            EXTRACTION_FAILED_PLACEHOLDER.to_string()
        }
    };
    let metadata = extract_metadata(root);
    debug!(
        %url,
        bytes = content.len(),
        author = %metadata.author,
        images = metadata.image_urls.len(),
        "Extracted article"
    );

    ArticleExtract { content, metadata }
}

/// Body text from the first matching content container.
///
/// Paragraph children are joined with a blank line; a container without
/// paragraph children contributes its full text instead. Returns `None`
/// only when no container selector matches at all.
fn extract_content(root: ElementRef<'_>) -> Option<String> {
    for expr in CONTENT_SELECTORS {
        let Some(container) = query(root, expr) else {
            continue;
        };
        let paragraphs = query_all(container, "p");
        let text = if paragraphs.is_empty() {
            text_of(container)
        } else {
            paragraphs
                .iter()
                .map(|p| text_of(*p))
                .collect::<Vec<_>>()
                .join("\n\n")
        };
        return Some(text.trim().to_string());
    }
    None
}

/// Author, publish date, and image list from a parsed article document.
fn extract_metadata(root: ElementRef<'_>) -> ArticleMetadata {
    let mut metadata = ArticleMetadata::default();

    if let Some(author) = resolve(root, &AUTHOR_RULE) {
        metadata.author = author;
    }
    if let Some(date) = resolve(root, &PUBLISH_DATE_RULE) {
        metadata.publish_date = date;
    }
    metadata.image_urls = query_all(root, IMAGE_SELECTOR)
        .iter()
        .filter_map(|img| img.value().attr("src"))
        .filter(|src| !src.trim().is_empty())
        .map(str::to_string)
        .collect();

    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::fixtures::FixtureFetcher;

    fn parse_and_extract(html: &str) -> (Option<String>, ArticleMetadata) {
        let document = Html::parse_document(html);
        let root = document.root_element();
        (extract_content(root), extract_metadata(root))
    }

    #[test]
    fn test_paragraphs_joined_with_blank_lines() {
        let html = "<article><p>First paragraph.</p><p>Second paragraph.</p></article>";
        let (content, _) = parse_and_extract(html);
        assert_eq!(
            content.unwrap(),
            "First paragraph.\n\nSecond paragraph."
        );
    }

    #[test]
    fn test_container_without_paragraphs_uses_full_text() {
        let html = r#"<div class="entry-content">Just a block of text.</div>"#;
        let (content, _) = parse_and_extract(html);
        assert_eq!(content.unwrap(), "Just a block of text.");
    }

    #[test]
    fn test_container_order_is_respected() {
        let html = r#"<div class="content"><p>generic</p></div>
                      <article><p>article body</p></article>"#;
        let (content, _) = parse_and_extract(html);
        assert_eq!(content.unwrap(), "article body");
    }

    #[test]
    fn test_no_container_yields_none() {
        let (content, _) = parse_and_extract("<div class='unrelated'>x</div>");
        assert!(content.is_none());
    }

    #[test]
    fn test_author_from_visible_element() {
        let html = r#"<article><p>x</p></article><span itemprop="author">Jane Doe</span>"#;
        let (_, metadata) = parse_and_extract(html);
        assert_eq!(metadata.author, "Jane Doe");
    }

    #[test]
    fn test_author_from_meta_content() {
        let html = r#"<head><meta name="author" content="Jane Doe"></head><body></body>"#;
        let (_, metadata) = parse_and_extract(html);
        assert_eq!(metadata.author, "Jane Doe");
    }

    #[test]
    fn test_publish_date_from_meta_content() {
        let html = r#"<head><meta property="article:published_time" content="2025-05-06T08:00:00Z"></head>"#;
        let (_, metadata) = parse_and_extract(html);
        assert_eq!(metadata.publish_date, "2025-05-06T08:00:00Z");
    }

    #[test]
    fn test_metadata_defaults_when_chains_miss() {
        let (_, metadata) = parse_and_extract("<p>bare page</p>");
        assert_eq!(metadata.author, "Unknown");
        assert_eq!(metadata.publish_date, "Unknown");
    }

    #[test]
    fn test_images_keep_order_and_duplicates() {
        let html = r#"<img src="a.jpg"><img src=""><img src="b.jpg"><img src="a.jpg">"#;
        let (_, metadata) = parse_and_extract(html);
        assert_eq!(metadata.image_urls, vec!["a.jpg", "b.jpg", "a.jpg"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_placeholder_record() {
        let fetcher = FixtureFetcher::default().with_failure("https://down.test/story");
        let extract =
            extract_article(&fetcher, "https://down.test/story", Duration::from_secs(1)).await;

        assert!(extract.content.starts_with(FETCH_FAILED_PREFIX));
        assert_eq!(extract.metadata.author, "Unknown");
        assert!(extract.metadata.image_urls.is_empty());
    }

    #[tokio::test]
    async fn test_successful_extraction_end_to_end() {
        let html = r#"<html><head><meta name="author" content="Jane Doe"></head>
            <body><article><p>Alpha.</p><p>Beta.</p></article>
            <img src="https://cdn.test/a.jpg"></body></html>"#;
        let fetcher = FixtureFetcher::default().with_page("https://up.test/story", html);
        let extract =
            extract_article(&fetcher, "https://up.test/story", Duration::from_secs(1)).await;

        assert_eq!(extract.content, "Alpha.\n\nBeta.");
        assert_eq!(extract.metadata.author, "Jane Doe");
        assert_eq!(extract.metadata.image_urls, vec!["https://cdn.test/a.jpg"]);
    }

    #[tokio::test]
    async fn test_page_without_containers_gets_fixed_placeholder() {
        let fetcher = FixtureFetcher::default()
            .with_page("https://odd.test/story", "<div class='weird'>x</div>");
        let extract =
            extract_article(&fetcher, "https://odd.test/story", Duration::from_secs(1)).await;
        assert_eq!(extract.content, EXTRACTION_FAILED_PLACEHOLDER);
    }
}
