//! Data models for search results and scraped articles.
//!
//! This module defines the value types that flow through the pipeline:
//! - [`SearchResultItem`]: one hit parsed from a search-results page
//! - [`ArticleMetadata`]: author, publish date, and images pulled from an
//!   article page
//! - [`ArticleRecord`]: the flat, sink-ready union of the two plus the
//!   extracted body text
//!
//! All three are plain value types. Records are immutable once assembled;
//! the pagination loop owns the growing `Vec<ArticleRecord>` exclusively
//! until it is handed to an output sink.

use serde::{Deserialize, Serialize};

/// Default author/publish-date value when no metadata selector matches.
pub const UNKNOWN: &str = "Unknown";

/// One news item as it appears on a search-results page.
///
/// Field values are the raw strings from the result markup; the published
/// date in particular is free text ("2 days ago", "Oct 3, 2024") and is not
/// normalized. Fields other than `link` fall back to fixed placeholders
/// when their selectors miss; an item without a link is never built.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResultItem {
    /// Absolute URL of the article the result points at.
    pub link: String,
    /// Result headline.
    pub title: String,
    /// Result snippet text.
    pub snippet: String,
    /// Free-text publication date shown on the results page.
    pub date: String,
    /// Publisher name shown on the results page.
    pub source: String,
}

/// Metadata extracted from a fetched article page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleMetadata {
    /// Article author, `"Unknown"` when no author selector matched.
    pub author: String,
    /// Publish date as printed or carried in a meta tag, `"Unknown"` when
    /// no selector matched.
    pub publish_date: String,
    /// Every image source on the page, in document order. Duplicates are
    /// kept.
    pub image_urls: Vec<String>,
}

impl Default for ArticleMetadata {
    fn default() -> Self {
        Self {
            author: UNKNOWN.to_string(),
            publish_date: UNKNOWN.to_string(),
            image_urls: Vec::new(),
        }
    }
}

/// A fully assembled record: search-result fields, article metadata, and
/// the extracted body text.
///
/// `content` holds either the article text (paragraphs joined by blank
/// lines) or one of two placeholder strings: a network-failure message
/// carrying the fetch error, or a fixed extraction-failure message when no
/// content selector matched. The field order here is the column order of
/// the CSV sink.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleRecord {
    pub title: String,
    pub snippet: String,
    pub date: String,
    pub source: String,
    pub link: String,
    pub author: String,
    pub publish_date: String,
    pub content: String,
    pub image_urls: Vec<String>,
}

impl ArticleRecord {
    /// Merge a search result with the content and metadata extracted from
    /// its article page.
    pub fn assemble(item: SearchResultItem, content: String, metadata: ArticleMetadata) -> Self {
        Self {
            title: item.title,
            snippet: item.snippet,
            date: item.date,
            source: item.source,
            link: item.link,
            author: metadata.author,
            publish_date: metadata.publish_date,
            content,
            image_urls: metadata.image_urls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> SearchResultItem {
        SearchResultItem {
            link: "https://example.com/story".to_string(),
            title: "Patent ruling overturned".to_string(),
            snippet: "An appeals court ruled that...".to_string(),
            date: "2 days ago".to_string(),
            source: "Example Wire".to_string(),
        }
    }

    #[test]
    fn test_metadata_defaults() {
        let metadata = ArticleMetadata::default();
        assert_eq!(metadata.author, "Unknown");
        assert_eq!(metadata.publish_date, "Unknown");
        assert!(metadata.image_urls.is_empty());
    }

    #[test]
    fn test_assemble_merges_item_and_metadata() {
        let metadata = ArticleMetadata {
            author: "Jane Doe".to_string(),
            publish_date: "2025-05-06".to_string(),
            image_urls: vec!["https://example.com/a.jpg".to_string()],
        };
        let record = ArticleRecord::assemble(sample_item(), "Body text.".to_string(), metadata);

        assert_eq!(record.title, "Patent ruling overturned");
        assert_eq!(record.link, "https://example.com/story");
        assert_eq!(record.author, "Jane Doe");
        assert_eq!(record.content, "Body text.");
        assert_eq!(record.image_urls.len(), 1);
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = ArticleRecord::assemble(
            sample_item(),
            "Body text.".to_string(),
            ArticleMetadata::default(),
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: ArticleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, record.title);
        assert_eq!(back.author, "Unknown");
    }
}
