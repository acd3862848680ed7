//! JSON output for scraped article records.
//!
//! Serializes the full record list as a pretty-printed JSON array. Unlike
//! the CSV sink, list-valued fields stay structured here.

use std::error::Error;

use tracing::info;

use crate::models::ArticleRecord;

/// Write records to a JSON file at `path`.
pub async fn write_json_file(records: &[ArticleRecord], path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(records)?;
    tokio::fs::write(path, json).await?;
    info!(path, count = records.len(), "Wrote JSON output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArticleMetadata, SearchResultItem};

    #[tokio::test]
    async fn test_write_json_file_round_trips() {
        let record = ArticleRecord::assemble(
            SearchResultItem {
                link: "https://example.com/story".to_string(),
                title: "Patent ruling overturned".to_string(),
                snippet: "An appeals court ruled...".to_string(),
                date: "2 days ago".to_string(),
                source: "Example Wire".to_string(),
            },
            "Body text.".to_string(),
            ArticleMetadata {
                author: "Jane Doe".to_string(),
                publish_date: "2025-05-06".to_string(),
                image_urls: vec!["https://cdn.test/a.jpg".to_string()],
            },
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news.json");
        let path = path.to_str().unwrap();

        write_json_file(&[record], path).await.unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        let back: Vec<ArticleRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].author, "Jane Doe");
        assert_eq!(back[0].image_urls, vec!["https://cdn.test/a.jpg"]);
    }
}
