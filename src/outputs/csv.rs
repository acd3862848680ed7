//! CSV output for scraped article records.
//!
//! One row per record, columns in [`ArticleRecord`] field order with a fixed
//! header row. The image URL list is the only non-scalar field; it is joined
//! into a single column with a `|` delimiter.

use std::error::Error;

use tracing::info;

use crate::models::ArticleRecord;

/// Column order matches the `ArticleRecord` field order.
pub const CSV_HEADER: [&str; 9] = [
    "title",
    "snippet",
    "date",
    "source",
    "link",
    "author",
    "publish_date",
    "content",
    "image_urls",
];

/// Delimiter for the image URL list inside its single CSV column.
pub const IMAGE_URL_DELIMITER: &str = "|";

/// Serialize records as CSV into any writer.
pub fn write_records<W: std::io::Write>(
    records: &[ArticleRecord],
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        let image_urls = record.image_urls.join(IMAGE_URL_DELIMITER);
        csv_writer.write_record([
            record.title.as_str(),
            record.snippet.as_str(),
            record.date.as_str(),
            record.source.as_str(),
            record.link.as_str(),
            record.author.as_str(),
            record.publish_date.as_str(),
            record.content.as_str(),
            image_urls.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write records to a CSV file at `path`.
pub async fn write_csv_file(records: &[ArticleRecord], path: &str) -> Result<(), Box<dyn Error>> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer)?;
    tokio::fs::write(path, buffer).await?;
    info!(path, count = records.len(), "Wrote CSV output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArticleMetadata, SearchResultItem};

    fn sample_record() -> ArticleRecord {
        ArticleRecord::assemble(
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
                image_urls: vec![
                    "https://cdn.test/a.jpg".to_string(),
                    "https://cdn.test/b.jpg".to_string(),
                ],
            },
        )
    }

    fn render(records: &[ArticleRecord]) -> String {
        let mut buffer = Vec::new();
        write_records(records, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_row_matches_record_field_order() {
        let output = render(&[]);
        assert_eq!(
            output.lines().next().unwrap(),
            "title,snippet,date,source,link,author,publish_date,content,image_urls"
        );
    }

    #[test]
    fn test_one_row_per_record() {
        let output = render(&[sample_record(), sample_record()]);
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_image_urls_are_pipe_joined() {
        let output = render(&[sample_record()]);
        assert!(output.contains("https://cdn.test/a.jpg|https://cdn.test/b.jpg"));
    }

    #[test]
    fn test_multiline_content_is_quoted() {
        let mut record = sample_record();
        record.content = "First.\n\nSecond.".to_string();
        let output = render(&[record]);
        assert!(output.contains("\"First.\n\nSecond.\""));
    }

    #[tokio::test]
    async fn test_write_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news.csv");
        let path = path.to_str().unwrap();

        write_csv_file(&[sample_record()], path).await.unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.starts_with("title,snippet"));
        assert!(written.contains("Patent ruling overturned"));
    }
}
