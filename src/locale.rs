//! Locale and time-filter encoding for search URLs.
//!
//! A [`LocaleSpec`] captures the language, country, and optional time filter
//! of a run and encodes them into the query-string fragment the search
//! provider expects: an optional `before:`/`after:`/`when:` token followed by
//! the `hl`/`gl`/`ceid` locale parameters.
//!
//! Encoding is a pure function of its inputs: no network, no parsing, and
//! the same fragment every time for the same [`LocaleSpec`].

use chrono::NaiveDate;
use tracing::warn;

/// Language, country, and optional time filter for a scrape run.
///
/// `period` (a relative window such as `"1y"` or `"6m"`) and the explicit
/// `start_date`/`end_date` bounds are mutually exclusive: when either date
/// bound is present the period is ignored with a warning rather than
/// rejected.
#[derive(Debug, Clone)]
pub struct LocaleSpec {
    /// Two-letter language code, e.g. `"en"`.
    pub language: String,
    /// Two-letter country code, e.g. `"US"`.
    pub country: String,
    /// Relative time window, e.g. `"1y"`. Ignored when a date bound is set.
    pub period: Option<String>,
    /// Only results published on or after this date.
    pub start_date: Option<NaiveDate>,
    /// Only results published on or before this date.
    pub end_date: Option<NaiveDate>,
}

impl LocaleSpec {
    /// Encode this locale as a query-string fragment to append to the search
    /// URL.
    ///
    /// The fragment always carries `&hl={lang}&gl={country}&ceid={country}:{lang}`,
    /// preceded by at most one kind of time filter:
    ///
    /// - date bounds present: `%20before%3A{end}` and/or `%20after%3A{start}`,
    ///   dates formatted `YYYY-MM-DD`; any period is discarded with a
    ///   `warn!`
    /// - period only: `%20when%3A{period}`
    /// - neither: no time filter
    pub fn query_fragment(&self) -> String {
        let mut time_query = String::new();

        if self.start_date.is_some() || self.end_date.is_some() {
            if let Some(period) = &self.period {
                warn!(
                    %period,
                    "Period will be ignored in favor of start and end dates"
                );
            }
            if let Some(end) = &self.end_date {
                time_query.push_str(&format!("%20before%3A{}", format_date_param(end)));
            }
            if let Some(start) = &self.start_date {
                time_query.push_str(&format!("%20after%3A{}", format_date_param(start)));
            }
        } else if let Some(period) = &self.period {
            time_query.push_str(&format!("%20when%3A{period}"));
        }

        format!(
            "{}&hl={}&gl={}&ceid={}:{}",
            time_query, self.language, self.country, self.country, self.language
        )
    }
}

/// Format a date bound as `YYYY-MM-DD` for the search URL.
fn format_date_param(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
