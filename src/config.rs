//! Run configuration and supported-locale tables.
//!
//! [`ScraperConfig`] is built once from the CLI arguments, validated against
//! the fixed language and country enumerations, and then passed explicitly
//! into the pagination loop. Nothing in the pipeline reads process-wide
//! state.

use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::error::ConfigError;
use crate::locale::LocaleSpec;

/// Language codes the search provider accepts for the `hl` parameter.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "zh", "en", "fr", "de", "el", "he", "hi", "id", "it", "ja", "ko", "ms", "nl", "no", "pt",
    "ro", "ru", "es", "sv", "th", "tr", "uk", "vi",
];

/// Country name to ISO code table for the `gl`/`ceid` parameters.
pub static SUPPORTED_COUNTRIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Argentina", "AR"),
        ("Australia", "AU"),
        ("Austria", "AT"),
        ("Belgium", "BE"),
        ("Brazil", "BR"),
        ("Canada", "CA"),
        ("Chile", "CL"),
        ("China", "CN"),
        ("Colombia", "CO"),
        ("Cuba", "CU"),
        ("Czech Republic", "CZ"),
        ("Egypt", "EG"),
        ("France", "FR"),
        ("Germany", "DE"),
        ("Greece", "GR"),
        ("Hong Kong", "HK"),
        ("Hungary", "HU"),
        ("India", "IN"),
        ("Indonesia", "ID"),
        ("Ireland", "IE"),
        ("Israel", "IL"),
        ("Italy", "IT"),
        ("Japan", "JP"),
        ("Kenya", "KE"),
        ("Latvia", "LV"),
        ("Lithuania", "LT"),
        ("Malaysia", "MY"),
        ("Mexico", "MX"),
        ("Morocco", "MA"),
        ("Netherlands", "NL"),
        ("New Zealand", "NZ"),
        ("Nigeria", "NG"),
        ("Norway", "NO"),
        ("Pakistan", "PK"),
        ("Peru", "PE"),
        ("Philippines", "PH"),
        ("Poland", "PL"),
        ("Portugal", "PT"),
        ("Romania", "RO"),
        ("Russia", "RU"),
        ("Saudi Arabia", "SA"),
        ("Serbia", "RS"),
        ("Singapore", "SG"),
        ("Slovakia", "SK"),
        ("Slovenia", "SI"),
        ("South Africa", "ZA"),
        ("South Korea", "KR"),
        ("Spain", "ES"),
        ("Sweden", "SE"),
        ("Switzerland", "CH"),
        ("Taiwan", "TW"),
        ("Thailand", "TH"),
        ("Turkey", "TR"),
        ("Ukraine", "UA"),
        ("United Arab Emirates", "AE"),
        ("United Kingdom", "GB"),
        ("United States", "US"),
        ("Venezuela", "VE"),
    ])
});

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_COUNTRY: &str = "United States";

/// Everything a scrape run needs, resolved and validated up front.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Keywords joined into a quoted OR-disjunction in the search query.
    pub keywords: Vec<String>,
    /// Hard ceiling on the number of articles scraped; `None` runs until
    /// the results end.
    pub limit: Option<usize>,
    /// Language, country, and time filter for the search.
    pub locale: LocaleSpec,
    /// Lower bound of the random pause between search-page fetches.
    pub delay_min_secs: f64,
    /// Upper bound of the random pause between search-page fetches.
    pub delay_max_secs: f64,
    /// Timeout for search-page fetches.
    pub search_timeout: Duration,
    /// Timeout for article fetches. Longer than the search timeout since
    /// article pages vary far more in size.
    pub article_timeout: Duration,
}

impl ScraperConfig {
    /// Build and validate a run configuration.
    ///
    /// The language code must appear in [`SUPPORTED_LANGUAGES`] and the
    /// country in [`SUPPORTED_COUNTRIES`] (given either as the full name or
    /// as the ISO code). Unsupported codes are a caller error, never
    /// silently corrected.
    pub fn new(
        keywords: Vec<String>,
        limit: Option<usize>,
        language: &str,
        country: &str,
        period: Option<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, ConfigError> {
        if keywords.is_empty() {
            return Err(ConfigError::NoKeywords);
        }
        let language = resolve_language(language)?;
        let country = resolve_country(country)?;

        Ok(Self {
            keywords,
            limit,
            locale: LocaleSpec {
                language,
                country,
                period,
                start_date,
                end_date,
            },
            delay_min_secs: 1.0,
            delay_max_secs: 3.0,
            search_timeout: Duration::from_secs(10),
            article_timeout: Duration::from_secs(15),
        })
    }
}

fn resolve_language(code: &str) -> Result<String, ConfigError> {
    let code = code.to_lowercase();
    if SUPPORTED_LANGUAGES.contains(&code.as_str()) {
        Ok(code)
    } else {
        Err(ConfigError::UnsupportedLanguage(code))
    }
}

/// Accepts a country by name ("United States") or ISO code ("US") and
/// resolves it to the ISO code.
fn resolve_country(country: &str) -> Result<String, ConfigError> {
    if let Some(code) = SUPPORTED_COUNTRIES.get(country) {
        return Ok((*code).to_string());
    }
    let upper = country.to_uppercase();
    if SUPPORTED_COUNTRIES.values().any(|code| *code == upper) {
        return Ok(upper);
    }
    Err(ConfigError::UnsupportedCountry(country.to_string()))
}
