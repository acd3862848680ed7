//! Generic selector-chain resolution over parsed HTML.
//!
//! Result-item fields, article content containers, and article metadata are
//! all located the same way: an ordered list of candidate CSS selectors is
//! tried against a document scope until one produces a value. This module
//! owns that mechanism so each field is described declaratively as a
//! [`FieldRule`] instead of re-implementing the fallback loop per field.
//!
//! It is also the only module that touches the `scraper` crate's query API;
//! everything else goes through [`query`], [`query_all`], and [`resolve`].

use scraper::{ElementRef, Selector};
use tracing::debug;

/// How to turn a matched node into a string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extract {
    /// The node's concatenated text content, trimmed.
    Text,
    /// The value of the named attribute.
    Attr(&'static str),
    /// The node's text, falling back to the named attribute when the text
    /// is empty. Covers chains that mix visible elements with `<meta>` tags,
    /// which carry their value in an attribute instead of text.
    TextOrAttr(&'static str),
}

/// An ordered selector chain plus the extraction mode applied to whichever
/// selector matches first.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub selectors: &'static [&'static str],
    pub mode: Extract,
}

/// Find the first element under `scope` matching `expr`.
///
/// An expression that fails to parse as a selector is treated as a
/// non-match.
pub fn query<'a>(scope: ElementRef<'a>, expr: &str) -> Option<ElementRef<'a>> {
    let selector = parse_selector(expr)?;
    scope.select(&selector).next()
}

/// Find every element under `scope` matching `expr`, in document order.
pub fn query_all<'a>(scope: ElementRef<'a>, expr: &str) -> Vec<ElementRef<'a>> {
    match parse_selector(expr) {
        Some(selector) => scope.select(&selector).collect(),
        None => Vec::new(),
    }
}

/// Resolve a field rule against a document scope.
///
/// Selectors are tried in order; the first one whose first matching node
/// yields a non-empty value wins and later selectors are never evaluated.
/// Exhausting the chain returns `None`; a selector miss is a data
/// condition here, not an error.
pub fn resolve(scope: ElementRef<'_>, rule: &FieldRule) -> Option<String> {
    for expr in rule.selectors {
        let Some(node) = query(scope, expr) else {
            continue;
        };
        if let Some(value) = extract(node, rule.mode) {
            return Some(value);
        }
    }
    None
}

/// Concatenated, trimmed text content of a node.
pub fn text_of(node: ElementRef<'_>) -> String {
    node.text().collect::<String>().trim().to_string()
}

fn extract(node: ElementRef<'_>, mode: Extract) -> Option<String> {
    let value = match mode {
        Extract::Text => text_of(node),
        Extract::Attr(name) => attr_of(node, name),
        Extract::TextOrAttr(name) => {
            let text = text_of(node);
            if text.is_empty() { attr_of(node, name) } else { text }
        }
    };
    if value.is_empty() { None } else { Some(value) }
}

fn attr_of(node: ElementRef<'_>, name: &str) -> String {
    node.value().attr(name).unwrap_or_default().trim().to_string()
}

fn parse_selector(expr: &str) -> Option<Selector> {
    match Selector::parse(expr) {
        Ok(selector) => Some(selector),
        Err(e) => {
            debug!(selector = expr, error = %e, "Skipping unparsable selector");
            None
        }
    }
}
