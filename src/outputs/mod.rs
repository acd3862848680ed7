//! Result sinks for assembled article records.
//!
//! A finished run hands its `Vec<ArticleRecord>` to one or both sinks:
//!
//! - [`csv`]: row-oriented file with a fixed header, one record per row
//! - [`json`]: pretty-printed JSON array, for downstream tooling
//!
//! Sinks only serialize; they never reorder or mutate records.

pub mod csv;
pub mod json;
