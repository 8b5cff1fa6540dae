// file: src/models/metadata.rs
// description: validated post metadata extracted from frontmatter
// reference: internal data structures

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Metadata a post must carry to appear in the index. Constructed only by
/// the metadata parser once both fields have passed validation; a post with
/// a missing or malformed field never yields a partial instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostMetadata {
    pub title: String,
    pub date: NaiveDate,
}

impl PostMetadata {
    pub fn new(title: String, date: NaiveDate) -> Self {
        Self { title, date }
    }

    /// Zero-padded "YYYY-MM" bucket key for grouping.
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.date.year(), self.date.month())
    }
}
