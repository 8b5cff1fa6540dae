// file: src/models/entry.rs
// description: index entries and the month-keyed grouping map
// reference: internal data structures

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// One rendered line of the index. Never mutated after creation; ordering
/// inside a month bucket is recomputed by the renderer, so insertion order
/// carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub title: String,
    pub permalink: String,
    pub date: NaiveDate,
}

/// Month key ("YYYY-MM") to entries. A BTreeMap keeps keys sorted so the
/// renderer only has to walk them in reverse for newest-first output.
pub type GroupedIndex = BTreeMap<String, Vec<IndexEntry>>;
