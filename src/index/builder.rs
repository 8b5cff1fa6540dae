// file: src/index/builder.rs
// description: month-bucketed accumulation of index entries
// reference: internal data structures

use crate::models::{GroupedIndex, IndexEntry, PostMetadata};
use crate::scanner::ScannedPost;

/// Folds validated posts into the month-keyed grouping map. All validation
/// happens upstream, so accumulation has no error paths.
pub struct IndexBuilder {
    base_url: String,
    index: GroupedIndex,
}

impl IndexBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            index: GroupedIndex::new(),
        }
    }

    pub fn insert(&mut self, post: &ScannedPost, metadata: PostMetadata) {
        let permalink = self.permalink(&post.group, &post.stem);
        let month_key = metadata.month_key();

        self.index.entry(month_key).or_default().push(IndexEntry {
            title: metadata.title,
            permalink,
            date: metadata.date,
        });
    }

    /// Base URL is used verbatim, no escaping or normalization.
    fn permalink(&self, group: &str, stem: &str) -> String {
        format!("{}/{}/{}", self.base_url, group, stem)
    }

    pub fn entry_count(&self) -> usize {
        self.index.values().map(Vec::len).sum()
    }

    pub fn finish(self) -> GroupedIndex {
        self.index
    }
}
