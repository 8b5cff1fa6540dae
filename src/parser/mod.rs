// file: src/parser/mod.rs
// description: frontmatter parsing module exports
// reference: internal module structure

pub mod frontmatter;
pub mod metadata;

pub use frontmatter::{FrontmatterBlock, FrontmatterExtractor};
pub use metadata::{MetadataError, MetadataParser};
