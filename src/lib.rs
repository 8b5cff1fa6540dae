// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod index;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod scanner;
pub mod utils;

pub use config::{Config, ContentConfig, IndexConfig, PipelineConfig};
pub use error::{IndexError, Result};
pub use index::{IndexBuilder, ReportRenderer};
pub use models::{Diagnostic, DiagnosticKind, GroupedIndex, IndexEntry, PostMetadata};
pub use parser::{FrontmatterBlock, FrontmatterExtractor, MetadataError, MetadataParser};
pub use pipeline::{IndexPipeline, PipelineReport, PipelineStats, ProgressTracker};
pub use scanner::{DocumentWalker, ScannedPost};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _extractor = FrontmatterExtractor::new();
    }
}
