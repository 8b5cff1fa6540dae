// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod diagnostic;
pub mod entry;
pub mod metadata;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use entry::{GroupedIndex, IndexEntry};
pub use metadata::PostMetadata;
