// file: src/scanner/mod.rs
// description: document discovery module exports
// reference: internal module structure

pub mod walker;

pub use walker::{DocumentWalker, ScannedPost};
