// file: src/index/mod.rs
// description: index construction and rendering module exports
// reference: internal module structure

pub mod builder;
pub mod renderer;

pub use builder::IndexBuilder;
pub use renderer::ReportRenderer;
