// file: src/pipeline/orchestrator.rs
// description: sequential walk -> extract -> parse -> build -> render pipeline
// reference: pipeline orchestration

use crate::config::Config;
use crate::error::Result;
use crate::index::{IndexBuilder, ReportRenderer};
use crate::models::{Diagnostic, DiagnosticKind, GroupedIndex, PostMetadata};
use crate::parser::{FrontmatterExtractor, MetadataParser};
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use crate::scanner::{DocumentWalker, ScannedPost};
use crate::utils::Validator;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of one run: counters plus the ordered skip records. Callers pick
/// the rendering (console warnings, JSON); the pipeline only collects.
#[derive(Debug, Serialize)]
pub struct PipelineReport {
    pub stats: PipelineStats,
    pub diagnostics: Vec<Diagnostic>,
    pub output: Option<PathBuf>,
}

pub struct IndexPipeline {
    config: Config,
    extractor: FrontmatterExtractor,
    parser: MetadataParser,
}

impl IndexPipeline {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            extractor: FrontmatterExtractor::new(),
            parser: MetadataParser::new(),
        }
    }

    /// Full run: build the grouped index and write the report. The write is
    /// the only fatal step; every per-file failure becomes a diagnostic.
    pub fn run(&self) -> Result<PipelineReport> {
        let (index, diagnostics, stats) = self.collect();

        let renderer = ReportRenderer::new(&self.config.index.title, &self.config.index.footer_url);
        renderer.write(&index, &self.config.index.output)?;

        Ok(PipelineReport {
            stats,
            diagnostics,
            output: Some(self.config.index.output.clone()),
        })
    }

    /// Dry run: same walk/extract/parse pass, nothing written.
    pub fn check(&self) -> Result<PipelineReport> {
        let (_, diagnostics, stats) = self.collect();

        Ok(PipelineReport {
            stats,
            diagnostics,
            output: None,
        })
    }

    fn collect(&self) -> (GroupedIndex, Vec<Diagnostic>, PipelineStats) {
        let root = &self.config.content.root;

        if let Err(err) = Validator::validate_directory(root) {
            warn!("{}; the generated index will be empty", err);
        }

        let walker = DocumentWalker::new(
            self.config.content.follow_symlinks,
            self.config.pipeline.max_file_size_mb,
        );
        let posts: Vec<ScannedPost> = walker.walk(root).collect();
        info!("Found {} markdown files under {}", posts.len(), root.display());

        let mut builder = IndexBuilder::new(self.config.index.base_url.clone());
        let mut diagnostics = Vec::new();
        let mut tracker = ProgressTracker::new(posts.len(), self.config.pipeline.progress);

        for post in &posts {
            let file = display_path(&post.path, root);

            match self.process(post) {
                Ok(metadata) => {
                    debug!("Indexed {} ({})", file, metadata.month_key());
                    builder.insert(post, metadata);
                    tracker.record_indexed();
                }
                Err(diagnostic) => {
                    debug!("Skipping {}: {}", file, diagnostic.detail);
                    tracker.record_skipped(&file);
                    diagnostics.push(diagnostic);
                }
            }
        }

        let index = builder.finish();
        let stats = tracker.finish(index.len());
        (index, diagnostics, stats)
    }

    fn process(&self, post: &ScannedPost) -> std::result::Result<PostMetadata, Diagnostic> {
        let root = &self.config.content.root;
        let file = display_path(&post.path, root);

        let content = fs::read_to_string(&post.path).map_err(|err| {
            Diagnostic::new(&file, DiagnosticKind::ReadFailed, err.to_string())
        })?;

        let block = self.extractor.extract(&content).ok_or_else(|| {
            Diagnostic::new(
                &file,
                DiagnosticKind::FrontmatterMissing,
                "no delimited block at document start",
            )
        })?;

        self.parser
            .parse(&block)
            .map_err(|err| Diagnostic::new(&file, err.diagnostic_kind(), err.to_string()))
    }
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
