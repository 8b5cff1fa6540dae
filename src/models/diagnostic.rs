// file: src/models/diagnostic.rs
// description: structured per-file diagnostics collected during a run
// reference: internal data structures

use serde::Serialize;
use std::fmt;

/// Why a file was skipped. Every variant is non-fatal: the pipeline records
/// the diagnostic and moves on to the next file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    ReadFailed,
    FrontmatterMissing,
    FrontmatterEmpty,
    FrontmatterInvalid,
    TitleMissing,
    DateMissing,
    DateMalformed,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DiagnosticKind::ReadFailed => "read failed",
            DiagnosticKind::FrontmatterMissing => "frontmatter missing",
            DiagnosticKind::FrontmatterEmpty => "frontmatter empty",
            DiagnosticKind::FrontmatterInvalid => "frontmatter invalid",
            DiagnosticKind::TitleMissing => "title missing",
            DiagnosticKind::DateMissing => "date missing",
            DiagnosticKind::DateMalformed => "date malformed",
        };
        write!(f, "{}", label)
    }
}

/// One skip record: which file, what went wrong, and the detail an operator
/// needs to fix it. The pipeline returns these as a sequence so callers
/// decide how to render them (console warnings, JSON export).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub kind: DiagnosticKind,
    pub detail: String,
}

impl Diagnostic {
    pub fn new(file: impl Into<String>, kind: DiagnosticKind, detail: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            kind,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.file, self.kind, self.detail)
    }
}
