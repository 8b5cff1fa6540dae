// file: src/parser/frontmatter.rs
// description: delimited frontmatter block extraction from markdown
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anchored at document start: optional leading whitespace, a line of
    // three hyphens, the interior, a closing line of three hyphens.
    static ref FRONTMATTER_RE: Regex =
        Regex::new(r"(?s)\A\s*---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(\r?\n|\z)")
            .expect("frontmatter regex must compile");
}

/// The verbatim text between the delimiter lines, exclusive of the
/// delimiters themselves. Opaque at this stage; the metadata parser gives
/// it meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterBlock {
    pub raw: String,
}

pub struct FrontmatterExtractor;

impl FrontmatterExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Returns the interior of the frontmatter block, or `None` when the
    /// document does not open with the delimiter pattern. A block found
    /// further down the document does not count.
    pub fn extract(&self, content: &str) -> Option<FrontmatterBlock> {
        FRONTMATTER_RE.captures(content).map(|caps| FrontmatterBlock {
            raw: caps[1].to_string(),
        })
    }
}

impl Default for FrontmatterExtractor {
    fn default() -> Self {
        Self::new()
    }
}
