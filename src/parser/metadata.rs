// file: src/parser/metadata.rs
// description: typed metadata parsing and validation of frontmatter blocks
// reference: https://docs.rs/yaml-rust

use crate::models::{DiagnosticKind, PostMetadata};
use crate::parser::frontmatter::FrontmatterBlock;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use yaml_rust::{Yaml, YamlLoader};

lazy_static! {
    // Strict zero-padded calendar format. chrono alone would also accept
    // unpadded fields like "2024-1-5", so the format check comes first.
    static ref DATE_FORMAT_RE: Regex =
        Regex::new(r"\A\d{4}-\d{2}-\d{2}\z").expect("date format regex must compile");
}

/// Every way a frontmatter block can fail to yield usable metadata. All
/// variants are per-document: the pipeline turns them into diagnostics and
/// keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("frontmatter is not a key-value mapping: {0}")]
    Syntax(String),

    #[error("frontmatter contains no fields")]
    EmptyBlock,

    #[error("required field 'title' is missing or not a scalar")]
    TitleMissing,

    #[error("required field 'date' is missing or not a scalar")]
    DateMissing,

    #[error("expected date in YYYY-MM-DD format, got '{0}'")]
    DateMalformed(String),
}

impl MetadataError {
    pub fn diagnostic_kind(&self) -> DiagnosticKind {
        match self {
            MetadataError::Syntax(_) => DiagnosticKind::FrontmatterInvalid,
            MetadataError::EmptyBlock => DiagnosticKind::FrontmatterEmpty,
            MetadataError::TitleMissing => DiagnosticKind::TitleMissing,
            MetadataError::DateMissing => DiagnosticKind::DateMissing,
            MetadataError::DateMalformed(_) => DiagnosticKind::DateMalformed,
        }
    }
}

pub struct MetadataParser;

impl MetadataParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses a frontmatter interior into validated metadata. Pure: every
    /// failure is an explicit return value, never a partial record.
    pub fn parse(&self, block: &FrontmatterBlock) -> Result<PostMetadata, MetadataError> {
        let docs = YamlLoader::load_from_str(block.raw.trim())
            .map_err(|e| MetadataError::Syntax(e.to_string()))?;

        let hash = match docs.first() {
            None | Some(Yaml::Null) => return Err(MetadataError::EmptyBlock),
            Some(Yaml::Hash(hash)) => hash,
            Some(other) => {
                return Err(MetadataError::Syntax(format!(
                    "expected a mapping, found {}",
                    yaml_type_name(other)
                )));
            }
        };

        if hash.is_empty() {
            return Err(MetadataError::EmptyBlock);
        }

        let title = hash
            .get(&Yaml::String("title".to_string()))
            .and_then(scalar_to_string)
            .ok_or(MetadataError::TitleMissing)?;

        let date_text = hash
            .get(&Yaml::String("date".to_string()))
            .and_then(scalar_to_string)
            .ok_or(MetadataError::DateMissing)?;

        let date = parse_date(&date_text)?;

        Ok(PostMetadata::new(title, date))
    }
}

impl Default for MetadataParser {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_date(text: &str) -> Result<NaiveDate, MetadataError> {
    if !DATE_FORMAT_RE.is_match(text) {
        return Err(MetadataError::DateMalformed(text.to_string()));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| MetadataError::DateMalformed(text.to_string()))
}

fn scalar_to_string(value: &Yaml) -> Option<String> {
    match value {
        Yaml::String(s) => Some(s.clone()),
        Yaml::Integer(i) => Some(i.to_string()),
        Yaml::Real(r) => Some(r.clone()),
        Yaml::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

fn yaml_type_name(value: &Yaml) -> &'static str {
    match value {
        Yaml::String(_) | Yaml::Real(_) | Yaml::Integer(_) | Yaml::Boolean(_) => "a scalar",
        Yaml::Array(_) => "a sequence",
        Yaml::Hash(_) => "a mapping",
        Yaml::Alias(_) => "an alias",
        Yaml::Null => "null",
        Yaml::BadValue => "an invalid value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(raw: &str) -> FrontmatterBlock {
        FrontmatterBlock {
            raw: raw.to_string(),
        }
    }

    fn parse(raw: &str) -> Result<PostMetadata, MetadataError> {
        MetadataParser::new().parse(&block(raw))
    }

    #[test]
    fn test_valid_metadata() {
        let meta = parse("title: Hello World\ndate: 2024-03-15").unwrap();
        assert_eq!(meta.title, "Hello World");
        assert_eq!(meta.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_quoted_title_and_extra_fields() {
        let meta = parse("title: \"Hello\"\ndate: 2024-03-15\ntags: [a, b]").unwrap();
        assert_eq!(meta.title, "Hello");
    }

    #[test]
    fn test_numeric_title_is_coerced() {
        let meta = parse("title: 42\ndate: 2024-03-15").unwrap();
        assert_eq!(meta.title, "42");
    }

    #[test]
    fn test_title_missing() {
        assert_eq!(parse("date: 2024-03-15"), Err(MetadataError::TitleMissing));
    }

    #[test]
    fn test_date_missing() {
        assert_eq!(parse("title: Hello"), Err(MetadataError::DateMissing));
    }

    #[test]
    fn test_rejects_wrong_date_formats() {
        for bad in ["2024/01/05", "Jan 5 2024", "2024-1-5", "05-01-2024", "2024-03-15T00:00:00"] {
            let raw = format!("title: Hello\ndate: \"{}\"", bad);
            assert_eq!(
                parse(&raw),
                Err(MetadataError::DateMalformed(bad.to_string())),
                "date '{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_rejects_impossible_calendar_date() {
        assert_eq!(
            parse("title: Hello\ndate: 2024-02-30"),
            Err(MetadataError::DateMalformed("2024-02-30".to_string()))
        );
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(parse(""), Err(MetadataError::EmptyBlock));
        assert_eq!(parse("   \n  "), Err(MetadataError::EmptyBlock));
    }

    #[test]
    fn test_non_mapping_block() {
        let err = parse("just a plain sentence").unwrap_err();
        assert!(matches!(err, MetadataError::Syntax(_)));
    }

    #[test]
    fn test_unparseable_yaml() {
        let err = parse("title: [unclosed\ndate: 2024-03-15").unwrap_err();
        assert!(matches!(err, MetadataError::Syntax(_)));
    }

    #[test]
    fn test_diagnostic_kind_mapping() {
        assert_eq!(
            MetadataError::EmptyBlock.diagnostic_kind(),
            DiagnosticKind::FrontmatterEmpty
        );
        assert_eq!(
            MetadataError::DateMalformed("x".to_string()).diagnostic_kind(),
            DiagnosticKind::DateMalformed
        );
    }
}
