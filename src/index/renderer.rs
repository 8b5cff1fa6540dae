// file: src/index/renderer.rs
// description: deterministic serialization of the grouped index to markdown
// reference: internal report format

use crate::error::{IndexError, Result};
use crate::models::GroupedIndex;
use std::fs;
use std::path::Path;
use tracing::info;

pub struct ReportRenderer {
    title: String,
    footer_url: String,
}

impl ReportRenderer {
    pub fn new(title: impl Into<String>, footer_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            footer_url: footer_url.into(),
        }
    }

    /// Renders the full report. Months newest-first; entries inside a month
    /// sorted by literal title with the lowercased title as tie-break (a
    /// stable-sort no-op, kept for byte-compatible ordering with the
    /// previous generator).
    pub fn render(&self, index: &GroupedIndex) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));

        for (month_key, entries) in index.iter().rev() {
            out.push_str(&format!("# {}\n\n", month_key));

            let mut sorted = entries.clone();
            sorted.sort_by_key(|e| (e.title.clone(), e.title.to_lowercase()));

            for entry in &sorted {
                out.push_str(&format!("- [{}]({})\n", entry.title, entry.permalink));
            }
            out.push('\n');
        }

        out.push_str(&format!("\n ## More from me at: {}", self.footer_url));
        out
    }

    /// Single all-or-nothing write; a pre-existing file is overwritten.
    /// This is the only fatal failure of a run.
    pub fn write(&self, index: &GroupedIndex, path: &Path) -> Result<()> {
        let report = self.render(index);

        fs::write(path, report).map_err(|source| IndexError::ReportWrite {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Wrote index to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IndexEntry;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn renderer() -> ReportRenderer {
        ReportRenderer::new("Blog Post Index", "https://about.mvaldes.dev")
    }

    fn entry(title: &str, permalink: &str, y: i32, m: u32, d: u32) -> IndexEntry {
        IndexEntry {
            title: title.to_string(),
            permalink: permalink.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        }
    }

    #[test]
    fn test_single_entry_round_trip() {
        let mut index = GroupedIndex::new();
        index.insert(
            "2024-03".to_string(),
            vec![entry("Hello", "https://x.test/posts/hello-world", 2024, 3, 15)],
        );

        let report = renderer().render(&index);

        assert_eq!(
            report,
            "# Blog Post Index\n\n\
             # 2024-03\n\n\
             - [Hello](https://x.test/posts/hello-world)\n\n\
             \n ## More from me at: https://about.mvaldes.dev"
        );
    }

    #[test]
    fn test_months_render_newest_first() {
        let mut index = GroupedIndex::new();
        for (month, y, m) in [("2023-12", 2023, 12), ("2024-02", 2024, 2), ("2024-01", 2024, 1)] {
            index.insert(
                month.to_string(),
                vec![entry("Post", "https://x.test/p/post", y, m, 1)],
            );
        }

        let report = renderer().render(&index);

        let feb = report.find("# 2024-02").unwrap();
        let jan = report.find("# 2024-01").unwrap();
        let dec = report.find("# 2023-12").unwrap();
        assert!(feb < jan && jan < dec);
    }

    #[test]
    fn test_titles_sort_case_sensitively() {
        let mut index = GroupedIndex::new();
        index.insert(
            "2024-05".to_string(),
            vec![
                entry("banana", "https://x.test/p/banana", 2024, 5, 2),
                entry("Apple", "https://x.test/p/apple", 2024, 5, 9),
            ],
        );

        let report = renderer().render(&index);

        // Literal titles compare by ASCII, so uppercase sorts first.
        let apple = report.find("- [Apple]").unwrap();
        let banana = report.find("- [banana]").unwrap();
        assert!(apple < banana);
    }

    #[test]
    fn test_empty_index_is_heading_and_footer_only() {
        let report = renderer().render(&GroupedIndex::new());

        assert_eq!(
            report,
            "# Blog Post Index\n\n\n ## More from me at: https://about.mvaldes.dev"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut index = GroupedIndex::new();
        index.insert(
            "2024-03".to_string(),
            vec![
                entry("Zeta", "https://x.test/p/zeta", 2024, 3, 1),
                entry("Alpha", "https://x.test/p/alpha", 2024, 3, 2),
            ],
        );

        let r = renderer();
        assert_eq!(r.render(&index), r.render(&index));
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("index.md");
        std::fs::write(&path, "stale contents").unwrap();

        renderer().write(&GroupedIndex::new(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Blog Post Index"));
        assert!(!written.contains("stale"));
    }
}
