// file: src/scanner/walker.rs
// description: Directory walking and markdown file discovery
// reference: https://docs.rs/walkdir

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

const DOCUMENT_EXTENSION: &str = ".md";

/// A candidate document plus the two values the index needs from its
/// location: the group prefix (immediate parent directory name) and the
/// permalink stem (file name truncated at the first dot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedPost {
    pub path: PathBuf,
    pub group: String,
    pub stem: String,
}

pub struct DocumentWalker {
    follow_symlinks: bool,
    max_file_size_mb: usize,
}

impl DocumentWalker {
    pub fn new(follow_symlinks: bool, max_file_size_mb: usize) -> Self {
        Self {
            follow_symlinks,
            max_file_size_mb,
        }
    }

    /// Lazily yields every `.md` file under `root` by recursive descent.
    /// A nonexistent root yields nothing; unreadable directories are
    /// logged and skipped, never fatal.
    pub fn walk(&self, root: &Path) -> impl Iterator<Item = ScannedPost> + use<> {
        let max_bytes = (self.max_file_size_mb * 1024 * 1024) as u64;

        WalkDir::new(root)
            .follow_links(self.follow_symlinks)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter_map(move |entry| scan_entry(&entry, max_bytes))
    }
}

fn scan_entry(entry: &DirEntry, max_bytes: u64) -> Option<ScannedPost> {
    let path = entry.path();
    let name = path.file_name()?.to_str()?;

    if !name.ends_with(DOCUMENT_EXTENSION) {
        return None;
    }

    if let Ok(metadata) = entry.metadata()
        && metadata.len() > max_bytes
    {
        debug!(
            "Skipping large file ({} MB): {}",
            metadata.len() / 1024 / 1024,
            path.display()
        );
        return None;
    }

    let group = path
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    // First dot wins: "v1.2.draft.md" keeps "v1" as its stem.
    let stem = name.split('.').next().unwrap_or(name).to_string();

    Some(ScannedPost {
        path: path.to_path_buf(),
        group,
        stem,
    })
}
