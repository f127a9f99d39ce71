//! File discovery for Flutter projects
//!
//! Finds every `.dart` file under the project's `lib/` subtree. The walk is
//! sorted by file name so that successive runs report files in the same order.

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

/// Recursive finder for Dart source files.
pub struct FileFinder {
    /// Subdirectory of the project root that holds the source tree.
    source_dir: String,
    /// File extension to match, without the leading dot.
    extension: String,
}

impl FileFinder {
    pub fn new() -> Self {
        Self {
            source_dir: "lib".to_string(),
            extension: "dart".to_string(),
        }
    }

    pub fn with_source_dir(mut self, dir: impl Into<String>) -> Self {
        self.source_dir = dir.into();
        self
    }

    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = ext.into();
        self
    }

    /// Find all matching files under `<root>/<source_dir>`, sorted.
    ///
    /// A missing source directory yields an empty list; unreadable
    /// subdirectories are logged and skipped rather than aborting the walk.
    pub fn find_files(&self, root: &Path) -> Vec<PathBuf> {
        let base = root.join(&self.source_dir);
        if !base.is_dir() {
            return Vec::new();
        }

        WalkDir::new(&base)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("skipping unreadable directory entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .map_or(false, |ext| ext == self.extension.as_str())
            })
            .map(|entry| entry.into_path())
            .collect()
    }
}

impl Default for FileFinder {
    fn default() -> Self {
        Self::new()
    }
}
