//! Directory scanner
//!
//! Enumerates every regular file under a source root before any copy work
//! is dispatched. Per-entry failures are logged and collected rather than
//! aborting the walk.

use crate::error::{Result, SortCopyError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::warn;
use walkdir::WalkDir;

/// Metadata for a single file entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Absolute path to the file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// Modification time
    pub modified: SystemTime,
}

impl FileEntry {
    /// Create a FileEntry from a path
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::symlink_metadata(path).map_err(|e| SortCopyError::io(path, e))?;

        Ok(FileEntry {
            path: path.to_path_buf(),
            size: metadata.len(),
            modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        })
    }

    /// File name component, if the path has one
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// Result of a directory scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Root path that was scanned
    pub root: PathBuf,
    /// All discovered file entries
    pub files: Vec<FileEntry>,
    /// Total number of files
    pub file_count: usize,
    /// Total size of all files
    pub total_size: u64,
    /// Scan duration
    pub scan_duration: std::time::Duration,
    /// Any errors encountered during scan (entries skipped, not fatal)
    pub errors: Vec<String>,
}

/// Configuration for directory scanning
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Follow symbolic links
    pub follow_symlinks: bool,
    /// Maximum depth (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

/// Recursive directory scanner
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan a directory tree and return every regular file under it.
    ///
    /// Fails before any traversal if `root` does not exist or is not a
    /// directory, so callers can abort without touching the destination.
    pub fn scan(&self, root: &Path) -> Result<ScanResult> {
        let start_time = std::time::Instant::now();

        if !root.exists() {
            return Err(SortCopyError::NotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(SortCopyError::NotADirectory(root.to_path_buf()));
        }

        let root = root.canonicalize().map_err(|e| SortCopyError::io(root, e))?;

        let mut walker = WalkDir::new(&root).follow_links(self.config.follow_symlinks);
        if let Some(max_depth) = self.config.max_depth {
            walker = walker.max_depth(max_depth);
        }

        let mut files = Vec::new();
        let mut errors = Vec::new();

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    warn!("skipping unreadable entry: {}", err);
                    errors.push(err.to_string());
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            match FileEntry::from_path(entry.path()) {
                Ok(file) => files.push(file),
                Err(err) => {
                    warn!("skipping {}: {}", entry.path().display(), err);
                    errors.push(err.to_string());
                }
            }
        }

        let total_size: u64 = files.iter().map(|f| f.size).sum();
        let file_count = files.len();

        Ok(ScanResult {
            root,
            files,
            file_count,
            total_size,
            scan_duration: start_time.elapsed(),
            errors,
        })
    }
}
