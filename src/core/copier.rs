//! Sort engine
//!
//! Orchestrates the copy pipeline: scan the source tree, pair every file
//! with the destination root, run the bounded worker pool, and aggregate
//! the outcomes into a final report.

use crate::config::SortConfig;
use crate::core::{CopyOutcome, CopyTask, WorkerPool};
use crate::error::Result;
use crate::fs::{CopyOptions, ScanConfig, Scanner};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// One failed file in a [`SortReport`]
#[derive(Debug, Clone, Serialize)]
pub struct FailureDetail {
    /// Source path that failed to copy
    pub path: PathBuf,
    /// Why the copy failed
    pub reason: String,
}

/// Aggregated result of a sort run
#[derive(Debug, Serialize)]
pub struct SortReport {
    /// Total files attempted (one per discovered file)
    pub total: usize,
    /// Files copied successfully
    pub succeeded: usize,
    /// Files that failed to copy
    pub failed: usize,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Time from task submission to the last collected outcome
    pub elapsed: Duration,
    /// Per-file failure details; never silently dropped
    pub failures: Vec<FailureDetail>,
}

impl SortReport {
    /// Build a report from the collected outcomes
    pub fn from_outcomes(outcomes: &[CopyOutcome], elapsed: Duration) -> Self {
        let mut succeeded = 0usize;
        let mut bytes_copied = 0u64;
        let mut failures = Vec::new();

        for outcome in outcomes {
            match outcome.status {
                crate::core::OutcomeStatus::Copied {
                    bytes_copied: bytes,
                } => {
                    succeeded += 1;
                    bytes_copied += bytes;
                }
                crate::core::OutcomeStatus::Failed { ref reason } => {
                    failures.push(FailureDetail {
                        path: outcome.task.source.clone(),
                        reason: reason.clone(),
                    });
                }
            }
        }

        Self {
            total: outcomes.len(),
            succeeded,
            failed: failures.len(),
            bytes_copied,
            elapsed,
            failures,
        }
    }

    /// Check if the run was completely successful
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Print summary to console
    pub fn print_summary(&self) {
        println!("\n=== Sort Summary ===");
        println!("Files attempted: {}", self.total);
        println!("Succeeded:       {}", self.succeeded);
        println!("Failed:          {}", self.failed);
        println!(
            "Bytes copied:    {}",
            humansize::format_size(self.bytes_copied, humansize::BINARY)
        );
        println!("Duration:        {:.2?}", self.elapsed);

        if !self.failures.is_empty() {
            println!("\nFailures:");
            for failure in &self.failures {
                println!("  {} - {}", failure.path.display(), failure.reason);
            }
        }
    }
}

/// Main sort engine
pub struct SortEngine {
    config: SortConfig,
}

impl SortEngine {
    /// Create a new sort engine
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// Execute the sort run.
    ///
    /// Fails fast, before any worker is spawned and without creating the
    /// destination, when the source root is missing or not a directory.
    /// Per-file failures during the run are contained in the report.
    pub fn execute(&self) -> Result<SortReport> {
        let scanner = Scanner::new(ScanConfig {
            follow_symlinks: self.config.follow_symlinks,
            max_depth: None,
        });
        let scan = scanner.scan(&self.config.source)?;
        info!(
            "found {} files under {}",
            scan.file_count,
            scan.root.display()
        );

        let tasks: Vec<CopyTask> = scan
            .files
            .iter()
            .enumerate()
            .map(|(id, entry)| {
                CopyTask::new(id as u64, entry.path.clone(), self.config.destination.clone())
            })
            .collect();

        let pool = WorkerPool::new(self.config.workers, self.copy_options());

        let start = Instant::now();
        let outcomes = pool.run(tasks)?;
        let elapsed = start.elapsed();

        let report = SortReport::from_outcomes(&outcomes, elapsed);
        info!(
            "sorted {} of {} files in {:.2?}",
            report.succeeded, report.total, report.elapsed
        );
        Ok(report)
    }

    fn copy_options(&self) -> CopyOptions {
        CopyOptions {
            buffer_size: self.config.buffer_size,
            preserve_permissions: self.config.preserve,
            preserve_mtime: self.config.preserve,
        }
    }
}

/// Sort a tree with default settings
pub fn sort_tree(source: &Path, destination: &Path) -> Result<SortReport> {
    let config = SortConfig {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        ..Default::default()
    };

    SortEngine::new(config).execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SortCopyError;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, contents: &[u8]) {
        if let Some(parent) = dir.join(name).parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        File::create(dir.join(name))
            .unwrap()
            .write_all(contents)
            .unwrap();
    }

    #[test]
    fn test_sort_by_extension_end_to_end() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        let dest_root = dst.path().join("dist");

        write_file(src.path(), "a.txt", b"aaa");
        write_file(src.path(), "b.TXT", b"bbb");
        write_file(src.path(), "c", b"ccc");

        let report = sort_tree(src.path(), &dest_root).unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.succeeded, 3);
        assert_eq!(report.failed, 0);
        assert!(report.is_success());

        assert!(dest_root.join("txt/a.txt").is_file());
        assert!(dest_root.join("txt/b.TXT").is_file());
        assert!(dest_root.join("unknown/c").is_file());
    }

    #[test]
    fn test_sort_nested_tree() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();

        write_file(src.path(), "top.rs", b"fn main() {}");
        write_file(src.path(), "docs/guide.md", b"# guide");
        write_file(src.path(), "docs/deep/nested.md", b"# nested");

        let report = sort_tree(src.path(), dst.path()).unwrap();

        assert_eq!(report.total, 3);
        assert!(report.is_success());
        assert!(dst.path().join("rs/top.rs").is_file());
        assert!(dst.path().join("md/guide.md").is_file());
        assert!(dst.path().join("md/nested.md").is_file());
    }

    #[test]
    fn test_duplicate_names_last_writer_wins() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();

        write_file(src.path(), "one/data.csv", b"from one");
        write_file(src.path(), "two/data.csv", b"from two");

        let report = sort_tree(src.path(), dst.path()).unwrap();

        // Both copies count as successes; the bucket holds a single file
        // written by whichever task finished last.
        assert_eq!(report.total, 2);
        assert_eq!(report.succeeded, 2);
        let bucket = dst.path().join("csv");
        assert_eq!(std::fs::read_dir(&bucket).unwrap().count(), 1);
        let contents = std::fs::read(bucket.join("data.csv")).unwrap();
        assert!(contents == b"from one" || contents == b"from two");
    }

    #[test]
    fn test_invalid_root_fails_before_any_work() {
        let dst = TempDir::new().unwrap();
        let dest_root = dst.path().join("never-created");

        let err = sort_tree(Path::new("/no/such/source"), &dest_root).unwrap_err();

        assert!(matches!(err, SortCopyError::NotFound(_)));
        assert!(!dest_root.exists());
    }

    #[test]
    fn test_root_must_be_directory() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        write_file(src.path(), "plain.txt", b"x");

        let err = sort_tree(&src.path().join("plain.txt"), dst.path()).unwrap_err();
        assert!(matches!(err, SortCopyError::NotADirectory(_)));
    }

    #[test]
    fn test_small_pool_still_covers_all_files() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();

        for i in 0..25 {
            write_file(src.path(), &format!("f{}.dat", i), b"payload");
        }

        let config = SortConfig {
            source: src.path().to_path_buf(),
            destination: dst.path().to_path_buf(),
            workers: 2,
            ..Default::default()
        };
        let report = SortEngine::new(config).execute().unwrap();

        assert_eq!(report.total, 25);
        assert_eq!(report.succeeded, 25);
        assert_eq!(std::fs::read_dir(dst.path().join("dat")).unwrap().count(), 25);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = SortReport {
            total: 2,
            succeeded: 1,
            failed: 1,
            bytes_copied: 42,
            elapsed: Duration::from_millis(5),
            failures: vec![FailureDetail {
                path: PathBuf::from("/src/bad.txt"),
                reason: "permission denied".to_string(),
            }],
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"failed\":1"));
        assert!(json.contains("permission denied"));
    }
}
