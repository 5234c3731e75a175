//! Copy tasks and the bounded worker pool
//!
//! Every discovered file becomes one [`CopyTask`]. A fixed-size pool of
//! worker threads drains the task channel and reports one [`CopyOutcome`]
//! per task over a result channel, in completion order. Failures are
//! contained to the task that produced them.

use crate::error::{Result, SortCopyError};
use crate::fs::{bucket_for, ensure_dir, CopyOptions, FileCopier};
use crossbeam::channel::unbounded;
use serde::Serialize;
use std::path::PathBuf;
use std::thread;
use tracing::{debug, warn};

/// Default number of concurrent copy workers.
///
/// The bound caps simultaneous open file handles and directory contention;
/// it is not tuned for throughput.
pub const DEFAULT_WORKERS: usize = 8;

/// A single copy task
#[derive(Debug, Clone, Serialize)]
pub struct CopyTask {
    /// Unique task ID
    pub id: u64,
    /// Source file path
    pub source: PathBuf,
    /// Destination root path
    pub dest_root: PathBuf,
}

impl CopyTask {
    /// Create a new copy task
    pub fn new(id: u64, source: PathBuf, dest_root: PathBuf) -> Self {
        Self {
            id,
            source,
            dest_root,
        }
    }

    /// Bucket this task's file sorts into
    pub fn bucket(&self) -> String {
        bucket_for(&self.source)
    }
}

/// Status of a completed task
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// File was copied into its bucket
    Copied {
        /// Bytes written to the destination
        bytes_copied: u64,
    },
    /// Copy failed; the task is done, siblings are unaffected
    Failed {
        /// Human-readable failure reason
        reason: String,
    },
}

/// Result of executing one copy task
#[derive(Debug, Clone, Serialize)]
pub struct CopyOutcome {
    /// The task that produced this outcome
    pub task: CopyTask,
    /// Success or failure
    pub status: OutcomeStatus,
}

impl CopyOutcome {
    /// Check whether the task succeeded
    pub fn is_success(&self) -> bool {
        matches!(self.status, OutcomeStatus::Copied { .. })
    }

    /// Bytes copied by this task (0 on failure)
    pub fn bytes_copied(&self) -> u64 {
        match self.status {
            OutcomeStatus::Copied { bytes_copied } => bytes_copied,
            OutcomeStatus::Failed { .. } => 0,
        }
    }
}

/// Execute one copy task, converting every failure into an outcome.
///
/// Never panics and never propagates an error to the caller, so a bad file
/// cannot abort sibling workers.
pub fn copy_one(task: &CopyTask, copier: &FileCopier) -> CopyOutcome {
    match try_copy(task, copier) {
        Ok(bytes_copied) => {
            debug!(
                "copied {} -> {}/{}",
                task.source.display(),
                task.dest_root.display(),
                task.bucket()
            );
            CopyOutcome {
                task: task.clone(),
                status: OutcomeStatus::Copied { bytes_copied },
            }
        }
        Err(err) => {
            warn!("copy failed for {}: {}", task.source.display(), err);
            CopyOutcome {
                task: task.clone(),
                status: OutcomeStatus::Failed {
                    reason: err.to_string(),
                },
            }
        }
    }
}

fn try_copy(task: &CopyTask, copier: &FileCopier) -> Result<u64> {
    let file_name = task
        .source
        .file_name()
        .ok_or_else(|| SortCopyError::NotFound(task.source.clone()))?;

    let bucket_dir = task.dest_root.join(task.bucket());
    ensure_dir(&bucket_dir)?;

    let stats = copier.copy(&task.source, &bucket_dir.join(file_name))?;
    Ok(stats.bytes_copied)
}

/// Fixed-size pool of copy worker threads
pub struct WorkerPool {
    workers: usize,
    options: CopyOptions,
}

impl WorkerPool {
    /// Create a pool with the given worker count (clamped to at least 1)
    pub fn new(workers: usize, options: CopyOptions) -> Self {
        Self {
            workers: workers.max(1),
            options,
        }
    }

    /// Run every task to completion and return the outcomes in completion
    /// order.
    ///
    /// All tasks are submitted up front; the worker count is the only
    /// admission control. The call returns once every submitted task has
    /// produced an outcome, even when some of them fail.
    pub fn run(&self, tasks: Vec<CopyTask>) -> Result<Vec<CopyOutcome>> {
        let (task_tx, task_rx) = unbounded::<CopyTask>();
        let (result_tx, result_rx) = unbounded::<CopyOutcome>();

        let mut handles = Vec::with_capacity(self.workers);
        for worker_id in 0..self.workers {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            let copier = FileCopier::new(self.options.clone());

            handles.push(thread::spawn(move || {
                for task in task_rx.iter() {
                    let outcome = copy_one(&task, &copier);
                    if result_tx.send(outcome).is_err() {
                        break;
                    }
                }
                debug!("worker {} shutting down", worker_id);
            }));
        }
        drop(task_rx);
        drop(result_tx);

        for task in tasks {
            task_tx
                .send(task)
                .map_err(|_| SortCopyError::ThreadPoolError("failed to submit task".to_string()))?;
        }
        drop(task_tx);

        // The iterator ends once every worker has exited and dropped its
        // sender, which happens only after the task channel drains.
        let outcomes: Vec<CopyOutcome> = result_rx.iter().collect();

        for handle in handles {
            handle
                .join()
                .map_err(|_| SortCopyError::ThreadPoolError("copy worker panicked".to_string()))?;
        }

        Ok(outcomes)
    }
}
