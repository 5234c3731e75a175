//! Batch execution for the divisor finder
//!
//! Runs a batch of numbers under two scheduling strategies: a plain
//! in-order loop and a CPU-parallel rayon pool. Both produce identical,
//! input-ordered results; only the elapsed time differs.

use crate::error::{Result, SortCopyError};
use crate::factorize::divisors;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Scheduling strategy for a factorize batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One number at a time, in input order, on the calling thread
    Sequential,
    /// Numbers distributed across a thread pool sized to the hardware
    Parallel,
}

/// Divisors of one input number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisorResult {
    /// The number that was factorized
    pub input: u64,
    /// All divisors of `input`, ascending
    pub divisors: Vec<u64>,
}

/// Result of running one batch under one scheduling mode
#[derive(Debug, Clone, Serialize)]
pub struct BatchRun {
    /// Mode the batch ran under
    pub mode: ExecutionMode,
    /// One result per input number, in input order
    pub results: Vec<DivisorResult>,
    /// Wall-clock time for the whole batch
    pub elapsed: Duration,
}

/// Side-by-side comparison of both scheduling modes
#[derive(Debug, Serialize)]
pub struct SpeedupReport {
    /// The sequential run
    pub sequential: BatchRun,
    /// The parallel run over the same input
    pub parallel: BatchRun,
    /// Naive sequential/parallel wall-clock ratio
    pub speedup: f64,
}

impl SpeedupReport {
    /// Print summary to console
    pub fn print_summary(&self) {
        println!("\n=== Factorize Summary ===");
        println!("Numbers:     {}", self.sequential.results.len());
        println!("Sequential:  {:.2?}", self.sequential.elapsed);
        println!("Parallel:    {:.2?}", self.parallel.elapsed);
        println!("Speedup:     {:.2}x", self.speedup);
    }
}

/// Runs divisor batches under a selectable scheduling strategy
pub struct BatchExecutor {
    /// Worker threads for the parallel mode (0 = available parallelism)
    workers: usize,
}

impl Default for BatchExecutor {
    fn default() -> Self {
        Self { workers: 0 }
    }
}

impl BatchExecutor {
    /// Create an executor with the given parallel worker count (0 = auto)
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    fn pool_size(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get()
        } else {
            self.workers
        }
    }

    /// Run the divisor finder over a batch of numbers.
    ///
    /// The whole batch is validated up front: the first non-positive input
    /// fails the call before any computation starts. Results come back in
    /// input order under both modes, regardless of completion order.
    pub fn run_batch(&self, numbers: &[u64], mode: ExecutionMode) -> Result<BatchRun> {
        if let Some(&bad) = numbers.iter().find(|&&n| n == 0) {
            return Err(SortCopyError::InvalidInput(bad));
        }

        let start = Instant::now();
        let results = match mode {
            ExecutionMode::Sequential => numbers
                .iter()
                .map(|&n| factorize_one(n))
                .collect::<Result<Vec<_>>>()?,
            ExecutionMode::Parallel => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(self.pool_size())
                    .build()
                    .map_err(|e| SortCopyError::ThreadPoolError(e.to_string()))?;

                pool.install(|| {
                    numbers
                        .par_iter()
                        .map(|&n| factorize_one(n))
                        .collect::<Result<Vec<_>>>()
                })?
            }
        };

        Ok(BatchRun {
            mode,
            results,
            elapsed: start.elapsed(),
        })
    }

    /// Run the same batch under both modes and report the speedup ratio
    pub fn compare(&self, numbers: &[u64]) -> Result<SpeedupReport> {
        let sequential = self.run_batch(numbers, ExecutionMode::Sequential)?;
        let parallel = self.run_batch(numbers, ExecutionMode::Parallel)?;

        let speedup = if parallel.elapsed.as_secs_f64() > 0.0 {
            sequential.elapsed.as_secs_f64() / parallel.elapsed.as_secs_f64()
        } else {
            1.0
        };

        Ok(SpeedupReport {
            sequential,
            parallel,
            speedup,
        })
    }
}

fn factorize_one(n: u64) -> Result<DivisorResult> {
    Ok(DivisorResult {
        input: n,
        divisors: divisors(n)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_batch() {
        let executor = BatchExecutor::default();
        let run = executor
            .run_batch(&[6, 7, 28], ExecutionMode::Sequential)
            .unwrap();

        assert_eq!(run.results.len(), 3);
        assert_eq!(run.results[0].divisors, vec![1, 2, 3, 6]);
        assert_eq!(run.results[1].divisors, vec![1, 7]);
        assert_eq!(run.results[2].divisors, vec![1, 2, 4, 7, 14, 28]);
    }

    #[test]
    fn test_modes_agree() {
        let numbers = [6, 7, 28, 128, 255, 1000];
        let executor = BatchExecutor::default();

        let sequential = executor
            .run_batch(&numbers, ExecutionMode::Sequential)
            .unwrap();
        let parallel = executor
            .run_batch(&numbers, ExecutionMode::Parallel)
            .unwrap();

        assert_eq!(sequential.results, parallel.results);
    }

    #[test]
    fn test_parallel_preserves_input_order() {
        // Mix of slow (large) and fast (small) inputs so completion order
        // differs from input order.
        let numbers: Vec<u64> = vec![200_000, 3, 150_000, 5, 100_000, 7];
        let executor = BatchExecutor::new(4);

        let run = executor
            .run_batch(&numbers, ExecutionMode::Parallel)
            .unwrap();

        let inputs: Vec<u64> = run.results.iter().map(|r| r.input).collect();
        assert_eq!(inputs, numbers);
    }

    #[test]
    fn test_zero_fails_whole_batch() {
        let executor = BatchExecutor::default();
        let err = executor
            .run_batch(&[3, 0, 5], ExecutionMode::Sequential)
            .unwrap_err();
        assert!(matches!(err, SortCopyError::InvalidInput(0)));

        let err = executor
            .run_batch(&[0], ExecutionMode::Parallel)
            .unwrap_err();
        assert!(matches!(err, SortCopyError::InvalidInput(0)));
    }

    #[test]
    fn test_empty_batch() {
        let executor = BatchExecutor::default();
        let run = executor
            .run_batch(&[], ExecutionMode::Sequential)
            .unwrap();
        assert!(run.results.is_empty());
    }

    #[test]
    fn test_compare_runs_both_modes() {
        let executor = BatchExecutor::new(2);
        let report = executor.compare(&[6, 7, 28]).unwrap();

        assert_eq!(report.sequential.results, report.parallel.results);
        assert_eq!(report.sequential.mode, ExecutionMode::Sequential);
        assert_eq!(report.parallel.mode, ExecutionMode::Parallel);
        assert!(report.speedup > 0.0);
    }
}
