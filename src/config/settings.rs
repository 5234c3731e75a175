//! Configuration settings for SortCopy
//!
//! Defines all configuration options, CLI arguments, and defaults for the
//! sort and factorize operations.

use crate::core::DEFAULT_WORKERS;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// SortCopy - sort files into folders by extension, fast
#[derive(Parser, Debug, Clone)]
#[command(name = "sortcopy")]
#[command(author = "SortCopy Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Multi-threaded file organizer with a divisor-finding demo")]
#[command(long_about = r#"
SortCopy copies every file under a source tree into subdirectories named
after each file's extension, using a fixed-size pool of copy workers.

It also ships a small factorize utility that computes the divisors of a
batch of integers sequentially and in parallel and reports the speedup.

Examples:
  sortcopy sort ~/Downloads              # Sort into ./dist
  sortcopy sort /data /sorted -w 16      # Custom destination and pool size
  sortcopy factorize 6 7 28              # Compare both scheduling modes
  sortcopy factorize 128 --mode parallel # Parallel only
"#)]
pub struct CliArgs {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Output format for reports
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub output_format: OutputFormat,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Sort every file under SOURCE into extension buckets
    #[command(name = "sort")]
    Sort {
        /// Source directory to sort
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Destination root for the sorted tree
        #[arg(value_name = "DESTINATION", default_value = "dist")]
        destination: PathBuf,

        /// Number of concurrent copy workers
        #[arg(short = 'w', long, default_value_t = DEFAULT_WORKERS, value_name = "NUM")]
        workers: usize,

        /// Follow symbolic links while scanning
        #[arg(short = 'L', long)]
        follow_symlinks: bool,

        /// Preserve file attributes (permissions, timestamps)
        #[arg(long, default_value = "true")]
        preserve: bool,
    },

    /// Compute all divisors for a batch of positive integers
    #[command(name = "factorize")]
    Factorize {
        /// Positive integers to factorize
        #[arg(value_name = "NUMBER", required = true)]
        numbers: Vec<u64>,

        /// Worker threads for the parallel mode (0 = auto-detect)
        #[arg(short = 'w', long, default_value = "0", value_name = "NUM")]
        workers: usize,

        /// Scheduling mode
        #[arg(long, value_enum, default_value = "compare")]
        mode: FactorizeMode,
    },
}

/// Output format for reports
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text summary
    Text,
    /// JSON report on stdout
    Json,
}

/// Scheduling choice for the factorize subcommand
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorizeMode {
    /// Run both modes and report the speedup
    Compare,
    /// Sequential mode only
    Sequential,
    /// Parallel mode only
    Parallel,
}

/// Runtime configuration for a sort run
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Source directory
    pub source: PathBuf,
    /// Destination root
    pub destination: PathBuf,
    /// Concurrent copy workers
    pub workers: usize,
    /// Buffer size for file copies
    pub buffer_size: usize,
    /// Preserve permissions and timestamps
    pub preserve: bool,
    /// Follow symbolic links while scanning
    pub follow_symlinks: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            destination: PathBuf::from("dist"),
            workers: DEFAULT_WORKERS,
            buffer_size: 64 * 1024,
            preserve: true,
            follow_symlinks: false,
        }
    }
}

impl SortConfig {
    /// Build a sort configuration from parsed CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, String> {
        match &args.command {
            Commands::Sort {
                source,
                destination,
                workers,
                follow_symlinks,
                preserve,
            } => Ok(Self {
                source: source.clone(),
                destination: destination.clone(),
                workers: *workers,
                follow_symlinks: *follow_symlinks,
                preserve: *preserve,
                ..Default::default()
            }),
            _ => Err("not a sort invocation".to_string()),
        }
    }
}

/// Runtime configuration for a factorize run
#[derive(Debug, Clone)]
pub struct FactorizeConfig {
    /// Batch of numbers to factorize
    pub numbers: Vec<u64>,
    /// Parallel worker threads (0 = auto)
    pub workers: usize,
    /// Which mode(s) to run
    pub mode: FactorizeMode,
}

impl FactorizeConfig {
    /// Build a factorize configuration from parsed CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, String> {
        match &args.command {
            Commands::Factorize {
                numbers,
                workers,
                mode,
            } => Ok(Self {
                numbers: numbers.clone(),
                workers: *workers,
                mode: *mode,
            }),
            _ => Err("not a factorize invocation".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_sort_defaults() {
        let args = CliArgs::parse_from(["sortcopy", "sort", "/tmp/source"]);
        let config = SortConfig::from_cli(&args).unwrap();

        assert_eq!(config.source, PathBuf::from("/tmp/source"));
        assert_eq!(config.destination, PathBuf::from("dist"));
        assert_eq!(config.workers, DEFAULT_WORKERS);
        assert!(config.preserve);
        assert!(!config.follow_symlinks);
    }

    #[test]
    fn test_sort_custom_workers() {
        let args = CliArgs::parse_from(["sortcopy", "sort", "/a", "/b", "-w", "2"]);
        let config = SortConfig::from_cli(&args).unwrap();

        assert_eq!(config.destination, PathBuf::from("/b"));
        assert_eq!(config.workers, 2);
    }

    #[test]
    fn test_factorize_args() {
        let args = CliArgs::parse_from(["sortcopy", "factorize", "6", "7", "28"]);
        let config = FactorizeConfig::from_cli(&args).unwrap();

        assert_eq!(config.numbers, vec![6, 7, 28]);
        assert_eq!(config.workers, 0);
        assert_eq!(config.mode, FactorizeMode::Compare);
    }

    #[test]
    fn test_factorize_rejects_negative_at_parse() {
        let result = CliArgs::try_parse_from(["sortcopy", "factorize", "-5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_mismatched_subcommand() {
        let args = CliArgs::parse_from(["sortcopy", "factorize", "6"]);
        assert!(SortConfig::from_cli(&args).is_err());
    }
}
