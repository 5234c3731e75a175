//! SortCopy CLI - sort files into folders by extension
//!
//! Thin command-line shell over the library: parses arguments, runs the
//! requested pipeline, renders the report.

use clap::Parser;
use sortcopy::config::{CliArgs, Commands, FactorizeConfig, FactorizeMode, OutputFormat, SortConfig};
use sortcopy::core::SortEngine;
use sortcopy::error::{Result, SortCopyError};
use sortcopy::factorize::{BatchExecutor, BatchRun, ExecutionMode};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    // Parse CLI arguments
    let args = CliArgs::parse();

    // Handle result
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    match &args.command {
        Commands::Sort { .. } => run_sort(&args),
        Commands::Factorize { .. } => run_factorize(&args),
    }
}

fn run_sort(args: &CliArgs) -> Result<()> {
    let config = SortConfig::from_cli(args).map_err(SortCopyError::ConfigError)?;

    if args.verbose > 0 {
        print_sort_config(&config);
    }

    let engine = SortEngine::new(config);
    let report = engine.execute()?;

    match args.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            if !args.quiet {
                report.print_summary();
            }
        }
    }

    if !report.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

fn run_factorize(args: &CliArgs) -> Result<()> {
    let config = FactorizeConfig::from_cli(args).map_err(SortCopyError::ConfigError)?;
    let executor = BatchExecutor::new(config.workers);

    match config.mode {
        FactorizeMode::Compare => {
            let report = executor.compare(&config.numbers)?;
            match args.output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => {
                    if !args.quiet {
                        print_batch(&report.sequential);
                        report.print_summary();
                    }
                }
            }
        }
        FactorizeMode::Sequential | FactorizeMode::Parallel => {
            let mode = match config.mode {
                FactorizeMode::Parallel => ExecutionMode::Parallel,
                _ => ExecutionMode::Sequential,
            };
            let batch = executor.run_batch(&config.numbers, mode)?;
            match args.output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&batch)?),
                OutputFormat::Text => {
                    if !args.quiet {
                        print_batch(&batch);
                        println!("\nElapsed: {:.2?}", batch.elapsed);
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_sort_config(config: &SortConfig) {
    println!("=== Configuration ===");
    println!("Source:      {}", config.source.display());
    println!("Destination: {}", config.destination.display());
    println!("Workers:     {}", config.workers);
    println!("Preserve:    {}", config.preserve);
    println!();
}

fn print_batch(batch: &BatchRun) {
    for result in &batch.results {
        let divisors: Vec<String> = result.divisors.iter().map(|d| d.to_string()).collect();
        println!("{}: [{}]", result.input, divisors.join(", "));
    }
}
