//! Process command implementation
//!
//! Reads raw records from an input file, prepares them through the
//! normalize/hash/encode pipeline, and writes the batched output document.

use crate::config::load_config;
use crate::core::prepare::{InputFormat, PrepareCoordinator};
use clap::Args;
use std::path::Path;

/// Arguments for the process command
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Input file (CSV with a header row, JSON array, or JSON lines)
    pub input: String,

    /// Input format (csv, json, jsonl); inferred from the extension if omitted
    #[arg(short, long)]
    pub format: Option<String>,

    /// Digest encoding for hashed identifiers (hex or base64)
    #[arg(short, long)]
    pub encoding: Option<String>,

    /// Output path for the prepared-batches document
    #[arg(short, long)]
    pub output: Option<String>,

    /// Records per output batch
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Policy for records that fail normalization (skip or abort)
    #[arg(long)]
    pub on_invalid: Option<String>,

    /// Process records but write no output file
    #[arg(long)]
    pub dry_run: bool,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input, "Starting process command");

        // Load configuration; a missing file is fine when defaults suffice
        let mut config = if Path::new(config_path).exists() {
            load_config(config_path)?
        } else {
            tracing::debug!(config_path = %config_path, "No configuration file, using defaults");
            crate::config::MatchprepConfig::default()
        };

        // Apply CLI overrides
        if let Some(encoding) = &self.encoding {
            config.processing.encoding = encoding.clone();
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if let Some(batch_size) = self.batch_size {
            config.processing.batch_size = batch_size;
        }
        if let Some(on_invalid) = &self.on_invalid {
            config.processing.on_invalid = on_invalid.clone();
        }
        if self.dry_run {
            config.application.dry_run = true;
        }
        if let Some(format) = &self.format {
            config.input.format = format.clone();
        }

        if let Err(e) = config.validate() {
            println!("❌ Invalid configuration: {e}");
            return Ok(2);
        }

        let input = Path::new(&self.input);
        let format = if config.input.format.is_empty() {
            InputFormat::infer(input)?
        } else {
            InputFormat::from_name(&config.input.format)?
        };

        let coordinator = PrepareCoordinator::from_config(&config)?;
        let summary = coordinator.run(input, format)?;
        summary.log_summary();

        println!("✅ Preparation completed");
        println!();
        println!("Summary:");
        println!("  Records read:     {}", summary.total_records);
        println!("  Records prepared: {}", summary.prepared_records);
        println!("  Records skipped:  {}", summary.skipped_records);
        println!("  Fields processed: {}", summary.fields_prepared);
        println!("  Output batches:   {}", summary.batches);
        println!("  Duration:         {:.2}s", summary.duration.as_secs_f64());
        if !summary.failures.is_empty() {
            println!();
            println!("Skipped records:");
            for failure in &summary.failures {
                println!("  record {}: {}", failure.index, failure.message);
            }
        }

        Ok(0)
    }
}
