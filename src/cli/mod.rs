//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for matchprep using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Matchprep - PII normalization and hashing for match uploads
#[derive(Parser, Debug)]
#[command(name = "matchprep")]
#[command(version, about, long_about = None)]
#[command(author = "Matchprep Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "matchprep.toml", env = "MATCHPREP_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MATCHPREP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize and hash records from an input file into prepared batches
    Process(commands::process::ProcessArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
