//! Init command implementation
//!
//! Generates a starter configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "matchprep.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing matchprep configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::config_template()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: matchprep validate-config");
                println!("  3. Prepare a file: matchprep process users.csv");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(2)
            }
        }
    }

    fn config_template() -> &'static str {
        r#"# matchprep configuration

[application]
name = "matchprep"
log_level = "info"
# Process records but write no output file
dry_run = false

[input]
# csv, json, or jsonl; leave empty to infer from the file extension
format = ""

[processing]
# Digest encoding for hashed identifiers: hex or base64.
# One encoding per run, applied uniformly to every identifier.
encoding = "hex"
# What to do with records that fail normalization: skip or abort
on_invalid = "skip"
# Records per output batch (at most 10000, the per-request cap)
batch_size = 10000

[output]
path = "prepared.json"
pretty = false

[logging]
# Enable JSON file logging in addition to console output
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
    }
}
