//! Validate config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Application:   {}", config.application.name);
        println!("  Log Level:     {}", config.application.log_level);
        println!(
            "  Input Format:  {}",
            if config.input.format.is_empty() {
                "(inferred from extension)"
            } else {
                config.input.format.as_str()
            }
        );
        println!("  Encoding:      {}", config.processing.encoding);
        println!("  On Invalid:    {}", config.processing.on_invalid);
        println!("  Batch Size:    {}", config.processing.batch_size);
        println!("  Output Path:   {}", config.output.path);
        println!("  Dry Run:       {}", config.application.dry_run);

        Ok(0)
    }
}
