//! Configuration schema types
//!
//! Defines the TOML configuration structure for matchprep. Every section is
//! optional in the file; defaults produce a working hex-encoded CSV run.

use crate::domain::{MatchprepError, Result};
use crate::formatter::Encoding;
use serde::{Deserialize, Serialize};

/// Policy applied when a record fails normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvalidPolicy {
    /// Skip the failing record, log a warning, continue the run
    #[default]
    Skip,
    /// Abort the whole run on the first failing record
    Abort,
}

impl std::str::FromStr for InvalidPolicy {
    type Err = MatchprepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(InvalidPolicy::Skip),
            "abort" => Ok(InvalidPolicy::Abort),
            other => Err(MatchprepError::Configuration(format!(
                "invalid on_invalid policy '{other}', expected 'skip' or 'abort'"
            ))),
        }
    }
}

/// Upper bound the receiving service places on records per request
pub const MAX_RECORDS_PER_BATCH: usize = 10_000;

/// Main matchprep configuration
///
/// Root structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatchprepConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Input file settings
    #[serde(default)]
    pub input: InputConfig,

    /// Normalization/hashing settings
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Application-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name used in logs
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Process records but write no output file
    #[serde(default)]
    pub dry_run: bool,
}

/// Input file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Input format: csv, json, or jsonl. Empty means infer from extension.
    #[serde(default)]
    pub format: String,
}

/// Normalization/hashing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Digest encoding declared for the run: hex or base64
    #[serde(default = "default_encoding")]
    pub encoding: String,

    /// What to do with records that fail normalization: skip or abort
    #[serde(default = "default_on_invalid")]
    pub on_invalid: String,

    /// Records per output batch (1..=10000)
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

/// Output file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output path for the prepared-batches JSON document
    #[serde(default = "default_output_path")]
    pub path: String,

    /// Pretty-print the output JSON
    #[serde(default)]
    pub pretty: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging in addition to console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: daily or hourly
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

fn default_app_name() -> String {
    "matchprep".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_encoding() -> String {
    "hex".to_string()
}

fn default_on_invalid() -> String {
    "skip".to_string()
}

fn default_batch_size() -> usize {
    MAX_RECORDS_PER_BATCH
}

fn default_output_path() -> String {
    "prepared.json".to_string()
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            format: String::new(),
        }
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            encoding: default_encoding(),
            on_invalid: default_on_invalid(),
            batch_size: default_batch_size(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            pretty: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

impl MatchprepConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`MatchprepError::Configuration`] if any value is out of range
    /// or fails to parse into its typed form.
    pub fn validate(&self) -> Result<()> {
        self.encoding()?;
        self.invalid_policy()?;

        if self.processing.batch_size == 0 || self.processing.batch_size > MAX_RECORDS_PER_BATCH {
            return Err(MatchprepError::Configuration(format!(
                "batch_size must be between 1 and {MAX_RECORDS_PER_BATCH}, got {}",
                self.processing.batch_size
            )));
        }

        if !self.input.format.is_empty() {
            crate::core::prepare::InputFormat::from_name(&self.input.format)?;
        }

        match self.logging.local_rotation.as_str() {
            "daily" | "hourly" => {}
            other => {
                return Err(MatchprepError::Configuration(format!(
                    "invalid log rotation '{other}', expected 'daily' or 'hourly'"
                )))
            }
        }

        if self.output.path.trim().is_empty() {
            return Err(MatchprepError::Configuration(
                "output path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Parsed digest encoding for the run
    pub fn encoding(&self) -> Result<Encoding> {
        self.processing
            .encoding
            .parse::<Encoding>()
            .map_err(|e| MatchprepError::Configuration(e.to_string()))
    }

    /// Parsed invalid-record policy for the run
    pub fn invalid_policy(&self) -> Result<InvalidPolicy> {
        self.processing.on_invalid.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = MatchprepConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.encoding().unwrap(), Encoding::Hex);
        assert_eq!(config.invalid_policy().unwrap(), InvalidPolicy::Skip);
        assert_eq!(config.processing.batch_size, MAX_RECORDS_PER_BATCH);
    }

    #[test]
    fn test_bad_encoding_rejected() {
        let mut config = MatchprepConfig::default();
        config.processing.encoding = "rot13".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_policy_rejected() {
        let mut config = MatchprepConfig::default();
        config.processing.on_invalid = "retry".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_batch_size_bounds() {
        let mut config = MatchprepConfig::default();
        config.processing.batch_size = 0;
        assert!(config.validate().is_err());
        config.processing.batch_size = MAX_RECORDS_PER_BATCH + 1;
        assert!(config.validate().is_err());
        config.processing.batch_size = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: MatchprepConfig = toml::from_str(
            r#"
[processing]
encoding = "base64"
batch_size = 500
"#,
        )
        .unwrap();
        assert_eq!(config.encoding().unwrap(), Encoding::Base64);
        assert_eq!(config.processing.batch_size, 500);
        assert_eq!(config.application.log_level, "info");
    }
}
