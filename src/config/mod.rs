//! Configuration management for matchprep.
//!
//! TOML-based configuration with environment variable substitution
//! (`${VAR_NAME}`), `MATCHPREP_*` environment overrides, defaults for every
//! setting, and validation into typed values.
//!
//! # Example configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [input]
//! format = "csv"
//!
//! [processing]
//! encoding = "hex"        # or "base64"
//! on_invalid = "skip"     # or "abort"
//! batch_size = 10000
//!
//! [output]
//! path = "prepared.json"
//!
//! [logging]
//! local_enabled = false
//! ```

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, InputConfig, InvalidPolicy, LoggingConfig, MatchprepConfig, OutputConfig,
    ProcessingConfig, MAX_RECORDS_PER_BATCH,
};
