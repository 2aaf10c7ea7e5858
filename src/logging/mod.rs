//! Logging and observability
//!
//! Structured logging via `tracing`: console output always, optional JSON
//! file output with rotation. The formatter core never logs; everything
//! observable happens in the preparation glue and CLI.

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
