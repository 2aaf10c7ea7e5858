// Matchprep - PII normalization and hashing for ad-platform match uploads
// Copyright (c) 2025 Matchprep Contributors
// Licensed under the MIT License

//! # Matchprep - PII normalization and hashing
//!
//! Matchprep prepares customer PII (email addresses, phone numbers, names,
//! region/postal codes) for submission to advertising data-ingestion APIs
//! that require identifiers to be normalized and one-way hashed before
//! transmission. Raw PII never leaves the caller's environment unhashed.
//!
//! ## Architecture
//!
//! - [`formatter`] - The core pipeline: field normalizers, SHA-256 digest,
//!   hex/base64 encoding, and the composed process operations
//! - [`core`] - Batch preparation: record reading, per-record processing,
//!   batching, and output assembly
//! - [`cli`] - Command-line interface and argument parsing
//! - [`domain`] - Error types and the PII field taxonomy
//! - [`config`] - TOML configuration with environment overrides
//! - [`logging`] - Structured logging setup
//!
//! ## Quick start
//!
//! ```
//! use matchprep::formatter::{process_email_address, Encoding};
//!
//! let hashed = process_email_address(Some("  ALEXZ@example.com "), Encoding::Hex)?;
//! // hashed is the SHA-256 hex digest of "alexz@example.com"
//! # Ok::<(), matchprep::domain::MatchprepError>(())
//! ```
//!
//! The formatter core performs no I/O, keeps no state, and raises a single
//! error kind for every malformed input; batch iteration, skip-or-abort
//! policy, and output assembly live in [`core::prepare`].

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod formatter;
pub mod logging;
