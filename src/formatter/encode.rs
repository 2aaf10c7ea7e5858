//! Digest-to-text encoding
//!
//! Renders digest bytes as lowercase hexadecimal or standard padded base64.
//! The receiving service requires one declared encoding per request, so the
//! selector is chosen once per run and applied uniformly.

use crate::domain::{MatchprepError, Result};
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Digest text encoding declared for an upload run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Lowercase hexadecimal, two characters per byte, no separators
    Hex,
    /// RFC 4648 base64 with `=` padding
    Base64,
}

impl FromStr for Encoding {
    type Err = MatchprepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(Encoding::Hex),
            "base64" => Ok(Encoding::Base64),
            other => Err(MatchprepError::invalid_input(format!(
                "unsupported encoding '{other}', expected 'hex' or 'base64'"
            ))),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Hex => write!(f, "hex"),
            Encoding::Base64 => write!(f, "base64"),
        }
    }
}

/// Encode digest bytes as lowercase hexadecimal
///
/// # Errors
///
/// Returns [`MatchprepError::InvalidInput`] if `bytes` is empty.
pub fn hex_encode(bytes: &[u8]) -> Result<String> {
    require_non_empty(bytes)?;
    Ok(hex::encode(bytes))
}

/// Encode digest bytes as standard padded base64
///
/// # Errors
///
/// Returns [`MatchprepError::InvalidInput`] if `bytes` is empty.
pub fn base64_encode(bytes: &[u8]) -> Result<String> {
    require_non_empty(bytes)?;
    Ok(general_purpose::STANDARD.encode(bytes))
}

/// Encode digest bytes using the selected encoding
pub fn encode(bytes: &[u8], encoding: Encoding) -> Result<String> {
    match encoding {
        Encoding::Hex => hex_encode(bytes),
        Encoding::Base64 => base64_encode(bytes),
    }
}

fn require_non_empty(bytes: &[u8]) -> Result<()> {
    if bytes.is_empty() {
        Err(MatchprepError::invalid_input(
            "cannot encode an empty byte sequence",
        ))
    } else {
        Ok(())
    }
}
