//! PII normalization and hashing pipeline
//!
//! This is the core of matchprep: a stateless set of pure functions that turn
//! raw customer fields into the canonical, hashed form the match-upload API
//! accepts. The pipeline has three layers, always invoked in order:
//!
//! - **Format**: category-specific canonicalization (case folding, whitespace
//!   rules, affix stripping, digit extraction)
//! - **Digest**: SHA-256 over the UTF-8 bytes of the normalized text
//! - **Encode**: lowercase hex or padded base64 rendering of the digest
//!
//! Identifier fields (email, phone, names) go through all three layers;
//! geographic fields (region code, postal code) are normalized only.
//!
//! Every function here is synchronous, side-effect free, and safe to call
//! from any thread. Failures are always [`MatchprepError::InvalidInput`] and
//! always deterministic for a given input; nothing in this module logs,
//! retries, or produces partial results.
//!
//! # Examples
//!
//! ```
//! use matchprep::formatter::{process_email_address, Encoding};
//!
//! let hashed = process_email_address(Some("  ALEXZ@example.com "), Encoding::Hex).unwrap();
//! assert_eq!(hashed.len(), 64);
//! ```

pub mod digest;
pub mod email;
pub mod encode;
pub mod geo;
pub mod name;
pub mod phone;
pub mod process;

pub use digest::hash;
pub use email::format_email;
pub use encode::{base64_encode, hex_encode, Encoding};
pub use geo::{format_postal_code, format_region_code};
pub use name::{format_family_name, format_given_name};
pub use phone::format_phone_number;
pub use process::{
    process_email_address, process_family_name, process_field, process_given_name,
    process_phone_number, process_postal_code, process_region_code,
};

use crate::domain::{MatchprepError, Result};

/// Requires a raw field to be present and non-blank, returning the trimmed
/// value.
///
/// All six normalizers share this precondition: an absent value or a value
/// that is empty after trimming surrounding whitespace is invalid.
pub(crate) fn require_present<'a>(raw: Option<&'a str>, label: &str) -> Result<&'a str> {
    match raw {
        None => Err(MatchprepError::invalid_input(format!("{label} is missing"))),
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err(MatchprepError::invalid_input(format!("{label} is blank")))
            } else {
                Ok(trimmed)
            }
        }
    }
}
