//! SHA-256 digest of normalized field text

use crate::domain::{MatchprepError, Result};
use sha2::{Digest, Sha256};

/// Length in bytes of every digest this module produces
pub const DIGEST_LEN: usize = 32;

/// Compute the SHA-256 digest of a text value's UTF-8 bytes
///
/// The full string is hashed as given, without trimming; in practice the
/// input is always an already-normalized field. The output is deterministic
/// and matches the standard SHA-256 test vectors.
///
/// # Errors
///
/// Returns [`MatchprepError::InvalidInput`] if the text is blank after
/// trimming.
pub fn hash(text: &str) -> Result<Vec<u8>> {
    if text.trim().is_empty() {
        return Err(MatchprepError::invalid_input("cannot hash a blank value"));
    }

    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    Ok(hasher.finalize().to_vec())
}
