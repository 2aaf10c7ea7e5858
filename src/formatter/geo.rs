//! Region-code and postal-code normalization
//!
//! Geographic fields are not hashed; they only need canonical text form.

use super::require_present;
use crate::domain::{MatchprepError, Result};

/// Normalize a region code to upper-case ISO-3166-1 alpha-2 shape
///
/// # Errors
///
/// Returns [`MatchprepError::InvalidInput`] if the value is absent, blank, or
/// is not exactly two `A`–`Z` characters after trimming and upper-casing.
pub fn format_region_code(raw: Option<&str>) -> Result<String> {
    let value = require_present(raw, "region code")?.to_uppercase();

    if value.chars().count() != 2 || !value.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(MatchprepError::invalid_input(
            "region code must be exactly two letters A-Z",
        ));
    }

    Ok(value)
}

/// Normalize a postal code: trim only
///
/// Postal formats vary too widely across regions to validate shape here; the
/// only requirement is a non-blank value.
///
/// # Errors
///
/// Returns [`MatchprepError::InvalidInput`] if the value is absent or blank.
pub fn format_postal_code(raw: Option<&str>) -> Result<String> {
    Ok(require_present(raw, "postal code")?.to_string())
}
