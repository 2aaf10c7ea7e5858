//! Phone number normalization
//!
//! Keeps only the digits of the input and prefixes them with `+`. No
//! country-code or length validation is performed: any non-empty digit
//! sequence is accepted, per the upload contract.

use super::require_present;
use crate::domain::{MatchprepError, Result};

/// Normalize a phone number to `+<digits>`
///
/// Separators, parentheses, and any leading `+` are discarded before the
/// prefix is applied, so `"+44-113-496-0987"` and `"441134960987"` normalize
/// identically.
///
/// # Errors
///
/// Returns [`MatchprepError::InvalidInput`] if the value is absent, blank, or
/// contains no digits at all.
pub fn format_phone_number(raw: Option<&str>) -> Result<String> {
    let value = require_present(raw, "phone number")?;

    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(MatchprepError::invalid_input(
            "phone number contains no digits",
        ));
    }

    Ok(format!("+{digits}"))
}
