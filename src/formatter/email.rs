//! Email address normalization
//!
//! Canonicalizes an email address so that every casing/whitespace variant of
//! the same logical address hashes identically: trim, reject internal
//! whitespace, lower-case, and apply Gmail dot-insensitivity to the
//! local-part of `gmail.com` / `googlemail.com` addresses.

use super::require_present;
use crate::domain::{MatchprepError, Result};

/// Domains whose local-parts ignore `.` characters
const DOT_INSENSITIVE_DOMAINS: [&str; 2] = ["gmail.com", "googlemail.com"];

/// Normalize an email address to its canonical form
///
/// # Errors
///
/// Returns [`MatchprepError::InvalidInput`] if the value is absent, blank,
/// contains internal whitespace, does not split into exactly one non-empty
/// local-part and one non-empty domain on `@`, or if a Gmail local-part is
/// nothing but dots.
pub fn format_email(raw: Option<&str>) -> Result<String> {
    let value = require_present(raw, "email address")?;

    if value.chars().any(char::is_whitespace) {
        return Err(MatchprepError::invalid_input(
            "email address must not contain whitespace",
        ));
    }

    let value = value.to_lowercase();
    let (local, domain) = value.split_once('@').ok_or_else(|| {
        MatchprepError::invalid_input("email address must contain a single '@'")
    })?;

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(MatchprepError::invalid_input(
            "email address must have exactly one local-part and one domain",
        ));
    }

    let local = if DOT_INSENSITIVE_DOMAINS.contains(&domain) {
        let stripped: String = local.chars().filter(|c| *c != '.').collect();
        if stripped.is_empty() {
            return Err(MatchprepError::invalid_input(
                "email address local-part is empty after dot removal",
            ));
        }
        stripped
    } else {
        local.to_string()
    };

    Ok(format!("{local}@{domain}"))
}
