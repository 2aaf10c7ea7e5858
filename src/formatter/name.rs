//! Given-name and family-name normalization
//!
//! Names are trimmed and lower-cased, then stripped of a fixed set of affix
//! tokens: one leading honorific for given names, trailing generational and
//! professional suffixes for family names. The suffix pass repeats until
//! nothing matches, so chained suffixes like `", jr. dds"` are fully removed.

use super::require_present;
use crate::domain::{MatchprepError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading honorific, only when followed by whitespace or end-of-string
static GIVEN_NAME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:mr|mrs|ms|dr)\.(?:\s+|$)").unwrap());

/// One trailing suffix token, preceded by a comma or whitespace, optionally
/// followed by a literal `.` and at most one trailing space.
///
/// Longer tokens come first in the alternation so `iii`/`vi`/`vm` are not
/// shadowed by their prefixes. The single optional trailing space is a
/// deliberate boundary: it is what lets the pattern re-match the remainder of
/// a chained suffix run, and it must not be widened to arbitrary whitespace.
static FAMILY_NAME_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:,\s*|\s+)(?:jr|sr|2nd|3rd|iii|ii|iv|vi|vm|v|cpa|dc|dds|jd|md|phd)\.? ?$")
        .unwrap()
});

/// Normalize a given name: trim, lower-case, strip one leading honorific
///
/// # Errors
///
/// Returns [`MatchprepError::InvalidInput`] if the value is absent, blank, or
/// consists of nothing but an honorific prefix.
pub fn format_given_name(raw: Option<&str>) -> Result<String> {
    let value = require_present(raw, "given name")?.to_lowercase();

    let stripped = GIVEN_NAME_PREFIX.replace(&value, "");
    let name = stripped.trim();
    if name.is_empty() {
        return Err(MatchprepError::invalid_input(
            "given name is empty after honorific removal",
        ));
    }

    Ok(name.to_string())
}

/// Normalize a family name: trim, lower-case, strip trailing suffix tokens
/// until none remain
///
/// # Errors
///
/// Returns [`MatchprepError::InvalidInput`] if the value is absent, blank, or
/// consists of nothing but suffix tokens.
pub fn format_family_name(raw: Option<&str>) -> Result<String> {
    let mut name = require_present(raw, "family name")?.to_lowercase();

    loop {
        let stripped = FAMILY_NAME_SUFFIX.replace(&name, "").into_owned();
        if stripped == name {
            break;
        }
        name = stripped;
    }

    if name.is_empty() {
        return Err(MatchprepError::invalid_input(
            "family name is empty after suffix removal",
        ));
    }

    Ok(name)
}
