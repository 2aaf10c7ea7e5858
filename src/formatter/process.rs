//! Process operations: normalize → hash → encode
//!
//! One operation per PII field category. Identifier fields run the full
//! pipeline and return encoded digest text; geographic fields return
//! canonical plain text. Each operation fails fast, propagating the first
//! [`MatchprepError::InvalidInput`](crate::domain::MatchprepError) from any
//! stage unchanged, with no partial result.

use super::digest::hash;
use super::email::format_email;
use super::encode::{encode, Encoding};
use super::geo::{format_postal_code, format_region_code};
use super::name::{format_family_name, format_given_name};
use super::phone::format_phone_number;
use crate::domain::{PiiField, Result};

/// Normalize, hash, and encode an email address
pub fn process_email_address(raw: Option<&str>, encoding: Encoding) -> Result<String> {
    let normalized = format_email(raw)?;
    encode(&hash(&normalized)?, encoding)
}

/// Normalize, hash, and encode a phone number
pub fn process_phone_number(raw: Option<&str>, encoding: Encoding) -> Result<String> {
    let normalized = format_phone_number(raw)?;
    encode(&hash(&normalized)?, encoding)
}

/// Normalize, hash, and encode a given name
pub fn process_given_name(raw: Option<&str>, encoding: Encoding) -> Result<String> {
    let normalized = format_given_name(raw)?;
    encode(&hash(&normalized)?, encoding)
}

/// Normalize, hash, and encode a family name
pub fn process_family_name(raw: Option<&str>, encoding: Encoding) -> Result<String> {
    let normalized = format_family_name(raw)?;
    encode(&hash(&normalized)?, encoding)
}

/// Normalize a region code (geographic fields are not hashed)
pub fn process_region_code(raw: Option<&str>) -> Result<String> {
    format_region_code(raw)
}

/// Normalize a postal code (geographic fields are not hashed)
pub fn process_postal_code(raw: Option<&str>) -> Result<String> {
    format_postal_code(raw)
}

/// Route a raw value to the process operation for its field category
///
/// Geographic fields ignore `encoding` since they are never hashed.
pub fn process_field(field: PiiField, raw: Option<&str>, encoding: Encoding) -> Result<String> {
    match field {
        PiiField::EmailAddress => process_email_address(raw, encoding),
        PiiField::PhoneNumber => process_phone_number(raw, encoding),
        PiiField::GivenName => process_given_name(raw, encoding),
        PiiField::FamilyName => process_family_name(raw, encoding),
        PiiField::RegionCode => process_region_code(raw),
        PiiField::PostalCode => process_postal_code(raw),
    }
}
