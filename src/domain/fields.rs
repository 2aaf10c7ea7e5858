//! PII field taxonomy
//!
//! Enumerates the six customer-record fields the pipeline understands and
//! classifies which of them are hashed identifiers versus plain geographic
//! attributes.

use serde::{Deserialize, Serialize};

/// Customer PII field categories accepted by the match-upload contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiField {
    /// Email address (hashed identifier)
    EmailAddress,
    /// Phone number (hashed identifier)
    PhoneNumber,
    /// Given name (hashed identifier)
    GivenName,
    /// Family name (hashed identifier)
    FamilyName,
    /// Two-letter region code (plain geographic attribute)
    RegionCode,
    /// Postal code (plain geographic attribute)
    PostalCode,
}

impl PiiField {
    /// All fields, in record-column order
    pub const ALL: [PiiField; 6] = [
        PiiField::EmailAddress,
        PiiField::PhoneNumber,
        PiiField::GivenName,
        PiiField::FamilyName,
        PiiField::RegionCode,
        PiiField::PostalCode,
    ];

    /// Human-readable label for the field, used in error messages and logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::EmailAddress => "email address",
            Self::PhoneNumber => "phone number",
            Self::GivenName => "given name",
            Self::FamilyName => "family name",
            Self::RegionCode => "region code",
            Self::PostalCode => "postal code",
        }
    }

    /// Whether this field is a matched identifier that must be hashed before
    /// it may appear in an upload.
    ///
    /// Geographic fields travel as canonical plain text under the API
    /// contract and are only normalized.
    pub fn is_hashed_identifier(&self) -> bool {
        !matches!(self, Self::RegionCode | Self::PostalCode)
    }
}
