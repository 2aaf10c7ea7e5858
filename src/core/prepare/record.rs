//! Raw and prepared record shapes
//!
//! `RawRecord` is what the input files deserialize into: six optional
//! columns, any subset of which may be present. `PreparedRecord` is the
//! output shape: hashed identifier fields plus canonicalized geographic
//! fields, with absent fields omitted from the serialized form.

use crate::domain::PiiField;
use serde::{Deserialize, Serialize};

/// One raw customer record as read from an input file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl RawRecord {
    /// Raw value for a field, if present
    pub fn get(&self, field: PiiField) -> Option<&str> {
        match field {
            PiiField::EmailAddress => self.email_address.as_deref(),
            PiiField::PhoneNumber => self.phone_number.as_deref(),
            PiiField::GivenName => self.given_name.as_deref(),
            PiiField::FamilyName => self.family_name.as_deref(),
            PiiField::RegionCode => self.region_code.as_deref(),
            PiiField::PostalCode => self.postal_code.as_deref(),
        }
    }

    /// True if no field at all is present
    pub fn is_empty(&self) -> bool {
        PiiField::ALL.iter().all(|field| self.get(*field).is_none())
    }
}

/// One prepared record, ready to be embedded in an upload request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashed_email_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashed_phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashed_given_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashed_family_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl PreparedRecord {
    /// Store a processed value under its field
    pub fn set(&mut self, field: PiiField, value: String) {
        match field {
            PiiField::EmailAddress => self.hashed_email_address = Some(value),
            PiiField::PhoneNumber => self.hashed_phone_number = Some(value),
            PiiField::GivenName => self.hashed_given_name = Some(value),
            PiiField::FamilyName => self.hashed_family_name = Some(value),
            PiiField::RegionCode => self.region_code = Some(value),
            PiiField::PostalCode => self.postal_code = Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record() {
        assert!(RawRecord::default().is_empty());
        let record = RawRecord {
            postal_code: Some("94043".to_string()),
            ..Default::default()
        };
        assert!(!record.is_empty());
    }

    #[test]
    fn test_get_by_field() {
        let record = RawRecord {
            email_address: Some("a@b.com".to_string()),
            ..Default::default()
        };
        assert_eq!(record.get(PiiField::EmailAddress), Some("a@b.com"));
        assert_eq!(record.get(PiiField::PhoneNumber), None);
    }

    #[test]
    fn test_absent_fields_omitted_from_json() {
        let mut prepared = PreparedRecord::default();
        prepared.set(PiiField::RegionCode, "US".to_string());
        let json = serde_json::to_string(&prepared).unwrap();
        assert_eq!(json, "{\"region_code\":\"US\"}");
    }

    #[test]
    fn test_raw_record_from_json_subset() {
        let record: RawRecord =
            serde_json::from_str(r#"{"email_address": "a@b.com", "region_code": "us"}"#).unwrap();
        assert_eq!(record.email_address.as_deref(), Some("a@b.com"));
        assert!(record.given_name.is_none());
    }
}
