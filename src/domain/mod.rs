//! Core domain types
//!
//! Error types, the crate-wide [`Result`] alias, and the PII field taxonomy.

pub mod errors;
pub mod fields;
pub mod result;

pub use errors::MatchprepError;
pub use fields::PiiField;
pub use result::Result;
