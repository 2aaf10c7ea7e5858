//! Result type alias for matchprep operations

use super::errors::MatchprepError;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, MatchprepError>;
