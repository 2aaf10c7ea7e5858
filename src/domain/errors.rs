//! Domain error types
//!
//! Single error enum for the whole application. The formatter core only ever
//! produces [`MatchprepError::InvalidInput`]; the remaining variants belong to
//! the configuration/I-O glue around it. No third-party error types escape.

use thiserror::Error;

/// Main matchprep error type
#[derive(Debug, Error)]
pub enum MatchprepError {
    /// An input value violated a normalizer or encoder precondition.
    ///
    /// This is the only error the formatter pipeline produces. Every cause is
    /// a deterministic function of the input, so no failure is retryable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MatchprepError {
    /// Build an `InvalidInput` error from any displayable message
    pub fn invalid_input(message: impl Into<String>) -> Self {
        MatchprepError::InvalidInput(message.into())
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for MatchprepError {
    fn from(err: std::io::Error) -> Self {
        MatchprepError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for MatchprepError {
    fn from(err: serde_json::Error) -> Self {
        MatchprepError::Serialization(err.to_string())
    }
}

// Conversion from csv::Error
impl From<csv::Error> for MatchprepError {
    fn from(err: csv::Error) -> Self {
        MatchprepError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for MatchprepError {
    fn from(err: toml::de::Error) -> Self {
        MatchprepError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = MatchprepError::invalid_input("email address is blank");
        assert_eq!(err.to_string(), "Invalid input: email address is blank");
    }

    #[test]
    fn test_configuration_display() {
        let err = MatchprepError::Configuration("missing [processing] section".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: missing [processing] section"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: MatchprepError = io_err.into();
        assert!(matches!(err, MatchprepError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: MatchprepError = json_err.into();
        assert!(matches!(err, MatchprepError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: MatchprepError = toml_err.into();
        assert!(matches!(err, MatchprepError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_implements_std_error() {
        let err = MatchprepError::invalid_input("test");
        let _: &dyn std::error::Error = &err;
    }
}
