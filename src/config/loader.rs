//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::MatchprepConfig;
use crate::domain::errors::MatchprepError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`MatchprepConfig`]
/// 4. Applies environment variable overrides (`MATCHPREP_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, a
/// referenced environment variable is missing, or validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<MatchprepConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MatchprepError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        MatchprepError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: MatchprepConfig = toml::from_str(&contents)
        .map_err(|e| MatchprepError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        MatchprepError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched. A referenced variable that is not set is
/// an error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(MatchprepError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `MATCHPREP_*` prefix
///
/// Variables follow the pattern `MATCHPREP_<SECTION>_<KEY>`, for example
/// `MATCHPREP_PROCESSING_ENCODING` or `MATCHPREP_OUTPUT_PATH`.
fn apply_env_overrides(config: &mut MatchprepConfig) {
    if let Ok(val) = std::env::var("MATCHPREP_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("MATCHPREP_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    if let Ok(val) = std::env::var("MATCHPREP_INPUT_FORMAT") {
        config.input.format = val;
    }

    if let Ok(val) = std::env::var("MATCHPREP_PROCESSING_ENCODING") {
        config.processing.encoding = val;
    }
    if let Ok(val) = std::env::var("MATCHPREP_PROCESSING_ON_INVALID") {
        config.processing.on_invalid = val;
    }
    if let Ok(val) = std::env::var("MATCHPREP_PROCESSING_BATCH_SIZE") {
        if let Ok(size) = val.parse() {
            config.processing.batch_size = size;
        }
    }

    if let Ok(val) = std::env::var("MATCHPREP_OUTPUT_PATH") {
        config.output.path = val;
    }
    if let Ok(val) = std::env::var("MATCHPREP_OUTPUT_PRETTY") {
        config.output.pretty = val.parse().unwrap_or(false);
    }

    if let Ok(val) = std::env::var("MATCHPREP_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("MATCHPREP_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("MATCHPREP_TEST_VAR", "hex");
        let input = "encoding = \"${MATCHPREP_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "encoding = \"hex\"\n");
        std::env::remove_var("MATCHPREP_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("MATCHPREP_MISSING_VAR");
        let input = "encoding = \"${MATCHPREP_MISSING_VAR}\"";
        assert!(substitute_env_vars(input).is_err());
    }

    #[test]
    fn test_substitute_skips_comments() {
        let input = "# uses ${NOT_SET_ANYWHERE}\nbatch_size = 10";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${NOT_SET_ANYWHERE}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
name = "matchprep"
log_level = "debug"

[processing]
encoding = "base64"
on_invalid = "abort"
batch_size = 2500

[output]
path = "out/prepared.json"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.processing.batch_size, 2500);
        assert_eq!(config.output.path, "out/prepared.json");
    }

    #[test]
    fn test_load_config_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[processing]\nencoding = \"md5\"\n")
            .unwrap();
        temp_file.flush().unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }
}
