//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Transaction file could not be parsed
    InvalidInput(String),
    /// Configuration error
    ConfigError(String),
    /// Mining error from core
    MiningError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::MiningError(msg) => write!(f, "Mining error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<gsp_core::Error> for CliError {
    fn from(err: gsp_core::Error) -> Self {
        match err {
            gsp_core::Error::InvalidArgument(msg) => CliError::ConfigError(msg),
            other => CliError::MiningError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("data.json".to_string());
        assert_eq!(error.to_string(), "File not found: data.json");
    }

    #[test]
    fn test_invalid_input_error_display() {
        let error = CliError::InvalidInput("line 3: unclosed '{'".to_string());
        assert_eq!(error.to_string(), "Invalid input: line 3: unclosed '{'");
    }

    #[test]
    fn test_core_invalid_argument_maps_to_config_error() {
        let error: CliError = gsp_core::Error::invalid_argument("minsup must be in (0.0, 1.0], got 2").into();
        assert!(matches!(error, CliError::ConfigError(_)));
        assert!(error.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_core_worker_failure_maps_to_mining_error() {
        let error: CliError = gsp_core::Error::worker_failure("pool exhausted")
            .at_level(2, gsp_core::Stage::Count)
            .into();
        assert!(matches!(error, CliError::MiningError(_)));
        assert!(error.to_string().contains("level 2 (count)"));
    }

    #[test]
    fn test_cli_result_type_alias() {
        let failure: CliResult<String> = Err(anyhow::anyhow!("test error"));
        assert!(failure.unwrap_err().to_string().contains("test error"));
    }
}
