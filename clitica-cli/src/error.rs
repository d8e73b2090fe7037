//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Corpus directory missing or not a directory
    DirectoryNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// A corpus file could not be processed
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::DirectoryNotFound(path) => write!(f, "Corpus directory not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_not_found_display() {
        let error = CliError::DirectoryNotFound("corpus".to_string());
        assert_eq!(error.to_string(), "Corpus directory not found: corpus");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown field `colour`".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown field `colour`");
    }

    #[test]
    fn test_processing_error_display() {
        let error = CliError::ProcessingError("ses01.cha: invalid UTF-8".to_string());
        assert_eq!(error.to_string(), "Processing error: ses01.cha: invalid UTF-8");
    }

    #[test]
    fn test_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::DirectoryNotFound("x".to_string()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::DirectoryNotFound("grabaciones/niño 01".to_string());
        assert_eq!(
            error.to_string(),
            "Corpus directory not found: grabaciones/niño 01"
        );
    }
}
