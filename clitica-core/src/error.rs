//! Core error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing tagged text or loading clitic rules
#[derive(Error, Debug)]
pub enum CoreError {
    /// A token has no tag delimiter separating form from tag
    #[error("malformed token '{token}': missing '{delimiter}' tag delimiter")]
    MalformedToken {
        /// The raw token text
        token: String,
        /// The delimiter that was expected
        delimiter: char,
    },

    /// Rule configuration failed to parse or validate
    #[error("invalid rule configuration: {0}")]
    Config(String),

    /// No embedded rule set is registered under the given code
    #[error("unknown rule set: {code}")]
    UnknownRules {
        /// The requested rule set code
        code: String,
    },

    /// I/O error with the offending path
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_token_display() {
        let error = CoreError::MalformedToken {
            token: "quiero".to_string(),
            delimiter: '.',
        };
        assert_eq!(
            error.to_string(),
            "malformed token 'quiero': missing '.' tag delimiter"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let error = CoreError::Io {
            path: PathBuf::from("rules.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(error.to_string().starts_with("failed to read rules.toml"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
