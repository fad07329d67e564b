//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Argument is not a regular file
    NotAFile(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// File pattern matched no file
    NoMatch(String),
    /// Configuration error
    ConfigError(String),
    /// Input could not be read to the end
    ReadError {
        /// Input name
        input: String,
        /// Underlying failure
        reason: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotAFile(path) => write!(f, "The argument '{path}' is not a filename"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::NoMatch(pattern) => write!(f, "No file matches the pattern '{pattern}'"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ReadError { input, reason } => {
                write!(f, "Failed to read '{input}': {reason}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
