//! Error types for configuration and statistics

use thiserror::Error;

/// Configuration errors, raised before any text is processed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Both case conversion directions were requested
    #[error("upper to lower and lower to upper case conversions can't be used at the same time")]
    ConflictingCaseConversion,

    /// The n-gram length is not a whole non-negative number
    #[error("n-gram length must be a non-negative integer, got '{0}'")]
    InvalidLength(String),

    /// Unknown letter code in a conversion or discard argument
    #[error("unknown {option} code '{code}'")]
    UnknownCode {
        /// Option family the code was given to
        option: &'static str,
        /// The offending letter
        code: char,
    },

    /// Partial block policy is not one of d, k or j
    #[error("partial policy must be one of [dkj], got '{0}'")]
    InvalidPartialPolicy(String),
}

/// Statistics errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    /// Fewer than two n-grams were counted, so kappa-plaintext divides by zero
    #[error("metric undefined for {total} n-gram(s), at least 2 are required")]
    Undefined {
        /// Total n-grams counted in the run
        total: u64,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
