//! Configuration file support
//!
//! A TOML file supplies defaults that command-line flags then extend:
//!
//! ```toml
//! [analysis]
//! convert = "as"
//! discard = "p"
//! length = 2
//! block = false
//! word = true
//! partial = "justify"
//!
//! [output]
//! format = "text"
//! text = false
//! ngrams = true
//! summary = true
//! ```

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Analysis-related configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Conversion letter codes
    pub convert: String,

    /// Discard letter codes
    pub discard: String,

    /// N-gram length
    pub length: Option<usize>,

    /// Fixed-block windows instead of sliding ones
    pub block: bool,

    /// Analyze words instead of whole lines
    pub word: bool,

    /// Partial n-gram policy (d|k|j or discard|keep|justify)
    pub partial: Option<String>,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format
    pub format: Option<OutputFormat>,

    /// Show transformed text
    pub text: bool,

    /// Show the n-gram table
    pub ngrams: bool,

    /// Show the character summary
    pub summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            text: false,
            ngrams: true,
            summary: false,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
