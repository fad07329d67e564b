//! Output formatting module

use anyhow::Result;
use ngc_core::Report;
use serde::{Deserialize, Serialize};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Output one transformed input line
    fn format_text_line(&mut self, line: &str) -> Result<()>;

    /// Output the n-gram table and summary
    fn format_report(&mut self, report: &Report) -> Result<()>;

    /// Finalize output (e.g., close the JSON document)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated text, as printed by the classic ngc tool
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Which parts of the results are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowOptions {
    /// Transformed input text
    pub text: bool,
    /// N-gram frequency table
    pub ngrams: bool,
    /// Character summary and metrics
    pub summary: bool,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            text: false,
            ngrams: true,
            summary: false,
        }
    }
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
