//! ngc CLI library
//!
//! This library provides the command-line interface for the ngc n-grams
//! counter built on `ngc-core`.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
