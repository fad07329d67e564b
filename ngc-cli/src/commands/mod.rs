//! CLI command implementations

pub mod count;

pub use count::{CountArgs, RunStatus, Settings};
