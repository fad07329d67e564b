//! Input handling module

pub mod glob_resolver;
pub mod line_reader;

pub use glob_resolver::{resolve_inputs, Input, Resolution};
pub use line_reader::LineReader;
