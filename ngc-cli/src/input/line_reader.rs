//! Line-by-line reading of inputs

use super::glob_resolver::Input;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Opens inputs as buffered line sources
pub struct LineReader;

impl LineReader {
    /// Open an input for buffered reading
    pub fn open(input: &Input) -> Result<Box<dyn BufRead>> {
        match input {
            Input::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            Input::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open file: {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// Feed every line, terminator stripped, to `on_line`
    ///
    /// Both `\n` and `\r\n` terminators are removed. Returns the number of
    /// lines read, or the first read error (including invalid UTF-8); lines
    /// before the error have already been handed over.
    pub fn for_each_line<R, F>(reader: R, mut on_line: F) -> io::Result<u64>
    where
        R: BufRead,
        F: FnMut(&str),
    {
        let mut count = 0;
        for line in reader.lines() {
            on_line(&line?);
            count += 1;
        }
        Ok(count)
    }
}
