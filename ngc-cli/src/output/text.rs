//! Plain text output formatter

use super::{OutputFormatter, ShowOptions};
use anyhow::Result;
use ngc_core::application::report::{COINCIDENCE_INDEX_LABEL, KAPPA_PLAINTEXT_LABEL};
use ngc_core::Report;
use std::io::Write;

/// Text formatter - one tab-separated row per n-gram, then the summary
pub struct TextFormatter<W: Write> {
    writer: W,
    show: ShowOptions,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, show: ShowOptions) -> Self {
        Self { writer, show }
    }

    fn write_metric(&mut self, label: &str, value: Option<f64>) -> Result<()> {
        match value {
            Some(value) => writeln!(self.writer, "{label:<23}\t{value:?}")?,
            None => writeln!(self.writer, "{label:<23}\tundefined")?,
        }
        Ok(())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_text_line(&mut self, line: &str) -> Result<()> {
        if self.show.text {
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }

    fn format_report(&mut self, report: &Report) -> Result<()> {
        if self.show.ngrams {
            if self.show.text {
                writeln!(self.writer, "--")?;
            }
            for row in &report.ngrams {
                writeln!(
                    self.writer,
                    "'{}'\t{}\t{:.2}%",
                    row.ngram, row.count, row.percentage
                )?;
            }
        }

        if self.show.summary {
            writeln!(self.writer, "==")?;
            for row in &report.summary {
                writeln!(self.writer, "{:<23}\t{}", row.label, row.count)?;
            }
            writeln!(self.writer)?;
            self.write_metric(KAPPA_PLAINTEXT_LABEL, report.kappa_plaintext)?;
            if report.alphabet_size == 0 && report.coincidence_index.is_some() {
                writeln!(self.writer, "{COINCIDENCE_INDEX_LABEL:<23}\t0")?;
            } else {
                self.write_metric(COINCIDENCE_INDEX_LABEL, report.coincidence_index)?;
            }
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
