//! JSON output formatter

use super::{OutputFormatter, ShowOptions};
use anyhow::Result;
use ngc_core::{NgramFrequency, Report, SummaryRow};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - buffers everything and writes one document on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    show: ShowOptions,
    text: Vec<String>,
    report: Option<Report>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct JsonDocument<'a> {
    /// Transformed input lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a [String]>,
    /// Total n-grams counted
    pub total_ngrams: u64,
    /// N-gram frequency rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngrams: Option<&'a [NgramFrequency]>,
    /// Character summary rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<&'a [SummaryRow]>,
    /// Kappa-plaintext, null when undefined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kappa_plaintext: Option<Option<f64>>,
    /// Index of coincidence, null when undefined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coincidence_index: Option<Option<f64>>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, show: ShowOptions) -> Self {
        Self {
            writer,
            show,
            text: Vec::new(),
            report: None,
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_text_line(&mut self, line: &str) -> Result<()> {
        if self.show.text {
            self.text.push(line.to_string());
        }
        Ok(())
    }

    fn format_report(&mut self, report: &Report) -> Result<()> {
        self.report = Some(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let show = self.show;
        let document = JsonDocument {
            text: show.text.then_some(self.text.as_slice()),
            total_ngrams: self.report.as_ref().map_or(0, |r| r.total_ngrams),
            ngrams: self
                .report
                .as_ref()
                .filter(|_| show.ngrams)
                .map(|r| r.ngrams.as_slice()),
            summary: self
                .report
                .as_ref()
                .filter(|_| show.summary)
                .map(|r| r.summary.as_slice()),
            kappa_plaintext: self
                .report
                .as_ref()
                .filter(|_| show.summary)
                .map(|r| r.kappa_plaintext),
            coincidence_index: self
                .report
                .as_ref()
                .filter(|_| show.summary)
                .map(|r| r.coincidence_index),
        };

        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
