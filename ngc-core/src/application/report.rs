//! Final report built from the accumulated tables

use crate::domain::stats::{alphabet_size, Coincidence};
use crate::domain::tables::{OccurrenceTable, SummaryTable};
use serde::Serialize;

/// Label of the non-ASCII character total
pub const ALL_UNICODE_LABEL: &str = "All unicode characters";
/// Label of the character total
pub const ALL_CHARACTERS_LABEL: &str = "All characters";
/// Label of the n-gram total
pub const ALL_NGRAMS_LABEL: &str = "All n-grams";
/// Label of the kappa-plaintext metric
pub const KAPPA_PLAINTEXT_LABEL: &str = "Kappa-plaintext";
/// Label of the coincidence index metric
pub const COINCIDENCE_INDEX_LABEL: &str = "Index of coincidence";

/// One row of the n-gram frequency table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NgramFrequency {
    /// The n-gram text
    pub ngram: String,
    /// Occurrences in the run
    pub count: u64,
    /// Share of all n-grams, in percent
    pub percentage: f64,
}

/// One row of the character summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// Category or total label
    pub label: &'static str,
    /// Count
    pub count: u64,
}

/// Everything a run produces, ready for formatting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// N-grams by decreasing count, ties by ascending n-gram
    pub ngrams: Vec<NgramFrequency>,
    /// Total n-grams counted
    pub total_ngrams: u64,
    /// Summary rows: every category, then the three totals
    pub summary: Vec<SummaryRow>,
    /// Kappa-plaintext, `None` when undefined
    pub kappa_plaintext: Option<f64>,
    /// Coincidence index, `None` when undefined
    pub coincidence_index: Option<f64>,
    /// Alphabet size behind the coincidence index; 0 once a Unicode
    /// separator has been seen
    pub alphabet_size: usize,
}

impl Report {
    /// Build a report from finished tables
    pub fn new(occurrences: &OccurrenceTable, summary: &SummaryTable) -> Self {
        let total_ngrams = occurrences.total();

        let ngrams = occurrences
            .sorted()
            .into_iter()
            .map(|(ngram, count)| NgramFrequency {
                ngram: ngram.to_string(),
                count,
                percentage: count as f64 / total_ngrams as f64 * 100.0,
            })
            .collect();

        let mut rows: Vec<SummaryRow> = summary
            .iter()
            .map(|(category, count)| SummaryRow {
                label: category.label(),
                count,
            })
            .collect();
        rows.extend([
            SummaryRow {
                label: ALL_UNICODE_LABEL,
                count: summary.all_unicode(),
            },
            SummaryRow {
                label: ALL_CHARACTERS_LABEL,
                count: summary.all_characters(),
            },
            SummaryRow {
                label: ALL_NGRAMS_LABEL,
                count: total_ngrams,
            },
        ]);

        let metrics = Coincidence::compute(occurrences, summary);
        if let Err(error) = &metrics {
            log::debug!("Coincidence metrics not computed: {error}");
        }

        Self {
            ngrams,
            total_ngrams,
            summary: rows,
            kappa_plaintext: metrics.as_ref().ok().map(|m| m.kappa_plaintext),
            coincidence_index: metrics.as_ref().ok().map(|m| m.index),
            alphabet_size: alphabet_size(summary),
        }
    }

    /// Count of a summary row by label
    pub fn summary_count(&self, label: &str) -> Option<u64> {
        self.summary
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SummaryCategory;

    #[test]
    fn test_report_rows_and_percentages() {
        let mut occurrences = OccurrenceTable::new();
        for ngram in ["b", "a", "a", "c"] {
            occurrences.record(ngram);
        }
        let mut summary = SummaryTable::new();
        summary.record(SummaryCategory::LowerCase);
        summary.add_characters(4);

        let report = Report::new(&occurrences, &summary);

        assert_eq!(report.total_ngrams, 4);
        assert_eq!(report.ngrams[0].ngram, "a");
        assert_eq!(report.ngrams[0].percentage, 50.0);
        assert_eq!(report.ngrams[1].ngram, "b");
        assert_eq!(report.ngrams[2].percentage, 25.0);

        assert_eq!(report.summary.len(), 19);
        assert_eq!(report.summary[0].label, "Upper case letters");
        assert_eq!(report.summary_count("Lower case letters"), Some(1));
        assert_eq!(report.summary_count(ALL_CHARACTERS_LABEL), Some(4));
        assert_eq!(report.summary_count(ALL_NGRAMS_LABEL), Some(4));
        assert_eq!(report.summary.last().map(|row| row.label), Some(ALL_NGRAMS_LABEL));

        // a:2 → 2 / (4·3)
        let kappa = report.kappa_plaintext.unwrap();
        assert!((kappa - 2.0 / 12.0).abs() < 1e-12);
        assert!((report.coincidence_index.unwrap() - kappa * 26.0).abs() < 1e-12);
        assert_eq!(report.alphabet_size, 26);
    }

    #[test]
    fn test_report_serializes() {
        let mut occurrences = OccurrenceTable::new();
        occurrences.record("ab");
        let report = Report::new(&occurrences, &SummaryTable::new());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_ngrams"], 1);
        assert_eq!(json["ngrams"][0]["ngram"], "ab");
        assert_eq!(json["summary"][18]["label"], ALL_NGRAMS_LABEL);
        assert!(json["kappa_plaintext"].is_null());
    }

    #[test]
    fn test_empty_report_has_undefined_metrics() {
        let report = Report::new(&OccurrenceTable::new(), &SummaryTable::new());
        assert!(report.ngrams.is_empty());
        assert_eq!(report.kappa_plaintext, None);
        assert_eq!(report.coincidence_index, None);
    }
}
