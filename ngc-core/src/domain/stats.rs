//! Coincidence statistics
//!
//! See <https://en.wikipedia.org/wiki/Index_of_coincidence>.

use crate::domain::classifier::SummaryCategory;
use crate::domain::tables::{OccurrenceTable, SummaryTable};
use crate::error::StatsError;

/// Kappa-plaintext: Σ c·(c−1) / (T·(T−1)) with T the total n-gram count
///
/// Undefined when T ≤ 1.
pub fn kappa_plaintext(occurrences: &OccurrenceTable) -> Result<f64, StatsError> {
    let total = occurrences.total();
    if total <= 1 {
        return Err(StatsError::Undefined { total });
    }

    let pairs = total as f64 * (total - 1) as f64;
    Ok(occurrences.coincidences() as f64 / pairs)
}

/// Estimated alphabet size from the categories seen in the summary
///
/// Any Unicode separator makes the alphabet unbounded, reported as 0.
/// Otherwise it is the sum of the fixed sizes of every non-empty ASCII
/// category; Unicode categories contribute nothing.
pub fn alphabet_size(summary: &SummaryTable) -> usize {
    if summary.count(SummaryCategory::UnicodeSeparators) > 0 {
        return 0;
    }

    summary
        .iter()
        .filter(|(_, count)| *count > 0)
        .filter_map(|(category, _)| category.alphabet_size())
        .sum()
}

/// Coincidence index: kappa-plaintext scaled by the estimated alphabet size
pub fn coincidence_index(kappa_plaintext: f64, summary: &SummaryTable) -> f64 {
    kappa_plaintext * alphabet_size(summary) as f64
}

/// Both metrics for a finished run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coincidence {
    /// Kappa-plaintext
    pub kappa_plaintext: f64,
    /// Coincidence index
    pub index: f64,
}

impl Coincidence {
    /// Compute both metrics, failing when kappa-plaintext is undefined
    pub fn compute(
        occurrences: &OccurrenceTable,
        summary: &SummaryTable,
    ) -> Result<Self, StatsError> {
        let kappa_plaintext = kappa_plaintext(occurrences)?;
        Ok(Self {
            kappa_plaintext,
            index: coincidence_index(kappa_plaintext, summary),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurrences(ngrams: &[&str]) -> OccurrenceTable {
        let mut table = OccurrenceTable::new();
        for ngram in ngrams {
            table.record(ngram);
        }
        table
    }

    #[test]
    fn test_kappa_undefined_for_small_totals() {
        assert_eq!(
            kappa_plaintext(&OccurrenceTable::new()),
            Err(StatsError::Undefined { total: 0 })
        );
        assert_eq!(
            kappa_plaintext(&occurrences(&["a"])),
            Err(StatsError::Undefined { total: 1 })
        );
    }

    #[test]
    fn test_kappa_values() {
        // All distinct: no coincidences, a real zero rather than undefined
        assert_eq!(kappa_plaintext(&occurrences(&["a", "b"])), Ok(0.0));
        assert_eq!(kappa_plaintext(&occurrences(&["a", "a"])), Ok(1.0));

        // banana bigrams with kept tail: ba 1, an 2, na 2, a 1 → (2+2)/(6·5)
        let banana = occurrences(&["ba", "an", "na", "an", "na", "a"]);
        let kappa = kappa_plaintext(&banana).unwrap();
        assert!((kappa - 4.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_alphabet_size_sums_seen_categories() {
        let mut summary = SummaryTable::new();
        assert_eq!(alphabet_size(&summary), 0);

        summary.record(SummaryCategory::LowerCase);
        summary.record(SummaryCategory::LowerCase);
        summary.record(SummaryCategory::Spaces);
        assert_eq!(alphabet_size(&summary), 27);

        summary.record(SummaryCategory::Control);
        summary.record(SummaryCategory::OtherSpaces);
        summary.record(SummaryCategory::UnicodeLetters);
        assert_eq!(alphabet_size(&summary), 27 + 29 + 5);
    }

    #[test]
    fn test_unicode_separator_means_unknown_alphabet() {
        let mut summary = SummaryTable::new();
        summary.record(SummaryCategory::UpperCase);
        summary.record(SummaryCategory::UnicodeSeparators);
        assert_eq!(alphabet_size(&summary), 0);
        assert_eq!(coincidence_index(0.5, &summary), 0.0);
    }

    #[test]
    fn test_compute_both_metrics() {
        let mut summary = SummaryTable::new();
        summary.record(SummaryCategory::UpperCase);

        let metrics = Coincidence::compute(&occurrences(&["A", "A"]), &summary).unwrap();
        assert_eq!(metrics.kappa_plaintext, 1.0);
        assert_eq!(metrics.index, 26.0);

        assert!(Coincidence::compute(&occurrences(&["A"]), &summary).is_err());
    }
}
