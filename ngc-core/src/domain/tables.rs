//! Run-wide accumulators: n-gram occurrences and the character summary

use crate::domain::classifier::SummaryCategory;
use crate::domain::monoid::{Monoid, MonoidReduce};
use std::cmp::Reverse;
use std::collections::HashMap;

/// N-gram occurrence counts plus the running n-gram total
///
/// The total always equals the sum of all counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceTable {
    counts: HashMap<String, u64>,
    total: u64,
}

impl OccurrenceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `ngram`
    pub fn record(&mut self, ngram: &str) {
        match self.counts.get_mut(ngram) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(ngram.to_string(), 1);
            }
        }
        self.total += 1;
    }

    /// Occurrences of `ngram`, 0 when never seen
    pub fn count(&self, ngram: &str) -> u64 {
        self.counts.get(ngram).copied().unwrap_or(0)
    }

    /// Total n-grams counted
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct n-grams
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no n-gram was counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(ngram, count)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(ngram, count)| (ngram.as_str(), *count))
    }

    /// Entries by decreasing count, equal counts ordered by ascending n-gram
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|(ngram, count)| (Reverse(*count), *ngram));
        entries
    }

    /// Σ c·(c−1) over all counts, the numerator of kappa-plaintext
    pub fn coincidences(&self) -> u64 {
        self.counts
            .values()
            .map(|count| count * count.saturating_sub(1))
            .sum()
    }
}

impl Monoid for OccurrenceTable {
    fn identity() -> Self {
        Self::new()
    }

    fn combine(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for (ngram, count) in &other.counts {
            *merged.counts.entry(ngram.clone()).or_insert(0) += count;
        }
        merged.total += other.total;
        merged
    }
}

impl MonoidReduce for OccurrenceTable {}

/// Character category counts plus the Unicode and character totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryTable {
    counts: [u64; SummaryCategory::COUNT],
    all_unicode: u64,
    all_characters: u64,
}

impl SummaryTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified character
    pub fn record(&mut self, category: SummaryCategory) {
        self.counts[category.index()] += 1;
        if category.is_unicode() {
            self.all_unicode += 1;
        }
    }

    /// Add the length of an analysed unit to the character total
    pub fn add_characters(&mut self, count: u64) {
        self.all_characters += count;
    }

    /// Count for one category
    pub fn count(&self, category: SummaryCategory) -> u64 {
        self.counts[category.index()]
    }

    /// Characters at or above code point 128 that were classified
    pub fn all_unicode(&self) -> u64 {
        self.all_unicode
    }

    /// Characters in all analysis units, whether classified or not
    pub fn all_characters(&self) -> u64 {
        self.all_characters
    }

    /// `(category, count)` pairs in report order
    pub fn iter(&self) -> impl Iterator<Item = (SummaryCategory, u64)> + '_ {
        SummaryCategory::ALL
            .into_iter()
            .map(|category| (category, self.count(category)))
    }
}

impl Monoid for SummaryTable {
    fn identity() -> Self {
        Self::new()
    }

    fn combine(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for (mine, theirs) in merged.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
        merged.all_unicode += other.all_unicode;
        merged.all_characters += other.all_characters;
        merged
    }
}

impl MonoidReduce for SummaryTable {}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(ngrams: &[&str]) -> OccurrenceTable {
        let mut table = OccurrenceTable::new();
        for ngram in ngrams {
            table.record(ngram);
        }
        table
    }

    #[test]
    fn test_record_and_total() {
        let table = table(&["ba", "an", "na", "an", "na", "a"]);
        assert_eq!(table.count("an"), 2);
        assert_eq!(table.count("zz"), 0);
        assert_eq!(table.len(), 4);
        assert_eq!(table.total(), 6);
        assert_eq!(table.iter().map(|(_, count)| count).sum::<u64>(), 6);
    }

    #[test]
    fn test_sorted_breaks_ties_by_key() {
        let table = table(&["na", "b", "an", "na", "an", "a"]);
        assert_eq!(
            table.sorted(),
            vec![("an", 2), ("na", 2), ("a", 1), ("b", 1)]
        );
    }

    #[test]
    fn test_coincidences() {
        let table = table(&["x", "x", "x", "y", "y", "z"]);
        // 3·2 + 2·1 + 1·0
        assert_eq!(table.coincidences(), 8);
        assert_eq!(OccurrenceTable::new().coincidences(), 0);
    }

    #[test]
    fn test_occurrence_merge_is_keywise_sum() {
        let left = table(&["ab", "ab", "cd"]);
        let right = table(&["cd", "ef"]);
        let merged = left.combine(&right);

        assert_eq!(merged.count("ab"), 2);
        assert_eq!(merged.count("cd"), 2);
        assert_eq!(merged.count("ef"), 1);
        assert_eq!(merged.total(), 5);
        assert_eq!(merged, right.combine(&left));
        assert_eq!(left.combine(&OccurrenceTable::identity()), left);
    }

    #[test]
    fn test_occurrence_reduce() {
        let parts = vec![table(&["a"]), table(&["a", "b"]), table(&["c"])];
        let reduced = OccurrenceTable::reduce(parts);
        assert_eq!(reduced, table(&["a", "a", "b", "c"]));
    }

    #[test]
    fn test_summary_record() {
        let mut summary = SummaryTable::new();
        summary.record(SummaryCategory::UpperCase);
        summary.record(SummaryCategory::UnicodeLetters);
        summary.record(SummaryCategory::UnicodeSeparators);
        summary.add_characters(3);

        assert_eq!(summary.count(SummaryCategory::UpperCase), 1);
        assert_eq!(summary.all_unicode(), 2);
        assert_eq!(summary.all_characters(), 3);
        assert_eq!(summary.iter().count(), 16);
    }

    #[test]
    fn test_summary_merge() {
        let mut left = SummaryTable::new();
        left.record(SummaryCategory::Digits);
        left.add_characters(1);
        let mut right = SummaryTable::new();
        right.record(SummaryCategory::Digits);
        right.record(SummaryCategory::UnicodeMarks);
        right.add_characters(2);

        let merged = left.combine(&right);
        assert_eq!(merged.count(SummaryCategory::Digits), 2);
        assert_eq!(merged.all_unicode(), 1);
        assert_eq!(merged.all_characters(), 3);
        assert_eq!(merged, right.combine(&left));
    }
}
