//! N-gram extraction over one analysis unit
//!
//! For a unit of N characters and n-gram length L:
//! - N ≤ L: the whole unit is a partial tail, no full window is produced.
//! - N > L: windows of L characters start at 0 and advance by the window
//!   step (1 when sliding, L in fixed blocks) while they fit; whatever is
//!   left from the first unused start offset is the partial tail.
//!
//! In sliding mode the tail is therefore the last L−1 characters.
//! A length of 0 produces nothing.

use crate::config::{Config, PartialPolicy, WindowMode};
use crate::domain::tables::OccurrenceTable;

/// A piece of an analysis unit handed to the occurrence table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window<'a> {
    /// Exactly L characters
    Full(&'a [char]),
    /// Fewer than L characters, or the whole unit when N ≤ L
    Tail(&'a [char]),
}

/// Walks analysis units and records their n-grams
#[derive(Debug, Clone, Copy)]
pub struct NgramExtractor {
    length: usize,
    step: usize,
    partial: PartialPolicy,
}

impl NgramExtractor {
    /// Create an extractor for the given configuration
    pub fn new(config: &Config) -> Self {
        Self::with_params(config.length(), config.window(), config.partial())
    }

    /// Create an extractor from explicit parameters
    pub fn with_params(length: usize, window: WindowMode, partial: PartialPolicy) -> Self {
        Self {
            length,
            step: window.step(length),
            partial,
        }
    }

    /// Split a unit into full windows and at most one trailing tail
    pub fn windows<'a>(&self, unit: &'a [char]) -> Vec<Window<'a>> {
        let mut windows = Vec::new();
        if self.length == 0 || unit.is_empty() {
            return windows;
        }

        if unit.len() <= self.length {
            windows.push(Window::Tail(unit));
            return windows;
        }

        let mut start = 0;
        while start + self.length <= unit.len() {
            windows.push(Window::Full(&unit[start..start + self.length]));
            start += self.step;
        }
        if start < unit.len() {
            windows.push(Window::Tail(&unit[start..]));
        }

        windows
    }

    /// Record every n-gram of `unit` into `table`, applying the partial policy
    pub fn record(&self, unit: &[char], table: &mut OccurrenceTable) {
        let mut key = String::with_capacity(unit.len().min(self.length));

        for window in self.windows(unit) {
            key.clear();
            match window {
                Window::Full(chars) => key.extend(chars),
                Window::Tail(chars) => match self.partial {
                    PartialPolicy::Discard => continue,
                    PartialPolicy::Keep => key.extend(chars),
                    PartialPolicy::Justify => {
                        key.extend(chars);
                        let padding = self.length.saturating_sub(chars.len());
                        key.extend(std::iter::repeat(' ').take(padding));
                    }
                },
            }
            table.record(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn run(text: &str, length: usize, window: WindowMode, partial: PartialPolicy) -> OccurrenceTable {
        let mut table = OccurrenceTable::new();
        NgramExtractor::with_params(length, window, partial).record(&chars(text), &mut table);
        table
    }

    #[test]
    fn test_banana_sliding_keep() {
        let table = run("banana", 2, WindowMode::Sliding, PartialPolicy::Keep);
        assert_eq!(table.count("ba"), 1);
        assert_eq!(table.count("an"), 2);
        assert_eq!(table.count("na"), 2);
        assert_eq!(table.count("a"), 1);
        assert_eq!(table.len(), 4);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn test_fixed_block_without_tail() {
        let table = run("AAAA", 2, WindowMode::FixedBlock, PartialPolicy::Keep);
        assert_eq!(table.count("AA"), 2);
        assert_eq!(table.len(), 1);
        assert_eq!(table.total(), 2);
    }

    #[test]
    fn test_fixed_block_with_tail() {
        let extractor = NgramExtractor::with_params(3, WindowMode::FixedBlock, PartialPolicy::Keep);
        let unit = chars("abcdefgh");
        assert_eq!(
            extractor.windows(&unit),
            vec![
                Window::Full(&unit[0..3]),
                Window::Full(&unit[3..6]),
                Window::Tail(&unit[6..]),
            ]
        );
    }

    #[test]
    fn test_length_one_has_no_tail() {
        let table = run("abca", 1, WindowMode::Sliding, PartialPolicy::Discard);
        assert_eq!(table.count("a"), 2);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn test_short_unit_is_partial() {
        let kept = run("ab", 3, WindowMode::Sliding, PartialPolicy::Keep);
        assert_eq!(kept.count("ab"), 1);

        let justified = run("ab", 3, WindowMode::Sliding, PartialPolicy::Justify);
        assert_eq!(justified.count("ab "), 1);

        let discarded = run("ab", 3, WindowMode::Sliding, PartialPolicy::Discard);
        assert!(discarded.is_empty());
        assert_eq!(discarded.total(), 0);
    }

    #[test]
    fn test_huge_length_with_short_unit() {
        let length = usize::MAX / 2;
        for window in [WindowMode::Sliding, WindowMode::FixedBlock] {
            let kept = run("banana", length, window, PartialPolicy::Keep);
            assert_eq!(kept.count("banana"), 1);
            assert_eq!(kept.total(), 1);

            let discarded = run("banana", length, window, PartialPolicy::Discard);
            assert!(discarded.is_empty());
        }
    }

    #[test]
    fn test_unit_of_exact_length_goes_through_partial_policy() {
        let kept = run("abc", 3, WindowMode::Sliding, PartialPolicy::Keep);
        assert_eq!(kept.count("abc"), 1);
        assert_eq!(kept.total(), 1);

        let discarded = run("abc", 3, WindowMode::FixedBlock, PartialPolicy::Discard);
        assert_eq!(discarded.total(), 0);
    }

    #[test]
    fn test_justified_tail_collides_with_padded_ngram() {
        let table = run("ab  a", 2, WindowMode::FixedBlock, PartialPolicy::Justify);
        // "ab", "  ", then tail "a" padded to "a "
        assert_eq!(table.count("ab"), 1);
        assert_eq!(table.count("  "), 1);
        assert_eq!(table.count("a "), 1);

        let table = run("a a", 2, WindowMode::FixedBlock, PartialPolicy::Justify);
        // window "a " and justified tail "a" both yield "a "
        assert_eq!(table.count("a "), 2);
    }

    #[test]
    fn test_zero_length_produces_nothing() {
        for window in [WindowMode::Sliding, WindowMode::FixedBlock] {
            let table = run("anything", 0, window, PartialPolicy::Keep);
            assert!(table.is_empty());
            assert_eq!(table.total(), 0);
        }
    }

    #[test]
    fn test_empty_unit_produces_nothing() {
        let table = run("", 2, WindowMode::Sliding, PartialPolicy::Keep);
        assert!(table.is_empty());
    }

    #[test]
    fn test_multibyte_characters_are_single_positions() {
        let table = run("été", 2, WindowMode::Sliding, PartialPolicy::Discard);
        assert_eq!(table.count("ét"), 1);
        assert_eq!(table.count("té"), 1);
        assert_eq!(table.total(), 2);
    }
}
