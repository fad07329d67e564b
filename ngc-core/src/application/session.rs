//! Analysis session: one sequential pass over input lines
//!
//! The session owns the accumulators for a run. Each line is transformed,
//! segmented and folded into the tables before the next one is accepted.

use crate::application::report::Report;
use crate::config::Config;
use crate::domain::classifier::SummaryClassifier;
use crate::domain::extract::NgramExtractor;
use crate::domain::monoid::{Monoid, MonoidReduce};
use crate::domain::segment::Segmenter;
use crate::domain::tables::{OccurrenceTable, SummaryTable};
use crate::domain::traits::{StandardUnicode, Transliterator, UnicodeClassifier};
use crate::domain::transform::TransformPipeline;
use std::sync::Arc;

/// Accumulated tables of a run, or of part of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    /// N-gram occurrences and their total
    pub occurrences: OccurrenceTable,
    /// Character categories and totals
    pub summary: SummaryTable,
}

impl Monoid for Tally {
    fn identity() -> Self {
        Self::default()
    }

    fn combine(&self, other: &Self) -> Self {
        Self {
            occurrences: self.occurrences.combine(&other.occurrences),
            summary: self.summary.combine(&other.summary),
        }
    }
}

impl MonoidReduce for Tally {}

/// Sequential analysis of a stream of lines
pub struct AnalysisSession {
    pipeline: TransformPipeline,
    segmenter: Segmenter,
    extractor: NgramExtractor,
    classifier: Option<SummaryClassifier>,
    tally: Tally,
    lines: u64,
}

impl AnalysisSession {
    /// Create a session using the standard Unicode support
    pub fn new(config: Config) -> Self {
        let unicode = Arc::new(StandardUnicode::new());
        Self::with_unicode(config, unicode.clone(), unicode)
    }

    /// Create a session with custom transliteration and Unicode classification
    pub fn with_unicode(
        config: Config,
        transliterator: Arc<dyn Transliterator>,
        classifier: Arc<dyn UnicodeClassifier>,
    ) -> Self {
        log::debug!("Analysis configuration: {config:?}");
        if config.length() == 0 {
            log::warn!("N-gram length is 0: no n-grams will be counted");
        }

        let classifier = config
            .summary()
            .then(|| SummaryClassifier::new(classifier));

        Self {
            pipeline: TransformPipeline::new(&config, transliterator),
            segmenter: Segmenter::new(config.word_boundary()),
            extractor: NgramExtractor::new(&config),
            classifier,
            tally: Tally::default(),
            lines: 0,
        }
    }

    /// Process one line (terminator already stripped) and return its
    /// transformed text
    pub fn process_line(&mut self, line: &str) -> String {
        let transformed = self.pipeline.apply(line);
        log::trace!("Line {}: {:?}", self.lines + 1, transformed);

        let segmenter = self.segmenter;
        let mut unit: Vec<char> = Vec::new();
        for text in segmenter.units(&transformed) {
            unit.clear();
            unit.extend(text.chars());
            self.process_unit(&unit);
        }

        self.lines += 1;
        transformed
    }

    /// Process a block of text line by line, discarding the transformed text
    pub fn process_text(&mut self, text: &str) {
        for line in text.lines() {
            self.process_line(line);
        }
    }

    fn process_unit(&mut self, unit: &[char]) {
        if let Some(classifier) = &self.classifier {
            for ch in unit {
                self.tally.summary.record(classifier.classify(*ch));
            }
        }

        self.extractor.record(unit, &mut self.tally.occurrences);
        self.tally.summary.add_characters(unit.len() as u64);
    }

    /// Number of lines processed so far
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Tables accumulated so far
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Finish the run and keep only its tables
    pub fn into_tally(self) -> Tally {
        self.tally
    }

    /// Fold tables gathered elsewhere (another session, another input) into this run
    pub fn absorb(&mut self, other: &Tally) {
        self.tally = self.tally.combine(other);
    }

    /// Build the report for everything processed so far
    pub fn report(&self) -> Report {
        Report::new(&self.tally.occurrences, &self.tally.summary)
    }
}
