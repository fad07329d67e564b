//! Splitting a transformed line into analysis units

use std::str::SplitWhitespace;

/// Unit boundaries used for n-gram extraction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Segmenter {
    /// The whole transformed line is one unit
    #[default]
    WholeLine,
    /// Every whitespace-delimited word is a unit; whitespace itself is dropped
    Words,
}

impl Segmenter {
    /// Segmenter for the word-boundary setting
    pub fn new(word_boundary: bool) -> Self {
        if word_boundary {
            Segmenter::Words
        } else {
            Segmenter::WholeLine
        }
    }

    /// Analysis units of a transformed line
    pub fn units<'a>(&self, line: &'a str) -> Units<'a> {
        match self {
            Segmenter::WholeLine => Units::Line(Some(line)),
            Segmenter::Words => Units::Words(line.split_whitespace()),
        }
    }
}

/// Iterator over the analysis units of one line
#[derive(Debug, Clone)]
pub enum Units<'a> {
    /// Single whole-line unit, yielded once
    Line(Option<&'a str>),
    /// Non-empty words
    Words(SplitWhitespace<'a>),
}

impl<'a> Iterator for Units<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Units::Line(line) => line.take(),
            Units::Words(words) => words.next(),
        }
    }
}
