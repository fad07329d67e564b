//! Summary categories and first-match character classification
//!
//! Categories overlap in code-point space (a space is also whitespace, a
//! control character also sits below 32), so classification walks an ordered
//! rule list and stops at the first predicate that matches.

use crate::domain::charset;
use crate::domain::traits::UnicodeClassifier;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Leaf category of the character summary; exactly one per character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SummaryCategory {
    /// ASCII `A`..=`Z`
    UpperCase,
    /// ASCII `a`..=`z`
    LowerCase,
    /// `'` and `-`
    Connectors,
    /// ASCII digits
    Digits,
    /// `. , ; : ! ?`
    Punctuation,
    /// Remaining printable ASCII symbols
    OtherPrintable,
    /// U+0020
    Spaces,
    /// Tab, line feed, carriage return, vertical tab, form feed
    OtherSpaces,
    /// ASCII control characters
    Control,
    /// Non-ASCII letters
    UnicodeLetters,
    /// Non-ASCII marks
    UnicodeMarks,
    /// Non-ASCII numbers
    UnicodeNumbers,
    /// Non-ASCII punctuation
    UnicodePunctuations,
    /// Non-ASCII symbols
    UnicodeSymbols,
    /// Non-ASCII separators
    UnicodeSeparators,
    /// Any other non-ASCII character
    UnicodeOthers,
}

impl SummaryCategory {
    /// Number of leaf categories
    pub const COUNT: usize = 16;

    /// All categories, in report order
    pub const ALL: [SummaryCategory; Self::COUNT] = [
        SummaryCategory::UpperCase,
        SummaryCategory::LowerCase,
        SummaryCategory::Connectors,
        SummaryCategory::Digits,
        SummaryCategory::Punctuation,
        SummaryCategory::OtherPrintable,
        SummaryCategory::Spaces,
        SummaryCategory::OtherSpaces,
        SummaryCategory::Control,
        SummaryCategory::UnicodeLetters,
        SummaryCategory::UnicodeMarks,
        SummaryCategory::UnicodeNumbers,
        SummaryCategory::UnicodePunctuations,
        SummaryCategory::UnicodeSymbols,
        SummaryCategory::UnicodeSeparators,
        SummaryCategory::UnicodeOthers,
    ];

    /// Report label
    pub fn label(self) -> &'static str {
        match self {
            SummaryCategory::UpperCase => "Upper case letters",
            SummaryCategory::LowerCase => "Lower case letters",
            SummaryCategory::Connectors => "Connection symbols",
            SummaryCategory::Digits => "Digits",
            SummaryCategory::Punctuation => "Punctuation",
            SummaryCategory::OtherPrintable => "Other printable symbols",
            SummaryCategory::Spaces => "Spaces",
            SummaryCategory::OtherSpaces => "Other spaces",
            SummaryCategory::Control => "Control characters",
            SummaryCategory::UnicodeLetters => "Unicode letters",
            SummaryCategory::UnicodeMarks => "Unicode marks",
            SummaryCategory::UnicodeNumbers => "Unicode numbers",
            SummaryCategory::UnicodePunctuations => "Unicode punctuations",
            SummaryCategory::UnicodeSymbols => "Unicode symbols",
            SummaryCategory::UnicodeSeparators => "Unicode separators",
            SummaryCategory::UnicodeOthers => "Unicode others",
        }
    }

    /// Whether the category only holds code points at or above 128
    pub fn is_unicode(self) -> bool {
        self >= SummaryCategory::UnicodeLetters
    }

    /// Number of distinct characters the category contributes to the
    /// coincidence index alphabet; `None` for Unicode categories
    pub fn alphabet_size(self) -> Option<usize> {
        match self {
            SummaryCategory::UpperCase | SummaryCategory::LowerCase => Some(26),
            SummaryCategory::Connectors => Some(charset::CONNECTORS.len()),
            SummaryCategory::Digits => Some(10),
            SummaryCategory::Punctuation => Some(charset::PUNCTUATION.len()),
            SummaryCategory::OtherPrintable => Some(charset::OTHER_SYMBOLS.len()),
            SummaryCategory::Spaces => Some(1),
            SummaryCategory::OtherSpaces => Some(charset::WHITESPACE.len() - 1),
            SummaryCategory::Control => Some(charset::CONTROL_ALPHABET_SIZE),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SummaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

type AsciiRule = (fn(char) -> bool, SummaryCategory);
type UnicodeRule = (fn(&dyn UnicodeClassifier, char) -> bool, SummaryCategory);

const ASCII_RULES: [AsciiRule; 8] = [
    (charset::is_upper, SummaryCategory::UpperCase),
    (charset::is_lower, SummaryCategory::LowerCase),
    (charset::is_connector, SummaryCategory::Connectors),
    (charset::is_digit, SummaryCategory::Digits),
    (charset::is_punctuation, SummaryCategory::Punctuation),
    (charset::is_space, SummaryCategory::Spaces),
    (charset::is_whitespace, SummaryCategory::OtherSpaces),
    (charset::is_control, SummaryCategory::Control),
];

const UNICODE_RULES: [UnicodeRule; 6] = [
    (|u, ch| u.is_letter(ch), SummaryCategory::UnicodeLetters),
    (|u, ch| u.is_mark(ch), SummaryCategory::UnicodeMarks),
    (|u, ch| u.is_number(ch), SummaryCategory::UnicodeNumbers),
    (|u, ch| u.is_punctuation(ch), SummaryCategory::UnicodePunctuations),
    (|u, ch| u.is_symbol(ch), SummaryCategory::UnicodeSymbols),
    (|u, ch| u.is_separator(ch), SummaryCategory::UnicodeSeparators),
];

/// Maps characters to their summary category
pub struct SummaryClassifier {
    unicode: Arc<dyn UnicodeClassifier>,
}

impl SummaryClassifier {
    /// Create a classifier delegating non-ASCII characters to `unicode`
    pub fn new(unicode: Arc<dyn UnicodeClassifier>) -> Self {
        Self { unicode }
    }

    /// Classify one character, first matching rule wins
    pub fn classify(&self, ch: char) -> SummaryCategory {
        if ch.is_ascii() {
            ASCII_RULES
                .iter()
                .find(|(matches, _)| matches(ch))
                .map_or(SummaryCategory::OtherPrintable, |(_, category)| *category)
        } else {
            let unicode = self.unicode.as_ref();
            UNICODE_RULES
                .iter()
                .find(|(matches, _)| matches(unicode, ch))
                .map_or(SummaryCategory::UnicodeOthers, |(_, category)| *category)
        }
    }
}
