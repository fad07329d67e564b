//! Line transformation pipeline
//!
//! Steps run in a fixed order, each one a no-op when disabled:
//! transliteration, case conversion, discards (in [`DiscardClass::ALL`]
//! order), then whitespace squeezing. Squeezing last collapses the blank
//! runs left behind where discarded characters used to be.

use crate::config::{CaseConversion, Config, Conversions, DiscardClass, Discards};
use crate::domain::charset;
use crate::domain::traits::Transliterator;
use std::sync::Arc;

/// Applies the configured conversions and discards to one line of text
pub struct TransformPipeline {
    conversions: Conversions,
    discards: Discards,
    transliterator: Arc<dyn Transliterator>,
}

impl TransformPipeline {
    /// Create a pipeline for the given configuration
    pub fn new(config: &Config, transliterator: Arc<dyn Transliterator>) -> Self {
        Self {
            conversions: config.conversions(),
            discards: config.discards(),
            transliterator,
        }
    }

    /// Transform a line whose terminator has already been stripped
    pub fn apply(&self, line: &str) -> String {
        let mut text = if self.conversions.unicode_to_ascii {
            self.transliterator.transliterate(line)
        } else {
            line.to_string()
        };

        text = match self.conversions.case {
            CaseConversion::Keep => text,
            CaseConversion::ToLower => text.to_lowercase(),
            CaseConversion::ToUpper => text.to_uppercase(),
        };

        for class in self.discards.iter() {
            discard(&mut text, class);
        }

        if self.conversions.squeeze_spaces {
            text = squeeze_whitespace(&text);
        }

        text
    }
}

/// Remove every character of `class`, which removes each maximal run of them
pub fn discard(text: &mut String, class: DiscardClass) {
    text.retain(|ch| !class.matches(ch));
}

/// Replace each maximal run of whitespace with a single space
pub fn squeeze_whitespace(text: &str) -> String {
    let mut squeezed = String::with_capacity(text.len());
    let mut in_run = false;

    for ch in text.chars() {
        if charset::is_whitespace(ch) {
            if !in_run {
                squeezed.push(' ');
                in_run = true;
            }
        } else {
            squeezed.push(ch);
            in_run = false;
        }
    }

    squeezed
}
