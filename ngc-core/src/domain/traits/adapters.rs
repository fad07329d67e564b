//! Default Unicode capabilities backed by `deunicode` and `unicode-general-category`

use super::{Transliterator, UnicodeClass, UnicodeClassifier};
use unicode_general_category::{get_general_category, GeneralCategory};

/// Standard Unicode support used when no custom capability is supplied
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardUnicode;

impl StandardUnicode {
    /// Create the standard Unicode support
    pub fn new() -> Self {
        Self
    }
}

impl UnicodeClassifier for StandardUnicode {
    fn classify(&self, ch: char) -> UnicodeClass {
        use GeneralCategory::*;

        let category = get_general_category(ch);
        if matches!(
            category,
            UppercaseLetter | LowercaseLetter | TitlecaseLetter | ModifierLetter | OtherLetter
        ) {
            UnicodeClass::Letter
        } else if matches!(category, NonspacingMark | SpacingMark | EnclosingMark) {
            UnicodeClass::Mark
        } else if matches!(category, DecimalNumber | LetterNumber | OtherNumber) {
            UnicodeClass::Number
        } else if matches!(
            category,
            ConnectorPunctuation
                | DashPunctuation
                | OpenPunctuation
                | ClosePunctuation
                | InitialPunctuation
                | FinalPunctuation
                | OtherPunctuation
        ) {
            UnicodeClass::Punctuation
        } else if matches!(
            category,
            MathSymbol | CurrencySymbol | ModifierSymbol | OtherSymbol
        ) {
            UnicodeClass::Symbol
        } else if matches!(
            category,
            SpaceSeparator | LineSeparator | ParagraphSeparator
        ) {
            UnicodeClass::Separator
        } else {
            UnicodeClass::Other
        }
    }
}

impl Transliterator for StandardUnicode {
    fn transliterate(&self, text: &str) -> String {
        let mut ascii = String::with_capacity(text.len());
        for ch in text.chars() {
            if ch.is_ascii() {
                ascii.push(ch);
                continue;
            }
            // No ASCII form: kept as-is
            match deunicode::deunicode_char(ch) {
                Some(replacement) => ascii.push_str(replacement),
                None => ascii.push(ch),
            }
        }
        ascii
    }
}
