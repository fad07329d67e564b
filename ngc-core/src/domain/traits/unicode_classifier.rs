//! Unicode general category lookup for non-ASCII characters

/// Major Unicode general category of a character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnicodeClass {
    /// L*: letters
    Letter,
    /// M*: combining marks
    Mark,
    /// N*: numbers
    Number,
    /// P*: punctuation
    Punctuation,
    /// S*: symbols
    Symbol,
    /// Z*: separators
    Separator,
    /// C* and anything unassigned
    Other,
}

/// Pure Unicode classification logic
pub trait UnicodeClassifier: Send + Sync {
    /// Classify a character into its major general category
    fn classify(&self, ch: char) -> UnicodeClass;

    /// Check if character is a Unicode letter
    fn is_letter(&self, ch: char) -> bool {
        matches!(self.classify(ch), UnicodeClass::Letter)
    }

    /// Check if character is a Unicode mark
    fn is_mark(&self, ch: char) -> bool {
        matches!(self.classify(ch), UnicodeClass::Mark)
    }

    /// Check if character is a Unicode number
    fn is_number(&self, ch: char) -> bool {
        matches!(self.classify(ch), UnicodeClass::Number)
    }

    /// Check if character is Unicode punctuation
    fn is_punctuation(&self, ch: char) -> bool {
        matches!(self.classify(ch), UnicodeClass::Punctuation)
    }

    /// Check if character is a Unicode symbol
    fn is_symbol(&self, ch: char) -> bool {
        matches!(self.classify(ch), UnicodeClass::Symbol)
    }

    /// Check if character is a Unicode separator
    fn is_separator(&self, ch: char) -> bool {
        matches!(self.classify(ch), UnicodeClass::Separator)
    }
}
