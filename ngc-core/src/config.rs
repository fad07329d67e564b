//! Analysis configuration
//!
//! A [`Config`] is validated once by [`ConfigBuilder::build`] and never
//! mutated afterwards. The letter-code parsers accept the same option
//! arguments as the `ngc` command line.

use crate::domain::charset;
use crate::error::{ConfigError, Result};
use std::fmt;
use std::str::FromStr;

/// Default configuration constants
pub mod defaults {
    /// Default n-gram length
    pub const LENGTH: usize = 1;
}

/// Case conversion applied after transliteration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseConversion {
    /// Leave letter case untouched
    #[default]
    Keep,
    /// Upper case letters to lower case
    ToLower,
    /// Lower case letters to upper case
    ToUpper,
}

/// Character conversions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Conversions {
    /// Transliterate Unicode characters to ASCII
    pub unicode_to_ascii: bool,
    /// Case conversion direction
    pub case: CaseConversion,
    /// Collapse whitespace runs into one space, after discards
    pub squeeze_spaces: bool,
}

impl Conversions {
    /// Parse conversion letter codes: `a` Unicode to ASCII, `l` upper to lower,
    /// `u` lower to upper, `s` spaces to one space
    pub fn from_codes(codes: &str) -> Result<Self> {
        let mut conversions = Self::default();
        let mut to_lower = false;
        let mut to_upper = false;

        for code in codes.chars() {
            match code {
                'a' => conversions.unicode_to_ascii = true,
                'l' => to_lower = true,
                'u' => to_upper = true,
                's' => conversions.squeeze_spaces = true,
                other => {
                    return Err(ConfigError::UnknownCode {
                        option: "convert",
                        code: other,
                    })
                }
            }
        }

        conversions.case = case_conversion(to_lower, to_upper)?;
        Ok(conversions)
    }
}

fn case_conversion(to_lower: bool, to_upper: bool) -> Result<CaseConversion> {
    match (to_lower, to_upper) {
        (true, true) => Err(ConfigError::ConflictingCaseConversion),
        (true, false) => Ok(CaseConversion::ToLower),
        (false, true) => Ok(CaseConversion::ToUpper),
        (false, false) => Ok(CaseConversion::Keep),
    }
}

/// Character classes that can be discarded, in application order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscardClass {
    /// Code points at or above 128
    Unicode,
    /// ASCII upper case letters
    UpperCase,
    /// ASCII lower case letters
    LowerCase,
    /// `'` and `-`
    Connectors,
    /// ASCII digits
    Digits,
    /// `. , ; : ! ?`
    Punctuation,
    /// Other printable ASCII symbols
    OtherSymbols,
    /// Space, tab, line feed, carriage return, vertical tab, form feed
    Whitespace,
    /// Non printable control characters
    Control,
}

impl DiscardClass {
    /// All classes in the order the pipeline removes them
    pub const ALL: [DiscardClass; 9] = [
        DiscardClass::Unicode,
        DiscardClass::UpperCase,
        DiscardClass::LowerCase,
        DiscardClass::Connectors,
        DiscardClass::Digits,
        DiscardClass::Punctuation,
        DiscardClass::OtherSymbols,
        DiscardClass::Whitespace,
        DiscardClass::Control,
    ];

    /// Whether `ch` belongs to this class
    pub fn matches(self, ch: char) -> bool {
        match self {
            DiscardClass::Unicode => charset::is_non_ascii(ch),
            DiscardClass::UpperCase => charset::is_upper(ch),
            DiscardClass::LowerCase => charset::is_lower(ch),
            DiscardClass::Connectors => charset::is_connector(ch),
            DiscardClass::Digits => charset::is_digit(ch),
            DiscardClass::Punctuation => charset::is_punctuation(ch),
            DiscardClass::OtherSymbols => charset::is_other_symbol(ch),
            DiscardClass::Whitespace => charset::is_whitespace(ch),
            DiscardClass::Control => charset::is_control(ch),
        }
    }

    fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Set of discarded character classes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Discards(u16);

impl Discards {
    /// No discards
    pub fn none() -> Self {
        Self::default()
    }

    /// Parse discard letter codes: `U` Unicode, `u` upper, `l` lower,
    /// `L` all letters, `c` connectors, `d` digits, `p` punctuation,
    /// `o` other symbols, `s` spaces, `n` control characters
    pub fn from_codes(codes: &str) -> Result<Self> {
        let mut discards = Self::none();

        for code in codes.chars() {
            match code {
                'U' => discards.insert(DiscardClass::Unicode),
                'u' => discards.insert(DiscardClass::UpperCase),
                'l' => discards.insert(DiscardClass::LowerCase),
                'L' => {
                    discards.insert(DiscardClass::UpperCase);
                    discards.insert(DiscardClass::LowerCase);
                }
                'c' => discards.insert(DiscardClass::Connectors),
                'd' => discards.insert(DiscardClass::Digits),
                'p' => discards.insert(DiscardClass::Punctuation),
                'o' => discards.insert(DiscardClass::OtherSymbols),
                's' => discards.insert(DiscardClass::Whitespace),
                'n' => discards.insert(DiscardClass::Control),
                other => {
                    return Err(ConfigError::UnknownCode {
                        option: "discard",
                        code: other,
                    })
                }
            }
        }

        Ok(discards)
    }

    /// Add a class to the set
    pub fn insert(&mut self, class: DiscardClass) {
        self.0 |= class.bit();
    }

    /// Whether the class is discarded
    pub fn contains(&self, class: DiscardClass) -> bool {
        self.0 & class.bit() != 0
    }

    /// Whether nothing is discarded
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Discarded classes, in application order
    pub fn iter(&self) -> impl Iterator<Item = DiscardClass> + '_ {
        DiscardClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

/// How windows advance over an analysis unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WindowMode {
    /// Step 1, overlapping n-grams
    #[default]
    Sliding,
    /// Step L, non-overlapping n-grams
    FixedBlock,
}

impl WindowMode {
    /// Window advance for a given n-gram length
    pub fn step(self, length: usize) -> usize {
        match self {
            WindowMode::Sliding => 1,
            WindowMode::FixedBlock => length,
        }
    }
}

/// What to do with a tail shorter than the n-gram length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PartialPolicy {
    /// Ignore the tail
    Discard,
    /// Count the tail as-is
    #[default]
    Keep,
    /// Right-pad the tail with spaces to the full length, then count it
    Justify,
}

impl PartialPolicy {
    /// Single letter code of the policy
    pub fn code(self) -> char {
        match self {
            PartialPolicy::Discard => 'd',
            PartialPolicy::Keep => 'k',
            PartialPolicy::Justify => 'j',
        }
    }
}

impl FromStr for PartialPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "d" | "discard" => Ok(PartialPolicy::Discard),
            "k" | "keep" => Ok(PartialPolicy::Keep),
            "j" | "justify" => Ok(PartialPolicy::Justify),
            other => Err(ConfigError::InvalidPartialPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for PartialPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartialPolicy::Discard => "discard",
            PartialPolicy::Keep => "keep",
            PartialPolicy::Justify => "justify",
        };
        f.write_str(name)
    }
}

/// Parse an n-gram length given as text
///
/// Only whole decimal numbers are accepted: no sign, no fraction, no blanks.
pub fn parse_length(text: &str) -> Result<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::InvalidLength(text.to_string()));
    }
    text.parse()
        .map_err(|_| ConfigError::InvalidLength(text.to_string()))
}

/// Analysis configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) conversions: Conversions,
    pub(crate) discards: Discards,
    pub(crate) length: usize,
    pub(crate) window: WindowMode,
    pub(crate) word_boundary: bool,
    pub(crate) partial: PartialPolicy,
    pub(crate) summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            conversions: Conversions::default(),
            discards: Discards::none(),
            length: defaults::LENGTH,
            window: WindowMode::default(),
            word_boundary: false,
            partial: PartialPolicy::default(),
            summary: false,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Character conversions
    pub fn conversions(&self) -> Conversions {
        self.conversions
    }

    /// Discarded character classes
    pub fn discards(&self) -> Discards {
        self.discards
    }

    /// N-gram length; 0 produces no n-grams at all
    pub fn length(&self) -> usize {
        self.length
    }

    /// Window advance mode
    pub fn window(&self) -> WindowMode {
        self.window
    }

    /// Whether each whitespace-delimited word is analyzed separately
    pub fn word_boundary(&self) -> bool {
        self.word_boundary
    }

    /// Partial tail policy
    pub fn partial(&self) -> PartialPolicy {
        self.partial
    }

    /// Whether the character summary is collected
    pub fn summary(&self) -> bool {
        self.summary
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    unicode_to_ascii: bool,
    to_lower: bool,
    to_upper: bool,
    squeeze_spaces: bool,
    discards: Discards,
    length: Option<usize>,
    window: WindowMode,
    word_boundary: bool,
    partial: PartialPolicy,
    summary: bool,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a full set of conversions
    pub fn conversions(mut self, conversions: Conversions) -> Self {
        self.unicode_to_ascii = conversions.unicode_to_ascii;
        self.squeeze_spaces = conversions.squeeze_spaces;
        self.to_lower = conversions.case == CaseConversion::ToLower;
        self.to_upper = conversions.case == CaseConversion::ToUpper;
        self
    }

    /// Transliterate Unicode characters to ASCII
    pub fn unicode_to_ascii(mut self, enabled: bool) -> Self {
        self.unicode_to_ascii = enabled;
        self
    }

    /// Convert upper case letters to lower case
    pub fn upper_to_lower(mut self, enabled: bool) -> Self {
        self.to_lower = enabled;
        self
    }

    /// Convert lower case letters to upper case
    pub fn lower_to_upper(mut self, enabled: bool) -> Self {
        self.to_upper = enabled;
        self
    }

    /// Collapse whitespace runs into one space
    pub fn squeeze_spaces(mut self, enabled: bool) -> Self {
        self.squeeze_spaces = enabled;
        self
    }

    /// Replace the discarded classes
    pub fn discards(mut self, discards: Discards) -> Self {
        self.discards = discards;
        self
    }

    /// Discard one more class
    pub fn discard(mut self, class: DiscardClass) -> Self {
        self.discards.insert(class);
        self
    }

    /// Set the n-gram length
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the window mode
    pub fn window(mut self, window: WindowMode) -> Self {
        self.window = window;
        self
    }

    /// Use fixed blocks instead of sliding windows
    pub fn fixed_block(self, enabled: bool) -> Self {
        self.window(if enabled {
            WindowMode::FixedBlock
        } else {
            WindowMode::Sliding
        })
    }

    /// Analyze each whitespace-delimited word separately
    pub fn word_boundary(mut self, enabled: bool) -> Self {
        self.word_boundary = enabled;
        self
    }

    /// Set the partial tail policy
    pub fn partial(mut self, policy: PartialPolicy) -> Self {
        self.partial = policy;
        self
    }

    /// Collect the character summary
    pub fn summary(mut self, enabled: bool) -> Self {
        self.summary = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let case = case_conversion(self.to_lower, self.to_upper)?;

        Ok(Config {
            conversions: Conversions {
                unicode_to_ascii: self.unicode_to_ascii,
                case,
                squeeze_spaces: self.squeeze_spaces,
            },
            discards: self.discards,
            length: self.length.unwrap_or(defaults::LENGTH),
            window: self.window,
            word_boundary: self.word_boundary,
            partial: self.partial,
            summary: self.summary,
        })
    }
}
