//! Fixed ASCII character classes shared by the discard filters and the summary
//!
//! Every class is defined on code points, never on locale rules. The class
//! sizes double as the per-category alphabet sizes of the coincidence index.

/// Connection symbols joining words
pub const CONNECTORS: &[char] = &['\'', '-'];

/// Sentence punctuation
pub const PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Printable ASCII symbols that are neither letters, digits, connectors nor punctuation
pub const OTHER_SYMBOLS: &[char] = &[
    '"', '#', '$', '&', '@', '[', '\\', ']', '_', '`', '{', '|', '}', '~', '%', '(', ')', '*',
    '+', '/', '<', '=', '>', '^',
];

/// Space-like characters: space, tab, line feed, carriage return, vertical tab, form feed
pub const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\u{0b}', '\u{0c}'];

/// Alphabet size credited to control characters by the coincidence index
pub const CONTROL_ALPHABET_SIZE: usize = 29;

/// Code point at or above 128
pub fn is_non_ascii(ch: char) -> bool {
    !ch.is_ascii()
}

/// ASCII `A`..=`Z`
pub fn is_upper(ch: char) -> bool {
    ch.is_ascii_uppercase()
}

/// ASCII `a`..=`z`
pub fn is_lower(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

/// `'` or `-`
pub fn is_connector(ch: char) -> bool {
    CONNECTORS.contains(&ch)
}

/// ASCII `0`..=`9`
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// One of `. , ; : ! ?`
pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(&ch)
}

/// One of the fixed [`OTHER_SYMBOLS`]
pub fn is_other_symbol(ch: char) -> bool {
    OTHER_SYMBOLS.contains(&ch)
}

/// One of the six [`WHITESPACE`] characters
///
/// Differs from [`char::is_ascii_whitespace`], which leaves out vertical tab.
pub fn is_whitespace(ch: char) -> bool {
    WHITESPACE.contains(&ch)
}

/// Exactly U+0020
pub fn is_space(ch: char) -> bool {
    ch == ' '
}

/// Code points below 32 other than `\t`, `\n`, VT, FF and `\r`, plus DEL
pub fn is_control(ch: char) -> bool {
    let code = ch as u32;
    (code < 32 && !(9..=13).contains(&code)) || code == 127
}
