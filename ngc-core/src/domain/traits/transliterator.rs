//! Unicode to ASCII transliteration

/// Rewrites text into an ASCII approximation (accents removed, ligatures split)
pub trait Transliterator: Send + Sync {
    /// Transliterate a whole line
    fn transliterate(&self, text: &str) -> String;
}
