//! Capabilities the analysis relies on but does not implement itself
//!
//! Transliteration and Unicode general categories are pluggable so that the
//! pipeline can be driven by any Unicode database.

mod adapters;
mod transliterator;
mod unicode_classifier;

pub use adapters::StandardUnicode;
pub use transliterator::Transliterator;
pub use unicode_classifier::{UnicodeClass, UnicodeClassifier};
