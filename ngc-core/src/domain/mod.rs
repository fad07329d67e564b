//! Domain layer: character classes, transformation, extraction and statistics
//!
//! Everything here is pure and deterministic. Line reading and output live
//! in the CLI crate.

pub mod charset;
pub mod classifier;
pub mod extract;
pub mod monoid;
pub mod segment;
pub mod stats;
pub mod tables;
pub mod traits;
pub mod transform;

pub use classifier::{SummaryCategory, SummaryClassifier};
pub use extract::{NgramExtractor, Window};
pub use monoid::{Monoid, MonoidReduce};
pub use segment::Segmenter;
pub use stats::{alphabet_size, coincidence_index, kappa_plaintext, Coincidence};
pub use tables::{OccurrenceTable, SummaryTable};
pub use traits::{StandardUnicode, Transliterator, UnicodeClass, UnicodeClassifier};
pub use transform::TransformPipeline;
