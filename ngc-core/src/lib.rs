//! N-gram frequency counting for corpus and cryptanalysis tooling
//!
//! Text is processed one line at a time: each line goes through a fixed
//! transformation pipeline, is split into analysis units, and every unit is
//! cut into fixed-length n-grams whose occurrences are accumulated for the
//! whole run. A character-category summary and two coincidence statistics
//! (kappa-plaintext and the index of coincidence) are derived at the end.
//!
//! # Architecture
//!
//! - **Domain layer**: character classes, transformation, segmentation,
//!   extraction, accumulators and statistics; pure and deterministic
//! - **Application layer**: the analysis session driving a run, and the
//!   report it produces
//!
//! # Example
//!
//! ```rust
//! use ngc_core::{AnalysisSession, Config};
//!
//! let config = Config::builder().length(2).build().unwrap();
//! let mut session = AnalysisSession::new(config);
//! session.process_line("banana");
//!
//! let report = session.report();
//! assert_eq!(report.total_ngrams, 6);
//! assert_eq!(report.ngrams[0].ngram, "an");
//! assert_eq!(report.ngrams[0].count, 2);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;

pub use application::{AnalysisSession, NgramFrequency, Report, SummaryRow, Tally};
pub use config::{
    parse_length, CaseConversion, Config, ConfigBuilder, Conversions, DiscardClass, Discards,
    PartialPolicy, WindowMode,
};
pub use domain::{
    Monoid, MonoidReduce, OccurrenceTable, StandardUnicode, SummaryCategory, SummaryTable,
    Transliterator, UnicodeClass, UnicodeClassifier,
};
pub use error::{ConfigError, StatsError};
