//! Application layer: run orchestration and reporting

pub mod report;
pub mod session;

pub use report::{NgramFrequency, Report, SummaryRow};
pub use session::{AnalysisSession, Tally};
