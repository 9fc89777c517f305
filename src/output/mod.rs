//! Output writers for walk reports.
//!
//! This module handles writing data to disk:
//! - JSON corpus reports (one entry per artifact set)

pub mod json;
pub mod report;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use report::{CorpusReport, PresenceSummary};
