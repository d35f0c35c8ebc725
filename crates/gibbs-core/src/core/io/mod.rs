//! Provides input/output for sequence files and run reports.
//!
//! Sequence files are read through the [`traits::RecordFile`] interface; restart reports are
//! written as CSV.

pub mod report;
pub mod sequence_file;
pub mod traits;
