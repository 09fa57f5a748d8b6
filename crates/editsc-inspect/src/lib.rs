//! Summaries and reports for the `chunks-inspect` tool.

pub mod report;
pub mod summary;
