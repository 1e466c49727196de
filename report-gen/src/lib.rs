//! Maintainability report generation
//!
//! Shells out to `radon` for maintainability-index analysis and maintains a
//! JSON report file holding one record per analyzed package version.

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

pub mod analyzer;
mod error;
pub mod report;

pub use error::{ReportError, ReportResult};
