//! spectrum-export
//!
//! Text report generation from stored results.

pub mod error;
pub mod render;
pub mod report;
