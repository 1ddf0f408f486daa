//! Pipeline execution
//!
//! Runs a pipeline's tasks strictly in insertion order, one at a time,
//! and produces an aggregate run report.

pub mod report;
pub mod runner;

pub use report::*;
pub use runner::*;
