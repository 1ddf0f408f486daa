//! Core domain models for tasklane
//!
//! This module defines the fundamental data structures that represent
//! jobs, tasks, pipelines, and their configuration.

pub mod config;
pub mod context;
pub mod pipeline;
pub mod task;

pub use context::*;
pub use pipeline::*;
pub use task::*;
