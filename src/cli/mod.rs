//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{ListCommand, RunCommand, ValidateCommand};

/// Fail-fast task pipeline runner for CI jobs
#[derive(Debug, Parser, Clone)]
#[command(name = "tasklane")]
#[command(author = "tasklane Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A fail-fast task pipeline runner for CI jobs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run a named job
    Run(RunCommand),

    /// Validate a jobs file
    Validate(ValidateCommand),

    /// List jobs defined in a jobs file
    List(ListCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}

use std::ffi::OsString;
