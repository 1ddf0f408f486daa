//! CLI command definitions

use clap::Args;

/// Run a named job
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to jobs YAML file
    #[arg(short, long)]
    pub file: String,

    /// Name of the job to run
    #[arg(short, long)]
    pub job: String,

    /// Variable overrides (key=value)
    #[arg(long, value_parser = parse_key_value)]
    pub variable: Vec<(String, String)>,

    /// Run every task even after a failure (the result is still the first failure)
    #[arg(long)]
    pub keep_going: bool,

    /// Output the run report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Validate a jobs file
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to jobs YAML file
    #[arg(short, long)]
    pub file: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// List jobs defined in a jobs file
#[derive(Debug, Args, Clone)]
pub struct ListCommand {
    /// Path to jobs YAML file
    #[arg(short, long)]
    pub file: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Parse key=value pairs
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.splitn(2, '=').collect();
    if parts.len() != 2 {
        return Err(format!("Invalid key=value pair: {}", s));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}
