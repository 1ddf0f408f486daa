use anyhow::{Context, Result};
use tasklane::cli::commands::{ListCommand, RunCommand, ValidateCommand};
use tasklane::cli::output::*;
use tasklane::cli::{Cli, Command};
use tasklane::core::config::JobsConfig;
use tasklane::core::{FailureMode, JobContext};
use tasklane::execution::{PipelineRunner, RunEvent};
use tasklane::jobs;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    // Execute command
    match &cli.command {
        Command::Run(cmd) => run_job(cmd).await?,
        Command::Validate(cmd) => validate_jobs(cmd)?,
        Command::List(cmd) => list_jobs(cmd)?,
    }

    Ok(())
}

async fn run_job(cmd: &RunCommand) -> Result<()> {
    // Load jobs file
    let config = JobsConfig::from_file(&cmd.file).context("Failed to load jobs file")?;

    let job = config.job(&cmd.job).with_context(|| {
        let available: Vec<&str> = config.jobs.iter().map(|j| j.name.as_str()).collect();
        format!(
            "Job '{}' not found (available: {})",
            cmd.job,
            available.join(", ")
        )
    })?;

    // Build the execution context from file variables plus overrides
    let mut ctx = JobContext::from_variables(config.variables.clone());
    for (key, value) in &cmd.variable {
        ctx.set(key, value);
        println!(
            "{} Variable override: {} = {}",
            INFO,
            style(key).cyan(),
            style(value).dim()
        );
    }

    // Assemble the pipeline
    let mut pipeline = jobs::assemble(job);
    if cmd.keep_going {
        pipeline = pipeline.with_failure_mode(FailureMode::ContinueOnFailure);
    }

    println!(
        "{} Running job {} ({} tasks)",
        ROCKET,
        style(&job.name).bold(),
        style(pipeline.len()).cyan()
    );

    // Drive a progress bar from run events
    let mut runner = PipelineRunner::new();
    let progress = create_progress_bar(pipeline.len());
    let bar = progress.clone();
    runner.add_event_handler(move |event| match event {
        RunEvent::TaskStarted { label, .. } => bar.set_message(label.clone()),
        RunEvent::TaskCompleted { .. }
        | RunEvent::TaskFailed { .. }
        | RunEvent::TaskSkipped { .. } => bar.inc(1),
        _ => {}
    });

    let report = runner.run(&pipeline, &ctx).await;
    progress.finish_and_clear();

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_report(&report));
    }

    if !report.is_success() {
        std::process::exit(report.exit_code());
    }

    Ok(())
}

fn validate_jobs(cmd: &ValidateCommand) -> Result<()> {
    println!("{} Validating jobs file...", INFO);

    match JobsConfig::from_file(&cmd.file) {
        Ok(config) => {
            println!("{} Jobs file is valid!", CHECK);
            println!("  Jobs: {}", style(config.jobs.len()).cyan());
            println!("  Variables: {}", style(config.variables.len()).cyan());

            if cmd.json {
                let json = serde_json::to_string_pretty(&config)?;
                println!("\n{}", json);
            }
            Ok(())
        }
        Err(e) => {
            println!("{} Validation failed:", CROSS);
            println!("  {}", style(e).red());
            std::process::exit(1);
        }
    }
}

fn list_jobs(cmd: &ListCommand) -> Result<()> {
    let config = JobsConfig::from_file(&cmd.file).context("Failed to load jobs file")?;

    if config.jobs.is_empty() {
        println!("{} No jobs defined in {}", INFO, cmd.file);
        return Ok(());
    }

    if cmd.json {
        let jobs: Vec<_> = config
            .jobs
            .iter()
            .map(|j| {
                serde_json::json!({
                    "name": j.name,
                    "description": j.description,
                    "tasks": j.tasks.len(),
                    "fail_fast": j.fail_fast,
                })
            })
            .collect();
        let data = serde_json::json!({ "jobs": jobs });
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!("{} Jobs in {}:", INFO, style(&cmd.file).bold());
    for job in &config.jobs {
        match &job.description {
            Some(desc) => println!(
                "  {} ({} tasks) - {}",
                style(&job.name).bold(),
                style(job.tasks.len()).cyan(),
                style(desc).dim()
            ),
            None => println!(
                "  {} ({} tasks)",
                style(&job.name).bold(),
                style(job.tasks.len()).cyan()
            ),
        }
    }

    Ok(())
}
