//! CLI output formatting

use crate::execution::{RunReport, TaskStatus};
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static SKIP: Emoji<'_, '_> = Emoji("⏭️  ", "- ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "! ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");

/// Create a progress bar for a run of `total` tasks
pub fn create_progress_bar(total: usize) -> ProgressBar {
    let progress = ProgressBar::new(total as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}

/// Format a single task line for the report
pub fn format_task_line(label: &str, status: &TaskStatus) -> String {
    match status {
        TaskStatus::Succeeded { .. } => format!("{} {}", CHECK, style(label).green()),
        TaskStatus::Failed { error } => {
            format!("{} {}: {}", CROSS, style(label).red(), style(error).dim())
        }
        TaskStatus::Skipped => format!("{} {}", SKIP, style(label).dim()),
    }
}

/// Format the final run summary
pub fn format_report(report: &RunReport) -> String {
    let mut lines = Vec::new();

    for task in &report.tasks {
        lines.push(format!("  {}", format_task_line(&task.label, &task.status)));
    }

    let duration = report
        .duration()
        .and_then(|d| d.to_std().ok())
        .map(format_duration)
        .unwrap_or_default();

    if let Some((index, label, error)) = report.first_failure() {
        lines.push(format!(
            "\n{} {} {} at task {} ({}): {}",
            CROSS,
            style(&report.pipeline_name).bold(),
            style("failed").red(),
            index + 1,
            style(label).cyan(),
            error
        ));
    } else {
        lines.push(format!(
            "\n{} {} completed {} ({} tasks, {})",
            CHECK,
            style(&report.pipeline_name).bold(),
            style("successfully").green(),
            report.executed_count(),
            duration
        ));
    }

    lines.join("\n")
}

/// Format a duration for display
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
