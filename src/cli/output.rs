// Output formatting utilities

use crate::catalog::builtin::quote_for_day;
use crate::catalog::Catalog;
use crate::models::{Phase, TaskStatus};
use crate::tracker::{estimated_completion, progress_message, AggregateStats, ProductionState};
use crate::utils::format_long_date;
use chrono::{Datelike, NaiveDate};
use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";
const ANSI_FG_GREEN: &str = "\x1b[32m";
const ANSI_FG_YELLOW: &str = "\x1b[33m";
const ANSI_FG_RED: &str = "\x1b[31m";
const ANSI_FG_BRIGHT_BLACK: &str = "\x1b[90m";

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

const DEFAULT_TERMINAL_WIDTH: usize = 120;

/// Columns available on stdout: the tty size, else `$COLUMNS`, else 120
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .filter(|&w| w > 0)
        .or_else(|| {
            let cols = std::env::var("COLUMNS").ok()?;
            cols.trim().parse::<usize>().ok().filter(|w| (1..10_000).contains(w))
        })
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// Width of the overall progress bar for the current terminal
pub fn progress_bar_width() -> usize {
    (terminal_width() / 3).clamp(10, 50)
}

/// Apply bold formatting if in TTY mode
fn bold_if_tty(text: &str, is_tty: bool) -> String {
    if is_tty {
        format!("{}{}{}", ANSI_BOLD, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

fn status_color(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => ANSI_FG_BRIGHT_BLACK,
        TaskStatus::InProgress => ANSI_FG_YELLOW,
        TaskStatus::Completed => ANSI_FG_GREEN,
    }
}

fn status_marker(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "[ ]",
        TaskStatus::InProgress => "[~]",
        TaskStatus::Completed => "[x]",
    }
}

fn colorize_status(status: TaskStatus, is_tty: bool) -> String {
    if is_tty {
        format!("{}{}{}", status_color(status), status.as_str(), ANSI_RESET)
    } else {
        status.as_str().to_string()
    }
}

/// Render a text progress bar, e.g. `[#####-----]`
pub fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

fn phase_heading(phase: &Phase) -> String {
    match &phase.info.icon {
        Some(icon) => format!("{} {}", icon, phase.name),
        None => phase.name.clone(),
    }
}

/// Phase listing for `prodtrack phases`
pub fn format_phase_list(catalog: &Catalog, is_tty: bool) -> String {
    if catalog.is_empty() {
        return "No phases in catalog.\n".to_string();
    }

    let name_width = catalog.phases().iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Phase".len());

    let mut out = String::new();
    let header = format!("{:<3} {:<name_width$}  {:>5}  {:>5}  Timeline", "#", "Phase", "Tasks", "Days");
    out.push_str(&bold_if_tty(&header, is_tty));
    out.push('\n');

    for (idx, phase) in catalog.phases().iter().enumerate() {
        out.push_str(&format!(
            "{:<3} {:<name_width$}  {:>5}  {:>5}  {}\n",
            idx + 1,
            phase.name,
            phase.tasks.len(),
            phase.duration_days(),
            phase.info.timeline,
        ));
    }
    out.push_str(&format!("\n{} phases, {} tasks\n", catalog.phases().len(), catalog.total_tasks()));
    out
}

/// Task grid for one phase, with current statuses
pub fn format_task_grid(state: &ProductionState, phase: &Phase, is_tty: bool) -> String {
    let mut out = String::new();
    out.push_str(&bold_if_tty(&format!("{} Tasks", phase_heading(phase)), is_tty));
    out.push('\n');

    if phase.tasks.is_empty() {
        out.push_str("  (no tasks)\n");
        return out;
    }

    let name_width = phase.tasks.iter().map(|t| t.name.chars().count()).max().unwrap_or(0);
    for task in &phase.tasks {
        let status = state.get_task_status(&phase.name, &task.name);
        out.push_str(&format!(
            "  {} {:<name_width$}  {:>3} days  {}  {}\n",
            status_marker(status),
            task.name,
            task.duration,
            progress_bar(status.progress_value() as u32, 10),
            colorize_status(status, is_tty),
        ));
    }

    let stats = state.phase_stats(&phase.name);
    out.push_str(&format!(
        "  {}/{} completed, {} in progress\n",
        stats.completed_tasks, stats.total_tasks, stats.in_progress_tasks
    ));
    out
}

/// Metadata panel for one phase
pub fn format_phase_info(phase: &Phase, is_tty: bool) -> String {
    let mut out = String::new();
    out.push_str(&bold_if_tty(&format!("{} Information", phase_heading(phase)), is_tty));
    out.push('\n');
    out.push_str(&format!("  Mockup Level:   {}\n", display_or_dash(&phase.info.mockup_level)));
    out.push_str(&format!("  Timeline:       {}\n", display_or_dash(&phase.info.timeline)));
    out.push_str(&format!("  Total Duration: {} days\n", phase.duration_days()));
    if !phase.info.caution.is_empty() {
        let caution = if is_tty {
            format!("{}{}{}", ANSI_FG_RED, phase.info.caution, ANSI_RESET)
        } else {
            phase.info.caution.clone()
        };
        out.push_str(&format!("  Caution:        {}\n", caution));
    }
    out
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

/// Overall completion with progress bar and encouragement line
pub fn format_overall_progress(stats: &AggregateStats, bar_width: usize, is_tty: bool) -> String {
    let mut out = String::new();
    out.push_str(&bold_if_tty(&format!("Overall Progress: {}%", stats.percent_complete), is_tty));
    out.push('\n');
    out.push_str(&format!("  {}\n", progress_bar(stats.percent_complete, bar_width)));
    out.push_str(&format!("  {}\n", progress_message(stats.percent_complete)));
    out.push_str(&format!(
        "  Completed: {}  In Progress: {}  Pending: {}  Total: {}\n",
        stats.completed_tasks, stats.in_progress_tasks, stats.pending_tasks, stats.total_tasks
    ));
    out
}

/// Analytics panel: counts, share of total, completion estimate
pub fn format_analytics(stats: &AggregateStats, today: NaiveDate, is_tty: bool) -> String {
    let mut out = String::new();
    out.push_str(&bold_if_tty("Production Analytics", is_tty));
    out.push('\n');
    out.push_str(&format!("  {:<12} {:>5}\n", "Total Tasks", stats.total_tasks));
    for status in [TaskStatus::Completed, TaskStatus::InProgress, TaskStatus::Pending] {
        out.push_str(&format!(
            "  {:<12} {:>5}  ({}% of total)\n",
            status.as_str(),
            stats.count(status),
            stats.share_of_total(status),
        ));
    }
    out.push_str(&format!(
        "  Estimated Completion: {}\n",
        format_long_date(estimated_completion(today))
    ));
    out
}

/// Opening lines of a session
pub fn format_session_banner(state: &ProductionState, today: NaiveDate) -> String {
    let catalog = state.catalog();
    let mut out = format!(
        "Garment Production Tracker: {} phases, {} tasks. Type 'help' for commands.\n",
        catalog.phases().len(),
        catalog.total_tasks()
    );
    if let Some(phase) = state.selected_phase() {
        out.push_str(&format!("Phase: {}\n", phase));
    }
    out.push_str(&format!("\"{}\"\n", quote_for_day(today.ordinal())));
    out
}

/// Session command reference
pub fn format_session_help() -> String {
    [
        "Commands (any unique prefix works):",
        "  phase <name>            select the working phase",
        "  tasks                   show tasks of the selected phase",
        "  cycle <task>            Pending -> In Progress -> Completed -> Pending",
        "  cycle <phase> / <task>  cycle a task in another phase",
        "  status <task>           show one task's status",
        "  reset                   put every task of the selected phase back to Pending",
        "  stats                   overall progress",
        "  analytics               counts, shares and completion estimate",
        "  info                    selected phase metadata",
        "  export [dir]            write production_report_<date>.csv",
        "  help                    this list",
        "  quit                    end the session (statuses are not kept)",
        "",
    ]
    .join("\n")
}
