// Error handling utilities for consistent error messages and exit codes

use crate::utils::fuzzy::find_near_matches;
use std::process;
use thiserror::Error;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, missing resources, etc.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Exit with an internal error (exit code >1)
/// Internal errors are for unexpected system failures (unwritable export directory, etc.)
pub fn internal_error(message: &str) -> ! {
    eprintln!("Internal error: {}", message);
    process::exit(2);
}

/// Problems with a single session command. The session reports them and keeps running.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    UnknownCommand(String),

    #[error("Ambiguous command '{input}'. Did you mean one of: {}?", join_names(.matches))]
    AmbiguousCommand { input: String, matches: Vec<String> },

    #[error("{0}")]
    MissingArgument(String),

    #[error("Phase '{input}' not found{}", suggestion_suffix(.suggestions))]
    UnknownPhase { input: String, suggestions: Vec<String> },

    #[error("Task '{input}' not found in {phase}{}", suggestion_suffix(.suggestions))]
    UnknownTask { phase: String, input: String, suggestions: Vec<String> },

    #[error("Ambiguous name '{input}'. Did you mean one of: {}?", join_names(.matches))]
    AmbiguousName { input: String, matches: Vec<String> },

    #[error("No phase selected. The catalog has no phases.")]
    NoPhaseSelected,

    #[error("Export failed: {0}")]
    Export(String),
}

fn join_names(names: &[String]) -> String {
    names.join(", ")
}

fn suggestion_suffix(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(". Did you mean: {}?", suggestions.join(", "))
    }
}

/// Build an unknown-phase error with near-match suggestions
pub fn unknown_phase(input: &str, phases: &[&str]) -> SessionError {
    SessionError::UnknownPhase {
        input: input.to_string(),
        suggestions: find_near_matches(input, phases, 3),
    }
}

/// Build an unknown-task error with near-match suggestions
pub fn unknown_task(phase: &str, input: &str, tasks: &[&str]) -> SessionError {
    SessionError::UnknownTask {
        phase: phase.to_string(),
        input: input.to_string(),
        suggestions: find_near_matches(input, tasks, 3),
    }
}

/// Validate that a string is not empty
pub fn validate_non_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("test", "field").is_ok());
        assert!(validate_non_empty("", "field").is_err());
        assert!(validate_non_empty("   ", "field").is_err());
    }

    #[test]
    fn test_unknown_task_message() {
        let err = unknown_task("Development", "Desgn Review", &["Design Review", "Color Grading"]);
        assert_eq!(
            err.to_string(),
            "Task 'Desgn Review' not found in Development. Did you mean: Design Review?"
        );

        let err = unknown_task("Development", "Shipping", &["Design Review"]);
        assert_eq!(err.to_string(), "Task 'Shipping' not found in Development");
    }

    #[test]
    fn test_unknown_phase_message() {
        let err = unknown_phase("Sampeling", &["Development", "Sampling"]);
        assert_eq!(err.to_string(), "Phase 'Sampeling' not found. Did you mean: Sampling?");
    }

    #[test]
    fn test_ambiguous_command_message() {
        let err = SessionError::AmbiguousCommand {
            input: "sta".to_string(),
            matches: vec!["status".to_string(), "stats".to_string()],
        };
        assert_eq!(err.to_string(), "Ambiguous command 'sta'. Did you mean one of: status, stats?");
    }
}
