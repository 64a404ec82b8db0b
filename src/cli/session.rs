//! Interactive production session.
//!
//! A session owns the only `ProductionState` and applies one command per
//! input line. Each command runs to completion before the next line is
//! read. Command problems (unknown task, ambiguous prefix, failed export)
//! are reported and the session continues; only broken output aborts it.

use crate::cli::abbrev::{resolve_name, SESSION_COMMANDS};
use crate::cli::error::{unknown_phase, unknown_task, validate_non_empty, SessionError};
use crate::cli::output::{
    format_analytics, format_overall_progress, format_phase_info, format_session_banner,
    format_session_help, format_task_grid, progress_bar_width,
};
use crate::tracker::ProductionState;
use anyhow::Result;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// What the input loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<W: Write> {
    state: ProductionState,
    out: W,
    export_dir: PathBuf,
    date: NaiveDate,
    is_tty: bool,
}

impl<W: Write> Session<W> {
    pub fn new(state: ProductionState, out: W, export_dir: PathBuf, date: NaiveDate) -> Self {
        Self {
            state,
            out,
            export_dir,
            date,
            is_tty: false,
        }
    }

    /// Enable ANSI styling of the output
    pub fn with_tty(mut self, is_tty: bool) -> Self {
        self.is_tty = is_tty;
        self
    }

    pub fn state(&self) -> &ProductionState {
        &self.state
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Read commands until `quit` or end of input.
    /// Command errors go to `err`; `prompt` writes "> " before each line.
    pub fn run<R: BufRead, E: Write>(&mut self, input: R, err: &mut E, prompt: bool) -> Result<()> {
        let banner = format_session_banner(&self.state, self.date);
        self.out.write_all(banner.as_bytes())?;

        let mut lines = input.lines();
        loop {
            if prompt {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            match self.execute(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) if e.downcast_ref::<SessionError>().is_some() => {
                    writeln!(err, "Error: {}", e)?;
                }
                Err(e) => return Err(e),
            }
        }

        self.out.flush()?;
        log::debug!("session ended");
        Ok(())
    }

    /// Apply one command line
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match resolve_name(verb, SESSION_COMMANDS) {
            Ok(command) => command,
            Err(matches) if matches.is_empty() => {
                return Err(SessionError::UnknownCommand(verb.to_string()).into());
            }
            Err(matches) => {
                return Err(SessionError::AmbiguousCommand {
                    input: verb.to_string(),
                    matches: matches.iter().map(|m| m.to_string()).collect(),
                }
                .into());
            }
        };

        match command {
            "phase" => self.handle_phase(arg)?,
            "tasks" => self.handle_tasks()?,
            "cycle" => self.handle_cycle(arg)?,
            "status" => self.handle_status(arg)?,
            "reset" => self.handle_reset(arg)?,
            "stats" => {
                let text = format_overall_progress(&self.state.stats(), progress_bar_width(), self.is_tty);
                self.out.write_all(text.as_bytes())?;
            }
            "analytics" => {
                let text = format_analytics(&self.state.stats(), self.date, self.is_tty);
                self.out.write_all(text.as_bytes())?;
            }
            "info" => self.handle_info()?,
            "export" => self.handle_export(arg)?,
            "help" => self.out.write_all(format_session_help().as_bytes())?,
            "quit" => return Ok(Flow::Quit),
            _ => return Err(SessionError::UnknownCommand(verb.to_string()).into()),
        }
        Ok(Flow::Continue)
    }

    fn handle_phase(&mut self, arg: &str) -> Result<()> {
        if arg.is_empty() {
            let current = self.selected_phase()?;
            writeln!(self.out, "Phase: {}", current)?;
            writeln!(self.out, "Available: {}", self.state.catalog().phase_names().join(", "))?;
            return Ok(());
        }

        let phase = self.resolve_phase(arg)?;
        self.state.select_phase(&phase);
        writeln!(self.out, "Phase: {}", phase)?;
        self.handle_tasks()
    }

    fn handle_tasks(&mut self) -> Result<()> {
        let phase_name = self.selected_phase()?;
        if let Some(phase) = self.state.catalog().phase(&phase_name) {
            let grid = format_task_grid(&self.state, phase, self.is_tty);
            self.out.write_all(grid.as_bytes())?;
        }
        Ok(())
    }

    fn handle_cycle(&mut self, arg: &str) -> Result<()> {
        let (phase, task) = self.resolve_target(arg)?;
        // Target was resolved against the catalog, so the cycle always applies
        if let Some(next) = self.state.cycle_task_status(&phase, &task) {
            writeln!(self.out, "\"{}\" is now {}", task, next)?;
        }
        Ok(())
    }

    fn handle_status(&mut self, arg: &str) -> Result<()> {
        let (phase, task) = self.resolve_target(arg)?;
        let status = self.state.get_task_status(&phase, &task);
        writeln!(self.out, "{} / {}: {}", phase, task, status)?;
        Ok(())
    }

    fn handle_reset(&mut self, arg: &str) -> Result<()> {
        let phase = if arg.is_empty() {
            self.selected_phase()?
        } else {
            self.resolve_phase(arg)?
        };
        self.state.reset_phase(&phase);
        writeln!(self.out, "All tasks in {} have been reset to Pending.", phase)?;
        Ok(())
    }

    fn handle_info(&mut self) -> Result<()> {
        let phase_name = self.selected_phase()?;
        if let Some(phase) = self.state.catalog().phase(&phase_name) {
            let info = format_phase_info(phase, self.is_tty);
            self.out.write_all(info.as_bytes())?;
        }
        Ok(())
    }

    fn handle_export(&mut self, arg: &str) -> Result<()> {
        let dir = if arg.is_empty() {
            self.export_dir.clone()
        } else {
            Path::new(arg).to_path_buf()
        };
        let path = self.state
            .write_report(&dir, self.date)
            .map_err(|e| SessionError::Export(format!("{:#}", e)))?;
        writeln!(self.out, "Production data has been exported to {}", path.display())?;
        Ok(())
    }

    fn selected_phase(&self) -> Result<String, SessionError> {
        self.state
            .selected_phase()
            .map(str::to_string)
            .ok_or(SessionError::NoPhaseSelected)
    }

    fn resolve_phase(&self, input: &str) -> Result<String, SessionError> {
        let phases = self.state.catalog().phase_names();
        match resolve_name(input, &phases) {
            Ok(phase) => Ok(phase.to_string()),
            Err(matches) if matches.is_empty() => Err(unknown_phase(input, &phases)),
            Err(matches) => Err(SessionError::AmbiguousName {
                input: input.to_string(),
                matches: matches.iter().map(|m| m.to_string()).collect(),
            }),
        }
    }

    fn resolve_task(&self, phase: &str, input: &str) -> Result<String, SessionError> {
        let tasks = self.state.catalog().task_names(phase);
        match resolve_name(input, &tasks) {
            Ok(task) => Ok(task.to_string()),
            Err(matches) if matches.is_empty() => Err(unknown_task(phase, input, &tasks)),
            Err(matches) => Err(SessionError::AmbiguousName {
                input: input.to_string(),
                matches: matches.iter().map(|m| m.to_string()).collect(),
            }),
        }
    }

    /// `<task>` in the selected phase, or `<phase> / <task>`.
    /// Names may themselves contain '/', so the whole argument is tried as
    /// a task first, then each '/' in turn as the phase separator.
    fn resolve_target(&self, arg: &str) -> Result<(String, String), SessionError> {
        validate_non_empty(arg, "Task name").map_err(SessionError::MissingArgument)?;

        let in_selected = self.selected_phase().and_then(|phase| {
            let task = self.resolve_task(&phase, arg)?;
            Ok((phase, task))
        });
        if in_selected.is_ok() {
            return in_selected;
        }

        let mut first_err = None;
        for (idx, _) in arg.match_indices('/') {
            match self.resolve_split(&arg[..idx], &arg[idx + 1..]) {
                Ok(target) => return Ok(target),
                Err(e) => {
                    first_err.get_or_insert(e);
                }
            }
        }
        first_err.map_or(in_selected, Err)
    }

    fn resolve_split(&self, phase_input: &str, task_input: &str) -> Result<(String, String), SessionError> {
        let phase = self.resolve_phase(phase_input.trim())?;
        let task_input = task_input.trim();
        validate_non_empty(task_input, "Task name").map_err(SessionError::MissingArgument)?;
        let task = self.resolve_task(&phase, task_input)?;
        Ok((phase, task))
    }
}
