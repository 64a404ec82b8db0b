use clap::{Parser, Subcommand};
use crate::catalog::Catalog;
use crate::cli::abbrev;
use crate::cli::error::{internal_error, unknown_phase, user_error};
use crate::cli::output::{format_phase_info, format_phase_list, format_task_grid, is_tty};
use crate::cli::session::Session;
use crate::config::Config;
use crate::tracker::ProductionState;
use crate::utils::{parse_report_date, today};
use chrono::NaiveDate;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

#[derive(Parser)]
#[command(name = "prodtrack")]
#[command(about = "Garment production tracker - per-session phase checklist with CSV reports")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Catalog JSON file (overrides catalog.location in ~/.prodtrack/rc)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List production phases
    Phases {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show a phase's metadata and tasks
    Show {
        /// Phase name or unique prefix (e.g., "quality control" or "qual")
        #[arg(required = true)]
        phase: Vec<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Start a tracking session (reads commands from stdin; statuses are not kept afterwards)
    Session {
        /// Phase to select at start (defaults to the first phase)
        #[arg(long)]
        phase: Option<String>,
        /// Report date for exports and analytics (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Export directory (overrides export.dir in ~/.prodtrack/rc)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Write a production report with every task Pending
    Export {
        /// Export directory (overrides export.dir in ~/.prodtrack/rc)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Report date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Print the CSV to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
}

pub fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Expand command abbreviations before processing
    let args = match abbrev::expand_command_abbreviations(args) {
        Ok(expanded) => expanded,
        Err(e) => {
            user_error(&e);
        }
    };

    let clap_args = std::iter::once("prodtrack".to_string())
        .chain(args)
        .collect::<Vec<_>>();
    let cli = match Cli::try_parse_from(clap_args) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    handle_command(cli)
}

fn handle_command(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let catalog = match config.catalog(cli.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => user_error(&format!("{:#}", e)),
    };

    match cli.command {
        Commands::Phases { json } => handle_phases(&catalog, json),
        Commands::Show { phase, json } => handle_show(&catalog, &phase.join(" "), json),
        Commands::Session { phase, date, out } => {
            let export_dir = config.export_dir(out.as_deref());
            handle_session(catalog, phase, date, export_dir)
        }
        Commands::Export { out, date, stdout } => {
            let export_dir = config.export_dir(out.as_deref());
            handle_export(catalog, date, &export_dir, stdout)
        }
    }
}

fn resolve_date(date: Option<String>) -> NaiveDate {
    match date {
        Some(expr) => parse_report_date(&expr).unwrap_or_else(|e| user_error(&e.to_string())),
        None => today(),
    }
}

fn resolve_phase_name<'a>(catalog: &'a Catalog, input: &str) -> &'a str {
    let phases = catalog.phase_names();
    match abbrev::resolve_name(input, &phases) {
        Ok(phase) => phase,
        Err(matches) if matches.is_empty() => user_error(&unknown_phase(input, &phases).to_string()),
        Err(matches) => user_error(&format!(
            "Ambiguous phase '{}'. Did you mean one of: {}?",
            input,
            matches.join(", ")
        )),
    }
}

fn handle_phases(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        let phases: Vec<_> = catalog.phases().iter().map(|phase| {
            serde_json::json!({
                "name": phase.name,
                "icon": phase.info.icon,
                "tasks": phase.tasks.len(),
                "duration_days": phase.duration_days(),
                "timeline": phase.info.timeline,
            })
        }).collect();
        println!("{}", serde_json::to_string_pretty(&phases)?);
    } else {
        print!("{}", format_phase_list(catalog, is_tty()));
    }
    Ok(())
}

fn handle_show(catalog: &Catalog, input: &str, json: bool) -> Result<()> {
    let name = resolve_phase_name(catalog, input);
    let phase = catalog.phase(name)
        .with_context(|| format!("Phase '{}' missing from catalog", name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(phase)?);
        return Ok(());
    }

    // Outside a session every task reads as Pending
    let state = ProductionState::new(catalog.clone());
    let tty = is_tty();
    print!("{}", format_phase_info(phase, tty));
    println!();
    print!("{}", format_task_grid(&state, phase, tty));
    Ok(())
}

fn handle_session(catalog: Catalog, phase: Option<String>, date: Option<String>, export_dir: PathBuf) -> Result<()> {
    let date = resolve_date(date);

    let mut state = ProductionState::new(catalog);
    if let Some(input) = phase {
        let name = resolve_phase_name(state.catalog(), &input).to_string();
        state.select_phase(&name);
    }

    log::info!("session started ({} tasks, date {})", state.catalog().total_tasks(), date);

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    let mut session = Session::new(state, stdout.lock(), export_dir, date).with_tty(is_tty());
    session.run(stdin.lock(), &mut stderr, interactive)
        .context("Failed to run session")
}

fn handle_export(catalog: Catalog, date: Option<String>, export_dir: &Path, stdout: bool) -> Result<()> {
    let date = resolve_date(date);
    let state = ProductionState::new(catalog);

    if stdout {
        println!("{}", state.render_csv(date));
        return Ok(());
    }

    match state.write_report(export_dir, date) {
        Ok(path) => {
            println!("Production data has been exported to {}", path.display());
            Ok(())
        }
        Err(e) => internal_error(&format!("{:#}", e)),
    }
}
