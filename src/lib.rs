//! prodtrack - Garment production phase tracker
//!
//! This library provides the core functionality for prodtrack, including:
//! - The production catalog (phases, tasks, phase metadata) and its validation
//! - Per-session task status tracking with aggregate statistics
//! - CSV production reports
//! - Configuration file handling
//! - CLI command parsing and the interactive session
//!
//! # Example
//!
//! ```
//! use prodtrack::catalog::Catalog;
//! use prodtrack::models::TaskStatus;
//! use prodtrack::tracker::ProductionState;
//!
//! let mut state = ProductionState::new(Catalog::builtin());
//! state.cycle_task_status("Development", "Design Review");
//! assert_eq!(state.get_task_status("Development", "Design Review"), TaskStatus::InProgress);
//! assert_eq!(state.stats().total_tasks, 20);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod models;
pub mod tracker;
pub mod utils;
