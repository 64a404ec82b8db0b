//! Per-session production state.
//!
//! `ProductionState` owns the catalog and the status map for one session.
//! The map only holds non-Pending statuses; a missing entry reads as
//! `Pending`. Nothing here is persisted, so a new session always starts
//! with every task Pending.

pub mod export;
pub mod stats;

pub use export::*;
pub use stats::*;

use crate::catalog::Catalog;
use crate::models::TaskStatus;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ProductionState {
    catalog: Catalog,
    selected_phase: Option<String>,
    statuses: HashMap<String, HashMap<String, TaskStatus>>, // phase -> task -> status
}

impl ProductionState {
    /// Start a session over a catalog; the first phase is selected
    pub fn new(catalog: Catalog) -> Self {
        let selected_phase = catalog.first_phase().map(|p| p.name.clone());
        Self {
            catalog,
            selected_phase,
            statuses: HashMap::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected_phase(&self) -> Option<&str> {
        self.selected_phase.as_deref()
    }

    /// Select a phase by exact name. Returns false if the phase is unknown.
    pub fn select_phase(&mut self, phase: &str) -> bool {
        if self.catalog.phase(phase).is_none() {
            return false;
        }
        self.selected_phase = Some(phase.to_string());
        true
    }

    /// Current status of a task (Pending when never cycled or unknown)
    pub fn get_task_status(&self, phase: &str, task: &str) -> TaskStatus {
        self.statuses
            .get(phase)
            .and_then(|tasks| tasks.get(task))
            .copied()
            .unwrap_or_default()
    }

    /// Advance a task one step along Pending -> In Progress -> Completed -> Pending.
    /// Returns the new status, or None (and changes nothing) for pairs outside the catalog.
    pub fn cycle_task_status(&mut self, phase: &str, task: &str) -> Option<TaskStatus> {
        if !self.catalog.contains(phase, task) {
            log::debug!("ignoring cycle for unknown task {}|{}", phase, task);
            return None;
        }

        let current = self.get_task_status(phase, task);
        let next = current.next();

        if next == TaskStatus::Pending {
            if let Some(tasks) = self.statuses.get_mut(phase) {
                tasks.remove(task);
                if tasks.is_empty() {
                    self.statuses.remove(phase);
                }
            }
        } else {
            self.statuses
                .entry(phase.to_string())
                .or_default()
                .insert(task.to_string(), next);
        }

        log::debug!("{}|{}: {} -> {}", phase, task, current, next);
        Some(next)
    }

    /// Put every task of a phase back to Pending. Other phases are untouched.
    pub fn reset_phase(&mut self, phase: &str) {
        if let Some(cleared) = self.statuses.remove(phase) {
            log::debug!("reset phase {} ({} tasks cleared)", phase, cleared.len());
        }
    }

    /// Aggregate counts over the whole catalog, recomputed on every call
    pub fn stats(&self) -> AggregateStats {
        let mut counts = StatusCounts::default();
        for phase in self.catalog.phases() {
            for task in &phase.tasks {
                counts.add(self.get_task_status(&phase.name, &task.name));
            }
        }
        counts.into_stats()
    }

    /// Aggregate counts for a single phase (all zero for unknown phases)
    pub fn phase_stats(&self, phase: &str) -> AggregateStats {
        let mut counts = StatusCounts::default();
        if let Some(p) = self.catalog.phase(phase) {
            for task in &p.tasks {
                counts.add(self.get_task_status(phase, &task.name));
            }
        }
        counts.into_stats()
    }

    /// Every (phase, task, status) in catalog order
    pub fn rows(&self) -> Vec<(&str, &str, TaskStatus)> {
        self.catalog
            .phases()
            .iter()
            .flat_map(|phase| {
                phase.tasks.iter().map(move |task| {
                    (
                        phase.name.as_str(),
                        task.name.as_str(),
                        self.get_task_status(&phase.name, &task.name),
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Phase, Task};

    fn two_phase_state() -> ProductionState {
        let catalog = Catalog::new(vec![
            Phase::new("Development", vec![
                Task::new("Design Review", 3),
                Task::new("Mockup Creation", 5),
            ]),
            Phase::new("Sampling", vec![Task::new("Cost Analysis", 1)]),
        ])
        .unwrap();
        ProductionState::new(catalog)
    }

    #[test]
    fn test_initial_status_is_pending() {
        let state = two_phase_state();
        for (_, _, status) in state.rows() {
            assert_eq!(status, TaskStatus::Pending);
        }
        assert_eq!(state.selected_phase(), Some("Development"));
    }

    #[test]
    fn test_cycle_sequence() {
        let mut state = two_phase_state();
        let expected = [
            TaskStatus::InProgress,
            TaskStatus::Completed,
            TaskStatus::Pending,
            TaskStatus::InProgress,
        ];
        for want in expected {
            assert_eq!(state.cycle_task_status("Development", "Design Review"), Some(want));
            assert_eq!(state.get_task_status("Development", "Design Review"), want);
        }
        assert_eq!(state.get_task_status("Development", "Mockup Creation"), TaskStatus::Pending);
    }

    #[test]
    fn test_wrap_to_pending_removes_entry() {
        let mut state = two_phase_state();
        for _ in 0..3 {
            state.cycle_task_status("Sampling", "Cost Analysis");
        }
        assert!(state.statuses.is_empty());
    }

    #[test]
    fn test_unknown_pairs_are_ignored() {
        let mut state = two_phase_state();
        assert_eq!(state.cycle_task_status("Development", "Cost Analysis"), None);
        assert_eq!(state.cycle_task_status("Shipping", "Anything"), None);
        assert_eq!(state.get_task_status("Shipping", "Anything"), TaskStatus::Pending);
        assert_eq!(state.stats().in_progress_tasks, 0);
        state.reset_phase("Shipping");
        assert_eq!(state.stats().total_tasks, 3);
    }

    #[test]
    fn test_reset_phase_only_touches_that_phase() {
        let mut state = two_phase_state();
        state.cycle_task_status("Development", "Design Review");
        state.cycle_task_status("Development", "Mockup Creation");
        state.cycle_task_status("Development", "Mockup Creation");
        state.cycle_task_status("Sampling", "Cost Analysis");

        state.reset_phase("Development");
        assert_eq!(state.get_task_status("Development", "Design Review"), TaskStatus::Pending);
        assert_eq!(state.get_task_status("Development", "Mockup Creation"), TaskStatus::Pending);
        assert_eq!(state.get_task_status("Sampling", "Cost Analysis"), TaskStatus::InProgress);

        let before = state.rows().into_iter().map(|(p, t, s)| (p.to_string(), t.to_string(), s)).collect::<Vec<_>>();
        state.reset_phase("Development");
        let after = state.rows().into_iter().map(|(p, t, s)| (p.to_string(), t.to_string(), s)).collect::<Vec<_>>();
        assert_eq!(before, after);
    }

    #[test]
    fn test_stats_partition_total() {
        let mut state = two_phase_state();
        state.cycle_task_status("Development", "Design Review");
        state.cycle_task_status("Sampling", "Cost Analysis");
        state.cycle_task_status("Sampling", "Cost Analysis");

        let stats = state.stats();
        assert_eq!(stats.total_tasks, 3);
        assert_eq!(stats.completed_tasks, 1);
        assert_eq!(stats.in_progress_tasks, 1);
        assert_eq!(stats.pending_tasks, 1);
        assert_eq!(stats.percent_complete, 33);
        assert_eq!(
            stats.completed_tasks + stats.in_progress_tasks + stats.pending_tasks,
            stats.total_tasks
        );
    }

    #[test]
    fn test_phase_stats() {
        let mut state = two_phase_state();
        state.cycle_task_status("Development", "Design Review");
        state.cycle_task_status("Development", "Design Review");

        let dev = state.phase_stats("Development");
        assert_eq!(dev.total_tasks, 2);
        assert_eq!(dev.completed_tasks, 1);
        assert_eq!(dev.percent_complete, 50);

        let unknown = state.phase_stats("Shipping");
        assert_eq!(unknown.total_tasks, 0);
        assert_eq!(unknown.percent_complete, 0);
    }

    #[test]
    fn test_select_phase() {
        let mut state = two_phase_state();
        assert!(state.select_phase("Sampling"));
        assert_eq!(state.selected_phase(), Some("Sampling"));
        assert!(!state.select_phase("sampling"));
        assert_eq!(state.selected_phase(), Some("Sampling"));
    }

    #[test]
    fn test_empty_catalog_has_no_selection() {
        let state = ProductionState::new(Catalog::default());
        assert_eq!(state.selected_phase(), None);
        assert_eq!(state.stats().percent_complete, 0);
    }
}
