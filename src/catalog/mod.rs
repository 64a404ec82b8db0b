//! Production catalog: the fixed phases and tasks a tracker works over.
//!
//! A catalog is read-only once built. Phase order and task order are the
//! declaration order, which is also the order of every report row.

pub mod builtin;
pub mod error;

pub use error::CatalogError;

use crate::models::Phase;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    phases: Vec<Phase>,
}

impl Catalog {
    /// Build a catalog, rejecting empty names and duplicates
    pub fn new(phases: Vec<Phase>) -> std::result::Result<Self, CatalogError> {
        let mut seen_phases = HashSet::new();
        for phase in &phases {
            if phase.name.trim().is_empty() {
                return Err(CatalogError::EmptyPhaseName);
            }
            if !seen_phases.insert(phase.name.as_str()) {
                return Err(CatalogError::DuplicatePhase(phase.name.clone()));
            }

            let mut seen_tasks = HashSet::new();
            for task in &phase.tasks {
                if task.name.trim().is_empty() {
                    return Err(CatalogError::EmptyTaskName { phase: phase.name.clone() });
                }
                if !seen_tasks.insert(task.name.as_str()) {
                    return Err(CatalogError::DuplicateTask {
                        phase: phase.name.clone(),
                        task: task.name.clone(),
                    });
                }
            }
        }
        Ok(Self { phases })
    }

    /// Parse and validate a JSON catalog document
    pub fn from_json(json: &str) -> std::result::Result<Self, CatalogError> {
        let raw: Catalog = serde_json::from_str(json)?;
        Self::new(raw.phases)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let catalog = Self::from_json(&contents)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
        log::info!(
            "loaded catalog from {} ({} phases, {} tasks)",
            path.display(),
            catalog.phases.len(),
            catalog.total_tasks()
        );
        Ok(catalog)
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn phase(&self, name: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.name == name)
    }

    pub fn phase_names(&self) -> Vec<&str> {
        self.phases.iter().map(|p| p.name.as_str()).collect()
    }

    /// Task names of a phase in catalog order (empty for unknown phases)
    pub fn task_names(&self, phase: &str) -> Vec<&str> {
        self.phase(phase)
            .map(|p| p.tasks.iter().map(|t| t.name.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, phase: &str, task: &str) -> bool {
        self.phase(phase).is_some_and(|p| p.task(task).is_some())
    }

    pub fn total_tasks(&self) -> usize {
        self.phases.iter().map(|p| p.tasks.len()).sum()
    }

    pub fn first_phase(&self) -> Option<&Phase> {
        self.phases.first()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}
