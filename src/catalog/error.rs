use thiserror::Error;

/// Reasons a catalog document is rejected
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Phase name cannot be empty")]
    EmptyPhaseName,

    #[error("Task name cannot be empty (phase '{phase}')")]
    EmptyTaskName { phase: String },

    #[error("Duplicate phase '{0}'")]
    DuplicatePhase(String),

    #[error("Duplicate task '{task}' in phase '{phase}'")]
    DuplicateTask { phase: String, task: String },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
