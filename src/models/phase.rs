use serde::{Deserialize, Serialize};

/// A unit of work within a production phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub duration: u32, // Expected duration in days
}

impl Task {
    pub fn new(name: impl Into<String>, duration: u32) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

/// Display-only metadata attached to a phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseInfo {
    #[serde(default)]
    pub mockup_level: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub caution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A named production stage and its ordered tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub tasks: Vec<Task>,
    #[serde(flatten)]
    pub info: PhaseInfo,
}

impl Phase {
    pub fn new(name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            name: name.into(),
            tasks,
            info: PhaseInfo::default(),
        }
    }

    pub fn with_info(mut self, info: PhaseInfo) -> Self {
        self.info = info;
        self
    }

    /// Look up a task by exact name
    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Sum of task durations in days
    pub fn duration_days(&self) -> u32 {
        self.tasks.iter().map(|t| t.duration).sum()
    }
}
