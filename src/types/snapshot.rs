//! Read-only views of a session for rendering layers
//!
//! Answers never appear here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One lock as seen by a dependency visualization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockSnapshot {
    pub id: String,
    pub name: String,
    pub solved: bool,
    /// Whether every prerequisite is solved
    pub unlocked: bool,
    pub prerequisites: Vec<String>,
    pub description: String,
}

/// Whole-session view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub taken_at: DateTime<Utc>,
    pub locks: Vec<LockSnapshot>,
    pub inventory: Vec<String>,
    pub transcript: Vec<String>,
    pub tool_count: usize,
    pub complete: bool,
}

impl SessionSnapshot {
    pub fn solved_count(&self) -> usize {
        self.locks.iter().filter(|lock| lock.solved).count()
    }

    /// One-line summary for terminal output
    pub fn to_parseable_string(&self) -> String {
        format!(
            "solved={}/{} | inventory={} | tools={} | complete={}",
            self.solved_count(),
            self.locks.len(),
            self.inventory.join(","),
            self.tool_count,
            self.complete
        )
    }
}
