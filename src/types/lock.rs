//! Lock node and inventory definitions

use serde::{Deserialize, Serialize};

/// A gated node in the lock graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockNode {
    /// Stable identifier, also the tool namespace
    pub id: String,
    /// Display name used in result texts
    pub name: String,
    /// Monotonic: false → true exactly once
    pub solved: bool,
    /// Canonical answer, compared byte-for-byte
    pub answer: String,
    /// Lock ids that must be solved first, in declared order
    pub prerequisites: Vec<String>,
    /// Flavor text
    pub description: String,
}

impl LockNode {
    /// Create an unsolved lock with no prerequisites
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        answer: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            solved: false,
            answer: answer.into(),
            prerequisites: Vec::new(),
            description: description.into(),
        }
    }

    /// Append prerequisites, keeping declared order
    pub fn requires<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Glyph for terminal display
    pub fn glyph(&self) -> &'static str {
        if self.solved { "🔓" } else { "🔒" }
    }
}

impl std::fmt::Display for LockNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.solved { "SOLVED" } else { "LOCKED" };
        write!(f, "{} [{}]", self.name, status)
    }
}

/// Items granted by solved locks
///
/// Set semantics with insertion order kept for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item; returns false if it was already held
    pub fn insert(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|held| held == item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}
