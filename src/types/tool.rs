//! Tool descriptors
//!
//! Handlers are data, not closures: the registry matches on `ToolKind`
//! to decide what a call does.

use serde::Serialize;

/// Item granted when an attempt is accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grant {
    pub item: String,
    /// Appended to the result text on a new line
    pub message: String,
}

/// What invoking a tool does
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolKind {
    /// Decoy: constant text, no effect
    Noise { message: String },
    /// Clue: constant text, no effect
    Query { text: String },
    /// Attempt `lock` with the first argument
    Attempt { lock: String, grant: Option<Grant> },
    /// Solve `lock` with its own answer (still gated), then reveal `text`
    Open { lock: String, text: String },
}

/// A named, externally invocable operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub kind: ToolKind,
}

impl ToolDescriptor {
    pub fn query(
        name: impl Into<String>,
        description: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ToolKind::Query { text: text.into() },
        }
    }

    pub fn attempt(
        name: impl Into<String>,
        description: impl Into<String>,
        lock: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ToolKind::Attempt { lock: lock.into(), grant: None },
        }
    }

    /// Attempt tool that grants `item` on acceptance
    pub fn attempt_with_grant(
        name: impl Into<String>,
        description: impl Into<String>,
        lock: impl Into<String>,
        item: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ToolKind::Attempt {
                lock: lock.into(),
                grant: Some(Grant { item: item.into(), message: message.into() }),
            },
        }
    }

    pub fn open(
        name: impl Into<String>,
        description: impl Into<String>,
        lock: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ToolKind::Open { lock: lock.into(), text: text.into() },
        }
    }

    pub fn noise(
        name: impl Into<String>,
        description: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ToolKind::Noise { message: message.into() },
        }
    }

    pub fn is_noise(&self) -> bool {
        matches!(self.kind, ToolKind::Noise { .. })
    }
}
