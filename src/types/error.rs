//! Library error types
//!
//! Game outcomes are text; these cover misuse of the building blocks.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("tool already registered: {0}")]
    DuplicateName(String),

    #[error("tool not found: {0}")]
    NotFound(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("duplicate lock id: {0}")]
    DuplicateLock(String),

    #[error("lock {lock} requires unknown lock {prerequisite}")]
    UnknownPrerequisite { lock: String, prerequisite: String },

    #[error("prerequisite cycle through lock {0}")]
    Cycle(String),
}

/// Failure to assemble a session from locks and tools
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("tool {tool} targets unknown lock {lock}")]
    UnknownTarget { tool: String, lock: String },
}
