//! Core types for Lockroom

mod lock;
mod outcome;
mod tool;
mod transcript;
mod snapshot;
mod config;
mod error;

pub use lock::{LockNode, Inventory};
pub use outcome::AttemptOutcome;
pub use tool::{ToolDescriptor, ToolKind, Grant};
pub use transcript::{Transcript, Invocation};
pub use snapshot::{LockSnapshot, SessionSnapshot};
pub use config::SessionConfig;
pub use error::{GraphError, RegistryError, SetupError};
