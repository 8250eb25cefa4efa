//! Core modules for Lockroom

pub mod lock_graph;
pub mod registry;
pub mod noise;
pub mod catalog;
pub mod command;
pub mod engine;
pub mod api;

pub use lock_graph::LockGraph;
pub use registry::ToolRegistry;
pub use noise::NoiseToolGenerator;
pub use catalog::{default_locks, default_tools};
pub use command::parse_command;
pub use engine::PuzzleEngine;
pub use api::{create_router, run_server};
