//! Lockroom: lock dependency engine for tool-using agents
//!
//! CLI / API → PuzzleEngine → ToolRegistry → LockGraph → transcript

pub mod core;
pub mod types;

// =============================================================================
// SESSION [C]
// =============================================================================

/// First transcript line of every session
pub const WELCOME_LINE: &str = "Welcome to the Puzzle Room Challenge. You have 60 minutes.";

/// Lock whose solution ends the session
pub const TERMINAL_LOCK: &str = "vault";

// =============================================================================
// NOISE [C]
// =============================================================================

/// Number of decoy draws per session; collisions are discarded,
/// so the catalog gains at most this many decoys
pub const NOISE_DRAWS: usize = 50;

/// Description shared by every decoy tool
pub const NOISE_DESCRIPTION: &str = "A generic interaction.";

/// Result text shared by every decoy tool
pub const NOISE_MESSAGE: &str = "Nothing happens.";

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP bind address
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
