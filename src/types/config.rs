//! Session configuration

use serde::{Deserialize, Serialize};

use crate::NOISE_DRAWS;

/// Knobs fixed at session construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed for decoy generation; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Number of decoy draws
    pub noise_draws: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            noise_draws: NOISE_DRAWS,
        }
    }
}

impl SessionConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }
}
