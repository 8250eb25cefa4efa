//! Decoy tool generation
//!
//! Names are `namespace_action_object` drawn from three fixed
//! vocabularies. A draw that collides with any registered name is
//! dropped, so the catalog may end up with fewer decoys than draws.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::core::catalog::LOCK_IDS;
use crate::core::ToolRegistry;
use crate::types::ToolDescriptor;
use crate::{NOISE_DESCRIPTION, NOISE_DRAWS, NOISE_MESSAGE};

pub const NOISE_ACTIONS: [&str; 8] = [
    "polish", "kick", "yell_at", "caress", "lick", "blow_on", "admire", "poke",
];

pub const NOISE_OBJECTS: [&str; 8] = [
    "brass", "wood", "stone", "dust", "hinge", "floor", "ceiling", "darkness",
];

#[derive(Debug, Clone)]
pub struct NoiseToolGenerator {
    namespaces: Vec<String>,
    actions: Vec<String>,
    objects: Vec<String>,
    draws: usize,
}

impl Default for NoiseToolGenerator {
    fn default() -> Self {
        Self::new(&LOCK_IDS, &NOISE_ACTIONS, &NOISE_OBJECTS, NOISE_DRAWS)
    }
}

impl NoiseToolGenerator {
    pub fn new(namespaces: &[&str], actions: &[&str], objects: &[&str], draws: usize) -> Self {
        Self {
            namespaces: owned(namespaces),
            actions: owned(actions),
            objects: owned(objects),
            draws,
        }
    }

    pub fn with_draws(mut self, draws: usize) -> Self {
        self.draws = draws;
        self
    }

    /// Number of distinct names the vocabularies can produce
    pub fn combinations(&self) -> usize {
        self.namespaces.len() * self.actions.len() * self.objects.len()
    }

    /// Draw one candidate name
    fn draw(&self, rng: &mut impl Rng) -> Option<String> {
        let namespace = self.namespaces.choose(rng)?;
        let action = self.actions.choose(rng)?;
        let object = self.objects.choose(rng)?;
        Some(format!("{}_{}_{}", namespace, action, object))
    }

    /// Register decoys into `registry`, returning how many were added
    pub fn populate(&self, registry: &mut ToolRegistry, rng: &mut impl Rng) -> usize {
        let mut added = 0;
        for _ in 0..self.draws {
            let Some(name) = self.draw(rng) else {
                break;
            };
            match registry.register(ToolDescriptor::noise(name, NOISE_DESCRIPTION, NOISE_MESSAGE)) {
                Ok(()) => added += 1,
                Err(err) => trace!(%err, "decoy discarded"),
            }
        }
        debug!(added, draws = self.draws, "decoys generated");
        added
    }

    /// Populate from a seed; same seed, same decoys
    pub fn populate_seeded(&self, registry: &mut ToolRegistry, seed: u64) -> usize {
        let mut rng = StdRng::seed_from_u64(seed);
        self.populate(registry, &mut rng)
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
