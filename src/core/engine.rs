//! Puzzle engine: one session's locks, tools and transcript
//!
//! Every call is recorded, whatever its outcome:
//! - echo line `> name(args)`
//! - raw result text (including the not-found text)
//!
//! The global state is the vector of solved flags. The session is over
//! once the terminal lock is solved, but calls keep working and simply
//! degrade to already-solved / no-op results.

use chrono::Utc;
use rand::Rng;
use tracing::{debug, info};

use crate::core::catalog::{default_locks, default_tools};
use crate::core::{parse_command, LockGraph, NoiseToolGenerator, ToolRegistry};
use crate::types::{
    Inventory, Invocation, LockNode, RegistryError, SessionConfig, SessionSnapshot, SetupError,
    ToolDescriptor, ToolKind, Transcript,
};

/// Owns everything a session can mutate
#[derive(Debug, Clone)]
pub struct PuzzleEngine {
    graph: LockGraph,
    /// Graph as built, for resets
    initial: LockGraph,
    registry: ToolRegistry,
    transcript: Transcript,
    /// Effective seed (resolved if the config left it open)
    seed: u64,
    config: SessionConfig,
}

impl Default for PuzzleEngine {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl PuzzleEngine {
    /// Create a session over the default puzzle room
    pub fn new(config: SessionConfig) -> Self {
        // The default room is static and covered by tests
        Self::build(default_locks(), default_tools(), config)
            .expect("default puzzle room is a valid lock graph")
    }

    /// Create a session over a custom room
    pub fn build(
        locks: Vec<LockNode>,
        tools: Vec<ToolDescriptor>,
        config: SessionConfig,
    ) -> Result<Self, SetupError> {
        let graph = LockGraph::new(locks)?;

        let mut registry = ToolRegistry::new();
        for tool in tools {
            if let ToolKind::Attempt { lock, .. } | ToolKind::Open { lock, .. } = &tool.kind {
                if graph.get(lock).is_none() {
                    return Err(SetupError::UnknownTarget {
                        tool: tool.name.clone(),
                        lock: lock.clone(),
                    });
                }
            }
            registry.register(tool)?;
        }

        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let decoys = NoiseToolGenerator::default()
            .with_draws(config.noise_draws)
            .populate_seeded(&mut registry, seed);

        info!(
            locks = graph.len(),
            tools = registry.len(),
            decoys,
            seed,
            "session created"
        );

        Ok(Self {
            initial: graph.clone(),
            graph,
            registry,
            transcript: Transcript::new(),
            seed,
            config,
        })
    }

    /// Dispatch once, record two transcript lines, return the result text
    pub fn execute_tool(&mut self, name: &str, args: &[String]) -> String {
        let result = match self.registry.dispatch(name, args, &mut self.graph) {
            Ok(text) => text,
            Err(RegistryError::NotFound(_)) => format!("Error: Tool \"{}\" not found.", name),
            Err(err) => format!("Error: {}", err),
        };

        self.transcript.record(&Invocation::new(name, args.to_vec()), &result);
        debug!(tool = name, lines = self.transcript.len(), "recorded");

        if self.graph.is_complete() && result.starts_with("SUCCESS!") {
            info!(calls = self.transcript.call_count(), "terminal lock solved");
        }

        result
    }

    pub fn execute(&mut self, invocation: &Invocation) -> String {
        self.execute_tool(&invocation.tool, &invocation.args)
    }

    /// Parse agent text and execute it. Blank text records nothing.
    pub fn execute_command(&mut self, text: &str) -> Option<String> {
        let invocation = parse_command(text)?;
        Some(self.execute(&invocation))
    }

    /// Re-run a transcript's calls on a fresh session with this session's seed
    pub fn replay(&self, transcript: &Transcript) -> Self {
        let mut replayed = self.fresh();
        for invocation in transcript.invocations() {
            replayed.execute(invocation);
        }
        replayed
    }

    /// Same room, same catalog, nothing solved
    pub fn fresh(&self) -> Self {
        Self {
            graph: self.initial.clone(),
            initial: self.initial.clone(),
            registry: self.registry.clone(),
            transcript: Transcript::new(),
            seed: self.seed,
            config: self.config.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = self.fresh();
    }

    // -------------------------------------------------------------------------
    // Read-only views
    // -------------------------------------------------------------------------

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn graph(&self) -> &LockGraph {
        &self.graph
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn inventory(&self) -> &Inventory {
        self.graph.inventory()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_complete(&self) -> bool {
        self.graph.is_complete()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            taken_at: Utc::now(),
            locks: self.graph.snapshot(),
            inventory: self.inventory().iter().map(str::to_string).collect(),
            transcript: self.transcript.lines().to_vec(),
            tool_count: self.registry.len(),
            complete: self.is_complete(),
        }
    }

    /// Prompt body for a decision agent: catalog, then transcript.
    /// Tools are listed by name so decoys sit among the real ones.
    pub fn agent_context(&self) -> String {
        let mut tools: Vec<&ToolDescriptor> = self.registry.catalog().collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));

        let mut out = String::from("Available tools:\n");
        for tool in tools {
            out.push_str(&format!("- {}: {}\n", tool.name, tool.description));
        }
        out.push_str("\nCurrent Terminal History:\n\n");
        out.push_str(&self.transcript.joined());
        out.push_str(
            "\n\nYour next move (output ONLY the tool call, e.g. \"victorian_inspect_wheels\"):",
        );
        out
    }
}

// =============================================================================
// TESTS
// =============================================================================
