//! Tool registry: name → descriptor, dispatched by kind
//!
//! Registration never overwrites. Lookup is a single hash probe, so
//! catalogs padded with decoys cost nothing extra per call.

use std::collections::HashMap;

use tracing::debug;

use crate::core::LockGraph;
use crate::types::{AttemptOutcome, RegistryError, ToolDescriptor, ToolKind};

#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, ToolDescriptor>,
    /// Registration order, for stable catalog listings
    order: Vec<String>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Fails if the name is taken.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<(), RegistryError> {
        if self.tools.contains_key(&descriptor.name) {
            return Err(RegistryError::DuplicateName(descriptor.name));
        }
        self.order.push(descriptor.name.clone());
        self.tools.insert(descriptor.name.clone(), descriptor);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.get(name)
    }

    /// Run a tool against the lock graph and return its text verbatim
    pub fn dispatch(
        &self,
        name: &str,
        args: &[String],
        graph: &mut LockGraph,
    ) -> Result<String, RegistryError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;

        debug!(tool = name, args = args.len(), "dispatch");

        let text = match &tool.kind {
            ToolKind::Noise { message } => message.clone(),
            ToolKind::Query { text } => text.clone(),
            ToolKind::Attempt { lock, grant } => {
                // Missing argument is an empty candidate, which never matches
                let candidate = args.first().map(String::as_str).unwrap_or("");
                let outcome = graph.attempt(lock, candidate);
                debug!(tool = name, outcome = outcome.code(), "attempt");

                let mut text = outcome.to_result_text();
                if let (true, Some(grant)) = (outcome.is_accepted(), grant) {
                    if graph.grant(&grant.item) {
                        text.push('\n');
                        text.push_str(&grant.message);
                    }
                }
                text
            }
            ToolKind::Open { lock, text } => {
                let answer = graph.answer(lock).unwrap_or_default().to_string();
                match graph.attempt(lock, &answer) {
                    AttemptOutcome::Accepted { .. } | AttemptOutcome::AlreadySolved { .. } => {
                        text.clone()
                    }
                    blocked => blocked.to_result_text(),
                }
            }
        };

        Ok(text)
    }

    /// Descriptors in registration order
    pub fn catalog(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.order.iter().map(|name| &self.tools[name])
    }

    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn noise_count(&self) -> usize {
        self.tools.values().filter(|tool| tool.is_noise()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LockNode;

    fn graph() -> LockGraph {
        LockGraph::new(vec![
            LockNode::new("box", "Box", "12", ""),
            LockNode::new("door", "Door", "OPEN", "").requires(["box"]),
        ])
        .unwrap()
    }

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(ToolDescriptor::query("box_look", "Look", "A box.")).unwrap();
        registry
            .register(ToolDescriptor::attempt_with_grant("box_try", "Try", "box", "Key", "[LOOT] Key"))
            .unwrap();
        registry.register(ToolDescriptor::open("door_push", "Push", "door", "Behind the door: a note.")).unwrap();
        registry.register(ToolDescriptor::noise("box_kick_dust", "A generic interaction.", "Nothing happens.")).unwrap();
        registry
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = registry();
        let err = registry.register(ToolDescriptor::query("box_look", "Other", "Other")).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("box_look".into()));

        let mut graph = graph();
        assert_eq!(registry.dispatch("box_look", &[], &mut graph).unwrap(), "A box.");
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_not_found_mutates_nothing() {
        let registry = registry();
        let mut graph = graph();
        let err = registry.dispatch("box_open", &args(&["12"]), &mut graph).unwrap_err();
        assert_eq!(err, RegistryError::NotFound("box_open".into()));
        assert_eq!(graph.solved_count(), 0);
        assert!(graph.inventory().is_empty());
    }

    #[test]
    fn test_attempt_grants_once() {
        let registry = registry();
        let mut graph = graph();

        let text = registry.dispatch("box_try", &args(&["12"]), &mut graph).unwrap();
        assert!(text.starts_with("SUCCESS!"));
        assert!(text.ends_with("\n[LOOT] Key"));

        let again = registry.dispatch("box_try", &args(&["12"]), &mut graph).unwrap();
        assert_eq!(again, "The Box is already solved.");
        assert_eq!(graph.inventory().len(), 1);
    }

    #[test]
    fn test_attempt_without_argument_is_wrong() {
        let registry = registry();
        let mut graph = graph();
        let text = registry.dispatch("box_try", &[], &mut graph).unwrap();
        assert!(text.starts_with("FAILURE."));
        assert!(!graph.is_solved("box"));
    }

    #[test]
    fn test_open_is_gated() {
        let registry = registry();
        let mut graph = graph();

        let blocked = registry.dispatch("door_push", &[], &mut graph).unwrap();
        assert_eq!(blocked, "Action failed: The Box must be solved first.");
        assert!(!graph.is_solved("door"));

        registry.dispatch("box_try", &args(&["12"]), &mut graph).unwrap();
        let opened = registry.dispatch("door_push", &[], &mut graph).unwrap();
        assert_eq!(opened, "Behind the door: a note.");
        assert!(graph.is_solved("door"));

        // Reading again still reveals the text
        let again = registry.dispatch("door_push", &[], &mut graph).unwrap();
        assert_eq!(again, "Behind the door: a note.");
    }

    #[test]
    fn test_noise_is_inert() {
        let registry = registry();
        let mut graph = graph();
        let text = registry.dispatch("box_kick_dust", &args(&["12"]), &mut graph).unwrap();
        assert_eq!(text, "Nothing happens.");
        assert_eq!(graph.solved_count(), 0);
        assert_eq!(registry.noise_count(), 1);
    }

    #[test]
    fn test_catalog_keeps_registration_order() {
        let registry = registry();
        assert_eq!(registry.names(), vec!["box_look", "box_try", "door_push", "box_kick_dust"]);
    }
}
