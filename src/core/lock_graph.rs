//! Lock graph: prerequisite gating and answer matching
//!
//! Attempt order:
//! - already solved → AlreadySolved (candidate ignored)
//! - any prerequisite unsolved → PrerequisiteUnmet (first in declared order)
//! - candidate == answer, byte-for-byte → Accepted (solved flips once)
//! - otherwise → WrongAnswer
//!
//! No normalization of the candidate and no retry limit.

use std::collections::HashMap;

use tracing::info;

use crate::types::{AttemptOutcome, GraphError, Inventory, LockNode, LockSnapshot};
use crate::TERMINAL_LOCK;

/// DAG of locks plus the inventory their solutions grant into
#[derive(Debug, Clone)]
pub struct LockGraph {
    locks: HashMap<String, LockNode>,
    /// Declaration order, for stable snapshots
    order: Vec<String>,
    inventory: Inventory,
    terminal: String,
}

impl LockGraph {
    /// Build a graph, rejecting duplicate ids, dangling prerequisites and cycles.
    /// The terminal lock defaults to `vault`.
    pub fn new(nodes: Vec<LockNode>) -> Result<Self, GraphError> {
        let mut locks = HashMap::with_capacity(nodes.len());
        let mut order = Vec::with_capacity(nodes.len());

        for node in nodes {
            if locks.contains_key(&node.id) {
                return Err(GraphError::DuplicateLock(node.id));
            }
            order.push(node.id.clone());
            locks.insert(node.id.clone(), node);
        }

        for id in &order {
            for prerequisite in &locks[id].prerequisites {
                if !locks.contains_key(prerequisite) {
                    return Err(GraphError::UnknownPrerequisite {
                        lock: id.clone(),
                        prerequisite: prerequisite.clone(),
                    });
                }
            }
        }

        let graph = Self {
            locks,
            order,
            inventory: Inventory::new(),
            terminal: TERMINAL_LOCK.to_string(),
        };
        graph.check_acyclic()?;
        Ok(graph)
    }

    /// Override which lock ends the session
    pub fn with_terminal(mut self, id: impl Into<String>) -> Self {
        self.terminal = id.into();
        self
    }

    /// Depth-first search with three colors
    fn check_acyclic(&self) -> Result<(), GraphError> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        fn visit<'a>(
            graph: &'a LockGraph,
            id: &'a str,
            marks: &mut HashMap<&'a str, Mark>,
        ) -> Result<(), GraphError> {
            match marks.get(id).copied().unwrap_or(Mark::Unvisited) {
                Mark::Done => return Ok(()),
                Mark::InProgress => return Err(GraphError::Cycle(id.to_string())),
                Mark::Unvisited => {}
            }
            marks.insert(id, Mark::InProgress);
            for prerequisite in &graph.locks[id].prerequisites {
                visit(graph, prerequisite, marks)?;
            }
            marks.insert(id, Mark::Done);
            Ok(())
        }

        let mut marks = HashMap::with_capacity(self.order.len());
        for id in &self.order {
            visit(self, id, &mut marks)?;
        }
        Ok(())
    }

    /// True iff every prerequisite of `id` is solved. Unknown ids are never unlocked.
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.locks.get(id).is_some_and(|lock| self.first_unmet(lock).is_none())
    }

    fn first_unmet<'a>(&'a self, lock: &'a LockNode) -> Option<&'a LockNode> {
        lock.prerequisites
            .iter()
            .map(|prerequisite| &self.locks[prerequisite])
            .find(|prerequisite| !prerequisite.solved)
    }

    /// Attempt a lock with a candidate answer
    pub fn attempt(&mut self, id: &str, candidate: &str) -> AttemptOutcome {
        let Some(lock) = self.locks.get(id) else {
            return AttemptOutcome::UnknownLock;
        };

        if lock.solved {
            return AttemptOutcome::AlreadySolved { lock: lock.name.clone() };
        }

        if let Some(blocking) = self.first_unmet(lock) {
            return AttemptOutcome::PrerequisiteUnmet { blocking: blocking.name.clone() };
        }

        if candidate != lock.answer {
            return AttemptOutcome::WrongAnswer {
                lock: lock.name.clone(),
                candidate: candidate.to_string(),
            };
        }

        let Some(lock) = self.locks.get_mut(id) else {
            return AttemptOutcome::UnknownLock;
        };
        lock.solved = true;
        info!(lock = %lock.id, "lock solved");
        AttemptOutcome::Accepted { lock: lock.name.clone() }
    }

    /// Canonical answer of a lock, for tools that open a lock on their own
    pub fn answer(&self, id: &str) -> Option<&str> {
        self.locks.get(id).map(|lock| lock.answer.as_str())
    }

    /// Insert an item into the inventory; false if already held
    pub fn grant(&mut self, item: &str) -> bool {
        let added = self.inventory.insert(item);
        if added {
            info!(item, "item granted");
        }
        added
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn get(&self, id: &str) -> Option<&LockNode> {
        self.locks.get(id)
    }

    pub fn is_solved(&self, id: &str) -> bool {
        self.locks.get(id).is_some_and(|lock| lock.solved)
    }

    /// Locks in declaration order
    pub fn locks(&self) -> impl Iterator<Item = &LockNode> {
        self.order.iter().map(|id| &self.locks[id])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn solved_count(&self) -> usize {
        self.locks.values().filter(|lock| lock.solved).count()
    }

    /// Has the terminal lock been solved?
    pub fn is_complete(&self) -> bool {
        self.is_solved(&self.terminal)
    }

    /// Read-only view for rendering, answers omitted
    pub fn snapshot(&self) -> Vec<LockSnapshot> {
        self.locks()
            .map(|lock| LockSnapshot {
                id: lock.id.clone(),
                name: lock.name.clone(),
                solved: lock.solved,
                unlocked: self.first_unmet(lock).is_none(),
                prerequisites: lock.prerequisites.clone(),
                description: lock.description.clone(),
            })
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> LockGraph {
        LockGraph::new(vec![
            LockNode::new("a", "Lock A", "1", ""),
            LockNode::new("b", "Lock B", "2", "").requires(["a"]),
            LockNode::new("c", "Lock C", "3", "").requires(["a", "b"]),
        ])
        .unwrap()
        .with_terminal("c")
    }

    #[test]
    fn test_root_is_unlocked() {
        let graph = chain();
        assert!(graph.is_unlocked("a"));
        assert!(!graph.is_unlocked("b"));
        assert!(!graph.is_unlocked("missing"));
    }

    #[test]
    fn test_accept_flips_once() {
        let mut graph = chain();
        assert!(graph.attempt("a", "1").is_accepted());
        assert!(graph.is_solved("a"));
        assert_eq!(
            graph.attempt("a", "1"),
            AttemptOutcome::AlreadySolved { lock: "Lock A".into() }
        );
    }

    #[test]
    fn test_already_solved_ignores_candidate() {
        let mut graph = chain();
        graph.attempt("a", "1");
        assert_eq!(
            graph.attempt("a", "garbage"),
            AttemptOutcome::AlreadySolved { lock: "Lock A".into() }
        );
    }

    #[test]
    fn test_first_unmet_in_declared_order() {
        let mut graph = chain();
        assert_eq!(
            graph.attempt("c", "3"),
            AttemptOutcome::PrerequisiteUnmet { blocking: "Lock A".into() }
        );
        graph.attempt("a", "1");
        assert_eq!(
            graph.attempt("c", "3"),
            AttemptOutcome::PrerequisiteUnmet { blocking: "Lock B".into() }
        );
        assert!(!graph.is_solved("c"));
    }

    #[test]
    fn test_exact_match_only() {
        let mut graph = chain();
        for candidate in [" 1", "1 ", "01", ""] {
            assert_eq!(graph.attempt("a", candidate).code(), "WRONG_ANSWER");
        }
        assert!(!graph.is_solved("a"));
    }

    #[test]
    fn test_case_sensitive() {
        let mut graph = LockGraph::new(vec![LockNode::new("lib", "Library", "OPEN", "")]).unwrap();
        assert_eq!(graph.attempt("lib", "open").code(), "WRONG_ANSWER");
        assert!(graph.attempt("lib", "OPEN").is_accepted());
    }

    #[test]
    fn test_unknown_lock() {
        let mut graph = chain();
        assert_eq!(graph.attempt("zzz", "1"), AttemptOutcome::UnknownLock);
    }

    #[test]
    fn test_terminal_completion() {
        let mut graph = chain();
        graph.attempt("a", "1");
        graph.attempt("b", "2");
        assert!(!graph.is_complete());
        graph.attempt("c", "3");
        assert!(graph.is_complete());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = LockGraph::new(vec![
            LockNode::new("a", "A", "1", ""),
            LockNode::new("a", "A again", "2", ""),
        ])
        .unwrap_err();
        assert_eq!(err, GraphError::DuplicateLock("a".into()));
    }

    #[test]
    fn test_rejects_unknown_prerequisite() {
        let err = LockGraph::new(vec![LockNode::new("a", "A", "1", "").requires(["ghost"])]).unwrap_err();
        assert!(matches!(err, GraphError::UnknownPrerequisite { .. }));
    }

    #[test]
    fn test_rejects_cycle() {
        let err = LockGraph::new(vec![
            LockNode::new("a", "A", "1", "").requires(["c"]),
            LockNode::new("b", "B", "2", "").requires(["a"]),
            LockNode::new("c", "C", "3", "").requires(["b"]),
        ])
        .unwrap_err();
        assert!(matches!(err, GraphError::Cycle(_)));
    }

    #[test]
    fn test_self_loop_is_cycle() {
        let err = LockGraph::new(vec![LockNode::new("a", "A", "1", "").requires(["a"])]).unwrap_err();
        assert_eq!(err, GraphError::Cycle("a".into()));
    }

    #[test]
    fn test_snapshot_hides_answers_and_tracks_unlock() {
        let mut graph = chain();
        graph.attempt("a", "1");
        let snapshot = graph.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert!(snapshot[0].solved);
        assert!(snapshot[1].unlocked);
        assert!(!snapshot[2].unlocked);
        assert_eq!(snapshot[2].prerequisites, vec!["a", "b"]);
    }

    #[test]
    fn test_grant_is_idempotent() {
        let mut graph = chain();
        assert!(graph.grant("Bell"));
        assert!(!graph.grant("Bell"));
        assert_eq!(graph.inventory().len(), 1);
    }
}
