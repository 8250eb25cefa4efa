//! Outcomes of a lock attempt
//!
//! Every outcome is a normal value; the engine turns it into a
//! result line and nothing escapes as a fault.

use serde::{Deserialize, Serialize};

/// Result of `LockGraph::attempt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttemptOutcome {
    /// Candidate matched; the lock flipped to solved
    Accepted { lock: String },
    /// Candidate did not match; nothing changed
    WrongAnswer { lock: String, candidate: String },
    /// First unsolved prerequisite in declared order
    PrerequisiteUnmet { blocking: String },
    /// Lock was solved earlier; candidate ignored
    AlreadySolved { lock: String },
    /// No lock with that id
    UnknownLock,
}

impl AttemptOutcome {
    /// Short code for logging
    pub fn code(&self) -> &'static str {
        match self {
            Self::Accepted { .. } => "ACCEPTED",
            Self::WrongAnswer { .. } => "WRONG_ANSWER",
            Self::PrerequisiteUnmet { .. } => "PREREQUISITE_UNMET",
            Self::AlreadySolved { .. } => "ALREADY_SOLVED",
            Self::UnknownLock => "UNKNOWN_LOCK",
        }
    }

    /// Did this attempt flip a lock?
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Human-readable result text, as shown to the agent
    pub fn to_result_text(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted { lock } => {
                write!(f, "SUCCESS! The {} unlocks with a satisfying click.", lock)
            }
            Self::WrongAnswer { lock, candidate } => {
                write!(f, "FAILURE. The {} does not respond to \"{}\".", lock, candidate)
            }
            Self::PrerequisiteUnmet { blocking } => {
                write!(f, "Action failed: The {} must be solved first.", blocking)
            }
            Self::AlreadySolved { lock } => write!(f, "The {} is already solved.", lock),
            Self::UnknownLock => write!(f, "Error: Unknown lock."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_texts() {
        let accepted = AttemptOutcome::Accepted { lock: "Victorian Lock".into() };
        assert!(accepted.to_result_text().starts_with("SUCCESS!"));
        assert!(accepted.is_accepted());

        let wrong = AttemptOutcome::WrongAnswer {
            lock: "Chinese Puzzle Box".into(),
            candidate: "0000".into(),
        };
        assert_eq!(
            wrong.to_result_text(),
            "FAILURE. The Chinese Puzzle Box does not respond to \"0000\"."
        );

        let blocked = AttemptOutcome::PrerequisiteUnmet { blocking: "Victorian Lock".into() };
        assert_eq!(blocked.code(), "PREREQUISITE_UNMET");
        assert!(blocked.to_result_text().contains("Victorian Lock"));
    }
}
