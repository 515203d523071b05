//! SessionStatus enum for tracking lifecycle of attendance sessions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an attendance session.
///
/// A session starts Active and transitions to Ended exactly once, either
/// by an explicit end command or lazily when its expiry timestamp passes.
/// Ended is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Active,
    Ended,
}

impl SessionStatus {
    /// Returns true if the session still admits check-ins.
    pub fn is_active(&self) -> bool {
        matches!(self, SessionStatus::Active)
    }

    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - Active -> Ended
    pub fn can_transition_to(&self, target: &SessionStatus) -> bool {
        use SessionStatus::*;
        matches!((self, target), (Active, Ended))
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Active => "Active",
            SessionStatus::Ended => "Ended",
        };
        write!(f, "{}", s)
    }
}
