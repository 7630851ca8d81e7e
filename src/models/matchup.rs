//! A single head-to-head matchup between two contestants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a matchup.
pub type MatchupId = Uuid;

/// Two contestants facing each other, referenced by name.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub id: MatchupId,
    pub contestants: [String; 2],
    /// None until the matchup is resolved.
    pub winner: Option<String>,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Matchup {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            contestants: [first.into(), second.into()],
            winner: None,
            created_at: Utc::now(),
            resolved_at: None,
        }
    }

    /// Whether `name` is one of the two contestants.
    pub fn involves(&self, name: &str) -> bool {
        self.contestants.iter().any(|c| c == name)
    }

    /// The other contestant, if `name` takes part in this matchup.
    pub fn opponent_of(&self, name: &str) -> Option<&str> {
        match &self.contestants {
            [a, b] if a == name => Some(b.as_str()),
            [a, b] if b == name => Some(a.as_str()),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.winner.is_some()
    }

    /// The losing contestant once a winner is recorded.
    pub fn loser(&self) -> Option<&str> {
        self.winner.as_deref().and_then(|w| self.opponent_of(w))
    }

    /// Record the winner. Callers must check `involves` first.
    pub(crate) fn set_winner(&mut self, name: &str) {
        self.winner = Some(name.to_string());
        self.resolved_at = Some(Utc::now());
    }
}
