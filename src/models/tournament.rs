//! Tournament and TournamentStatus.

use crate::models::contestant::Contestant;
use crate::models::matchup::Matchup;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Fewer than two active contestants when a matchup is requested.
    InsufficientParticipants,
    /// The named contestant is not in the current matchup.
    NotAParticipant(String),
    /// Resolve called with no pending matchup.
    NoActiveMatchup,
    /// No contestant with this name, active or eliminated.
    UnknownIdentity(String),
    /// A matchup is already pending; resolve it first.
    AlreadyInProgress,
    /// The tournament is complete; no more matchups.
    TerminalState,
    /// Standings requested before a single contestant remains.
    NotComplete,
    /// A contestant with this name already exists.
    DuplicateName(String),
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Chances must be at least 1.
    InvalidChances,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InsufficientParticipants => {
                write!(f, "Need at least 2 active contestants to create a matchup")
            }
            TournamentError::NotAParticipant(name) => write!(f, "{name:?} is not in this matchup"),
            TournamentError::NoActiveMatchup => write!(f, "No matchup to resolve"),
            TournamentError::UnknownIdentity(name) => write!(f, "{name:?} is not in this gauntlet"),
            TournamentError::AlreadyInProgress => write!(f, "A matchup is already in progress"),
            TournamentError::TerminalState => write!(f, "The gauntlet is already complete"),
            TournamentError::NotComplete => write!(f, "The gauntlet is not complete yet"),
            TournamentError::DuplicateName(name) => {
                write!(f, "A contestant named {name:?} already exists")
            }
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::InvalidChances => write!(f, "Chances must be at least 1"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// No matchup has been created yet.
    #[default]
    NotStarted,
    /// More than one contestant remains.
    InProgress,
    /// Exactly one contestant remains. Terminal.
    Complete,
}

/// Full tournament state: contestants, current matchup, history and status.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Contestants still in the running.
    pub(crate) active: Vec<Contestant>,
    /// Eliminated contestants, in elimination order (oldest first).
    pub(crate) eliminated: Vec<Contestant>,
    /// Losses before a contestant is eliminated.
    pub(crate) chances: u32,
    pub(crate) current: Option<Matchup>,
    /// Resolved matchups, oldest first.
    pub(crate) history: Vec<Matchup>,
    pub(crate) status: TournamentStatus,
}

impl Tournament {
    /// Create an empty tournament. A `chances` of 0 is treated as 1.
    pub fn new(chances: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            active: Vec::new(),
            eliminated: Vec::new(),
            chances: chances.max(1),
            current: None,
            history: Vec::new(),
            status: TournamentStatus::NotStarted,
        }
    }

    /// Create a tournament from loaded contestants. Names must be unique and
    /// `chances` at least 1.
    pub fn with_contestants(
        contestants: Vec<Contestant>,
        chances: u32,
    ) -> Result<Self, TournamentError> {
        if chances == 0 {
            return Err(TournamentError::InvalidChances);
        }
        let mut tournament = Self::new(chances);
        for c in contestants {
            tournament.add_contestant(c)?;
        }
        Ok(tournament)
    }

    /// Add a contestant (only valid before the first matchup).
    pub fn add_contestant(&mut self, contestant: Contestant) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::NotStarted {
            return Err(TournamentError::InvalidState);
        }
        if self.active.iter().any(|c| c.name == contestant.name) {
            return Err(TournamentError::DuplicateName(contestant.name));
        }
        self.active.push(contestant);
        Ok(())
    }

    /// Set losses needed for elimination (only valid before the first matchup).
    pub fn set_chances(&mut self, chances: u32) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::NotStarted {
            return Err(TournamentError::InvalidState);
        }
        if chances == 0 {
            return Err(TournamentError::InvalidChances);
        }
        self.chances = chances;
        Ok(())
    }

    pub fn chances(&self) -> u32 {
        self.chances
    }

    pub fn active(&self) -> &[Contestant] {
        &self.active
    }

    /// Eliminated contestants, oldest elimination first.
    pub fn eliminated(&self) -> &[Contestant] {
        &self.eliminated
    }

    pub fn current_matchup(&self) -> Option<&Matchup> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &[Matchup] {
        &self.history
    }

    /// Number of contestants still in the running.
    pub fn remaining(&self) -> usize {
        self.active.len()
    }

    /// Find a contestant by name in either pool.
    pub fn contestant(&self, name: &str) -> Result<&Contestant, TournamentError> {
        self.active
            .iter()
            .chain(self.eliminated.iter())
            .find(|c| c.name == name)
            .ok_or_else(|| TournamentError::UnknownIdentity(name.to_string()))
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active.iter().any(|c| c.name == name)
    }

    /// The sole remaining contestant once the tournament is complete.
    pub fn champion(&self) -> Option<&Contestant> {
        match self.status {
            TournamentStatus::Complete => self.active.first(),
            _ => None,
        }
    }

    /// Status as of the last refresh.
    pub fn status(&self) -> TournamentStatus {
        self.status
    }

    /// Whether exactly one contestant remains. Does not modify state.
    pub fn is_done(&self) -> bool {
        self.computed_status() == TournamentStatus::Complete
    }

    /// Recompute and store the status from the active pool.
    pub fn refresh_status(&mut self) -> TournamentStatus {
        self.status = self.computed_status();
        self.status
    }

    /// Status derived from the current pools. A tournament that never created
    /// a matchup stays `NotStarted`.
    fn computed_status(&self) -> TournamentStatus {
        if self.current.is_none() && self.history.is_empty() {
            return TournamentStatus::NotStarted;
        }
        if self.active.len() > 1 {
            TournamentStatus::InProgress
        } else {
            TournamentStatus::Complete
        }
    }

    /// Position of an active contestant in the active pool.
    pub(crate) fn active_index(&self, name: &str) -> Option<usize> {
        self.active.iter().position(|c| c.name == name)
    }

    /// Move the active contestant at `idx` to the end of the eliminated list.
    pub(crate) fn eliminate_at(&mut self, idx: usize) {
        let contestant = self.active.remove(idx);
        self.eliminated.push(contestant);
    }
}
