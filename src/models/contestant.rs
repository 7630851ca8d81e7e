//! Contestant (gladiator) data structure.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A gladiator taking part in the gauntlet.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Contestant {
    /// Unique name; doubles as the contestant's identity.
    pub name: String,
    /// Image shown for this contestant. Not interpreted by the tournament.
    pub image: PathBuf,
    pub wins: u32,
    pub losses: u32,
}

impl Contestant {
    /// Create a new contestant with a clean record.
    pub fn new(name: impl Into<String>, image: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            wins: 0,
            losses: 0,
        }
    }

    pub fn image(&self) -> &Path {
        &self.image
    }

    /// Record a win for this contestant.
    pub fn add_win(&mut self) {
        self.wins += 1;
    }

    /// Record a loss for this contestant.
    pub fn add_loss(&mut self) {
        self.losses += 1;
    }

    /// Short record in the form `3W/1L`.
    pub fn record(&self) -> String {
        format!("{}W/{}L", self.wins, self.losses)
    }
}
