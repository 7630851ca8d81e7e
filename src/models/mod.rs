//! Data structures for the gauntlet: contestants, matchups, tournament state.

mod contestant;
mod matchup;
mod tournament;

pub use contestant::Contestant;
pub use matchup::{Matchup, MatchupId};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentStatus};
