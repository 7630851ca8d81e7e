//! Gauntlet business logic: loading, matchups, results.

mod export;
mod loader;
mod matches;

pub use export::{
    export_results, final_standings, read_results, write_results, ExportError, ResultRow,
};
pub use loader::{load_contestants, load_tournament, LoadError};
pub use matches::{create_matchup, create_matchup_with_rng, resolve_matchup, MatchOutcome};
