//! Gauntlet: pairwise elimination tournament library with models and business logic.

pub mod config;
pub mod logic;
pub mod models;

pub use config::{ConfigError, GauntletConfig};
pub use logic::{
    create_matchup, create_matchup_with_rng, export_results, final_standings, load_contestants,
    load_tournament, read_results, resolve_matchup, write_results, ExportError, LoadError,
    MatchOutcome, ResultRow,
};
pub use models::{
    Contestant, Matchup, MatchupId, Tournament, TournamentError, TournamentId, TournamentStatus,
};
