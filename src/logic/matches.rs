//! Matchup lifecycle: random pairing and result processing.

use crate::models::{Matchup, Tournament, TournamentError, TournamentStatus};
use rand::seq::index;
use rand::Rng;

/// What happened when a matchup was resolved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchOutcome {
    pub winner: String,
    pub loser: String,
    /// True if this loss pushed the loser out of the gauntlet.
    pub loser_eliminated: bool,
    pub status: TournamentStatus,
}

/// Create the next matchup from two random active contestants.
pub fn create_matchup(tournament: &mut Tournament) -> Result<&Matchup, TournamentError> {
    create_matchup_with_rng(tournament, &mut rand::thread_rng())
}

/// Create the next matchup using the given rng.
///
/// Both contestants are drawn uniformly without replacement from the active pool.
/// Rematches are not avoided.
pub fn create_matchup_with_rng<'t, R: Rng + ?Sized>(
    tournament: &'t mut Tournament,
    rng: &mut R,
) -> Result<&'t Matchup, TournamentError> {
    if tournament.status == TournamentStatus::Complete {
        return Err(TournamentError::TerminalState);
    }
    if tournament.current.is_some() {
        return Err(TournamentError::AlreadyInProgress);
    }
    if tournament.active.len() < 2 {
        return Err(TournamentError::InsufficientParticipants);
    }

    let picked = index::sample(rng, tournament.active.len(), 2);
    let first = &tournament.active[picked.index(0)].name;
    let second = &tournament.active[picked.index(1)].name;
    let matchup = Matchup::new(first.clone(), second.clone());
    log::debug!(
        "Matchup {} created: {} vs {}",
        matchup.id,
        matchup.contestants[0],
        matchup.contestants[1]
    );

    if tournament.status == TournamentStatus::NotStarted {
        log::info!(
            "Gauntlet {} started with {} contestants ({} chance(s) each)",
            tournament.id,
            tournament.active.len(),
            tournament.chances
        );
    }
    tournament.status = TournamentStatus::InProgress;
    let matchup: &Matchup = tournament.current.insert(matchup);
    Ok(matchup)
}

/// Declare `winner` the victor of the current matchup.
///
/// The winner gains a win; the other contestant gains a loss and is eliminated once
/// its losses reach the tournament's chances. The matchup moves to history.
pub fn resolve_matchup(
    tournament: &mut Tournament,
    winner: &str,
) -> Result<MatchOutcome, TournamentError> {
    if tournament.status == TournamentStatus::Complete {
        return Err(TournamentError::TerminalState);
    }
    let matchup = tournament
        .current
        .as_ref()
        .ok_or(TournamentError::NoActiveMatchup)?;
    let loser = matchup
        .opponent_of(winner)
        .ok_or_else(|| TournamentError::NotAParticipant(winner.to_string()))?
        .to_string();

    let winner_idx = tournament
        .active_index(winner)
        .ok_or_else(|| TournamentError::UnknownIdentity(winner.to_string()))?;
    let loser_idx = tournament
        .active_index(&loser)
        .ok_or_else(|| TournamentError::UnknownIdentity(loser.clone()))?;

    tournament.active[winner_idx].add_win();
    tournament.active[loser_idx].add_loss();
    let loser_eliminated = tournament.active[loser_idx].losses >= tournament.chances;
    if loser_eliminated {
        tournament.eliminate_at(loser_idx);
        log::info!("{} eliminated ({} remaining)", loser, tournament.active.len());
    }

    if let Some(mut matchup) = tournament.current.take() {
        matchup.set_winner(winner);
        log::debug!("Matchup {} resolved: {} beat {}", matchup.id, winner, loser);
        tournament.history.push(matchup);
    }

    let status = tournament.refresh_status();
    if status == TournamentStatus::Complete {
        log::info!(
            "Gauntlet {} complete after {} matchups: {} wins",
            tournament.id,
            tournament.history.len(),
            winner
        );
    }

    Ok(MatchOutcome {
        winner: winner.to_string(),
        loser,
        loser_eliminated,
        status,
    })
}
