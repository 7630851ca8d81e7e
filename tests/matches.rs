//! Integration tests for the matchup lifecycle: pairing, resolution and elimination.

use gauntlet::{
    create_matchup, create_matchup_with_rng, resolve_matchup, Contestant, Tournament,
    TournamentError, TournamentStatus,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn tournament_with(names: &[&str], chances: u32) -> Tournament {
    let contestants = names
        .iter()
        .map(|n| Contestant::new(*n, format!("img/{n}.png")))
        .collect();
    Tournament::with_contestants(contestants, chances).unwrap()
}

fn tournament_with_contestants(n: usize, chances: u32) -> Tournament {
    let names: Vec<String> = (0..n).map(|i| format!("G{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    tournament_with(&refs, chances)
}

/// Create a matchup and return its contestants' names.
fn pair(t: &mut Tournament) -> [String; 2] {
    create_matchup(t).unwrap().contestants.clone()
}

#[test]
fn create_requires_two_active_contestants() {
    for n in [0, 1] {
        let mut t = tournament_with_contestants(n, 1);
        assert!(matches!(
            create_matchup(&mut t),
            Err(TournamentError::InsufficientParticipants)
        ));
        assert_eq!(t.status(), TournamentStatus::NotStarted);
    }
}

#[test]
fn create_picks_two_distinct_active_contestants() {
    let mut t = tournament_with_contestants(6, 1);
    let mut rng = StdRng::seed_from_u64(7);
    let m = create_matchup_with_rng(&mut t, &mut rng).unwrap();
    let [a, b] = m.contestants.clone();
    assert_ne!(a, b);
    assert!(t.is_active(&a));
    assert!(t.is_active(&b));
    assert_eq!(t.status(), TournamentStatus::InProgress);
    assert!(t.current_matchup().is_some());
}

#[test]
fn create_while_pending_is_rejected() {
    let mut t = tournament_with_contestants(3, 1);
    let before = pair(&mut t);
    assert!(matches!(
        create_matchup(&mut t),
        Err(TournamentError::AlreadyInProgress)
    ));
    assert_eq!(t.current_matchup().unwrap().contestants, before);
}

#[test]
fn resolve_without_matchup_fails() {
    let mut t = tournament_with(&["A", "B"], 1);
    assert_eq!(
        resolve_matchup(&mut t, "A"),
        Err(TournamentError::NoActiveMatchup)
    );
}

#[test]
fn resolve_with_outsider_fails_and_keeps_matchup() {
    let mut t = tournament_with(&["A", "B", "C"], 1);
    let [a, b] = pair(&mut t);
    let outsider = ["A", "B", "C"]
        .into_iter()
        .find(|n| *n != a && *n != b)
        .unwrap();
    assert_eq!(
        resolve_matchup(&mut t, outsider),
        Err(TournamentError::NotAParticipant(outsider.to_string()))
    );
    assert_eq!(
        resolve_matchup(&mut t, "Nobody"),
        Err(TournamentError::NotAParticipant("Nobody".to_string()))
    );
    assert!(t.current_matchup().is_some());
    assert!(t.history().is_empty());
}

#[test]
fn resolve_updates_tallies_and_history() {
    let mut t = tournament_with(&["A", "B", "C"], 2);
    let [a, b] = pair(&mut t);
    let outcome = resolve_matchup(&mut t, &a).unwrap();

    assert_eq!(outcome.winner, a);
    assert_eq!(outcome.loser, b);
    assert!(!outcome.loser_eliminated);
    assert_eq!(t.contestant(&a).unwrap().wins, 1);
    assert_eq!(t.contestant(&a).unwrap().losses, 0);
    assert_eq!(t.contestant(&b).unwrap().wins, 0);
    assert_eq!(t.contestant(&b).unwrap().losses, 1);
    assert!(t.current_matchup().is_none());

    let resolved = &t.history()[0];
    assert_eq!(resolved.winner.as_deref(), Some(a.as_str()));
    assert!(resolved.resolved_at.is_some());
}

#[test]
fn two_chances_survive_first_loss() {
    let mut t = tournament_with(&["A", "B"], 2);
    let [a, b] = pair(&mut t);
    resolve_matchup(&mut t, &a).unwrap();

    // One loss with two chances: still active and drawable.
    assert!(t.is_active(&b));
    assert_eq!(t.status(), TournamentStatus::InProgress);
    let next = pair(&mut t);
    assert!(next.contains(&b));

    let outcome = resolve_matchup(&mut t, &a).unwrap();
    assert!(outcome.loser_eliminated);
    assert!(!t.is_active(&b));
    assert_eq!(t.eliminated()[0].name, b);
    assert_eq!(t.status(), TournamentStatus::Complete);
}

#[test]
fn three_contestant_scenario_with_one_chance() {
    let mut t = tournament_with(&["A", "B", "C"], 1);

    // Drive whatever pairing comes up so that the first loser is eliminated first.
    let [x, y] = pair(&mut t);
    resolve_matchup(&mut t, &x).unwrap();
    assert!(!t.is_active(&y));
    assert_eq!(t.remaining(), 2);
    assert_eq!(t.status(), TournamentStatus::InProgress);

    // The first winner must now face the last contestant and lose.
    let next = pair(&mut t);
    assert!(next.contains(&x));
    let z = next.iter().find(|n| **n != x).unwrap().clone();
    let outcome = resolve_matchup(&mut t, &z).unwrap();
    assert_eq!(outcome.loser, x);
    assert!(outcome.loser_eliminated);
    assert_eq!(outcome.status, TournamentStatus::Complete);
    assert_eq!(t.champion().unwrap().name, z);

    let tally = |name: &str| {
        let c = t.contestant(name).unwrap();
        (c.wins, c.losses)
    };
    assert_eq!(tally(&z), (1, 0));
    assert_eq!(tally(&x), (1, 1));
    assert_eq!(tally(&y), (0, 1));

    let order: Vec<&str> = t.eliminated().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(order, vec![y.as_str(), x.as_str()]);
    assert_eq!(t.history().len(), 2);
}

#[test]
fn complete_tournament_is_terminal() {
    let mut t = tournament_with(&["A", "B"], 1);
    let [a, _] = pair(&mut t);
    resolve_matchup(&mut t, &a).unwrap();
    assert!(t.is_done());
    assert!(matches!(
        create_matchup(&mut t),
        Err(TournamentError::TerminalState)
    ));
    assert_eq!(
        resolve_matchup(&mut t, &a),
        Err(TournamentError::TerminalState)
    );
}

#[test]
fn completion_check_is_idempotent() {
    let mut t = tournament_with(&["A", "B", "C"], 1);
    let [a, _] = pair(&mut t);
    resolve_matchup(&mut t, &a).unwrap();
    let first = t.refresh_status();
    for _ in 0..5 {
        assert_eq!(t.refresh_status(), first);
        assert_eq!(t.is_done(), first == TournamentStatus::Complete);
    }
}

#[test]
fn contestants_cannot_join_after_start() {
    let mut t = tournament_with(&["A", "B"], 1);
    pair(&mut t);
    assert_eq!(
        t.add_contestant(Contestant::new("C", "C.png")),
        Err(TournamentError::InvalidState)
    );
    assert_eq!(t.set_chances(3), Err(TournamentError::InvalidState));
}

#[test]
fn random_play_always_terminates() {
    let mut rng = StdRng::seed_from_u64(42);
    for (n, chances) in [(2, 1), (5, 1), (8, 2), (13, 3)] {
        let mut t = tournament_with_contestants(n, chances);
        let mut rounds = 0;
        while !t.is_done() {
            let [a, b] = create_matchup_with_rng(&mut t, &mut rng)
                .unwrap()
                .contestants
                .clone();
            let winner = if rounds % 2 == 0 { a } else { b };
            resolve_matchup(&mut t, &winner).unwrap();
            rounds += 1;
            // Every round adds one loss; n*chances losses is more than enough.
            assert!(rounds <= n * chances as usize);
        }

        assert_eq!(t.status(), TournamentStatus::Complete);
        assert_eq!(t.remaining(), 1);
        assert_eq!(t.eliminated().len(), n - 1);
        assert!(t.eliminated().iter().all(|c| c.losses == chances));
        assert!(t.active()[0].losses < chances);
        assert_eq!(t.history().len(), rounds);

        let wins: u32 = t.active().iter().chain(t.eliminated()).map(|c| c.wins).sum();
        let losses: u32 = t.active().iter().chain(t.eliminated()).map(|c| c.losses).sum();
        assert_eq!(wins as usize, rounds);
        assert_eq!(losses as usize, rounds);
    }
}
