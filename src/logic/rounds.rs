//! Round scheduling: first-round shuffle, rank-based next rounds, and the
//! duplicate-avoiding pairing variant.

use crate::logic::ranking::ranking;
use crate::models::{GameMatch, TeamId, Tournament, TournamentError};
use rand::seq::SliceRandom;

/// Current round index, derived from the least-advanced team:
/// `1 + min(matches_played)`. Returns 1 when no teams are registered.
pub fn current_round(tournament: &Tournament) -> u32 {
    1 + tournament
        .teams
        .iter()
        .map(|t| t.matches_played)
        .min()
        .unwrap_or(0)
}

/// Start or advance the tournament: generates the first round when the
/// ledger is empty, the next round otherwise.
pub fn start_round(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.matches.is_empty() {
        generate_first_round(tournament)
    } else {
        generate_next_round(tournament)
    }
}

/// Generate round 1: teams shuffled uniformly at random and paired
/// consecutively, tables numbered 1..N/2 in pairing order.
pub fn generate_first_round(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if !tournament.matches.is_empty() {
        return Err(TournamentError::AlreadyStarted);
    }
    check_team_count(tournament)?;

    let mut ids: Vec<TeamId> = tournament.teams.iter().map(|t| t.id).collect();
    ids.shuffle(&mut rand::thread_rng());

    let matches: Vec<GameMatch> = ids
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| GameMatch::new(pair[0], pair[1], 1, i as u32 + 1))
        .collect();

    log::info!("Generated round 1 with {} matches", matches.len());
    tournament.matches = matches;
    Ok(())
}

/// Generate the next round from the current ranking.
///
/// Requires every existing match to be scored; the finished round's matches
/// are then closed and the new pairings appended. Teams are paired
/// consecutively by rank, or via greedy no-repeat matching when
/// `prevent_duplicate_matches` is set. The pairing is computed in full
/// before tournament state changes, so a failing call mutates nothing.
pub fn generate_next_round(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.matches.iter().any(|m| !m.is_played()) {
        return Err(TournamentError::UnplayedMatchesRemain);
    }
    check_team_count(tournament)?;

    let ordered: Vec<TeamId> = ranking(tournament).iter().map(|t| t.id).collect();
    let pairs = if tournament.prevent_duplicate_matches {
        pair_avoiding_rematches(tournament, &ordered)
    } else {
        ordered.chunks_exact(2).map(|p| (p[0], p[1])).collect()
    };

    let round = next_round_number(tournament);
    let matches: Vec<GameMatch> = pairs
        .into_iter()
        .enumerate()
        .map(|(i, (a, b))| GameMatch::new(a, b, round, i as u32 + 1))
        .collect();

    for m in &mut tournament.matches {
        m.closed = true;
    }
    log::info!("Generated round {} with {} matches", round, matches.len());
    tournament.matches.extend(matches);
    Ok(())
}

/// Greedy pairing that avoids rematches: repeatedly take the highest-ranked
/// unpaired team and scan the rest in rank order for the first opponent it
/// has never met. When every remaining opponent is a rematch, the next
/// available team is taken anyway, so the round always completes.
fn pair_avoiding_rematches(tournament: &Tournament, ordered: &[TeamId]) -> Vec<(TeamId, TeamId)> {
    let mut remaining: Vec<TeamId> = ordered.to_vec();
    let mut pairs = Vec::with_capacity(remaining.len() / 2);
    while !remaining.is_empty() {
        let first = remaining.remove(0);
        let idx = remaining
            .iter()
            .position(|&candidate| !have_played(tournament, first, candidate))
            .unwrap_or(0);
        let partner = remaining.remove(idx);
        pairs.push((first, partner));
    }
    pairs
}

/// Whether these two teams have ever been paired, in any round,
/// regardless of score or closed state.
fn have_played(tournament: &Tournament, a: TeamId, b: TeamId) -> bool {
    tournament.matches.iter().any(|m| m.pairs(a, b))
}

fn next_round_number(tournament: &Tournament) -> u32 {
    tournament.matches.iter().map(|m| m.round).max().unwrap_or(0) + 1
}

fn check_team_count(tournament: &Tournament) -> Result<(), TournamentError> {
    let n = tournament.teams.len();
    if n < 2 {
        return Err(TournamentError::NotEnoughTeams);
    }
    if n % 2 != 0 {
        return Err(TournamentError::OddTeamCount);
    }
    Ok(())
}
