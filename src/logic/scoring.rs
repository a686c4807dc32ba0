//! Score recording and correction, with cumulative team counter updates.

use crate::models::{MatchId, Score, TeamId, Tournament, TournamentError};
use chrono::Utc;

/// Record the score of an unplayed match and update both teams' counters.
///
/// `score1` counts for the match's first team, `score2` for the second.
/// Fails with `AlreadyScored` if the match already has a result; use
/// [`correct_score`] for that. All checks run before any mutation, so a
/// failed call leaves the tournament untouched.
pub fn record_score(
    tournament: &mut Tournament,
    match_id: MatchId,
    score1: u32,
    score2: u32,
) -> Result<(), TournamentError> {
    let m = tournament
        .matches
        .iter()
        .find(|m| m.id == match_id)
        .ok_or(TournamentError::MatchNotFound)?;
    if m.is_played() {
        return Err(TournamentError::AlreadyScored);
    }
    let (team1, team2) = (m.team1, m.team2);
    let (i1, i2) = team_indices(tournament, team1, team2)?;

    let m = tournament
        .matches
        .iter_mut()
        .find(|m| m.id == match_id)
        .ok_or(TournamentError::MatchNotFound)?;
    m.score = Some(Score {
        team1: score1,
        team2: score2,
    });
    m.played_at = Some(Utc::now());

    let t1 = &mut tournament.teams[i1];
    t1.matches_played += 1;
    t1.points_for += score1;
    t1.points_against += score2;
    let t2 = &mut tournament.teams[i2];
    t2.matches_played += 1;
    t2.points_for += score2;
    t2.points_against += score1;
    Ok(())
}

/// Correct the score of an already-played, still-open match.
///
/// Applies the delta against the previous score to both teams' point
/// counters instead of re-deriving them; `matches_played` is unchanged.
/// Re-applying an identical correction computes zero deltas and is a no-op.
pub fn correct_score(
    tournament: &mut Tournament,
    match_id: MatchId,
    score1: u32,
    score2: u32,
) -> Result<(), TournamentError> {
    let m = tournament
        .matches
        .iter()
        .find(|m| m.id == match_id)
        .ok_or(TournamentError::MatchNotFound)?;
    if m.closed {
        return Err(TournamentError::MatchClosed);
    }
    let old = m.score.ok_or(TournamentError::NotYetScored)?;
    let (team1, team2) = (m.team1, m.team2);
    let (i1, i2) = team_indices(tournament, team1, team2)?;

    let d1 = score1 as i64 - old.team1 as i64;
    let d2 = score2 as i64 - old.team2 as i64;

    let m = tournament
        .matches
        .iter_mut()
        .find(|m| m.id == match_id)
        .ok_or(TournamentError::MatchNotFound)?;
    m.score = Some(Score {
        team1: score1,
        team2: score2,
    });

    let t1 = &mut tournament.teams[i1];
    t1.points_for = (t1.points_for as i64 + d1) as u32;
    t1.points_against = (t1.points_against as i64 + d2) as u32;
    let t2 = &mut tournament.teams[i2];
    t2.points_for = (t2.points_for as i64 + d2) as u32;
    t2.points_against = (t2.points_against as i64 + d1) as u32;
    Ok(())
}

/// Indices of both teams in the registry, checked before any mutation.
fn team_indices(
    tournament: &Tournament,
    team1: TeamId,
    team2: TeamId,
) -> Result<(usize, usize), TournamentError> {
    let i1 = tournament
        .teams
        .iter()
        .position(|t| t.id == team1)
        .ok_or(TournamentError::TeamNotFound)?;
    let i2 = tournament
        .teams
        .iter()
        .position(|t| t.id == team2)
        .ok_or(TournamentError::TeamNotFound)?;
    Ok((i1, i2))
}
