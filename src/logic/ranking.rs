//! Ranking calculator: total order over teams under the active policy.

use crate::models::{RankingPolicy, Team, TeamId, Tournament};
use std::collections::HashMap;

/// Win points a team has earned, derived from its scored matches:
/// 3 for a win, 1 for a tie, 0 for a loss. Nothing is stored; this is
/// recomputed from the ledger every time, so the policy can change
/// mid-tournament without stale totals.
pub fn win_points(tournament: &Tournament, team: TeamId) -> u32 {
    tournament
        .matches
        .iter()
        .filter(|m| m.involves(team))
        .filter_map(|m| m.score.map(|s| (m.team1 == team, s)))
        .map(|(is_team1, s)| {
            let (own, other) = if is_team1 {
                (s.team1, s.team2)
            } else {
                (s.team2, s.team1)
            };
            match own.cmp(&other) {
                std::cmp::Ordering::Greater => 3,
                std::cmp::Ordering::Equal => 1,
                std::cmp::Ordering::Less => 0,
            }
        })
        .sum()
}

/// All teams in ranking order under the tournament's active policy.
///
/// The sort is stable over the name-ordered team list, so ties beyond the
/// policy's keys resolve to name order. Pure: recomputing without
/// intervening mutation yields the identical order.
pub fn ranking(tournament: &Tournament) -> Vec<Team> {
    let mut teams = tournament.teams_by_name();
    match tournament.ranking_policy {
        RankingPolicy::PointsSum => {
            teams.sort_by(|a, b| {
                b.points_for
                    .cmp(&a.points_for)
                    .then_with(|| b.point_difference().cmp(&a.point_difference()))
                    .then_with(|| a.points_against.cmp(&b.points_against))
            });
        }
        RankingPolicy::SoccerStyle => {
            let wins: HashMap<TeamId, u32> = teams
                .iter()
                .map(|t| (t.id, win_points(tournament, t.id)))
                .collect();
            teams.sort_by(|a, b| {
                wins[&b.id]
                    .cmp(&wins[&a.id])
                    .then_with(|| b.point_difference().cmp(&a.point_difference()))
                    .then_with(|| b.points_for.cmp(&a.points_for))
            });
        }
    }
    teams
}
