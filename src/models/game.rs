//! Match (pairing) data: two teams, an optional score, round and table numbers.

use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Final score of a played match. Both sides are always set together:
/// a match is either fully scored or not scored at all.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub team1: u32,
    pub team2: u32,
}

/// A single pairing between two teams within a round.
///
/// `closed` marks matches from rounds that have been superseded; they are
/// immutable history and can no longer be corrected.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub team1: TeamId,
    pub team2: TeamId,
    /// None until the match is played.
    pub score: Option<Score>,
    /// Round this match belongs to (1-based).
    pub round: u32,
    /// Display slot within the round (1-based, stable after generation).
    pub table: u32,
    pub closed: bool,
    /// Set when the score is first recorded.
    pub played_at: Option<DateTime<Utc>>,
}

impl GameMatch {
    pub fn new(team1: TeamId, team2: TeamId, round: u32, table: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            team1,
            team2,
            score: None,
            round,
            table,
            closed: false,
            played_at: None,
        }
    }

    /// Whether a score has been recorded.
    pub fn is_played(&self) -> bool {
        self.score.is_some()
    }

    /// Whether this match involves the given team.
    pub fn involves(&self, team: TeamId) -> bool {
        self.team1 == team || self.team2 == team
    }

    /// Whether this match pairs exactly these two teams, in either order.
    pub fn pairs(&self, a: TeamId, b: TeamId) -> bool {
        (self.team1 == a && self.team2 == b) || (self.team1 == b && self.team2 == a)
    }
}
