//! Team data: identity, roster (up to 2 players), and cumulative counters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in matches and lookups).
pub type TeamId = Uuid;

/// Roster size limit: teams play in pairs.
pub const MAX_PLAYERS_PER_TEAM: usize = 2;

/// A registered team with its players and running score totals.
///
/// Win points for the soccer-style ranking are never stored here; they are
/// derived from match history by the ranking calculator.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Unique team name (caller-trimmed).
    pub name: String,
    /// Ordered player names, at most [`MAX_PLAYERS_PER_TEAM`], unique per team.
    pub players: Vec<String>,
    pub matches_played: u32,
    pub points_for: u32,
    pub points_against: u32,
}

impl Team {
    /// Create a new team with the given name, empty roster, zero counters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            players: Vec::new(),
            matches_played: 0,
            points_for: 0,
            points_against: 0,
        }
    }

    /// Add a player to the roster. Fails if the roster is full or the name
    /// is already on this team.
    pub fn add_player(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.players.len() >= MAX_PLAYERS_PER_TEAM {
            return false;
        }
        if self.players.iter().any(|p| p == &name) {
            return false;
        }
        self.players.push(name);
        true
    }

    /// Remove a player by name. Fails if the player is not on the roster.
    pub fn remove_player(&mut self, name: &str) -> bool {
        match self.players.iter().position(|p| p == name) {
            Some(idx) => {
                self.players.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Points scored minus points conceded. Signed: a losing team goes negative.
    pub fn point_difference(&self) -> i64 {
        self.points_for as i64 - self.points_against as i64
    }

    /// Zero all counters (tournament reset). Roster and identity survive.
    pub fn reset_counters(&mut self) {
        self.matches_played = 0;
        self.points_for = 0;
        self.points_against = 0;
    }
}
