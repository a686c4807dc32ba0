//! Tournament: the single active tournament's teams, matches, and settings.

use crate::models::game::{GameMatch, MatchId};
use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Structural change attempted after the first score was recorded.
    AlreadyStarted,
    /// A team with this name already exists (names are unique).
    DuplicateTeamName,
    /// A player with this name is already on the team.
    DuplicatePlayerName,
    /// Team roster is already full (2 players).
    RosterFull,
    /// Team lookup by name failed.
    TeamNotFound,
    /// Player lookup within a team failed.
    PlayerNotFound,
    /// Match lookup by id failed.
    MatchNotFound,
    /// Round generation needs an even number of teams.
    OddTeamCount,
    /// Round generation needs at least 2 teams.
    NotEnoughTeams,
    /// Next round requested while the current round has unscored matches.
    UnplayedMatchesRemain,
    /// Score recording attempted on a match that already has a score.
    AlreadyScored,
    /// Score correction attempted on a match that has no score yet.
    NotYetScored,
    /// Score correction attempted on a closed (superseded) match.
    MatchClosed,
    /// Team removal blocked because the team has scored matches.
    TeamHasHistory,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::AlreadyStarted => write!(f, "Tournament has already started"),
            TournamentError::DuplicateTeamName => write!(f, "A team with this name already exists"),
            TournamentError::DuplicatePlayerName => {
                write!(f, "A player with this name is already on the team")
            }
            TournamentError::RosterFull => write!(f, "Team already has 2 players"),
            TournamentError::TeamNotFound => write!(f, "Team not found"),
            TournamentError::PlayerNotFound => write!(f, "Player not found on this team"),
            TournamentError::MatchNotFound => write!(f, "Match not found"),
            TournamentError::OddTeamCount => write!(f, "Team count must be even"),
            TournamentError::NotEnoughTeams => write!(f, "Need at least 2 teams"),
            TournamentError::UnplayedMatchesRemain => {
                write!(f, "All matches must be scored before the next round")
            }
            TournamentError::AlreadyScored => write!(f, "Match already has a score"),
            TournamentError::NotYetScored => write!(f, "Match has not been scored yet"),
            TournamentError::MatchClosed => write!(f, "Match belongs to a closed round"),
            TournamentError::TeamHasHistory => {
                write!(f, "Team has scored matches and cannot be removed")
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// Comparator used to order teams in the ranking.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingPolicy {
    /// Points scored, then point difference, then fewest points conceded.
    #[default]
    PointsSum,
    /// Derived 3/1/0 win points, then point difference, then points scored.
    SoccerStyle,
}

/// The single active tournament: teams, match ledger, and settings.
///
/// Passed explicitly into the logic functions; the web binary owns exactly
/// one instance behind a lock.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub teams: Vec<Team>,
    pub matches: Vec<GameMatch>,
    pub ranking_policy: RankingPolicy,
    /// When true, round generation avoids rematches where possible.
    pub prevent_duplicate_matches: bool,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}

impl Tournament {
    /// Create an empty tournament with default settings.
    pub fn new() -> Self {
        Self {
            teams: Vec::new(),
            matches: Vec::new(),
            ranking_policy: RankingPolicy::PointsSum,
            prevent_duplicate_matches: false,
        }
    }

    /// Whether any match has been scored. Once true, team registration and
    /// removal are barred until reset.
    pub fn has_started(&self) -> bool {
        self.matches.iter().any(|m| m.is_played())
    }

    /// All teams, sorted by name.
    pub fn teams_by_name(&self) -> Vec<Team> {
        let mut teams = self.teams.clone();
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        teams
    }

    pub fn team_by_id(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    fn team_by_name_mut(&mut self, name: &str) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.name == name)
    }

    pub fn match_by_id(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// Matches without a score, in ledger order.
    pub fn unplayed_matches(&self) -> Vec<GameMatch> {
        self.matches.iter().filter(|m| !m.is_played()).cloned().collect()
    }

    /// Matches with a score, in ledger order.
    pub fn played_matches(&self) -> Vec<GameMatch> {
        self.matches.iter().filter(|m| m.is_played()).cloned().collect()
    }

    /// Register a new team with an empty roster and zero counters.
    pub fn register_team(&mut self, name: impl Into<String>) -> Result<TeamId, TournamentError> {
        if self.has_started() {
            return Err(TournamentError::AlreadyStarted);
        }
        let name = name.into();
        if self.teams.iter().any(|t| t.name == name) {
            return Err(TournamentError::DuplicateTeamName);
        }
        let team = Team::new(name);
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    /// Remove a team by name. Blocked once the team appears in any scored
    /// match; the team's unplayed matches are deleted along with it.
    pub fn remove_team(&mut self, name: &str) -> Result<(), TournamentError> {
        let team_id = self
            .team_by_name(name)
            .map(|t| t.id)
            .ok_or(TournamentError::TeamNotFound)?;
        if self
            .matches
            .iter()
            .any(|m| m.involves(team_id) && m.is_played())
        {
            return Err(TournamentError::TeamHasHistory);
        }
        self.matches.retain(|m| !m.involves(team_id));
        self.teams.retain(|t| t.id != team_id);
        Ok(())
    }

    /// Add a player to a team's roster (at most 2 players per team).
    pub fn add_player(&mut self, team_name: &str, player: &str) -> Result<(), TournamentError> {
        let team = self
            .team_by_name_mut(team_name)
            .ok_or(TournamentError::TeamNotFound)?;
        if team.players.len() >= crate::models::team::MAX_PLAYERS_PER_TEAM {
            return Err(TournamentError::RosterFull);
        }
        if !team.add_player(player) {
            return Err(TournamentError::DuplicatePlayerName);
        }
        Ok(())
    }

    /// Remove a player from a team's roster.
    pub fn remove_player(&mut self, team_name: &str, player: &str) -> Result<(), TournamentError> {
        let team = self
            .team_by_name_mut(team_name)
            .ok_or(TournamentError::TeamNotFound)?;
        if !team.remove_player(player) {
            return Err(TournamentError::PlayerNotFound);
        }
        Ok(())
    }

    pub fn set_ranking_policy(&mut self, policy: RankingPolicy) {
        self.ranking_policy = policy;
    }

    pub fn set_duplicate_prevention(&mut self, prevent: bool) {
        self.prevent_duplicate_matches = prevent;
    }

    /// Reset to the pre-tournament state: all matches deleted, all team
    /// counters zeroed. Teams and rosters survive.
    pub fn reset_tournament(&mut self) {
        self.matches.clear();
        for team in &mut self.teams {
            team.reset_counters();
        }
    }
}
