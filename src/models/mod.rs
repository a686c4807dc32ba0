//! Data structures for the tournament: teams, matches, tournament state.

mod game;
mod team;
mod tournament;

pub use game::{GameMatch, MatchId, Score};
pub use team::{Team, TeamId, MAX_PLAYERS_PER_TEAM};
pub use tournament::{RankingPolicy, Tournament, TournamentError};
