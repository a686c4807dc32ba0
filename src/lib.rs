//! Swiss-style team tournament web app: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    correct_score, current_round, generate_first_round, generate_next_round, ranking,
    record_score, start_round, win_points,
};
pub use models::{
    GameMatch, MatchId, RankingPolicy, Score, Team, TeamId, Tournament, TournamentError,
    MAX_PLAYERS_PER_TEAM,
};
