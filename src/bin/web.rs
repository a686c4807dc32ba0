//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use swiss_tournament_web::{
    correct_score, current_round, ranking, record_score, start_round, win_points, MatchId,
    RankingPolicy, Tournament, TournamentError,
};

/// In-memory state: the single active tournament.
type AppState = Data<RwLock<Tournament>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct RegisterTeamBody {
    name: String,
    /// Optional initial roster (at most 2 names).
    #[serde(default)]
    players: Vec<String>,
}

#[derive(Deserialize)]
struct PlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct ScoreBody {
    score1: u32,
    score2: u32,
}

#[derive(Deserialize)]
struct SettingsBody {
    ranking_system: Option<RankingPolicy>,
    prevent_duplicate_matches: Option<bool>,
}

/// Path segment: team name (e.g. /api/teams/{name})
#[derive(Deserialize)]
struct TeamPath {
    name: String,
}

/// Path segments: team name and player name.
#[derive(Deserialize)]
struct TeamPlayerPath {
    name: String,
    player_name: String,
}

/// Path segment: match id (e.g. /api/matches/{id}/score)
#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

/// One row of the ranking table, with win points derived for display.
#[derive(Serialize)]
struct RankingEntry {
    rank: usize,
    name: String,
    players: Vec<String>,
    matches_played: u32,
    points_for: u32,
    points_against: u32,
    point_difference: i64,
    win_points: u32,
}

/// Map an engine error to a response: lookup misses are 404, every other
/// failed precondition is 400. The error text comes from Display.
fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::TeamNotFound
        | TournamentError::MatchNotFound
        | TournamentError::PlayerNotFound => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Full tournament state snapshot.
#[get("/api/tournament")]
async fn api_get_tournament(state: AppState) -> HttpResponse {
    let t = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(&*t)
}

/// Register a team, optionally with up to 2 players.
#[post("/api/teams")]
async fn api_register_team(state: AppState, body: Json<RegisterTeamBody>) -> HttpResponse {
    let mut t = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if let Err(e) = t.register_team(body.name.trim()) {
        return error_response(&e);
    }
    for player in &body.players {
        if let Err(e) = t.add_player(body.name.trim(), player.trim()) {
            return error_response(&e);
        }
    }
    HttpResponse::Ok().json(&*t)
}

/// Remove a team (blocked once it has scored matches).
#[delete("/api/teams/{name}")]
async fn api_remove_team(state: AppState, path: Path<TeamPath>) -> HttpResponse {
    let mut t = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.remove_team(&path.name) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => error_response(&e),
    }
}

/// Add a player to a team's roster.
#[post("/api/teams/{name}/players")]
async fn api_add_player(
    state: AppState,
    path: Path<TeamPath>,
    body: Json<PlayerBody>,
) -> HttpResponse {
    let mut t = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.add_player(&path.name, body.name.trim()) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => error_response(&e),
    }
}

/// Remove a player from a team's roster.
#[delete("/api/teams/{name}/players/{player_name}")]
async fn api_remove_player(state: AppState, path: Path<TeamPlayerPath>) -> HttpResponse {
    let mut t = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.remove_player(&path.name, &path.player_name) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => error_response(&e),
    }
}

/// Teams in ranking order under the active policy.
#[get("/api/ranking")]
async fn api_ranking(state: AppState) -> HttpResponse {
    let t = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entries: Vec<RankingEntry> = ranking(&t)
        .into_iter()
        .enumerate()
        .map(|(i, team)| RankingEntry {
            rank: i + 1,
            win_points: win_points(&t, team.id),
            point_difference: team.point_difference(),
            name: team.name,
            players: team.players,
            matches_played: team.matches_played,
            points_for: team.points_for,
            points_against: team.points_against,
        })
        .collect();
    HttpResponse::Ok().json(entries)
}

/// Current round number plus unplayed and played matches.
#[get("/api/matches")]
async fn api_matches(state: AppState) -> HttpResponse {
    let t = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(serde_json::json!({
        "current_round": current_round(&t),
        "unplayed": t.unplayed_matches(),
        "played": t.played_matches(),
    }))
}

/// Record the score of an unplayed match.
#[post("/api/matches/{id}/score")]
async fn api_record_score(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    let mut t = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match record_score(&mut t, path.id, body.score1, body.score2) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => error_response(&e),
    }
}

/// Correct the score of an already-played, still-open match.
#[put("/api/matches/{id}/score")]
async fn api_correct_score(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    let mut t = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match correct_score(&mut t, path.id, body.score1, body.score2) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => error_response(&e),
    }
}

/// Start the tournament or generate the next round.
#[post("/api/rounds/next")]
async fn api_next_round(state: AppState) -> HttpResponse {
    let mut t = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match start_round(&mut t) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => error_response(&e),
    }
}

/// Reset: delete all matches, zero all team counters.
#[post("/api/reset")]
async fn api_reset(state: AppState) -> HttpResponse {
    let mut t = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    t.reset_tournament();
    log::info!("Tournament reset");
    HttpResponse::Ok().json(&*t)
}

/// Update tournament settings (ranking policy, duplicate prevention).
#[put("/api/settings")]
async fn api_settings(state: AppState, body: Json<SettingsBody>) -> HttpResponse {
    let mut t = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if let Some(policy) = body.ranking_system {
        t.set_ranking_policy(policy);
    }
    if let Some(prevent) = body.prevent_duplicate_matches {
        t.set_duplicate_prevention(prevent);
    }
    HttpResponse::Ok().json(&*t)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(Tournament::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_tournament)
            .service(api_register_team)
            .service(api_remove_team)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_ranking)
            .service(api_matches)
            .service(api_record_score)
            .service(api_correct_score)
            .service(api_next_round)
            .service(api_reset)
            .service(api_settings)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
