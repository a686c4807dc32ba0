//! Integration tests for team registration, rosters, removal, and reset.

use swiss_tournament_web::{
    record_score, GameMatch, Tournament, TournamentError,
};

fn tournament_with_teams(names: &[&str]) -> Tournament {
    let mut t = Tournament::new();
    for name in names {
        t.register_team(*name).unwrap();
    }
    t
}

/// Pair two teams by name and record a score for them.
fn play_match(t: &mut Tournament, team1: &str, team2: &str, s1: u32, s2: u32) {
    let a = t.team_by_name(team1).unwrap().id;
    let b = t.team_by_name(team2).unwrap().id;
    let round = t.matches.iter().map(|m| m.round).max().unwrap_or(0) + 1;
    let m = GameMatch::new(a, b, round, 1);
    let id = m.id;
    t.matches.push(m);
    record_score(t, id, s1, s2).unwrap();
}

#[test]
fn register_rejects_duplicate_names() {
    let mut t = tournament_with_teams(&["Alpha"]);
    assert_eq!(
        t.register_team("Alpha"),
        Err(TournamentError::DuplicateTeamName)
    );
    assert_eq!(t.teams.len(), 1);
}

#[test]
fn register_rejected_once_started() {
    let mut t = tournament_with_teams(&["Alpha", "Beta"]);
    play_match(&mut t, "Alpha", "Beta", 13, 7);
    assert!(t.has_started());
    assert_eq!(
        t.register_team("Gamma"),
        Err(TournamentError::AlreadyStarted)
    );
}

#[test]
fn roster_holds_at_most_two_unique_players() {
    let mut t = tournament_with_teams(&["Alpha"]);
    t.add_player("Alpha", "Ana").unwrap();
    assert_eq!(
        t.add_player("Alpha", "Ana"),
        Err(TournamentError::DuplicatePlayerName)
    );
    t.add_player("Alpha", "Bob").unwrap();
    assert_eq!(
        t.add_player("Alpha", "Cleo"),
        Err(TournamentError::RosterFull)
    );
    assert_eq!(t.team_by_name("Alpha").unwrap().players, vec!["Ana", "Bob"]);
}

#[test]
fn remove_player_requires_presence() {
    let mut t = tournament_with_teams(&["Alpha"]);
    t.add_player("Alpha", "Ana").unwrap();
    assert_eq!(
        t.remove_player("Alpha", "Bob"),
        Err(TournamentError::PlayerNotFound)
    );
    t.remove_player("Alpha", "Ana").unwrap();
    assert!(t.team_by_name("Alpha").unwrap().players.is_empty());
}

#[test]
fn remove_team_blocked_by_scored_match() {
    let mut t = tournament_with_teams(&["Alpha", "Beta"]);
    play_match(&mut t, "Alpha", "Beta", 13, 7);
    // Close the round as a later round would.
    for m in &mut t.matches {
        m.closed = true;
    }
    assert_eq!(t.remove_team("Alpha"), Err(TournamentError::TeamHasHistory));
    assert!(t.team_by_name("Alpha").is_some());
}

#[test]
fn remove_team_deletes_its_unplayed_matches() {
    let mut t = tournament_with_teams(&["Alpha", "Beta"]);
    let a = t.team_by_name("Alpha").unwrap().id;
    let b = t.team_by_name("Beta").unwrap().id;
    t.matches.push(GameMatch::new(a, b, 1, 1));

    t.remove_team("Alpha").unwrap();
    assert!(t.team_by_name("Alpha").is_none());
    assert!(t.matches.is_empty());
}

#[test]
fn remove_unknown_team_is_not_found() {
    let mut t = Tournament::new();
    assert_eq!(t.remove_team("Ghost"), Err(TournamentError::TeamNotFound));
}

#[test]
fn reset_clears_matches_and_counters_but_keeps_teams() {
    let mut t = tournament_with_teams(&["Alpha", "Beta"]);
    t.add_player("Alpha", "Ana").unwrap();
    play_match(&mut t, "Alpha", "Beta", 13, 7);

    t.reset_tournament();

    assert!(t.matches.is_empty());
    assert!(!t.has_started());
    assert_eq!(t.teams.len(), 2);
    for team in &t.teams {
        assert_eq!(team.matches_played, 0);
        assert_eq!(team.points_for, 0);
        assert_eq!(team.points_against, 0);
    }
    // Rosters survive a reset.
    assert_eq!(t.team_by_name("Alpha").unwrap().players, vec!["Ana"]);
    // And registration is open again.
    t.register_team("Gamma").unwrap();
}
