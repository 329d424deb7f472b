//! Integration tests for tournament setup: details, registration, officiating, begin.

mod common;

use common::{details, open_tournament_with, players};
use cue_bracket_web::{
    begin_tournament, Tournament, TournamentError, TournamentStatus, MAX_PLAYERS,
};

#[test]
fn new_requires_details() {
    let mut d = details("  ");
    assert_eq!(Tournament::new(d.clone()), Err(TournamentError::MissingField("name")));
    d.name = "Eight-Ball Open".to_string();
    d.scoring = 0;
    assert_eq!(Tournament::new(d.clone()), Err(TournamentError::MissingField("scoring")));
    d.scoring = 7;
    d.format = String::new();
    assert_eq!(Tournament::new(d), Err(TournamentError::MissingField("format")));
}

#[test]
fn new_tournament_is_open_and_empty() {
    let t = Tournament::new(details(" Monday Night ")).unwrap();
    assert_eq!(t.details.name, "Monday Night");
    assert_eq!(t.status, TournamentStatus::Open);
    assert!(t.players.is_empty());
    assert!(t.bracket.is_empty());
    assert_eq!(t.champion(), None);
}

#[test]
fn registration_is_capped_at_32() {
    let mut t = open_tournament_with(&players(MAX_PLAYERS));
    let extra = players(1)[0];
    assert_eq!(
        t.register_player(extra),
        Err(TournamentError::TournamentFull { capacity: 32 })
    );
    begin_tournament(&mut t).unwrap();
    assert_eq!(t.bracket.round_count(), 5);
}

#[test]
fn players_and_officials_do_not_overlap() {
    let ps = players(2);
    let mut t = open_tournament_with(&ps);
    let official = players(1)[0];

    assert_eq!(t.register_player(ps[0]), Err(TournamentError::AlreadyRegistered(ps[0])));
    assert_eq!(t.add_official(ps[1]), Err(TournamentError::OfficiatingOwnTournament(ps[1])));
    t.add_official(official).unwrap();
    assert_eq!(t.add_official(official), Err(TournamentError::AlreadyOfficiating(official)));
    assert_eq!(t.register_player(official), Err(TournamentError::AlreadyOfficiating(official)));
}

#[test]
fn withdraw_removes_player_or_official() {
    let ps = players(3);
    let mut t = open_tournament_with(&ps);
    let official = players(1)[0];
    t.add_official(official).unwrap();

    t.withdraw(ps[1]).unwrap();
    assert_eq!(t.players, vec![ps[0], ps[2]]);
    t.withdraw(official).unwrap();
    assert!(t.officials.is_empty());
    assert_eq!(t.withdraw(official), Err(TournamentError::NotRegistered(official)));
}

#[test]
fn begin_needs_two_players_and_happens_once() {
    let mut solo = open_tournament_with(&players(1));
    assert_eq!(
        begin_tournament(&mut solo),
        Err(TournamentError::NotEnoughPlayersToStart { required: 2 })
    );
    assert_eq!(solo.status, TournamentStatus::Open);

    let ps = players(5);
    let mut t = open_tournament_with(&ps);
    begin_tournament(&mut t).unwrap();
    assert_eq!(t.status, TournamentStatus::InProgress);
    assert_eq!(t.bracket.total_slots(), 8);
    let bracket = t.bracket.clone();
    assert_eq!(begin_tournament(&mut t), Err(TournamentError::AlreadyBegun));
    assert_eq!(t.bracket, bracket);
}

#[test]
fn record_serializes_status_in_kebab_case() {
    let mut t = open_tournament_with(&players(2));
    begin_tournament(&mut t).unwrap();
    let json = serde_json::to_value(&t).unwrap();
    assert_eq!(json["status"], "in-progress");
    assert_eq!(json["name"], "Friday Nine-Ball");
    assert_eq!(json["date"], "2025-03-14");
    assert!(json["bracket"].is_array());

    let back: Tournament = serde_json::from_value(json).unwrap();
    assert_eq!(back, t);
}
