//! Shared fixtures for integration tests.
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use cue_bracket_web::{begin_tournament, PlayerId, Tournament, TournamentDetails};
use uuid::Uuid;

pub fn players(n: usize) -> Vec<PlayerId> {
    (0..n).map(|_| Uuid::new_v4()).collect()
}

pub fn details(name: &str) -> TournamentDetails {
    TournamentDetails {
        name: name.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        ruleset: "WPA".to_string(),
        format: "8-ball".to_string(),
        scoring: 5,
    }
}

pub fn open_tournament_with(players: &[PlayerId]) -> Tournament {
    let mut t = Tournament::new(details("Friday Nine-Ball")).unwrap();
    for &p in players {
        t.register_player(p).unwrap();
    }
    t
}

/// Tournament with `players` registered in order and the bracket built.
pub fn started_with(players: &[PlayerId]) -> Tournament {
    let mut t = open_tournament_with(players);
    begin_tournament(&mut t).unwrap();
    t
}
