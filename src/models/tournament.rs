//! Tournament, TournamentStatus and TournamentError.

use crate::models::bracket::Bracket;
use crate::models::player::{PlayerId, MAX_PLAYERS};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TournamentError {
    /// Round or match index does not address a match in the bracket.
    #[error("No match at round {round}, index {index}")]
    InvalidCoordinate { round: usize, index: usize },
    /// Declared winner is not one of the two players in the match (or the match is not filled yet).
    #[error("Player {0} is not playing in this match")]
    WinnerNotInMatch(PlayerId),
    /// Results can only be recorded while the tournament is in progress.
    #[error("Tournament is not in progress")]
    NotInProgress,
    /// The match already has a recorded winner.
    #[error("This match already has a winner")]
    AlreadyDecided,
    /// Tournament has already been started.
    #[error("Tournament has already begun")]
    AlreadyBegun,
    /// Not enough registered players to build a bracket.
    #[error("Need at least {required} players to begin")]
    NotEnoughPlayersToStart { required: usize },
    /// Registration, withdrawal and officiating are only allowed while open.
    #[error("Tournament is no longer open for registration")]
    RegistrationClosed,
    #[error("Tournament is already full ({capacity} players)")]
    TournamentFull { capacity: usize },
    #[error("Player {0} is already registered for this tournament")]
    AlreadyRegistered(PlayerId),
    #[error("User {0} is already officiating this tournament")]
    AlreadyOfficiating(PlayerId),
    /// A registered player cannot officiate their own tournament.
    #[error("User {0} is playing in this tournament and cannot officiate it")]
    OfficiatingOwnTournament(PlayerId),
    #[error("User {0} is not registered or officiating for this tournament")]
    NotRegistered(PlayerId),
    /// A required tournament detail is blank or zero.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Lifecycle phase of the tournament. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TournamentStatus {
    /// Accepting players and officials; no bracket yet.
    #[default]
    Open,
    /// Bracket built; match results are being recorded.
    InProgress,
    /// Final match decided.
    Completed,
}

/// Descriptive fields supplied when a tournament is created.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentDetails {
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub ruleset: String,
    pub format: String,
    /// Points (racks, legs) needed to win a match.
    pub scoring: u32,
}

impl TournamentDetails {
    fn validate(&self) -> Result<(), TournamentError> {
        if self.name.trim().is_empty() {
            return Err(TournamentError::MissingField("name"));
        }
        if self.ruleset.trim().is_empty() {
            return Err(TournamentError::MissingField("ruleset"));
        }
        if self.format.trim().is_empty() {
            return Err(TournamentError::MissingField("format"));
        }
        if self.scoring == 0 {
            return Err(TournamentError::MissingField("scoring"));
        }
        Ok(())
    }
}

/// Full tournament record: details, participants, bracket and status.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    #[serde(flatten)]
    pub details: TournamentDetails,
    pub status: TournamentStatus,
    /// Registered players in registration order (this order seeds the bracket).
    pub players: Vec<PlayerId>,
    /// Users allowed to record match results.
    pub officials: Vec<PlayerId>,
    /// Empty while open; built once when the tournament begins.
    pub bracket: Bracket,
}

impl Tournament {
    /// Create a new open tournament with no players.
    pub fn new(details: TournamentDetails) -> Result<Self, TournamentError> {
        details.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            details: TournamentDetails {
                name: details.name.trim().to_string(),
                ..details
            },
            status: TournamentStatus::Open,
            players: Vec::new(),
            officials: Vec::new(),
            bracket: Bracket::default(),
        })
    }

    /// Winner of the final match once the tournament is completed.
    pub fn champion(&self) -> Option<PlayerId> {
        if self.status != TournamentStatus::Completed {
            return None;
        }
        self.bracket.champion()
    }

    pub fn is_official(&self, user: PlayerId) -> bool {
        self.officials.contains(&user)
    }

    pub fn is_player(&self, user: PlayerId) -> bool {
        self.players.contains(&user)
    }

    fn require_open(&self) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Open {
            return Err(TournamentError::RegistrationClosed);
        }
        Ok(())
    }

    /// Register a player (only while open, at most 32, not an official).
    pub fn register_player(&mut self, player: PlayerId) -> Result<(), TournamentError> {
        self.require_open()?;
        if self.players.len() >= MAX_PLAYERS {
            return Err(TournamentError::TournamentFull {
                capacity: MAX_PLAYERS,
            });
        }
        if self.is_player(player) {
            return Err(TournamentError::AlreadyRegistered(player));
        }
        if self.is_official(player) {
            return Err(TournamentError::AlreadyOfficiating(player));
        }
        self.players.push(player);
        Ok(())
    }

    /// Assign an official (only while open, must not be a registered player).
    pub fn add_official(&mut self, user: PlayerId) -> Result<(), TournamentError> {
        self.require_open()?;
        if self.is_official(user) {
            return Err(TournamentError::AlreadyOfficiating(user));
        }
        if self.is_player(user) {
            return Err(TournamentError::OfficiatingOwnTournament(user));
        }
        self.officials.push(user);
        Ok(())
    }

    /// Remove a user from players and officials (only while open).
    pub fn withdraw(&mut self, user: PlayerId) -> Result<(), TournamentError> {
        self.require_open()?;
        if !self.is_player(user) && !self.is_official(user) {
            return Err(TournamentError::NotRegistered(user));
        }
        self.players.retain(|&p| p != user);
        self.officials.retain(|&o| o != user);
        Ok(())
    }
}
