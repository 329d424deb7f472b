//! Single-elimination tournament organizer: bracket engine, tournament lifecycle and storage.

pub mod auth;
pub mod config;
pub mod logic;
pub mod models;
pub mod service;
pub mod store;

pub use auth::{AllowAll, MatchAuthority, OfficialsOnly};
pub use config::{ConfigError, ServerConfig};
pub use logic::{
    advance, begin_tournament, build_bracket, create_tournaments, record_result, Advancement,
};
pub use models::{
    Bracket, BracketMatch, MatchCoordinate, PlayerId, Round, Tournament, TournamentDetails,
    TournamentError, TournamentId, TournamentStatus, MAX_PLAYERS, MIN_PLAYERS_TO_START,
};
pub use service::{ResultOutcome, ServiceError, TournamentService};
pub use store::{InMemoryStore, StorageError, StorageResult, TournamentStore, Versioned};
