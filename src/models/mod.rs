//! Data structures for single-elimination tournaments: players, bracket, tournament record.

mod bracket;
mod player;
mod tournament;

pub use bracket::{Bracket, BracketMatch, MatchCoordinate, Round};
pub use player::{PlayerId, MAX_PLAYERS, MIN_PLAYERS_TO_START};
pub use tournament::{
    Tournament, TournamentDetails, TournamentError, TournamentId, TournamentStatus,
};
