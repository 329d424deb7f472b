//! Setup phase: create tournaments and begin them (Open -> InProgress).

use crate::logic::builder::build_bracket;
use crate::models::{
    Tournament, TournamentDetails, TournamentError, TournamentStatus, MIN_PLAYERS_TO_START,
};

/// Create one open tournament, or one per skill level named "{name} for {level}".
pub fn create_tournaments(
    details: TournamentDetails,
    levels: &[String],
) -> Result<Vec<Tournament>, TournamentError> {
    if levels.is_empty() {
        return Ok(vec![Tournament::new(details)?]);
    }
    levels
        .iter()
        .map(|level| {
            Tournament::new(TournamentDetails {
                name: format!("{} for {}", details.name.trim(), level.trim()),
                ..details.clone()
            })
        })
        .collect()
}

/// Begin the tournament: build the bracket from the registered players and set status to InProgress.
pub fn begin_tournament(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::Open {
        return Err(TournamentError::AlreadyBegun);
    }
    if tournament.players.len() < MIN_PLAYERS_TO_START {
        return Err(TournamentError::NotEnoughPlayersToStart {
            required: MIN_PLAYERS_TO_START,
        });
    }
    tournament.bracket = build_bracket(&tournament.players);
    tournament.status = TournamentStatus::InProgress;
    log::info!(
        "Tournament {} began with {} players",
        tournament.id,
        tournament.players.len()
    );
    Ok(())
}
