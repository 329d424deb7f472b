//! Recording match results: validate, set the winner, feed the next round, detect completion.

use crate::models::{
    Bracket, MatchCoordinate, PlayerId, Tournament, TournamentError, TournamentStatus,
};

/// Result of a successful [`advance`]: the new bracket and whether the final is now decided.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Advancement {
    pub bracket: Bracket,
    pub completed: bool,
}

/// Record `winner` for the match at `coord` and return the updated bracket.
///
/// Checks, in order: tournament in progress, coordinate exists, match not yet decided,
/// both slots filled with `winner` being one of them. The input bracket is never modified.
///
/// The winner of round `r`, match `m` moves to round `r + 1`, match `m / 2`: `player1` when `m`
/// is even, `player2` when odd. Completion is read from the final match's winner after the write.
pub fn advance(
    bracket: &Bracket,
    status: TournamentStatus,
    coord: MatchCoordinate,
    winner: PlayerId,
) -> Result<Advancement, TournamentError> {
    if status != TournamentStatus::InProgress {
        return Err(TournamentError::NotInProgress);
    }
    let current = bracket
        .get(coord)
        .ok_or(TournamentError::InvalidCoordinate {
            round: coord.round,
            index: coord.index,
        })?;
    if current.winner.is_some() {
        return Err(TournamentError::AlreadyDecided);
    }
    let both_filled = current.player1.is_some() && current.player2.is_some();
    if !both_filled || !current.has_player(winner) {
        return Err(TournamentError::WinnerNotInMatch(winner));
    }

    let mut next = bracket.clone();
    if let Some(m) = next.get_mut(coord) {
        m.winner = Some(winner);
    }
    if !next.is_final_round(coord.round) {
        let target = MatchCoordinate::new(coord.round + 1, coord.index / 2);
        if let Some(m) = next.get_mut(target) {
            if coord.index % 2 == 0 {
                m.player1 = Some(winner);
            } else {
                m.player2 = Some(winner);
            }
        }
    }

    let completed = next.champion().is_some();
    Ok(Advancement {
        bracket: next,
        completed,
    })
}

/// Apply one match result to the tournament; on the final result status becomes Completed.
/// Returns true if this result completed the tournament.
pub fn record_result(
    tournament: &mut Tournament,
    coord: MatchCoordinate,
    winner: PlayerId,
) -> Result<bool, TournamentError> {
    let advancement = advance(&tournament.bracket, tournament.status, coord, winner)?;
    tournament.bracket = advancement.bracket;
    log::debug!(
        "Tournament {}: round {} match {} won by {}",
        tournament.id,
        coord.round,
        coord.index,
        winner
    );
    if advancement.completed {
        tournament.status = TournamentStatus::Completed;
        log::info!("Tournament {} completed, champion {}", tournament.id, winner);
    }
    Ok(advancement.completed)
}
