//! Bracket, Round and BracketMatch for single-elimination play.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Address of one match: round index (0 = first round) and match index within it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct MatchCoordinate {
    pub round: usize,
    pub index: usize,
}

impl MatchCoordinate {
    pub fn new(round: usize, index: usize) -> Self {
        Self { round, index }
    }
}

/// A single 1v1 match. An empty slot is `None`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch {
    pub player1: Option<PlayerId>,
    pub player2: Option<PlayerId>,
    /// None if not yet played. Always one of the two occupants when set.
    pub winner: Option<PlayerId>,
}

impl BracketMatch {
    /// Match with both slots empty (a later-round placeholder).
    pub fn empty() -> Self {
        Self::default()
    }

    /// First-round match. A missing `player2` makes it a bye won by `player1`.
    pub fn opening(player1: Option<PlayerId>, player2: Option<PlayerId>) -> Self {
        let winner = match (player1, player2) {
            (Some(p), None) => Some(p),
            _ => None,
        };
        Self {
            player1,
            player2,
            winner,
        }
    }

    /// True if exactly one slot is occupied.
    pub fn is_bye(&self) -> bool {
        self.player1.is_some() != self.player2.is_some()
    }

    /// True if `player` occupies either slot.
    pub fn has_player(&self, player: PlayerId) -> bool {
        self.player1 == Some(player) || self.player2 == Some(player)
    }

    /// True if both slots are occupied and no winner is recorded yet.
    pub fn is_playable(&self) -> bool {
        self.player1.is_some() && self.player2.is_some() && self.winner.is_none()
    }
}

/// One round of the bracket: matches in bracket order.
pub type Round = Vec<BracketMatch>;

/// Full single-elimination bracket. Serialized as a bare array of rounds.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bracket {
    rounds: Vec<Round>,
}

impl Bracket {
    pub fn from_rounds(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Number of first-round slots (players plus padding); 1 for a bracket with no rounds.
    pub fn total_slots(&self) -> usize {
        self.rounds.first().map_or(1, |r| r.len() * 2)
    }

    pub fn get(&self, coord: MatchCoordinate) -> Option<&BracketMatch> {
        self.rounds.get(coord.round)?.get(coord.index)
    }

    pub fn get_mut(&mut self, coord: MatchCoordinate) -> Option<&mut BracketMatch> {
        self.rounds.get_mut(coord.round)?.get_mut(coord.index)
    }

    /// True if `round` is the last round.
    pub fn is_final_round(&self, round: usize) -> bool {
        round + 1 == self.rounds.len()
    }

    /// The single match of the last round.
    pub fn final_match(&self) -> Option<&BracketMatch> {
        self.rounds.last()?.first()
    }

    /// Winner of the final match, if decided.
    pub fn champion(&self) -> Option<PlayerId> {
        self.final_match()?.winner
    }

    /// Coordinates of every match that can be played right now.
    pub fn playable_matches(&self) -> Vec<MatchCoordinate> {
        self.rounds
            .iter()
            .enumerate()
            .flat_map(|(r, round)| {
                round
                    .iter()
                    .enumerate()
                    .filter(|(_, m)| m.is_playable())
                    .map(move |(i, _)| MatchCoordinate::new(r, i))
            })
            .collect()
    }
}
