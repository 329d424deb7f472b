//! Bracket construction: fold-paired first round with byes, empty later rounds.

use crate::models::{Bracket, BracketMatch, PlayerId, Round};

/// Build the full bracket for `players` in registration order.
///
/// 1. Slots = smallest power of two >= number of players; padding (empty slots) goes at the tail.
/// 2. First round pairs slot `i` with slot `slots - 1 - i` (first vs. last, second vs. second-last, ...),
///    which spreads the padding over distinct matches.
/// 3. A first-round match with an empty second slot is a bye, already won by `player1`.
/// 4. Later rounds start empty; first-round bye winners are then written into the second round's
///    slots in order (match 0 player1, match 0 player2, match 1 player1, ...).
///
/// Only first-round byes are resolved. A single player yields a bracket with no rounds.
pub fn build_bracket(players: &[PlayerId]) -> Bracket {
    let total_slots = players.len().next_power_of_two();
    let mut slots: Vec<Option<PlayerId>> = players.iter().copied().map(Some).collect();
    slots.resize(total_slots, None);

    let mut rounds: Vec<Round> = Vec::new();
    let first_round_size = total_slots / 2;
    if first_round_size > 0 {
        rounds.push(
            (0..first_round_size)
                .map(|i| BracketMatch::opening(slots[i], slots[total_slots - 1 - i]))
                .collect(),
        );
        let mut size = first_round_size / 2;
        while size > 0 {
            rounds.push(vec![BracketMatch::empty(); size]);
            size /= 2;
        }
    }

    seed_byes_into_second_round(&mut rounds);
    log::debug!(
        "Built bracket: {} players, {} slots, {} rounds",
        players.len(),
        total_slots,
        rounds.len()
    );
    Bracket::from_rounds(rounds)
}

/// Move first-round bye winners into the second round, filling slots front to back.
/// Does not use the usual index/2 advancement rule.
fn seed_byes_into_second_round(rounds: &mut [Round]) {
    let [first, second, ..] = rounds else {
        return;
    };
    let mut byes = first
        .iter()
        .filter(|m| m.player2.is_none())
        .filter_map(|m| m.winner);
    for slot in second
        .iter_mut()
        .flat_map(|m| [&mut m.player1, &mut m.player2])
    {
        match byes.next() {
            Some(player) => *slot = Some(player),
            None => break,
        }
    }
}
