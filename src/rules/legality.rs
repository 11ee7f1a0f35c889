//! The legality rule: which houses a player may sow from.
//!
//! A house qualifies when it holds seeds and the move would not starve
//! the opponent: either the opponent already has seeds to play, or this
//! sow is long enough to reach their row. The criterion is evaluated
//! per house — a candidate is never rejected because some *other* legal
//! move would feed the opponent better.

use smallvec::SmallVec;

use crate::board::{Board, House};
use crate::core::PlayerId;

/// Legal moves for `player`, in house order.
///
/// Empty when no house qualifies — the signal for the starvation sweep.
/// That includes the case where the player still has seeds but no single
/// house can reach an empty opponent row.
#[must_use]
pub fn legal_moves(board: &Board, player: PlayerId) -> SmallVec<[House; 6]> {
    let opponent_can_play = !board.row_is_empty(player.other());

    House::row(player)
        .filter(|&house| {
            let seeds = board.seeds(house);
            seeds > 0 && (opponent_can_play || seeds >= house.seeds_to_reach_opponent())
        })
        .collect()
}

/// Whether a specific `(player, house)` move passes the legality rule.
///
/// Same criterion as [`legal_moves`], including house ownership.
#[must_use]
pub fn is_legal(board: &Board, player: PlayerId, house: House) -> bool {
    if house.owner() != player {
        return false;
    }
    let seeds = board.seeds(house);
    if seeds == 0 {
        return false;
    }
    !board.row_is_empty(player.other()) || seeds >= house.seeds_to_reach_opponent()
}
