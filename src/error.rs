//! Structured error types.
//!
//! Every error here is fatal to the current game: the engine never
//! retries or requests a corrected move. The driving loop maps any of
//! them to "deactivate the offending player and end the game".

use crate::board::House;
use crate::core::PlayerId;

/// A rejected move request.
///
/// Returned by [`GameState::apply_move`](crate::core::GameState::apply_move);
/// the state is untouched when any of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is already finished")]
    Finished,

    #[error("{player} moved out of turn")]
    OutOfTurn { player: PlayerId },

    #[error("{house} is not on {player}'s row")]
    ForeignHouse { player: PlayerId, house: House },

    #[error("{house} is empty")]
    EmptyHouse { house: House },

    #[error("sowing from {house} would leave the opponent without seeds")]
    WouldStarve { house: House },
}

/// A failed request for a move choice from a player agent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("no response before the deadline")]
    Timeout,
}

/// A failed game-state snapshot encode or decode.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to encode game state: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode game state: {0}")]
    Decode(#[source] bincode::Error),
}
