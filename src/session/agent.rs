//! The player-agent seam.
//!
//! An agent is asked for exactly one house choice per turn and may fail
//! instead of answering; every failure is fatal to its game (the referee
//! deactivates the agent's seat, no retries). The agents shipped here
//! exist for tests and replays — opponent strategy is out of scope.

use std::collections::VecDeque;

use crate::board::House;
use crate::core::{GameRng, PlayerView};
use crate::error::AgentError;

/// Supplies one move choice per turn.
///
/// `view` is the board from the agent's perspective (own row first)
/// plus the set of houses the engine will accept. Returning a house
/// outside that set is allowed — the engine will reject it and the
/// seat forfeits, which is exactly how a buggy remote program dies.
pub trait PlayerAgent {
    fn choose(&mut self, view: &PlayerView) -> Result<House, AgentError>;
}

/// Plays a fixed sequence of houses, then reports a malformed response.
///
/// Replays a recorded game, or scripts a specific line of play in tests.
#[derive(Clone, Debug, Default)]
pub struct ScriptedAgent {
    moves: VecDeque<House>,
}

impl ScriptedAgent {
    #[must_use]
    pub fn new(moves: impl IntoIterator<Item = House>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Remaining scripted moves.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl PlayerAgent for ScriptedAgent {
    fn choose(&mut self, _view: &PlayerView) -> Result<House, AgentError> {
        self.moves
            .pop_front()
            .ok_or_else(|| AgentError::Malformed("script exhausted".to_string()))
    }
}

/// Picks uniformly among the legal moves with a deterministic RNG.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl PlayerAgent for RandomAgent {
    fn choose(&mut self, view: &PlayerView) -> Result<House, AgentError> {
        self.rng
            .choose(&view.legal)
            .copied()
            .ok_or_else(|| AgentError::Malformed("no legal move to choose".to_string()))
    }
}
