//! # oware-engine
//!
//! Rules engine for the Awalé/Oware two-player sowing game: 12 houses in
//! two rows of 6, counter-clockwise sowing, capture on 2 or 3 in opponent
//! territory, no-starvation legality, and the grand-slam anti-capture
//! veto.
//!
//! ## Design Principles
//!
//! 1. **Rules return data**: a move resolves to a [`MoveOutcome`] value
//!    (sown houses, captured houses, score delta); rendering and
//!    transport consume it from the outside. No presentation calls
//!    inside move resolution.
//!
//! 2. **Every violation is fatal**: an illegal move, a malformed agent
//!    response, or a missed deadline deactivates the offender and ends
//!    the game. There is no retry path; the error types exist to say
//!    *why* a game ended.
//!
//! 3. **Atomic transitions**: `apply_move` either fully resolves a move
//!    or leaves the state untouched. The engine is single-threaded and
//!    never suspends mid-move.
//!
//! ## Modules
//!
//! - `board`: house ring indexing and the 12-slot seed container
//! - `rules`: legality, sow/capture/grand-slam, outcome types
//! - `core`: players, `GameState` (turn and termination policy), RNG
//! - `session`: driving loop — agents, observers, config, referee
//! - `error`: structured error types

pub mod board;
pub mod core;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::board::{Board, House, HOUSE_COUNT, INITIAL_SEEDS, ROW_LEN, TOTAL_SEEDS};

pub use crate::core::{
    ForfeitReason, GameRng, GameState, MoveRecord, Player, PlayerId, PlayerPair, PlayerStatus,
    PlayerView, DEFAULT_MAX_TURNS,
};

pub use crate::rules::{
    FinishReason, GameResult, MoveOutcome, SweepOutcome, TerminalResult, WIN_THRESHOLD,
};

pub use crate::error::{AgentError, MoveError, SnapshotError};

pub use crate::session::{
    GameObserver, PlayerAgent, RandomAgent, Referee, ScriptedAgent, SessionConfig, SummaryLogger,
};
