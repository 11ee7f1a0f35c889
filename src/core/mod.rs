//! Core engine types: players, game state, deterministic RNG.
//!
//! The board and the rules live in their own modules; this one ties them
//! together into the owned, mutable [`GameState`] that a driving loop
//! plays a game against.

pub mod player;
pub mod rng;
pub mod state;

pub use player::{ForfeitReason, Player, PlayerId, PlayerPair, PlayerStatus};
pub use rng::GameRng;
pub use state::{GameState, MoveRecord, PlayerView, DEFAULT_MAX_TURNS};
