//! Game rules: legality, sowing/capture, and the outcomes they produce.
//!
//! Everything here operates on a [`Board`](crate::board::Board) value and
//! returns plain data; turn sequencing, scores, and termination live in
//! [`core::state`](crate::core).

mod legality;
mod outcome;
mod sowing;

pub use legality::{is_legal, legal_moves};
pub use outcome::{FinishReason, GameResult, MoveOutcome, SweepOutcome, TerminalResult};
pub use sowing::sow_and_capture;

/// A game ends as soon as one score exceeds this (more than half of the
/// 48 seeds in play).
pub const WIN_THRESHOLD: i32 = 24;
