//! Presentation sink: purely observational consumers of game events.
//!
//! The original engine interleaved rendering calls with move resolution;
//! here the rules return data and observers receive it after the fact.
//! Nothing an observer does can feed back into game state.

use crate::core::{ForfeitReason, GameState, PlayerId};
use crate::rules::{GameResult, MoveOutcome, SweepOutcome, TerminalResult};

/// Receives game events as they happen. All methods default to no-ops,
/// so an observer implements only what it cares about.
pub trait GameObserver {
    /// A move resolved; `outcome` carries the sown and captured houses
    /// in animation order.
    fn on_move(&mut self, _state: &GameState, _outcome: &MoveOutcome) {}

    /// The board was swept because `player` had no legal move.
    fn on_sweep(&mut self, _state: &GameState, _player: PlayerId, _sweep: &SweepOutcome) {}

    /// `player` was removed from the game.
    fn on_deactivated(&mut self, _state: &GameState, _player: PlayerId, _reason: ForfeitReason) {}

    /// The game ended.
    fn on_finished(&mut self, _state: &GameState, _result: &TerminalResult) {}
}

/// Writes a game summary through the `log` facade, one line per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryLogger;

impl GameObserver for SummaryLogger {
    fn on_move(&mut self, _state: &GameState, outcome: &MoveOutcome) {
        log::info!("{} played ({})", outcome.player, outcome.origin.index());
        for &house in &outcome.captured {
            log::info!("Captured seeds at {house}");
        }
        if outcome.grand_slam {
            log::info!("Grand slam: capture voided");
        }
    }

    fn on_sweep(&mut self, _state: &GameState, player: PlayerId, sweep: &SweepOutcome) {
        log::info!("{player} cannot move; collects the remaining {} seeds", sweep.collected);
    }

    fn on_deactivated(&mut self, _state: &GameState, player: PlayerId, reason: ForfeitReason) {
        log::warn!("{player} deactivated: {reason}");
    }

    fn on_finished(&mut self, _state: &GameState, result: &TerminalResult) {
        match result.result {
            GameResult::Winner(winner) => log::info!("{winner} won!"),
            GameResult::Draw => log::info!("Draw."),
        }
    }
}
