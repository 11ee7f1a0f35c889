//! Results produced by the rules: move outcomes and terminal classification.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::House;
use crate::core::{PlayerId, PlayerPair};

/// Everything a single resolved move produced.
///
/// Owned by the caller; the presentation layer replays `sown` and
/// `captured` in order to animate the move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The acting player.
    pub player: PlayerId,
    /// The house the seeds were picked from.
    pub origin: House,
    /// Houses that received a seed, in sowing order. A house may appear
    /// more than once when the sow wraps past it again.
    pub sown: Vec<House>,
    /// Houses emptied by capture, outer-to-inner from the landing house.
    /// Empty when nothing qualified or the grand-slam veto applied.
    pub captured: SmallVec<[House; 6]>,
    /// Seeds added to the acting player's score by this move.
    pub score_delta: u32,
    /// True when a capture was scanned but vetoed for emptying the
    /// opponent's entire row. `captured` is empty and `score_delta` is 0,
    /// and the origin house holds its pre-move count again.
    pub grand_slam: bool,
}

/// Result of a swept board when a player had no legal move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepOutcome {
    /// Houses that held seeds before the sweep, in ring order.
    pub emptied: SmallVec<[House; 12]>,
    /// Seeds collected into the sweeping player's score.
    pub collected: u32,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores at a forced end.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// What ended the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    /// A player banked more than half the seeds.
    ScoreReached,
    /// The player to move had no legal move; the board was swept.
    Starvation,
    /// The turn cap was reached without a score winner.
    TurnLimit,
    /// A player was deactivated (invalid move, bad response, timeout).
    Forfeit,
}

/// Terminal state: who won (or draw), why, and the final scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalResult {
    pub result: GameResult,
    pub reason: FinishReason,
    pub scores: PlayerPair<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::new(0)));
        assert!(!draw.is_winner(PlayerId::new(1)));
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = MoveOutcome {
            player: PlayerId::new(0),
            origin: House::new(2),
            sown: vec![House::new(3), House::new(4)],
            captured: SmallVec::new(),
            score_delta: 0,
            grand_slam: false,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let restored: MoveOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, restored);
    }
}
