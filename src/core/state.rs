//! Game state and the turn/termination policy.
//!
//! ## GameState
//!
//! The single owned, mutable value of a game: the 12-house board, both
//! player records, whose turn it is, and the move history. Mutation goes
//! exclusively through [`GameState::apply_move`],
//! [`GameState::sweep_remaining`], and [`GameState::deactivate`]; each is
//! atomic — a rejected move leaves the state untouched.
//!
//! ## Termination
//!
//! The game finishes when:
//! - a move lifts a score above 24 (that player wins),
//! - the player to move has no legal move (board swept into their score,
//!   then scores compared),
//! - the turn cap is reached (scores compared, tie is a draw), or
//! - a player is deactivated (forfeit; their score becomes -1 and the
//!   comparison decides).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, House, ROW_LEN};
use crate::error::{MoveError, SnapshotError};
use crate::rules::{self, FinishReason, GameResult, MoveOutcome, SweepOutcome, TerminalResult};

use super::player::{ForfeitReason, Player, PlayerId, PlayerPair};

/// Turn cap if none is configured: 100 moves, 50 per player.
pub const DEFAULT_MAX_TURNS: u32 = 100;

/// One entry of the move history, enough to replay the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: PlayerId,
    pub house: House,
    pub turn: u32,
    pub score_delta: u32,
}

/// The board as one player sees it: own row first.
///
/// This is the shape handed to player agents each turn, mirroring the
/// wire view a remote program would receive. `legal` carries the houses
/// the engine will accept this turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub player: PlayerId,
    pub own: [u8; ROW_LEN],
    pub foe: [u8; ROW_LEN],
    pub legal: SmallVec<[House; 6]>,
}

impl std::fmt::Display for PlayerView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: Vec<String> = self
            .own
            .iter()
            .chain(self.foe.iter())
            .map(u8::to_string)
            .collect();
        f.write_str(&counts.join(" "))
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    players: PlayerPair<Player>,
    active_player: PlayerId,
    turn_number: u32,
    max_turns: u32,
    outcome: Option<TerminalResult>,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// A fresh game: 4 seeds in every house, scores 0/0, player 0 to
    /// move on turn 1.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Board::new(), [0, 0], PlayerId::new(0))
    }

    /// Resume from an arbitrary position, e.g. a restored snapshot or a
    /// test setup. The history starts empty.
    #[must_use]
    pub fn from_position(board: Board, scores: [i32; 2], active_player: PlayerId) -> Self {
        let players = PlayerPair::new(|id| {
            let mut player = Player::new(id);
            player.add_score(scores[id.index()].max(0) as u32);
            player
        });
        Self {
            board,
            players,
            active_player,
            turn_number: 1,
            max_turns: DEFAULT_MAX_TURNS,
            outcome: None,
            history: Vector::new(),
        }
    }

    /// Replace the turn cap (the driving loop owns the configured value).
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Current score of one player.
    #[must_use]
    pub fn score(&self, id: PlayerId) -> i32 {
        self.players[id].score()
    }

    /// Both scores, player 0 first.
    #[must_use]
    pub fn scores(&self) -> PlayerPair<i32> {
        self.players.map(Player::score)
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Current turn, starting at 1; one turn is one player's move.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    /// Every move applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Terminal result, if the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<&TerminalResult> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    // === Queries ===

    /// Legal moves for `player` under the no-starvation rule.
    ///
    /// Empty once the game is finished, and empty when no house on the
    /// player's row qualifies — the driving loop answers that with
    /// [`GameState::sweep_remaining`].
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId) -> SmallVec<[House; 6]> {
        if self.is_finished() {
            return SmallVec::new();
        }
        rules::legal_moves(&self.board, player)
    }

    /// The board from `player`'s perspective, with this turn's legal
    /// moves attached.
    #[must_use]
    pub fn view(&self, player: PlayerId) -> PlayerView {
        PlayerView {
            player,
            own: self.board.row(player),
            foe: self.board.row(player.other()),
            legal: self.legal_moves(player),
        }
    }

    // === Transitions ===

    /// Apply one validated move: sow, capture, score, then advance the
    /// turn or finish the game.
    ///
    /// Any `Err` leaves the state exactly as it was; per the game's
    /// fairness rules the driving loop treats every rejection as fatal
    /// to the offender rather than asking again.
    pub fn apply_move(&mut self, player: PlayerId, house: House) -> Result<MoveOutcome, MoveError> {
        if self.is_finished() {
            return Err(MoveError::Finished);
        }
        if player != self.active_player {
            return Err(MoveError::OutOfTurn { player });
        }
        if house.owner() != player {
            return Err(MoveError::ForeignHouse { player, house });
        }
        let seeds = self.board.seeds(house);
        if seeds == 0 {
            return Err(MoveError::EmptyHouse { house });
        }
        if self.board.row_is_empty(player.other()) && seeds < house.seeds_to_reach_opponent() {
            return Err(MoveError::WouldStarve { house });
        }

        let outcome = rules::sow_and_capture(&mut self.board, player, house);
        self.players[player].add_score(outcome.score_delta);
        self.history.push_back(MoveRecord {
            player,
            house,
            turn: self.turn_number,
            score_delta: outcome.score_delta,
        });

        if self.players[player].score() > rules::WIN_THRESHOLD {
            self.finish(GameResult::Winner(player), FinishReason::ScoreReached);
        } else if self.turn_number >= self.max_turns {
            self.finish(self.compare_scores(), FinishReason::TurnLimit);
        } else {
            self.turn_number += 1;
            self.active_player = player.other();
        }

        Ok(outcome)
    }

    /// Sweep every house into `player`'s score and finish the game.
    ///
    /// This is the starvation ending: called by the driving loop when
    /// `player` is to move and [`GameState::legal_moves`] came back
    /// empty. All remaining seeds — both rows — go to the player who
    /// could not move.
    pub fn sweep_remaining(&mut self, player: PlayerId) -> SweepOutcome {
        if self.is_finished() {
            return SweepOutcome {
                emptied: SmallVec::new(),
                collected: 0,
            };
        }

        let mut emptied = SmallVec::new();
        let mut collected = 0u32;
        for house in House::all() {
            let seeds = self.board.pick(house);
            if seeds > 0 {
                emptied.push(house);
                collected += u32::from(seeds);
            }
        }
        self.players[player].add_score(collected);
        self.finish(self.compare_scores(), FinishReason::Starvation);

        SweepOutcome { emptied, collected }
    }

    /// Remove `player` from the game: losing score, deactivated status,
    /// immediate end. No partial move is ever applied on this path.
    pub fn deactivate(&mut self, player: PlayerId, reason: ForfeitReason) {
        if self.is_finished() {
            return;
        }
        self.players[player].forfeit(reason);
        self.finish(self.compare_scores(), FinishReason::Forfeit);
    }

    // === Snapshots ===

    /// Serialize the complete state (board, scores, active player, turn,
    /// history) for persistence or replay.
    pub fn snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Restore a state previously produced by [`GameState::snapshot`].
    pub fn restore(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }

    // === Internals ===

    fn compare_scores(&self) -> GameResult {
        let p0 = self.players[PlayerId::new(0)].score();
        let p1 = self.players[PlayerId::new(1)].score();
        match p0.cmp(&p1) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::new(0)),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::new(1)),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    fn finish(&mut self, result: GameResult, reason: FinishReason) {
        self.outcome = Some(TerminalResult {
            result,
            reason,
            scores: self.scores(),
        });
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
