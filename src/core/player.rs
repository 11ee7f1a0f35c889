//! Player identity and per-player records.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two seats. Player 0 owns houses 0-5,
//! player 1 owns houses 6-11.
//!
//! ## PlayerPair
//!
//! Fixed two-slot per-player storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! The per-seat record: accumulated score and activity status. It is
//! mutated only by the turn/termination policy in
//! [`GameState`](crate::core::GameState) — the sowing algorithm itself
//! never touches a player record.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Identifier for one of the two seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Create a player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub fn new(id: u8) -> Self {
        assert!(id < 2, "player id must be 0 or 1");
        Self(id)
    }

    /// Get the raw seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing seat.
    #[must_use]
    pub fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats, player 0 first.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        (0..2).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player storage with O(1) access, indexed by `PlayerId`.
///
/// ## Example
///
/// ```
/// use oware_engine::core::{PlayerId, PlayerPair};
///
/// let mut scores: PlayerPair<i32> = PlayerPair::with_value(0);
/// scores[PlayerId::new(1)] = 12;
/// assert_eq!(scores[PlayerId::new(0)], 0);
/// assert_eq!(scores[PlayerId::new(1)], 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId(0)), factory(PlayerId(1))],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a pair from the two entries, player 0's first.
    #[must_use]
    pub fn from_parts(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Get a reference to a player's entry.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's entry.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over `(PlayerId, &T)` pairs, player 0 first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Map both entries to a new pair.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerPair<U> {
        PlayerPair {
            data: [f(&self.data[0]), f(&self.data[1])],
        }
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Why a player was removed from the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForfeitReason {
    /// The chosen house failed move validation.
    InvalidMove,
    /// The agent's response could not be understood.
    MalformedResponse,
    /// The agent missed its response deadline.
    Timeout,
}

impl std::fmt::Display for ForfeitReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ForfeitReason::InvalidMove => "invalid move",
            ForfeitReason::MalformedResponse => "malformed response",
            ForfeitReason::Timeout => "timeout",
        };
        f.write_str(text)
    }
}

/// Activity status of a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Still playing.
    Active,
    /// Removed from the game; the game ends immediately.
    Deactivated(ForfeitReason),
}

/// One seat's record: identity, accumulated score, activity status.
///
/// The score is non-negative and non-decreasing during normal play.
/// A forfeit assigns the losing score of -1 so the deactivated player
/// loses the final comparison even at 0-0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    score: i32,
    status: PlayerStatus,
}

impl Player {
    /// A fresh seat with zero score.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            score: 0,
            status: PlayerStatus::Active,
        }
    }

    /// This seat's identity.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Accumulated score.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Activity status.
    #[must_use]
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Whether the seat is still playing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    pub(crate) fn add_score(&mut self, delta: u32) {
        self.score += delta as i32;
    }

    pub(crate) fn forfeit(&mut self, reason: ForfeitReason) {
        self.status = PlayerStatus::Deactivated(reason);
        self.score = -1;
    }
}
