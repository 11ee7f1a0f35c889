//! Board representation: 12 houses of seeds.
//!
//! The board is a plain value type; all mutation goes through the rules
//! and the game state. Indexing by [`House`] is bounds-safe by
//! construction.

mod house;

pub use house::{House, HOUSE_COUNT, ROW_LEN};

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Seeds per house in the opening position.
pub const INITIAL_SEEDS: u8 = 4;

/// Total seeds in play at game start (4 seeds in each of 12 houses).
pub const TOTAL_SEEDS: u32 = INITIAL_SEEDS as u32 * HOUSE_COUNT as u32;

/// The 12-house seed layout.
///
/// Counts are never negative; a `u8` comfortably holds the 48-seed
/// maximum any single house can accumulate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    houses: [u8; HOUSE_COUNT],
}

impl Board {
    /// The opening position: 4 seeds in every house.
    #[must_use]
    pub fn new() -> Self {
        Self {
            houses: [INITIAL_SEEDS; HOUSE_COUNT],
        }
    }

    /// Build a board from explicit house counts, index 0 first.
    #[must_use]
    pub fn from_houses(houses: [u8; HOUSE_COUNT]) -> Self {
        Self { houses }
    }

    /// Seed count of a single house.
    #[must_use]
    pub fn seeds(&self, house: House) -> u8 {
        self.houses[house.index()]
    }

    /// All 12 house counts, index 0 first.
    #[must_use]
    pub fn counts(&self) -> [u8; HOUSE_COUNT] {
        self.houses
    }

    /// Copy out one player's row, own-row order.
    #[must_use]
    pub fn row(&self, player: PlayerId) -> [u8; ROW_LEN] {
        let start = player.index() * ROW_LEN;
        let mut row = [0; ROW_LEN];
        row.copy_from_slice(&self.houses[start..start + ROW_LEN]);
        row
    }

    /// Whether every house in `player`'s row is empty.
    #[must_use]
    pub fn row_is_empty(&self, player: PlayerId) -> bool {
        House::row(player).all(|h| self.seeds(h) == 0)
    }

    /// Sum of seeds in `player`'s row.
    #[must_use]
    pub fn row_total(&self, player: PlayerId) -> u32 {
        House::row(player).map(|h| u32::from(self.seeds(h))).sum()
    }

    /// Sum of seeds on the whole board.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.houses.iter().map(|&n| u32::from(n)).sum()
    }

    /// Take every seed out of a house, returning how many were there.
    pub(crate) fn pick(&mut self, house: House) -> u8 {
        std::mem::take(&mut self.houses[house.index()])
    }

    /// Deposit a single seed into a house.
    pub(crate) fn drop_seed(&mut self, house: House) {
        self.houses[house.index()] += 1;
    }

    /// Overwrite a house's seed count.
    pub(crate) fn set(&mut self, house: House, seeds: u8) {
        self.houses[house.index()] = seeds;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<House> for Board {
    type Output = u8;

    fn index(&self, house: House) -> &Self::Output {
        &self.houses[house.index()]
    }
}
