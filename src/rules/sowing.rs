//! The sow/capture/grand-slam algorithm.
//!
//! One move resolves in four steps over the board alone — scores and
//! player records are applied afterwards by the turn policy from the
//! returned [`MoveOutcome`]:
//!
//! 1. **Pick**: empty the origin house.
//! 2. **Sow**: one seed per house counter-clockwise from origin+1. The
//!    origin itself never receives a seed; when the walk wraps onto it,
//!    it advances one extra step.
//! 3. **Capture scan**: from the landing house walk backward while the
//!    house is in the opponent's row and holds exactly 2 or 3 seeds,
//!    zeroing and recording each. The first house that breaks either
//!    condition stops the scan.
//! 4. **Grand-slam veto**: if the opponent's row is now entirely empty,
//!    the capture is void — the captured list is discarded, no score is
//!    awarded, and the origin house gets its pre-move count back. Sown
//!    seeds stay where they landed and houses zeroed by the scan stay
//!    zeroed; only the pick is undone. The veto therefore lowers the
//!    board-plus-scores seed total, the one exception to conservation.

use smallvec::SmallVec;

use crate::board::{Board, House, HOUSE_COUNT};
use crate::core::PlayerId;

use super::outcome::MoveOutcome;

/// Seed counts that qualify a house for capture after sowing.
const CAPTURE_COUNTS: [u8; 2] = [2, 3];

/// Resolve one move on the board and report what it did.
///
/// The move must already have passed the legality rule; this function
/// assumes a non-empty origin on the acting player's row and applies
/// the algorithm unconditionally.
pub fn sow_and_capture(board: &mut Board, player: PlayerId, origin: House) -> MoveOutcome {
    // Pick
    let seeds = board.pick(origin);
    debug_assert!(seeds > 0, "sow from an empty house");

    // Sow, skipping the origin on wrap-around
    let mut sown = Vec::with_capacity(seeds as usize);
    let mut skip = 0usize;
    for step in 1..=seeds as usize {
        if (origin.index() + step + skip) % HOUSE_COUNT == origin.index() {
            skip += 1;
        }
        let target = origin.offset(step + skip);
        board.drop_seed(target);
        sown.push(target);
    }
    let landing = origin.offset(seeds as usize + skip);

    // Capture scan, backward from the landing house
    let pre_capture = *board;
    let mut captured: SmallVec<[House; 6]> = SmallVec::new();
    let mut current = landing;
    while current.owner() == player.other() && CAPTURE_COUNTS.contains(&board.seeds(current)) {
        board.set(current, 0);
        captured.push(current);
        current = current.prev();
    }

    // Grand-slam veto: only the pick is reverted
    let grand_slam = board.row_is_empty(player.other());
    let score_delta = if grand_slam {
        captured.clear();
        board.set(origin, seeds);
        0
    } else {
        captured
            .iter()
            .map(|&h| u32::from(pre_capture.seeds(h)))
            .sum()
    };

    MoveOutcome {
        player,
        origin,
        sown,
        captured,
        score_delta,
        grand_slam,
    }
}
