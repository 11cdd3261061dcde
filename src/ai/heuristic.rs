//! Three-tier move heuristic for the computer player.
//!
//! Tiers are tried in order and the first that yields a move wins:
//!
//! 1. **Extra turn**: the first pit (ascending) whose last piece lands in
//!    the side's own store.
//! 2. **Capture**: the pit whose last piece lands on an empty pit with the
//!    fullest mirror. Ties go to the lowest pit.
//! 3. **Random**: any non-empty pit, uniformly.
//!
//! Landing positions are computed by sowing on a copy of the board, so the
//! walk (wrap-around, opponent store skipped) is exactly the one
//! `GameState::apply_move` performs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, GameRng, Side};
use crate::rules::PitList;

/// Which tier produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// Last piece lands in the mover's store.
    ExtraTurn,
    /// Last piece captures `value` pieces from the mirror pit.
    Capture { value: u8 },
    /// Nothing better; picked at random.
    Random,
}

/// A pit together with the reason it was picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveChoice {
    pub pit: usize,
    pub tier: Tier,
}

/// Pick a pit for `side`. See the module docs for the policy.
///
/// # Panics
///
/// Panics if `side` has no non-empty sowing pit.
pub fn choose_move(board: &Board, side: Side, rng: &mut GameRng) -> usize {
    evaluate_move(board, side, rng).pit
}

/// `choose_move`, also reporting which tier fired.
///
/// # Panics
///
/// Panics if `side` has no non-empty sowing pit.
pub fn evaluate_move(board: &Board, side: Side, rng: &mut GameRng) -> MoveChoice {
    let candidates: PitList = side.pits().filter(|&pit| board[pit] > 0).collect();
    assert!(!candidates.is_empty(), "side {side} has no legal move");

    let choice = extra_turn(board, side, &candidates)
        .or_else(|| best_capture(board, side, &candidates))
        .unwrap_or_else(|| MoveChoice {
            pit: candidates[rng.gen_range_usize(0..candidates.len())],
            tier: Tier::Random,
        });

    debug!(side = %side, pit = choice.pit, tier = ?choice.tier, "heuristic move");
    choice
}

fn extra_turn(board: &Board, side: Side, candidates: &[usize]) -> Option<MoveChoice> {
    candidates
        .iter()
        .find(|&&pit| board.landing(pit, side) == side.store())
        .map(|&pit| MoveChoice {
            pit,
            tier: Tier::ExtraTurn,
        })
}

fn best_capture(board: &Board, side: Side, candidates: &[usize]) -> Option<MoveChoice> {
    let mut best: Option<MoveChoice> = None;
    let mut best_value = 0;

    for &pit in candidates {
        let (after, last) = board.sown(pit, side);
        // One piece after the final deposit means it was empty just before.
        if after[last] != 1 {
            continue;
        }
        let Some(mirror) = Board::mirror(last) else {
            continue;
        };
        if mirror == pit {
            continue;
        }
        let value = after[mirror];
        if value > best_value {
            best_value = value;
            best = Some(MoveChoice {
                pit,
                tier: Tier::Capture { value },
            });
        }
    }

    best
}
