//! Errors reported by move validation.
//!
//! `GameState::apply_move` itself never fails; these are produced by the
//! validating layer that front ends call before applying a move.

use super::side::Side;

/// Reasons a requested move is not legal.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("choice {0} is outside 1-6")]
    ChoiceOutOfRange(usize),
    #[error("pit {0} is not on the board")]
    PitOutOfRange(usize),
    #[error("pit {0} is a store")]
    StorePit(usize),
    #[error("pit {pit} does not belong to side {side}")]
    NotOwned { pit: usize, side: Side },
    #[error("pit {0} is empty")]
    EmptyPit(usize),
    #[error("the game is over")]
    GameOver,
}
