//! Kalah rules: sowing, capture, repeat turns, end detection and scoring.
//!
//! `GameState` owns the board for one match. The only mutations are
//! `apply_move`, `switch_turn`, `reset` and `finalize_and_get_winner`.
//!
//! ## Turn Structure
//!
//! ```
//! use rust_kalah::core::Side;
//! use rust_kalah::rules::GameState;
//!
//! let mut game = GameState::new(false);
//!
//! // Four pieces from pit 2 end in A's store: A moves again.
//! assert!(game.apply_move(2));
//! assert_eq!(game.current_turn(), Side::A);
//!
//! // This one ends on B's side, so the turn passes.
//! assert!(!game.apply_move(5));
//! game.switch_turn();
//! assert_eq!(game.current_turn(), Side::B);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Board, MoveError, Side, SideMap, PIT_COUNT, PITS_PER_SIDE};

/// Final result of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One side finished with strictly more pieces in its store.
    Winner(Side),
    /// Both stores hold the same count.
    Tie,
}

impl Outcome {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, Outcome::Winner(s) if *s == side)
    }

    /// The winning side, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Winner(s) => Some(*s),
            Outcome::Tie => None,
        }
    }
}

/// What a single `apply_move` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Pit the pieces were lifted from.
    pub pit: usize,
    /// Pit that received the last piece.
    pub last_pit: usize,
    /// Pieces moved into the mover's store by a capture (landed piece included).
    pub captured: Option<u8>,
    /// The mover plays again.
    pub repeat_turn: bool,
}

/// Legal source pits for one side, ascending.
pub type PitList = SmallVec<[usize; PITS_PER_SIDE]>;

/// Board, side to move, and whether B is computer-controlled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Side,
    vs_computer: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl GameState {
    /// A fresh match with Side A to move.
    #[must_use]
    pub fn new(vs_computer: bool) -> Self {
        Self {
            board: Board::new(),
            turn: Side::A,
            vs_computer,
        }
    }

    /// Start from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, turn: Side, vs_computer: bool) -> Self {
        Self {
            board,
            turn,
            vs_computer,
        }
    }

    /// Put every sowing pit back to four pieces, empty both stores, A to move.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Side::A;
    }

    /// Read-only board snapshot.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    #[must_use]
    pub fn current_turn(&self) -> Side {
        self.turn
    }

    /// Is Side B played by the computer?
    #[must_use]
    pub fn vs_computer(&self) -> bool {
        self.vs_computer
    }

    /// Change who plays Side B. Takes effect from the next move.
    pub fn set_vs_computer(&mut self, vs_computer: bool) {
        self.vs_computer = vs_computer;
    }

    /// Is `side` controlled by the computer in this match?
    #[must_use]
    pub fn is_computer(&self, side: Side) -> bool {
        self.vs_computer && side == Side::B
    }

    /// Pass the turn to the other side. The board is untouched.
    pub fn switch_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Pieces in `side`'s six sowing pits, store excluded.
    #[must_use]
    pub fn side_sum(&self, side: Side) -> u32 {
        self.board.side_sum(side)
    }

    /// Pieces in `side`'s store.
    #[must_use]
    pub fn store(&self, side: Side) -> u8 {
        self.board.store(side)
    }

    /// Both stores.
    #[must_use]
    pub fn stores(&self) -> SideMap<u8> {
        SideMap::from_fn(|side| self.board.store(side))
    }

    /// The match is over once either side's sowing pits are all empty.
    #[must_use]
    pub fn is_over(&self) -> bool {
        Side::ALL.iter().any(|&side| self.side_sum(side) == 0)
    }

    /// Non-empty pits of the side to move, ascending. Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> PitList {
        if self.is_over() {
            return PitList::new();
        }
        self.turn.pits().filter(|&pit| self.board[pit] > 0).collect()
    }

    /// Check that `pit` may be played by the side to move.
    pub fn validate_move(&self, pit: usize) -> Result<(), MoveError> {
        if pit >= PIT_COUNT {
            return Err(MoveError::PitOutOfRange(pit));
        }
        if Board::is_store(pit) {
            return Err(MoveError::StorePit(pit));
        }
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.turn.owns(pit) {
            return Err(MoveError::NotOwned {
                pit,
                side: self.turn,
            });
        }
        if self.board[pit] == 0 {
            return Err(MoveError::EmptyPit(pit));
        }
        Ok(())
    }

    /// Validate, then apply.
    pub fn try_move(&mut self, pit: usize) -> Result<MoveOutcome, MoveError> {
        self.validate_move(pit)?;
        Ok(self.apply_move_detailed(pit))
    }

    /// Play `pit` for the side to move.
    ///
    /// Returns `true` when the same side must move again. The pit must be a
    /// non-empty sowing pit of the side to move; use `validate_move` or
    /// `try_move` for unchecked input.
    pub fn apply_move(&mut self, pit: usize) -> bool {
        self.apply_move_detailed(pit).repeat_turn
    }

    /// `apply_move`, reporting the landing pit and any capture.
    ///
    /// A capture happens when the last piece lands anywhere other than the
    /// mover's store on a pit that was empty and whose mirror is not. Landing
    /// piece and mirror contents go to the mover's store. A capture never
    /// grants a repeat turn.
    pub fn apply_move_detailed(&mut self, pit: usize) -> MoveOutcome {
        let mover = self.turn;
        debug_assert!(mover.owns(pit), "pit {pit} is not owned by side {mover}");
        debug_assert!(self.board[pit] > 0, "pit {pit} is empty");

        let last_pit = self.board.sow(pit, mover);

        let mut captured = None;
        if last_pit != mover.store() && self.board[last_pit] == 1 {
            if let Some(mirror) = Board::mirror(last_pit) {
                if self.board[mirror] > 0 {
                    let taken = self.board.take(last_pit) + self.board.take(mirror);
                    self.board.add(mover.store(), taken);
                    captured = Some(taken);
                    debug!(side = %mover, pit, last_pit, mirror, taken, "capture");
                }
            }
        }

        let repeat_turn = captured.is_none() && !self.is_over() && last_pit == mover.store();
        if repeat_turn {
            debug!(side = %mover, pit, "landed in store, moving again");
        }

        MoveOutcome {
            pit,
            last_pit,
            captured,
            repeat_turn,
        }
    }

    /// Sweep remaining pieces into their owners' stores and decide the match.
    ///
    /// This both computes the result and mutates the board: every sowing
    /// pit is emptied into its own side's store. Call it once, after the
    /// last move and before displaying final scores. Calling it again
    /// leaves the stores unchanged.
    ///
    /// Returns `None` without touching the board if the match is not over.
    pub fn finalize_and_get_winner(&mut self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }

        for side in Side::ALL {
            let mut remaining = 0u8;
            for pit in side.pits() {
                remaining += self.board.take(pit);
            }
            self.board.add(side.store(), remaining);
        }

        let (a, b) = (self.store(Side::A), self.store(Side::B));
        let outcome = match a.cmp(&b) {
            std::cmp::Ordering::Greater => Outcome::Winner(Side::A),
            std::cmp::Ordering::Less => Outcome::Winner(Side::B),
            std::cmp::Ordering::Equal => Outcome::Tie,
        };
        debug!(store_a = a, store_b = b, ?outcome, "match finalized");
        Some(outcome)
    }
}
