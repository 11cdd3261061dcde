//! The fixed 14-pit Kalah board.
//!
//! ## Layout
//!
//! ```text
//!        12  11  10   9   8   7
//!   13                            6
//!         0   1   2   3   4   5
//! ```
//!
//! - `0..6`: Side A's sowing pits, `6`: Side A's store
//! - `7..13`: Side B's sowing pits, `13`: Side B's store
//!
//! Sowing walks forward (counter-clockwise in the picture above), wrapping
//! from 13 to 0 and skipping the opponent's store.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::side::Side;

/// Number of pits including both stores.
pub const PIT_COUNT: usize = 14;

/// Sowing pits per side.
pub const PITS_PER_SIDE: usize = 6;

/// Pieces placed in every sowing pit at the start of a match.
pub const STARTING_PIECES: u8 = 4;

/// Pieces on the board for the whole match.
pub const TOTAL_PIECES: u32 = (2 * PITS_PER_SIDE) as u32 * STARTING_PIECES as u32;

/// Piece counts for all 14 pits.
///
/// `Board` is a plain value; the game engine owns one and hands out shared
/// references, so analysis code can copy it freely and sow on the copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pits: [u8; PIT_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: four pieces in every sowing pit, empty stores.
    #[must_use]
    pub fn new() -> Self {
        let mut pits = [STARTING_PIECES; PIT_COUNT];
        for side in Side::ALL {
            pits[side.store()] = 0;
        }
        Self { pits }
    }

    /// A board with every pit empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            pits: [0; PIT_COUNT],
        }
    }

    /// Build a board from explicit counts (index order as in the module docs).
    #[must_use]
    pub const fn from_pits(pits: [u8; PIT_COUNT]) -> Self {
        Self { pits }
    }

    /// Read-only view of all 14 counters.
    #[must_use]
    pub fn pits(&self) -> &[u8; PIT_COUNT] {
        &self.pits
    }

    /// Count in a single pit.
    #[must_use]
    pub fn get(&self, pit: usize) -> u8 {
        self.pits[pit]
    }

    /// Count in a side's store.
    #[must_use]
    pub fn store(&self, side: Side) -> u8 {
        self.pits[side.store()]
    }

    /// Sum over all 14 counters.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.pits.iter().map(|&n| u32::from(n)).sum()
    }

    /// Sum of a side's six sowing pits, excluding its store.
    #[must_use]
    pub fn side_sum(&self, side: Side) -> u32 {
        side.pits().map(|i| u32::from(self.pits[i])).sum()
    }

    /// Is `pit` one of the two stores?
    #[must_use]
    pub fn is_store(pit: usize) -> bool {
        Side::ALL.iter().any(|s| s.store() == pit)
    }

    /// Which side's sowing pit `pit` is. `None` for stores and out-of-range indices.
    #[must_use]
    pub fn owner(pit: usize) -> Option<Side> {
        Side::ALL.into_iter().find(|s| s.owns(pit))
    }

    /// The sowing pit directly across from `pit`.
    ///
    /// Stores have no mirror.
    ///
    /// ```
    /// use rust_kalah::core::Board;
    ///
    /// assert_eq!(Board::mirror(0), Some(12));
    /// assert_eq!(Board::mirror(9), Some(3));
    /// assert_eq!(Board::mirror(6), None);
    /// ```
    #[must_use]
    pub fn mirror(pit: usize) -> Option<usize> {
        if pit >= PIT_COUNT || Self::is_store(pit) {
            return None;
        }
        Some(PIT_COUNT - 2 - pit)
    }

    /// The index after `pit` when `side` is sowing.
    #[must_use]
    pub fn next_pit(pit: usize, side: Side) -> usize {
        let next = (pit + 1) % PIT_COUNT;
        if next == side.skip() {
            (next + 1) % PIT_COUNT
        } else {
            next
        }
    }

    /// Lift every piece from `from` and sow them one by one for `side`.
    ///
    /// Returns the index that received the last piece. Captures and turn
    /// rules are not applied here.
    pub fn sow(&mut self, from: usize, side: Side) -> usize {
        let mut hand = std::mem::take(&mut self.pits[from]);
        let mut pos = from;
        while hand > 0 {
            pos = Self::next_pit(pos, side);
            self.pits[pos] += 1;
            hand -= 1;
        }
        pos
    }

    /// Sow on a copy. Returns the resulting board and the landing index.
    #[must_use]
    pub fn sown(&self, from: usize, side: Side) -> (Board, usize) {
        let mut scratch = *self;
        let last = scratch.sow(from, side);
        (scratch, last)
    }

    /// Where the last piece from `from` would land, without mutating.
    #[must_use]
    pub fn landing(&self, from: usize, side: Side) -> usize {
        self.sown(from, side).1
    }

    /// Empty `pit`, returning what it held.
    pub(crate) fn take(&mut self, pit: usize) -> u8 {
        std::mem::take(&mut self.pits[pit])
    }

    /// Add `count` pieces to `pit`.
    pub(crate) fn add(&mut self, pit: usize, count: u8) {
        self.pits[pit] += count;
    }
}

impl Index<usize> for Board {
    type Output = u8;

    fn index(&self, pit: usize) -> &Self::Output {
        &self.pits[pit]
    }
}

/// ASCII rendering: B's row on top (right to left), stores at the ends,
/// A's row on the bottom.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "-".repeat(31);
        writeln!(f, "{rule}")?;
        write!(f, "|  ")?;
        for pit in Side::B.pits().rev() {
            write!(f, "| {:<2}", self.pits[pit])?;
        }
        writeln!(f, "|  |")?;
        writeln!(
            f,
            "|{:<2}|-----------------------|{:>2}|",
            self.store(Side::B),
            self.store(Side::A)
        )?;
        write!(f, "|  ")?;
        for pit in Side::A.pits() {
            write!(f, "| {:<2}", self.pits[pit])?;
        }
        writeln!(f, "|  |")?;
        write!(f, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let board = Board::new();
        assert_eq!(board.total(), TOTAL_PIECES);
        assert_eq!(board.total(), 48);
        assert_eq!(board.store(Side::A), 0);
        assert_eq!(board.store(Side::B), 0);
        assert_eq!(board.side_sum(Side::A), 24);
        assert_eq!(board.side_sum(Side::B), 24);
    }

    #[test]
    fn test_mirror_pairs() {
        for pit in 0..PIT_COUNT {
            match Board::mirror(pit) {
                Some(m) => {
                    assert_eq!(Board::mirror(m), Some(pit));
                    assert_ne!(Board::owner(m), Board::owner(pit));
                }
                None => assert!(Board::is_store(pit)),
            }
        }
        assert_eq!(Board::mirror(14), None);
    }

    #[test]
    fn test_owner() {
        assert_eq!(Board::owner(0), Some(Side::A));
        assert_eq!(Board::owner(5), Some(Side::A));
        assert_eq!(Board::owner(6), None);
        assert_eq!(Board::owner(7), Some(Side::B));
        assert_eq!(Board::owner(13), None);
    }

    #[test]
    fn test_next_pit_skips_opponent_store() {
        assert_eq!(Board::next_pit(5, Side::A), 6);
        assert_eq!(Board::next_pit(12, Side::A), 0);
        assert_eq!(Board::next_pit(12, Side::B), 13);
        assert_eq!(Board::next_pit(5, Side::B), 7);
        assert_eq!(Board::next_pit(13, Side::B), 0);
    }

    #[test]
    fn test_sow_simple() {
        let mut board = Board::new();
        let last = board.sow(2, Side::A);
        assert_eq!(last, 6);
        assert_eq!(board.get(2), 0);
        assert_eq!(board.pits()[3..7], [5, 5, 5, 1]);
        assert_eq!(board.total(), 48);
    }

    #[test]
    fn test_sow_wraps_and_skips() {
        let mut pits = [0u8; PIT_COUNT];
        pits[5] = 10;
        let mut board = Board::from_pits(pits);

        // 6, 7..=12, (13 skipped), 0, 1, 2
        let last = board.sow(5, Side::A);
        assert_eq!(last, 2);
        assert_eq!(board.get(13), 0);
        assert_eq!(board.get(6), 1);
        assert_eq!(board.get(0), 1);
        assert_eq!(board.get(2), 1);
        assert_eq!(board.total(), 10);
    }

    #[test]
    fn test_full_lap_refills_source() {
        let mut pits = [0u8; PIT_COUNT];
        pits[0] = 13;
        let mut board = Board::from_pits(pits);

        let last = board.sow(0, Side::A);
        assert_eq!(last, 0);
        assert_eq!(board.get(0), 1);
        assert_eq!(board.get(13), 0);
    }

    #[test]
    fn test_sown_leaves_source_board() {
        let board = Board::new();
        let (after, last) = board.sown(9, Side::B);
        assert_eq!(last, 13);
        assert_eq!(board, Board::new());
        assert_eq!(after.get(9), 0);
        assert_eq!(after.store(Side::B), 1);
        assert_eq!(board.landing(9, Side::B), 13);
    }

    #[test]
    fn test_display() {
        let rendered = Board::new().to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.len() == 31));
        assert_eq!(lines[1], "|  | 4 | 4 | 4 | 4 | 4 | 4 |  |");
        assert_eq!(lines[2], "|0 |-----------------------| 0|");
    }

    #[test]
    fn test_serialization() {
        let board = Board::new();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
