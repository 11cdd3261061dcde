//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two players of a Kalah match. Store and skip indices are looked up
//! in a constant table computed from the fixed board layout, so a `Side`
//! carries no data of its own.
//!
//! ## SideMap
//!
//! Per-side data storage backed by a two-element array, indexable by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Range};

use super::board::{PITS_PER_SIDE, PIT_COUNT};
use super::error::MoveError;

/// Board layout of one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideInfo {
    /// First sowing pit owned by the side.
    pub first_pit: usize,
    /// The side's own store.
    pub store: usize,
    /// The opponent's store, never sown into by this side.
    pub skip: usize,
}

const STORE_A: usize = (PIT_COUNT - 2) / 2;
const STORE_B: usize = PIT_COUNT - 1;

/// Layout table indexed by `Side::index()`.
pub const SIDE_TABLE: [SideInfo; 2] = [
    SideInfo {
        first_pit: 0,
        store: STORE_A,
        skip: STORE_B,
    },
    SideInfo {
        first_pit: STORE_A + 1,
        store: STORE_B,
        skip: STORE_A,
    },
];

/// One of the two players.
///
/// Side A moves first and owns pits 0-5 and store 6.
/// Side B owns pits 7-12 and store 13.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    /// Index into per-side tables (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    /// Layout entry for this side.
    #[must_use]
    pub const fn info(self) -> SideInfo {
        SIDE_TABLE[self.index()]
    }

    /// Index of this side's store.
    #[must_use]
    pub const fn store(self) -> usize {
        self.info().store
    }

    /// Index this side skips while sowing (the opponent's store).
    #[must_use]
    pub const fn skip(self) -> usize {
        self.info().skip
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Board indices of this side's six sowing pits, ascending.
    pub fn pits(self) -> Range<usize> {
        let first = self.info().first_pit;
        first..first + PITS_PER_SIDE
    }

    /// Does `pit` belong to this side's sowing pits?
    #[must_use]
    pub fn owns(self, pit: usize) -> bool {
        self.pits().contains(&pit)
    }

    /// Map a player-facing choice (1-6) to a board index.
    ///
    /// Side A counts left to right from pit 0; Side B counts from the
    /// opposite end so both players see "1" on their own left.
    ///
    /// ```
    /// use rust_kalah::core::Side;
    ///
    /// assert_eq!(Side::A.pit_for_choice(1), Ok(0));
    /// assert_eq!(Side::B.pit_for_choice(1), Ok(12));
    /// assert!(Side::A.pit_for_choice(7).is_err());
    /// ```
    pub fn pit_for_choice(self, choice: u8) -> Result<usize, MoveError> {
        let choice = choice as usize;
        if !(1..=PITS_PER_SIDE).contains(&choice) {
            return Err(MoveError::ChoiceOutOfRange(choice));
        }
        Ok(match self {
            Side::A => choice - 1,
            Side::B => PIT_COUNT - 1 - choice,
        })
    }

    /// Inverse of `pit_for_choice`. Returns `None` for pits this side does not own.
    #[must_use]
    pub fn choice_for_pit(self, pit: usize) -> Option<u8> {
        if !self.owns(pit) {
            return None;
        }
        let choice = match self {
            Side::A => pit + 1,
            Side::B => PIT_COUNT - 1 - pit,
        };
        Some(choice as u8)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Per-side data storage.
///
/// ```
/// use rust_kalah::core::{Side, SideMap};
///
/// let mut stores: SideMap<u32> = SideMap::default();
/// stores[Side::B] = 30;
/// assert_eq!(stores[Side::A], 0);
/// assert_eq!(stores[Side::B], 30);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map from explicit values for A and B.
    pub const fn new(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::A), factory(Side::B)],
        }
    }

    /// Iterate over (Side, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self.data[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.data[side.index()]
    }
}
