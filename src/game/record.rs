//! Move-by-move record of a finished, truncated or abandoned match.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Side, SideMap};
use crate::rules::{MoveOutcome, Outcome};

/// One application of `apply_move`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ply {
    /// Ply number in the match (0-indexed).
    pub number: usize,

    /// The side that moved.
    pub side: Side,

    /// What the move did.
    pub outcome: MoveOutcome,

    /// Board after the move.
    pub board_after: Board,
}

impl Ply {
    /// Create a new ply.
    pub fn new(number: usize, side: Side, outcome: MoveOutcome, board_after: Board) -> Self {
        Self {
            number,
            side,
            outcome,
            board_after,
        }
    }
}

/// A complete match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// `MatchConfig::seed` of the driver that played the match.
    pub seed: u64,

    /// All plies in order.
    pub plies: Vec<Ply>,

    /// Final result. `None` if the match hit the ply limit or was abandoned.
    pub outcome: Option<Outcome>,

    /// Store totals after the final sweep.
    pub final_stores: SideMap<u8>,

    /// The ply limit stopped the match before either side ran out.
    pub truncated: bool,

    /// The side whose player declined to move.
    pub abandoned_by: Option<Side>,
}

impl MatchRecord {
    /// Create an empty record.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            plies: Vec::new(),
            outcome: None,
            final_stores: SideMap::default(),
            truncated: false,
            abandoned_by: None,
        }
    }

    /// Append a ply.
    pub fn push(&mut self, ply: Ply) {
        self.plies.push(ply);
    }

    /// Record the result.
    pub fn finish(&mut self, outcome: Option<Outcome>, final_stores: SideMap<u8>) {
        self.outcome = outcome;
        self.final_stores = final_stores;
    }

    /// Whether the match was played until one side ran out of pieces.
    pub fn is_complete(&self) -> bool {
        !self.truncated && self.abandoned_by.is_none()
    }

    /// Number of plies played.
    pub fn len(&self) -> usize {
        self.plies.len()
    }

    /// Check if no plies were played.
    pub fn is_empty(&self) -> bool {
        self.plies.is_empty()
    }

    /// Plies made by one side.
    pub fn plies_by(&self, side: Side) -> impl Iterator<Item = &Ply> {
        self.plies.iter().filter(move |p| p.side == side)
    }

    /// Number of captures made by `side`.
    pub fn captures(&self, side: Side) -> usize {
        self.plies_by(side)
            .filter(|p| p.outcome.captured.is_some())
            .count()
    }

    /// Number of repeat turns earned by `side`.
    pub fn repeat_turns(&self, side: Side) -> usize {
        self.plies_by(side).filter(|p| p.outcome.repeat_turn).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ply(number: usize, side: Side, captured: Option<u8>, repeat_turn: bool) -> Ply {
        Ply::new(
            number,
            side,
            MoveOutcome {
                pit: 0,
                last_pit: 1,
                captured,
                repeat_turn,
            },
            Board::new(),
        )
    }

    #[test]
    fn test_record_counts() {
        let mut record = MatchRecord::new(42);
        assert!(record.is_empty());

        record.push(ply(0, Side::A, None, true));
        record.push(ply(1, Side::A, Some(5), false));
        record.push(ply(2, Side::B, Some(2), false));
        record.push(ply(3, Side::A, None, false));

        assert_eq!(record.len(), 4);
        assert_eq!(record.plies_by(Side::A).count(), 3);
        assert_eq!(record.captures(Side::A), 1);
        assert_eq!(record.captures(Side::B), 1);
        assert_eq!(record.repeat_turns(Side::A), 1);
        assert_eq!(record.repeat_turns(Side::B), 0);
    }

    #[test]
    fn test_finish() {
        let mut record = MatchRecord::new(1);
        assert_eq!(record.outcome, None);
        assert!(record.is_complete());

        record.finish(Some(Outcome::Winner(Side::A)), SideMap::new(30, 18));
        assert_eq!(record.outcome, Some(Outcome::Winner(Side::A)));
        assert_eq!(record.final_stores[Side::B], 18);
    }

    #[test]
    fn test_abandoned_is_incomplete() {
        let mut record = MatchRecord::new(1);
        record.abandoned_by = Some(Side::B);
        assert!(!record.is_complete());

        let mut record = MatchRecord::new(1);
        record.truncated = true;
        assert!(!record.is_complete());
    }

    #[test]
    fn test_serialization() {
        let mut record = MatchRecord::new(3);
        record.push(ply(0, Side::B, None, false));
        record.finish(Some(Outcome::Tie), SideMap::new(24, 24));

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MatchRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
