//! Game rules for Kalah.
//!
//! `GameState` is the rules engine:
//! - Sowing with the opponent's store skipped
//! - Captures and repeat turns
//! - End detection, final sweep and winner

pub mod engine;

pub use engine::{GameState, MoveOutcome, Outcome, PitList};
