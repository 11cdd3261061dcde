//! # rust-kalah
//!
//! A two-player Kalah (Mancala) engine with a heuristic computer opponent.
//!
//! ## Rules
//!
//! - Six sowing pits and one store per side, four pieces per pit at start
//! - A move lifts a pit and sows forward one piece per pit, skipping the
//!   opponent's store
//! - Last piece in your own store: move again
//! - Last piece in an empty pit whose mirror is occupied: capture both
//! - The match ends when either side's pits are empty; remaining pieces go
//!   to their owner's store and the larger store wins
//!
//! ## Modules
//!
//! - `core`: Board layout, sides, RNG, configuration, move errors
//! - `rules`: `GameState`, the rules engine
//! - `ai`: Three-tier move heuristic and `MovePolicy` players
//! - `game`: Match driver and match records

pub mod core;
pub mod rules;
pub mod ai;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Board, GameRng, MatchConfig, MoveError, Side, SideMap};

pub use crate::rules::{GameState, MoveOutcome, Outcome};

pub use crate::ai::{choose_move, evaluate_move, HeuristicPolicy, MoveChoice, MovePolicy, RandomPolicy, Tier};

pub use crate::game::{MatchDriver, MatchRecord, Ply};
