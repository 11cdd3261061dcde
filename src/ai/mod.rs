//! Computer opponent.
//!
//! - `heuristic`: the three-tier move ranking (extra turn, capture, random)
//! - `policy`: the `MovePolicy` trait the match driver plays through
//!
//! ## Example
//!
//! ```
//! use rust_kalah::ai::choose_move;
//! use rust_kalah::core::{GameRng, Side};
//! use rust_kalah::rules::GameState;
//!
//! let game = GameState::new(true);
//! let mut rng = GameRng::new(7);
//!
//! // From the opening, B's pit 9 ends in B's store.
//! assert_eq!(choose_move(game.board(), Side::B, &mut rng), 9);
//! ```

pub mod heuristic;
pub mod policy;

pub use heuristic::{choose_move, evaluate_move, MoveChoice, Tier};
pub use policy::{HeuristicPolicy, MovePolicy, RandomPolicy};
