//! Core types: board layout, sides, RNG, configuration, move errors.
//!
//! Everything here is independent of the turn rules, which live in `rules`.

pub mod board;
pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use board::{Board, PIT_COUNT, PITS_PER_SIDE, STARTING_PIECES, TOTAL_PIECES};
pub use side::{Side, SideInfo, SideMap, SIDE_TABLE};
pub use rng::GameRng;
pub use config::MatchConfig;
pub use error::MoveError;
