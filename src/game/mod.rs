//! Match driver and match records.
//!
//! ```
//! use rust_kalah::ai::{HeuristicPolicy, RandomPolicy};
//! use rust_kalah::core::MatchConfig;
//! use rust_kalah::game::MatchDriver;
//! use rust_kalah::rules::GameState;
//!
//! let driver = MatchDriver::new(MatchConfig::default().with_seed(3));
//! let mut state = GameState::new(true);
//! let record = driver.play(
//!     &mut state,
//!     &mut RandomPolicy::new(1),
//!     &mut HeuristicPolicy::new(3),
//! );
//! assert!(record.outcome.is_some());
//! ```

mod driver;
mod record;

pub use driver::MatchDriver;
pub use record::{MatchRecord, Ply};
