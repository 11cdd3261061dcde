//! Match configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for one match, shared by the match driver and front ends.
///
/// Whether Side B is the computer is a property of the `GameState` being
/// played, not of the config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Label stored in each `MatchRecord`. The driver never draws from it;
    /// front ends seed their policies from it so a record can be replayed.
    pub seed: u64,

    /// Pause before each computer move (cosmetic only).
    pub think_delay: Duration,

    /// Safety bound on plies for automated matches.
    pub max_plies: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            think_delay: Duration::ZERO,
            max_plies: 1_000,
        }
    }
}

impl MatchConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the thinking pause before computer moves.
    #[must_use]
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// Set the ply limit.
    #[must_use]
    pub fn with_max_plies(mut self, max: usize) -> Self {
        self.max_plies = max;
        self
    }
}
