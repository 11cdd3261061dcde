//! Move sources for automated play.
//!
//! `MovePolicy` is the seam between the match driver and whatever picks a
//! pit: the heuristic, a uniform random player, or a person at a keyboard.

use crate::core::GameRng;
use crate::rules::GameState;

use super::heuristic::{evaluate_move, MoveChoice};

/// Picks a pit for the side to move.
pub trait MovePolicy {
    /// Choose a pit for `state.current_turn()`.
    ///
    /// Only called while the game is not over, so the side to move has at
    /// least one non-empty pit. A returned pit must be one of
    /// `state.legal_moves()`; `None` leaves the match unfinished.
    fn choose(&mut self, state: &GameState) -> Option<usize>;

    /// Display name for logs.
    fn name(&self) -> &str;

    /// Computer-controlled policies get the configured thinking pause.
    fn is_automated(&self) -> bool {
        true
    }
}

/// The three-tier heuristic with its own seeded RNG.
#[derive(Clone, Debug)]
pub struct HeuristicPolicy {
    rng: GameRng,
    last_choice: Option<MoveChoice>,
}

impl HeuristicPolicy {
    /// Create a heuristic player seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a heuristic player drawing from `rng`.
    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            rng,
            last_choice: None,
        }
    }

    /// Choose and report which tier fired.
    pub fn choose_detailed(&mut self, state: &GameState) -> MoveChoice {
        let choice = evaluate_move(state.board(), state.current_turn(), &mut self.rng);
        self.last_choice = Some(choice);
        choice
    }

    /// The most recent choice, if any.
    pub fn last_choice(&self) -> Option<MoveChoice> {
        self.last_choice
    }
}

impl MovePolicy for HeuristicPolicy {
    fn choose(&mut self, state: &GameState) -> Option<usize> {
        Some(self.choose_detailed(state).pit)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

/// Uniformly random legal moves.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    /// Create a random player seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MovePolicy for RandomPolicy {
    fn choose(&mut self, state: &GameState) -> Option<usize> {
        let moves = state.legal_moves();
        assert!(!moves.is_empty(), "side {} has no legal move", state.current_turn());
        Some(moves[self.rng.gen_range_usize(0..moves.len())])
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Tier;
    use crate::core::Side;

    #[test]
    fn test_heuristic_policy_records_choice() {
        let state = GameState::new(true);
        let mut policy = HeuristicPolicy::new(1);
        assert!(policy.last_choice().is_none());

        assert_eq!(policy.choose(&state), Some(2));
        assert_eq!(policy.last_choice().map(|c| c.tier), Some(Tier::ExtraTurn));
        assert!(policy.is_automated());
        assert_eq!(policy.name(), "heuristic");
    }

    #[test]
    fn test_random_policy_legal() {
        let mut state = GameState::new(false);
        state.switch_turn();
        let mut policy = RandomPolicy::new(9);
        for _ in 0..50 {
            let pit = policy.choose(&state).expect("random policy always moves");
            assert!(Side::B.owns(pit));
            assert!(state.validate_move(pit).is_ok());
        }
    }

    #[test]
    fn test_random_policy_deterministic() {
        let state = GameState::new(false);
        let mut p1 = RandomPolicy::new(5);
        let mut p2 = RandomPolicy::new(5);
        for _ in 0..20 {
            assert_eq!(p1.choose(&state), p2.choose(&state));
        }
    }

    #[test]
    fn test_random_policy_reaches_every_legal_move() {
        let state = GameState::new(false);
        let mut policy = RandomPolicy::new(13);
        let mut seen = Vec::new();

        for _ in 0..200 {
            if let Some(pit) = policy.choose(&state) {
                if !seen.contains(&pit) {
                    seen.push(pit);
                }
            }
        }

        seen.sort_unstable();
        assert_eq!(seen, state.legal_moves().to_vec());
    }
}
