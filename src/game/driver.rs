//! The turn loop.
//!
//! Each turn the side to move keeps playing while `apply_move` grants a
//! repeat; then the turn passes. When either side runs out of pieces the
//! board is finalized and the record closed. A policy that returns no pit
//! ends the match early and the board is left as it was.

use std::thread;

use tracing::{info, warn};

use crate::ai::MovePolicy;
use crate::core::{MatchConfig, Side};
use crate::rules::GameState;

use super::record::{MatchRecord, Ply};

/// Plays matches between two `MovePolicy` values.
#[derive(Clone, Debug, Default)]
pub struct MatchDriver {
    config: MatchConfig,
}

impl MatchDriver {
    /// Create a driver with the given settings.
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// The driver's settings.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play `state` to the end.
    ///
    /// `state` decides which side is the computer; the policies decide the
    /// moves. The driver only supplies pacing and the ply limit.
    pub fn play(
        &self,
        state: &mut GameState,
        side_a: &mut dyn MovePolicy,
        side_b: &mut dyn MovePolicy,
    ) -> MatchRecord {
        self.play_observed(state, side_a, side_b, |_, _| {})
    }

    /// Play `state` to the end, calling `observer` after every ply.
    pub fn play_observed(
        &self,
        state: &mut GameState,
        side_a: &mut dyn MovePolicy,
        side_b: &mut dyn MovePolicy,
        mut observer: impl FnMut(&GameState, &Ply),
    ) -> MatchRecord {
        let mut record = MatchRecord::new(self.config.seed);

        'turns: while !state.is_over() {
            loop {
                if record.len() >= self.config.max_plies {
                    warn!(plies = record.len(), "ply limit reached, stopping match");
                    record.truncated = true;
                    break 'turns;
                }

                let side = state.current_turn();
                let policy: &mut dyn MovePolicy = match side {
                    Side::A => &mut *side_a,
                    Side::B => &mut *side_b,
                };

                if policy.is_automated() && !self.config.think_delay.is_zero() {
                    thread::sleep(self.config.think_delay);
                }

                let Some(pit) = policy.choose(state) else {
                    warn!(policy = policy.name(), %side, "player left the match");
                    record.abandoned_by = Some(side);
                    break 'turns;
                };
                debug_assert!(
                    state.validate_move(pit).is_ok(),
                    "{} chose illegal pit {pit}",
                    policy.name()
                );

                let outcome = state.apply_move_detailed(pit);
                let ply = Ply::new(record.len(), side, outcome, *state.board());
                observer(state, &ply);
                record.push(ply);

                if !outcome.repeat_turn {
                    break;
                }
            }
            state.switch_turn();
        }

        let outcome = if record.is_complete() {
            state.finalize_and_get_winner()
        } else {
            None
        };
        record.finish(outcome, state.stores());

        info!(
            seed = record.seed,
            plies = record.len(),
            store_a = record.final_stores[Side::A],
            store_b = record.final_stores[Side::B],
            ?outcome,
            abandoned = record.abandoned_by.is_some(),
            "match finished"
        );
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{HeuristicPolicy, RandomPolicy};
    use crate::core::TOTAL_PIECES;

    #[test]
    fn test_match_runs_to_completion() {
        let driver = MatchDriver::new(MatchConfig::default());
        let mut state = GameState::new(true);
        let mut a = RandomPolicy::new(1);
        let mut b = HeuristicPolicy::new(2);

        let record = driver.play(&mut state, &mut a, &mut b);

        assert!(!record.truncated);
        assert!(record.outcome.is_some());
        assert!(state.is_over());
        assert_eq!(state.side_sum(Side::A) + state.side_sum(Side::B), 0);
        let stores = record.final_stores;
        assert_eq!(u32::from(stores[Side::A]) + u32::from(stores[Side::B]), TOTAL_PIECES);
    }

    #[test]
    fn test_ply_limit_truncates() {
        let driver = MatchDriver::new(MatchConfig::default().with_max_plies(3));
        let mut state = GameState::new(false);
        let mut a = RandomPolicy::new(1);
        let mut b = RandomPolicy::new(2);

        let record = driver.play(&mut state, &mut a, &mut b);

        assert!(record.truncated);
        assert_eq!(record.len(), 3);
        assert_eq!(record.outcome, None);
        assert_eq!(state.board().total(), TOTAL_PIECES);
    }

    /// Moves from a fixed list, then walks away.
    struct QuittingPolicy(Vec<usize>);

    impl MovePolicy for QuittingPolicy {
        fn choose(&mut self, _state: &GameState) -> Option<usize> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }

        fn name(&self) -> &str {
            "quitting"
        }

        fn is_automated(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_leaving_player_abandons_match() {
        let driver = MatchDriver::new(MatchConfig::default().with_seed(8));
        let mut state = GameState::new(false);
        let mut a = QuittingPolicy(vec![0]);
        let mut b = QuittingPolicy(vec![7]);

        let record = driver.play(&mut state, &mut a, &mut b);

        assert_eq!(record.abandoned_by, Some(Side::A));
        assert!(!record.is_complete());
        assert_eq!(record.outcome, None);
        assert_eq!(record.seed, 8);
        // A moved once, B once, then A left.
        assert_eq!(record.len(), 2);
        assert!(!state.is_over());
        assert_eq!(state.board().total(), TOTAL_PIECES);
    }

    #[test]
    fn test_driver_keeps_computer_flag_of_state() {
        let driver = MatchDriver::default();
        for vs_computer in [false, true] {
            let mut state = GameState::new(vs_computer);
            let mut a = RandomPolicy::new(5);
            let mut b = HeuristicPolicy::new(6);

            driver.play(&mut state, &mut a, &mut b);

            assert_eq!(state.vs_computer(), vs_computer);
            assert_eq!(state.is_computer(Side::B), vs_computer);
        }
    }

    #[test]
    fn test_observer_sees_every_ply() {
        let driver = MatchDriver::default();
        let mut state = GameState::new(true);
        let mut a = HeuristicPolicy::new(3);
        let mut b = HeuristicPolicy::new(4);

        let mut seen = Vec::new();
        let record = driver.play_observed(&mut state, &mut a, &mut b, |s, ply| {
            assert_eq!(s.board(), &ply.board_after);
            seen.push(ply.number);
        });

        assert_eq!(seen, (0..record.len()).collect::<Vec<_>>());
    }
}
