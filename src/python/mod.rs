//! Python bindings for the Kalah engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_kalah as kalah
//!
//! game = kalah.Kalah(vs_computer=True)
//! again = game.apply_move(2)          # True: landed in A's store
//! game.switch_turn()
//! pit = game.choose_move(seed=7)      # heuristic pick for the side to move
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::ai::choose_move;
use crate::core::{GameRng, Side};
use crate::rules::{GameState, Outcome};

fn side_name(side: Side) -> &'static str {
    match side {
        Side::A => "A",
        Side::B => "B",
    }
}

/// Python wrapper for a single match.
#[pyclass(name = "Kalah")]
#[derive(Clone, Debug)]
pub struct PyKalah {
    state: GameState,
}

#[pymethods]
impl PyKalah {
    /// Start a new match with Side A to move.
    #[new]
    #[pyo3(signature = (vs_computer=true))]
    fn new(vs_computer: bool) -> Self {
        Self {
            state: GameState::new(vs_computer),
        }
    }

    /// Restore the starting position.
    fn reset(&mut self) {
        self.state.reset();
    }

    /// Play a pit for the side to move. Returns True if that side moves again.
    ///
    /// Raises ValueError for illegal moves.
    fn apply_move(&mut self, pit: usize) -> PyResult<bool> {
        self.state
            .try_move(pit)
            .map(|outcome| outcome.repeat_turn)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Pass the turn.
    fn switch_turn(&mut self) {
        self.state.switch_turn();
    }

    /// True once either side's sowing pits are empty.
    fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Sweep the board and return "A", "B", "tie", or None if not over.
    fn finalize(&mut self) -> Option<&'static str> {
        self.state.finalize_and_get_winner().map(|outcome| match outcome {
            Outcome::Winner(side) => side_name(side),
            Outcome::Tie => "tie",
        })
    }

    /// All 14 pit counts.
    #[getter]
    fn board(&self) -> Vec<u8> {
        self.state.board().pits().to_vec()
    }

    /// "A" or "B".
    #[getter]
    fn current_turn(&self) -> &'static str {
        side_name(self.state.current_turn())
    }

    /// Legal pits for the side to move.
    fn legal_moves(&self) -> Vec<usize> {
        self.state.legal_moves().to_vec()
    }

    /// Heuristic pick for the side to move.
    fn choose_move(&self, seed: u64) -> PyResult<usize> {
        if self.state.legal_moves().is_empty() {
            return Err(PyValueError::new_err("no legal move"));
        }
        let mut rng = GameRng::new(seed);
        Ok(choose_move(self.state.board(), self.state.current_turn(), &mut rng))
    }

    fn __repr__(&self) -> String {
        format!(
            "Kalah(turn={}, board={:?})",
            side_name(self.state.current_turn()),
            self.state.board().pits()
        )
    }
}

/// rust-kalah: Kalah rules engine and heuristic opponent.
#[pymodule]
fn rust_kalah(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyKalah>()?;
    Ok(())
}
