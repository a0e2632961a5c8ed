//! Board-Aware Evaluation (BAE).
//!
//! A table-driven static evaluation built from three trained feature sets:
//!
//! - piece-relative PSTs: every piece against every eligible other piece,
//!   bucketed by the enemy king's rough location,
//! - 3x3 pawn micro-structures around the central squares,
//! - capped material composition in pawn-light positions.
//!
//! Each feature accumulates an opening and an endgame sum from White's
//! perspective; the two are tapered by the number of pieces on the board and
//! the result is returned relative to the side to move.

mod blend;
mod file;
mod global;
mod mirror;
mod params;
mod pawn_structure;
mod piece_combo;
mod piece_relative;
mod state;

pub use blend::{blend, flip_eval_perspective, MAX_PHASE};
pub use file::FORMAT_VERSION;
pub use global::{install, weights};
pub use mirror::{relative_square, KingBucket};
pub use params::{
    pawn_structure_index, pst_index, Phase, PhaseWeights, Relativity, WeightTable,
    PAWN_PATTERNS, PAWN_STRUCTURE_SIZE, PIECE_COMBO_SIZE, PIECE_RELATIVE_PST_SIZE,
};
pub use pawn_structure::{decode_pattern, encode_pattern, window_cells, Cell, CENTER_SQUARES};
pub use piece_combo::{capped_counts, combo_index, CappedCounts};
pub use piece_relative::interaction_partners;
pub use state::EvalState;

use cozy_chess::Board;
use utils::Position;

use crate::{StaticEvaluator, Value, KNOWN_WIN};

/// Evaluates `board` with the process-wide weight table.
/// The score is relative to the side to move.
pub fn evaluate(board: &Board) -> Value {
    Evaluator::global().evaluate(board)
}

/// BAE over a borrowed weight table.
#[derive(Clone, Copy)]
pub struct Evaluator<'a> {
    weights: &'a WeightTable,
}

impl<'a> Evaluator<'a> {
    pub fn new(weights: &'a WeightTable) -> Self {
        Self { weights }
    }

    /// Sums every feature into a fresh accumulator, from White's perspective.
    pub fn accumulate(&self, board: &Board) -> EvalState {
        self.accumulate_position(&Position::new(board))
    }

    fn accumulate_position(&self, position: &Position) -> EvalState {
        let mut state = EvalState::new();

        piece_relative::evaluate(position, self.weights, &mut state);
        pawn_structure::evaluate(position, self.weights, &mut state);
        piece_combo::evaluate(position, self.weights, &mut state);

        state
    }

    pub fn evaluate(&self, board: &Board) -> Value {
        let position = Position::new(board);
        let state = self.accumulate_position(&position);
        let score = blend(&state, position.occupied().len());
        debug_assert!(
            score.abs() < KNOWN_WIN,
            "BAE score {} out of bounds (opening {}, endgame {})",
            score,
            state.opening(),
            state.endgame()
        );

        flip_eval_perspective(position.side_to_move(), score)
    }
}

impl Evaluator<'static> {
    pub fn global() -> Self {
        Self::new(weights())
    }
}

impl StaticEvaluator for Evaluator<'_> {
    fn name(&self) -> String {
        "BAE".to_string()
    }

    fn evaluate(&self, board: &Board) -> Value {
        Evaluator::evaluate(self, board)
    }
}
