use cozy_chess::Color;

use super::state::EvalState;
use crate::Value;

/// Piece count of the starting position.
pub const MAX_PHASE: Value = 32;

/// Tapers between the opening and endgame sums by the number of pieces left.
///
/// <https://www.chessprogramming.org/Tapered_Eval>
#[inline(always)]
pub fn blend(state: &EvalState, piece_count: u32) -> Value {
    let phase = piece_count as Value;
    (state.opening() * phase + state.endgame() * (MAX_PHASE - phase)) / MAX_PHASE
}

/// Flip a White-relative score to the side to move's perspective.
#[inline(always)]
pub fn flip_eval_perspective(side_to_move: Color, score: Value) -> Value {
    match side_to_move {
        Color::White => score,
        Color::Black => -score,
    }
}
