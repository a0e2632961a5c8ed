use cozy_chess::{Color, Piece};
use utils::Position;

use super::params::{Phase, WeightTable, COMBO_DIGITS};
use super::state::EvalState;

/// Piece counts above this collapse into the same digit.
pub const COUNT_CAP: u32 = 2;

/// Only positions where neither side has more pawns than this get the combo bonus.
pub const MAX_PAWNS: u32 = 2;

/// Per-color, per-piece counts capped at [`COUNT_CAP`].
pub type CappedCounts = [[u32; Piece::NUM]; Color::NUM];

pub fn capped_counts(position: &Position) -> CappedCounts {
    let mut counts = [[0; Piece::NUM]; Color::NUM];
    for color in [Color::White, Color::Black] {
        for piece in Piece::ALL {
            counts[color as usize][piece as usize] =
                position.pieces(color, piece).len().min(COUNT_CAP);
        }
    }
    counts
}

/// Base-3 number over the capped counts: White pawn is the least significant
/// digit, then White knight .. king, then Black pawn .. king.
#[inline(always)]
pub fn combo_index(counts: &CappedCounts) -> usize {
    let mut index = 0;
    let mut weight = 1;
    for color in [Color::White, Color::Black] {
        for piece in Piece::ALL {
            index += counts[color as usize][piece as usize] as usize * weight;
            weight *= 3;
        }
    }
    debug_assert_eq!(weight, 3usize.pow(COMBO_DIGITS as u32));
    index
}

/// Adds the material-composition bonus in pawn-light positions.
/// The table is indexed from White's point of view, so the bonus is not sign-flipped.
pub(super) fn evaluate(position: &Position, weights: &WeightTable, state: &mut EvalState) {
    let white_pawns = position.pieces(Color::White, Piece::Pawn).len();
    let black_pawns = position.pieces(Color::Black, Piece::Pawn).len();
    if white_pawns.max(black_pawns) > MAX_PAWNS {
        return;
    }

    let index = combo_index(&capped_counts(position));
    for phase in Phase::ALL {
        state.add(phase, weights[phase].piece_combo()[index], Color::White);
    }
}
