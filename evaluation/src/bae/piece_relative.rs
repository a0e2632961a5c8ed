use cozy_chess::{Color, Piece, Square};
use utils::Position;

use super::mirror::{relative_square, KingBucket};
use super::params::{pst_index, Phase, Relativity, WeightTable};
use super::state::EvalState;

/// Piece types each piece is paired with in the interaction table.
/// The sets shrink for the more numerous/cheaper pairings to bound table cost.
#[inline(always)]
pub const fn interaction_partners(piece: Piece) -> &'static [Piece] {
    match piece {
        Piece::Pawn | Piece::King => &[
            Piece::Pawn,
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
            Piece::King,
        ],
        Piece::Queen => &[
            Piece::Pawn,
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
        ],
        Piece::Knight => &[Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook],
        Piece::Bishop => &[Piece::Pawn, Piece::Bishop, Piece::Rook],
        Piece::Rook => &[Piece::Pawn, Piece::Rook],
    }
}

/// Adds the king-bucketed interaction terms of every piece on the board.
/// Pawns only take part once they are passed.
pub(super) fn evaluate(position: &Position, weights: &WeightTable, state: &mut EvalState) {
    for piece in Piece::ALL {
        for color in [Color::White, Color::Black] {
            for square in position.squares(piece, color) {
                if piece == Piece::Pawn && !position.pawn_passed(color, square) {
                    continue;
                }
                evaluate_piece(position, weights, state, piece, square, color);
            }
        }
    }
}

fn evaluate_piece(
    position: &Position,
    weights: &WeightTable,
    state: &mut EvalState,
    our_piece: Piece,
    square: Square,
    us: Color,
) {
    let our_square = relative_square(square, us);
    let bucket = KingBucket::of(relative_square(position.king(!us), us));

    for &other_piece in interaction_partners(our_piece) {
        for relativity in Relativity::ALL {
            for other in position.squares(other_piece, relativity.owner(us)) {
                let index = pst_index(
                    bucket.rank,
                    bucket.file,
                    relativity,
                    our_piece,
                    our_square,
                    other_piece,
                    relative_square(other, us),
                );

                for phase in Phase::ALL {
                    state.add(phase, weights[phase].pst()[index], us);
                }
            }
        }
    }
}
