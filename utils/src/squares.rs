use cozy_chess::{get_king_moves, BitBoard, Color, Square};

/// Flips the rank of a Black square so both colors share White's geometry.
/// White squares pass through untouched.
#[inline(always)]
pub fn relative_square(square: Square, color: Color) -> Square {
    match color {
        Color::White => square,
        Color::Black => square.flip_rank(),
    }
}

/// The square itself plus its (up to) eight king-adjacent squares.
#[inline(always)]
pub fn king_area(square: Square) -> BitBoard {
    get_king_moves(square) | square.bitboard()
}
