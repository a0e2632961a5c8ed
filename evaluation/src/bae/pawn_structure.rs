use cozy_chess::{BitBoard, Color, Piece, Square};
use utils::{king_area, Position};

use super::params::{pawn_structure_index, Phase, WeightTable, PATTERN_CELLS};
use super::state::EvalState;

/// Centers of the evaluated 3x3 windows: files b-g, ranks 3-6.
#[rustfmt::skip]
pub const CENTER_SQUARES: [Square; 24] = [
    Square::B3, Square::C3, Square::D3, Square::E3, Square::F3, Square::G3,
    Square::B4, Square::C4, Square::D4, Square::E4, Square::F4, Square::G4,
    Square::B5, Square::C5, Square::D5, Square::E5, Square::F5, Square::G5,
    Square::B6, Square::C6, Square::D6, Square::E6, Square::F6, Square::G6,
];

/// (file, rank) offsets of the window cells in digit order, least significant first:
/// the rank above left to right, then the center rank, then the rank below.
#[rustfmt::skip]
pub const WINDOW_OFFSETS: [(i8, i8); PATTERN_CELLS] = [
    (-1,  1), (0,  1), (1,  1),
    (-1,  0), (0,  0), (1,  0),
    (-1, -1), (0, -1), (1, -1),
];

/// Content of one window cell; the discriminant is its base-3 digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty = 0,
    BlackPawn = 1,
    WhitePawn = 2,
}

impl Cell {
    #[inline(always)]
    fn from_digit(digit: usize) -> Self {
        match digit {
            0 => Cell::Empty,
            1 => Cell::BlackPawn,
            _ => Cell::WhitePawn,
        }
    }
}

#[inline(always)]
pub fn encode_pattern(cells: &[Cell; PATTERN_CELLS]) -> usize {
    let mut index = 0;
    let mut weight = 1;
    for &cell in cells {
        index += cell as usize * weight;
        weight *= 3;
    }
    index
}

pub fn decode_pattern(mut index: usize) -> [Cell; PATTERN_CELLS] {
    let mut cells = [Cell::Empty; PATTERN_CELLS];
    for cell in cells.iter_mut() {
        *cell = Cell::from_digit(index % 3);
        index /= 3;
    }
    cells
}

/// Reads the window around `center`, which must be one of [`CENTER_SQUARES`].
pub fn window_cells(
    white_pawns: BitBoard,
    black_pawns: BitBoard,
    center: Square,
) -> [Cell; PATTERN_CELLS] {
    debug_assert!(
        CENTER_SQUARES.contains(&center),
        "{} is not a pawn window center",
        center
    );
    let file = center.file() as i8;
    let rank = center.rank() as i8;

    WINDOW_OFFSETS.map(|(file_offset, rank_offset)| {
        let square = Square::index(((rank + rank_offset) * 8 + file + file_offset) as usize);
        if white_pawns.has(square) {
            Cell::WhitePawn
        } else if black_pawns.has(square) {
            Cell::BlackPawn
        } else {
            Cell::Empty
        }
    })
}

/// Adds a bonus for every central 3x3 window that holds at least two pawns.
/// Patterns already encode which side owns each pawn, so the bonus is not sign-flipped.
pub(super) fn evaluate(position: &Position, weights: &WeightTable, state: &mut EvalState) {
    let pawns = position.pieces_of(Piece::Pawn);
    let white_pawns = position.pieces(Color::White, Piece::Pawn);
    let black_pawns = position.pieces(Color::Black, Piece::Pawn);

    for center in CENTER_SQUARES {
        if (king_area(center) & pawns).len() < 2 {
            continue;
        }

        let pattern = encode_pattern(&window_cells(white_pawns, black_pawns, center));
        let index = pawn_structure_index(center, pattern);

        for phase in Phase::ALL {
            state.add(phase, weights[phase].pawn_structure()[index], Color::White);
        }
    }
}
