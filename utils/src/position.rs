use cozy_chess::{BitBoard, Board, Color, Piece, Square};
use std::cell::OnceCell;

use crate::pawns::is_passed_pawn;

/// Read-only view of a board handed to evaluation terms.
///
/// Derived data (currently the passed-pawn sets) is computed on first use
/// and cached for the lifetime of the view.
pub struct Position<'a> {
    pub board: &'a Board,
    passed_pawns: OnceCell<[BitBoard; Color::NUM]>,
}

impl<'a> Position<'a> {
    #[inline(always)]
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            passed_pawns: OnceCell::new(),
        }
    }

    #[inline(always)]
    pub fn pieces(&self, color: Color, piece: Piece) -> BitBoard {
        self.board.colored_pieces(color, piece)
    }

    #[inline(always)]
    pub fn pieces_of(&self, piece: Piece) -> BitBoard {
        self.board.pieces(piece)
    }

    #[inline(always)]
    pub fn occupied(&self) -> BitBoard {
        self.board.occupied()
    }

    /// Squares holding `piece` of `color`, lowest square first.
    /// The returned set is `Copy`, so the sequence can be walked any number of times.
    #[inline(always)]
    pub fn squares(&self, piece: Piece, color: Color) -> BitBoard {
        self.pieces(color, piece)
    }

    #[inline(always)]
    pub fn king(&self, color: Color) -> Square {
        self.board.king(color)
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline(always)]
    pub fn pawn_passed(&self, color: Color, square: Square) -> bool {
        self.passed_pawns()[color as usize].has(square)
    }

    fn passed_pawns(&self) -> &[BitBoard; Color::NUM] {
        self.passed_pawns.get_or_init(|| {
            let mut passed = [BitBoard::EMPTY; Color::NUM];
            for color in Color::ALL {
                for square in self.squares(Piece::Pawn, color) {
                    if is_passed_pawn(self, color, square) {
                        passed[color as usize] |= square.bitboard();
                    }
                }
            }
            passed
        })
    }
}
