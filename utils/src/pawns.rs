use cozy_chess::{BitBoard, Color, Piece, Square};

use crate::Position;

/// Pre-computed passed-pawn masks: [color][square].
///
/// Every square on the pawn's own and adjacent files in front of it.
/// <https://www.chessprogramming.org/Passed_Pawn>
pub const PASSED_PAWN_MASKS: [[BitBoard; Square::NUM]; Color::NUM] = {
    let mut table = [[BitBoard::EMPTY; Square::NUM]; Color::NUM];
    let mut square_idx = 0;
    while square_idx < Square::NUM {
        let file_idx = (square_idx % 8) as i8;
        let rank_idx = (square_idx / 8) as i8;

        table[Color::White as usize][square_idx] =
            BitBoard(make_passed_pawn_mask(rank_idx, file_idx, 1));
        table[Color::Black as usize][square_idx] =
            BitBoard(make_passed_pawn_mask(rank_idx, file_idx, -1));

        square_idx += 1;
    }
    table
};

const fn make_passed_pawn_mask(mut rank_idx: i8, file_idx: i8, step: i8) -> u64 {
    let mut mask = 0u64;
    rank_idx += step; // start one rank in front
    while rank_idx >= 0 && rank_idx < 8 {
        let mut scan_file = file_idx - 1;
        while scan_file <= file_idx + 1 {
            if scan_file >= 0 && scan_file < 8 {
                mask |= 1u64 << ((rank_idx as u64) * 8 + scan_file as u64);
            }
            scan_file += 1;
        }
        rank_idx += step;
    }
    mask
}

/// A pawn is passed when no enemy pawn stands in front of it on its own or an adjacent file.
#[inline(always)]
pub fn is_passed_pawn(position: &Position, color: Color, square: Square) -> bool {
    let enemy_pawns = position.pieces(!color, Piece::Pawn);
    (enemy_pawns & PASSED_PAWN_MASKS[color as usize][square as usize]).is_empty()
}
