use cozy_chess::{Color, Piece, Square};
use std::ops::{Index, IndexMut};

use crate::Value;

// Table layout (per phase, all tables flat and row-major):
//
// Piece-relative PST [kingRank][kingFile][relativity][ourPiece][ourSquare][otherPiece][otherSquare]
//   2 x 4 x 2 x 6 x 64 x 6 x 64 = 2_359_296 entries
//
// Pawn structure [centerSquare][pattern]
//   64 x 3^9 = 1_259_712 entries (only the 24 central squares are ever read)
//
// Piece combo [comboIndex]
//   3^12 = 531_441 entries (two colors x six piece types, counts capped at 2)

pub const KING_RANK_BUCKETS: usize = 2;
pub const KING_FILE_BUCKETS: usize = 4;
pub const RELATIVITIES: usize = 2;

pub const PIECE_RELATIVE_PST_SIZE: usize = KING_RANK_BUCKETS
    * KING_FILE_BUCKETS
    * RELATIVITIES
    * Piece::NUM
    * Square::NUM
    * Piece::NUM
    * Square::NUM;

pub const PATTERN_CELLS: usize = 9;
pub const PAWN_PATTERNS: usize = 3usize.pow(PATTERN_CELLS as u32);
pub const PAWN_STRUCTURE_SIZE: usize = Square::NUM * PAWN_PATTERNS;

/// Number of base-3 digits in a combo index: one per (color, piece type).
pub const COMBO_DIGITS: usize = Color::NUM * Piece::NUM;
pub const PIECE_COMBO_SIZE: usize = 3usize.pow(COMBO_DIGITS as u32);

/// Tapering regime. Every table and running sum exists once per phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Opening = 0,
    Endgame = 1,
}

impl Phase {
    pub const NUM: usize = 2;
    pub const ALL: [Phase; Phase::NUM] = [Phase::Opening, Phase::Endgame];
}

/// Whether the other piece of an interaction belongs to us or to the enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relativity {
    Ours = 0,
    Theirs = 1,
}

impl Relativity {
    pub const ALL: [Relativity; RELATIVITIES] = [Relativity::Ours, Relativity::Theirs];

    #[inline(always)]
    pub fn owner(self, us: Color) -> Color {
        match self {
            Relativity::Ours => us,
            Relativity::Theirs => !us,
        }
    }
}

/// Flat index into the piece-relative PST. Squares are already mirrored for the piece owner.
#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn pst_index(
    king_rank_bucket: usize,
    king_file_bucket: usize,
    relativity: Relativity,
    our_piece: Piece,
    our_square: Square,
    other_piece: Piece,
    other_square: Square,
) -> usize {
    let mut index = king_rank_bucket;
    index = index * KING_FILE_BUCKETS + king_file_bucket;
    index = index * RELATIVITIES + relativity as usize;
    index = index * Piece::NUM + our_piece as usize;
    index = index * Square::NUM + our_square as usize;
    index = index * Piece::NUM + other_piece as usize;
    index * Square::NUM + other_square as usize
}

#[inline(always)]
pub fn pawn_structure_index(center: Square, pattern: usize) -> usize {
    center as usize * PAWN_PATTERNS + pattern
}

/// Coefficients for a single phase.
#[derive(Clone)]
pub struct PhaseWeights {
    pub(super) pst: Box<[Value]>,
    pub(super) pawn_structure: Box<[Value]>,
    pub(super) piece_combo: Box<[Value]>,
}

impl PhaseWeights {
    pub fn zeroed() -> Self {
        Self {
            pst: vec![0; PIECE_RELATIVE_PST_SIZE].into_boxed_slice(),
            pawn_structure: vec![0; PAWN_STRUCTURE_SIZE].into_boxed_slice(),
            piece_combo: vec![0; PIECE_COMBO_SIZE].into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn pst(&self) -> &[Value] {
        &self.pst
    }

    #[inline(always)]
    pub fn pawn_structure(&self) -> &[Value] {
        &self.pawn_structure
    }

    #[inline(always)]
    pub fn piece_combo(&self) -> &[Value] {
        &self.piece_combo
    }

    pub fn pst_mut(&mut self) -> &mut [Value] {
        &mut self.pst
    }

    pub fn pawn_structure_mut(&mut self) -> &mut [Value] {
        &mut self.pawn_structure
    }

    pub fn piece_combo_mut(&mut self) -> &mut [Value] {
        &mut self.piece_combo
    }
}

/// All trained coefficients, one [`PhaseWeights`] per phase.
///
/// Built once (zeroed, read from a weight file, or filled by tooling) and
/// then only shared immutably, which makes it safe for any number of
/// concurrent evaluations.
#[derive(Clone)]
pub struct WeightTable {
    phases: [PhaseWeights; Phase::NUM],
}

impl WeightTable {
    pub fn zeroed() -> Self {
        Self {
            phases: [PhaseWeights::zeroed(), PhaseWeights::zeroed()],
        }
    }

    pub(super) fn from_phases(opening: PhaseWeights, endgame: PhaseWeights) -> Self {
        Self {
            phases: [opening, endgame],
        }
    }
}

impl Index<Phase> for WeightTable {
    type Output = PhaseWeights;

    #[inline(always)]
    fn index(&self, phase: Phase) -> &PhaseWeights {
        &self.phases[phase as usize]
    }
}

impl IndexMut<Phase> for WeightTable {
    #[inline(always)]
    fn index_mut(&mut self, phase: Phase) -> &mut PhaseWeights {
        &mut self.phases[phase as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(PIECE_RELATIVE_PST_SIZE, 2_359_296);
        assert_eq!(PAWN_PATTERNS, 19_683);
        assert_eq!(PAWN_STRUCTURE_SIZE, 1_259_712);
        assert_eq!(PIECE_COMBO_SIZE, 531_441);
    }

    #[test]
    fn test_pst_index_corners() {
        let first = pst_index(
            0,
            0,
            Relativity::Ours,
            Piece::Pawn,
            Square::A1,
            Piece::Pawn,
            Square::A1,
        );
        let last = pst_index(
            1,
            3,
            Relativity::Theirs,
            Piece::King,
            Square::H8,
            Piece::King,
            Square::H8,
        );
        assert_eq!(first, 0);
        assert_eq!(last, PIECE_RELATIVE_PST_SIZE - 1);
    }

    #[test]
    fn test_pst_index_strides() {
        let base = |kr, kf, rel, our, our_sq, other, other_sq| {
            pst_index(kr, kf, rel, our, our_sq, other, other_sq)
        };
        let origin = base(0, 0, Relativity::Ours, Piece::Pawn, Square::A1, Piece::Pawn, Square::A1);

        assert_eq!(
            base(0, 0, Relativity::Ours, Piece::Pawn, Square::A1, Piece::Pawn, Square::B1) - origin,
            1
        );
        assert_eq!(
            base(0, 0, Relativity::Ours, Piece::Pawn, Square::A1, Piece::Knight, Square::A1) - origin,
            64
        );
        assert_eq!(
            base(0, 0, Relativity::Ours, Piece::Pawn, Square::B1, Piece::Pawn, Square::A1) - origin,
            6 * 64
        );
        assert_eq!(
            base(0, 0, Relativity::Ours, Piece::Knight, Square::A1, Piece::Pawn, Square::A1) - origin,
            64 * 6 * 64
        );
        assert_eq!(
            base(0, 0, Relativity::Theirs, Piece::Pawn, Square::A1, Piece::Pawn, Square::A1) - origin,
            6 * 64 * 6 * 64
        );
        assert_eq!(
            base(0, 1, Relativity::Ours, Piece::Pawn, Square::A1, Piece::Pawn, Square::A1) - origin,
            2 * 6 * 64 * 6 * 64
        );
        assert_eq!(
            base(1, 0, Relativity::Ours, Piece::Pawn, Square::A1, Piece::Pawn, Square::A1) - origin,
            4 * 2 * 6 * 64 * 6 * 64
        );
    }

    #[test]
    fn test_pawn_structure_index() {
        assert_eq!(pawn_structure_index(Square::A1, 0), 0);
        assert_eq!(pawn_structure_index(Square::B3, 5), 17 * PAWN_PATTERNS + 5);
        assert_eq!(
            pawn_structure_index(Square::H8, PAWN_PATTERNS - 1),
            PAWN_STRUCTURE_SIZE - 1
        );
    }

    #[test]
    fn test_relativity_owner() {
        assert_eq!(Relativity::Ours.owner(Color::Black), Color::Black);
        assert_eq!(Relativity::Theirs.owner(Color::Black), Color::White);
    }

    #[test]
    fn test_phases_are_independent() {
        let mut table = WeightTable::zeroed();
        table[Phase::Endgame].piece_combo_mut()[7] = 42;

        assert_eq!(table[Phase::Endgame].piece_combo()[7], 42);
        assert_eq!(table[Phase::Opening].piece_combo()[7], 0);
    }
}
