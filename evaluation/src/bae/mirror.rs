use cozy_chess::Square;
pub use utils::relative_square;

/// Coarse location of the enemy king: rank halves x file pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KingBucket {
    pub rank: usize,
    pub file: usize,
}

impl KingBucket {
    /// `king` must already be mirrored into the evaluating side's perspective.
    #[inline(always)]
    pub fn of(king: Square) -> Self {
        Self {
            rank: king.rank() as usize / 4,
            file: king.file() as usize / 2,
        }
    }
}
