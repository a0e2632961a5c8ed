mod pawns;
mod position;
mod squares;

pub use pawns::{is_passed_pawn, PASSED_PAWN_MASKS};
pub use position::Position;
pub use squares::{king_area, relative_square};
