use cozy_chess::Board;

use crate::Value;

/// Static evaluation interface consumed by the search.
///
/// Implementations are read-only over their coefficients, so one instance
/// can be shared by every search thread.
pub trait StaticEvaluator: Send + Sync {
    fn name(&self) -> String;
    /// Evaluate position from the side to move's perspective. Positive = side to move is better.
    fn evaluate(&self, board: &Board) -> Value;
}
