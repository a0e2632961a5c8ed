/// Evaluation score in internal units. Positive favors the side the score is relative to.
pub type Value = i32;

pub const VALUE_ZERO: Value = 0;

/// Static evaluations must stay strictly inside this bound so the search can
/// tell them apart from decided positions.
pub const KNOWN_WIN: Value = 10_000;
