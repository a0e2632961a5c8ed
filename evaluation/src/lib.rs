pub mod bae;
pub mod def;
pub mod scores;

pub use def::StaticEvaluator;
pub use scores::{Value, KNOWN_WIN, VALUE_ZERO};
