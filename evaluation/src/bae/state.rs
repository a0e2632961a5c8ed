use cozy_chess::Color;
use std::ops::Index;

use super::params::Phase;
use crate::{Value, VALUE_ZERO};

/// Running opening/endgame sums for a single evaluation, kept from White's perspective.
///
/// Lives on the caller's stack for the duration of one call and is never shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalState {
    values: [Value; Phase::NUM],
}

impl EvalState {
    pub fn new() -> Self {
        Self {
            values: [VALUE_ZERO; Phase::NUM],
        }
    }

    /// Adds a coefficient that is good for `good_for`; Black's contributions count negatively.
    #[inline(always)]
    pub fn add(&mut self, phase: Phase, value: Value, good_for: Color) {
        match good_for {
            Color::White => self.values[phase as usize] += value,
            Color::Black => self.values[phase as usize] -= value,
        }
    }

    #[inline(always)]
    pub fn opening(&self) -> Value {
        self[Phase::Opening]
    }

    #[inline(always)]
    pub fn endgame(&self) -> Value {
        self[Phase::Endgame]
    }
}

impl Default for EvalState {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Phase> for EvalState {
    type Output = Value;

    #[inline(always)]
    fn index(&self, phase: Phase) -> &Value {
        &self.values[phase as usize]
    }
}
