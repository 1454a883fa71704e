//! RNG module - pluggable random sources
//!
//! Piece selection and food placement draw from a [`RandomSource`] so tests can
//! script exact sequences. Play uses [`SimpleRng`], a small LCG seeded by the
//! runner; tests use [`SequenceRng`].
//!
//! Piece kinds are chosen uniformly and independently on every draw. There is
//! no bag and no anti-repetition rule.

use crate::types::PieceKind;

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Random value in `[0, max)`. `max` is never 0.
    fn next_range(&mut self, max: u32) -> u32;

    /// Uniformly chosen piece kind.
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state (reusable as a seed to replay from here)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG have short periods; use the high half.
        (self.next_u32() >> 16) % max.max(1)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Scripted source that replays a fixed list of values, cycling forever.
///
/// Each value is reduced modulo the requested range, so a script of piece
/// indices (`0` = I .. `6` = L) drives [`RandomSource::next_kind`] directly.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    pos: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, pos: 0 }
    }

    /// Script that yields the given piece kinds in order.
    pub fn from_kinds(kinds: &[PieceKind]) -> Self {
        Self::new(kinds.iter().map(|k| (k.index() - 1) as u32).collect())
    }
}

impl RandomSource for SequenceRng {
    fn next_range(&mut self, max: u32) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos = self.pos.wrapping_add(1);
        v % max.max(1)
    }
}
