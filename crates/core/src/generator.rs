//! Random generation - seeded LCG and the next-figure source
//!
//! Draws are independent and uniform over the 7 kinds and 4 rotations. There
//! is deliberately no bag-style anti-repeat: long droughts and repeats can
//! happen, which is part of this ruleset's character.

use crate::types::{FigureKind, Rotation, FIGURE_KINDS, FIGURE_ROTATIONS};

/// Simple LCG (Linear Congruential Generator)
///
/// Uses the Numerical Recipes constants. Deterministic per seed, which is
/// what the tests and same-seed replays rely on.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero seed would stay degenerate for the first draws.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in `[0, max)`
    ///
    /// Scales from the top of the word: the low bits of an LCG cycle with
    /// tiny periods (the lowest strictly alternates), which would make a
    /// `% 2` coin flip deterministic.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// The upcoming figure: one (kind, rotation) pair ahead of the current spawn
///
/// `kind()`/`rotation()` peek at the pending draw without consuming it; the
/// game context re-rolls right after turning the pending pair into the
/// current figure.
#[derive(Debug, Clone, Copy)]
pub struct FigureSource {
    kind: FigureKind,
    rotation: Rotation,
}

impl FigureSource {
    /// Create a source with an initial draw already pending
    pub fn new(rng: &mut SimpleRng) -> Self {
        let mut source = Self {
            kind: FigureKind::I,
            rotation: Rotation::R0,
        };
        source.roll(rng);
        source
    }

    /// Replace the pending figure with a fresh uniform draw
    pub fn roll(&mut self, rng: &mut SimpleRng) {
        self.kind = FigureKind::from_index(rng.next_range(FIGURE_KINDS as u32) as usize);
        self.rotation = Rotation::from_index(rng.next_range(FIGURE_ROTATIONS as u32) as usize);
    }

    /// Kind of the pending figure
    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    /// Rotation of the pending figure
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Pin the pending figure to a known pair (test scaffolding)
    #[cfg(test)]
    pub(crate) fn force(&mut self, kind: FigureKind, rotation: Rotation) {
        self.kind = kind;
        self.rotation = rotation;
    }
}
