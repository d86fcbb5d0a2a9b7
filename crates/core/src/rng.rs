//! Deterministic RNG for piece selection.
//!
//! A small LCG (Numerical Recipes constants) is all the game needs: spawns
//! draw uniformly from the seven piece kinds, and a fixed seed reproduces a
//! whole game for tests.

use blockfall_types::PieceKind;

/// Linear congruential generator.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG. A zero seed is remapped so the stream is nonzero.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Next raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        // a = 1664525, c = 1013904223, m = 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Uniform draw from the seven piece kinds.
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}
