//! RNG module - deterministic piece draws
//!
//! Hands are drawn uniformly by catalog index. A simple LCG keeps the draw
//! sequence reproducible for a given seed, which the tests rely on.

use crate::types::HAND_SIZE;

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Draws catalog indices for the player's hand
#[derive(Debug, Clone)]
pub struct PieceDealer {
    rng: SimpleRng,
    catalog_len: usize,
}

impl PieceDealer {
    pub fn new(seed: u32, catalog_len: usize) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            catalog_len,
        }
    }

    /// Draw one catalog index, or None for an empty catalog
    pub fn draw(&mut self) -> Option<usize> {
        if self.catalog_len == 0 {
            return None;
        }
        Some(self.rng.next_range(self.catalog_len as u32) as usize)
    }

    /// Draw a full hand
    pub fn deal_hand(&mut self) -> [Option<usize>; HAND_SIZE] {
        let mut hand = [None; HAND_SIZE];
        for slot in hand.iter_mut() {
            *slot = self.draw();
        }
        hand
    }

    /// Get the current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}
