//! RNG module - seeded randomness for zone placement and break thresholds
//!
//! A simple LCG keeps the engine fully deterministic: the same seed produces
//! the same zone placement and the same sequence of breaking-threshold rolls,
//! which is what makes whole sessions replayable in tests.

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

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate random float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        // 24 high bits give a uniformly spaced float without precision loss.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Current internal state (for session replay)
    pub fn state(&self) -> u32 {
        self.state
    }
}
