//! Deterministic pseudo-random generator
//!
//! A 32-bit linear-congruential generator with a fixed default seed. The
//! recurrence wraps at 32 bits by definition - wrapping is part of the
//! generator, not an overflow bug. The generator is an explicit object owned
//! by the simulation state so runs stay reproducible with no hidden global
//! coupling.

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SEED;

/// Linear-congruential generator, `state = 166425 * state + 1013904223`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    state: i32,
}

impl Lcg {
    /// Generator seeded with the fixed default seed
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: i32) -> Self {
        Self { state: seed }
    }

    /// Replace the state, returning the prior value for save/restore
    pub fn reseed(&mut self, seed: i32) -> i32 {
        std::mem::replace(&mut self.state, seed)
    }

    /// Advance the recurrence once, returning the full new state
    #[inline]
    fn step(&mut self) -> i32 {
        self.state = self.state.wrapping_mul(166425).wrapping_add(1013904223);
        self.state
    }

    /// Next value in [0, 32767] (bits 16-30 of the new state)
    #[inline]
    pub fn next(&mut self) -> i32 {
        self.step() >> 16 & 0x7FFF
    }

    /// Next value in [min, max)
    ///
    /// Precondition: `max > min`. A zero- or negative-width range is a
    /// caller error; the arithmetic is left as-is rather than corrected.
    #[inline]
    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(max > min, "range requires max > min, got [{min}, {max})");
        (self.next().wrapping_mul(max - min) >> 15) + min
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.step() as u32
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::with_seed(i32::from_le_bytes(seed))
    }
}
