//! A simple pseudorandom number generator.
//!
//! A Rust rendition of the minimal C PCG32 implementation from <https://www.pcg-random.org/>, satisfying the [rand_core] traits so anything which consumes randomness can be seeded explicitly.
//!
//! The library consumes randomness in exactly one place: [world generation](crate::world::World::generate).
//! The reasoning engine itself is deterministic, and PCG32 keeps world generation deterministic per seed.

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// State and increment.
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot) as u32
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        // The increment of the 64-bit LCG from Knuth's MMIX; any odd value would do.
        const INCREMENT: u64 = 1442695040888963407;

        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn seeds_are_deterministic() {
        let mut a = MinimalPCG32::from_seed(7_u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(7_u64.to_le_bytes());

        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn seeds_diverge() {
        let mut a = MinimalPCG32::from_seed(7_u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(8_u64.to_le_bytes());

        let divergence = (0..32).any(|_| a.next_u32() != b.next_u32());
        assert!(divergence);
    }
}
