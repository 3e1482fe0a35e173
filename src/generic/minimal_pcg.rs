//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] and [SeedableRng] traits.
//!
//! Each [session](crate::session) owns a source of rng, used to choose polarities and to shuffle the order in which atoms are chosen.
//! The session is paramaterised to anything which satisfies [Rng](rand::Rng) and [SeedableRng], though to keep the rest of the library straightforward the rng is fixed in a [Session](crate::session::Session) as [MinimalPCG32].
//!
//! A fixed seed gives a fixed sequence, and so a fixed collection of configurations found during a coverage computation.

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// The multiplier of the underlying linear congruential generator.
const MULTIPLIER: u64 = 6364136223846793005;

/// State and increment
#[derive(Clone, Debug, Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
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
        // The increment must be odd.
        const INCREMENT: u64 = 1442695040888963407;
        let mut pcg = Self {
            state: 0,
            inc: INCREMENT,
        };
        pcg.next_u32();
        pcg.state = pcg.state.wrapping_add(u64::from_le_bytes(seed));
        pcg.next_u32();
        pcg
    }
}
