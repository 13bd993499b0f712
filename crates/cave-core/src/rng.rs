//! Random number generation for map generation
//!
//! Uses a seeded ChaCha RNG so that a seed string always yields the same map.
//! Independent concerns (layout, vertex jitter, tile picks) draw from separate
//! ChaCha streams of the same seed, so one never shifts the others.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Stream consumed by the seeded fill
pub const LAYOUT_STREAM: u64 = 0;
/// Stream consumed by corner-node jitter
pub const JITTER_STREAM: u64 = 1;
/// Stream consumed by random walkable-tile picks
pub const PICK_STREAM: u64 = 2;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Stable 64-bit FNV-1a hash of a seed string.
///
/// Unlike `std::hash`, the result does not change between runs, platforms or
/// compiler versions.
pub fn hash_seed(seed: &str) -> u64 {
    seed.bytes()
        .fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        })
}

/// Produce a fresh seed string from OS entropy.
pub fn random_seed_string() -> String {
    rand::random::<i32>().to_string()
}

/// Map random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
#[derive(Debug, Clone)]
pub struct MapRng {
    rng: ChaCha8Rng,
}

impl MapRng {
    /// Create a new layout RNG with the given numeric seed
    pub fn new(seed: u64) -> Self {
        Self::with_stream(seed, LAYOUT_STREAM)
    }

    /// Create an RNG on a specific ChaCha stream of `seed`
    pub fn with_stream(seed: u64, stream: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(stream);
        Self { rng }
    }

    /// Create a layout RNG from a seed string
    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(hash_seed(seed))
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns true with probability percent/100
    pub fn percent(&mut self, percent: u32) -> bool {
        self.rn2(100) < percent
    }

    /// Uniform offset in `[-magnitude, magnitude]`; 0 when magnitude is not positive
    pub fn offset(&mut self, magnitude: f32) -> f32 {
        if magnitude <= 0.0 || !magnitude.is_finite() {
            return 0.0;
        }
        self.rng.gen_range(-magnitude..=magnitude)
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..items.len());
        items.get(index)
    }
}
