//! Random source abstraction for testable reading synthesis.

use rand::RngCore;

/// Trait for providing random values.
///
/// Implementors only supply `next_u64`; uniform floats, index picks and id
/// bytes are derived from it.
pub trait RandomSource: Send + Sync {
    /// Next raw 64-bit value.
    fn next_u64(&self) -> u64;

    /// Uniform float in `[0, 1)` built from the top 53 bits.
    fn unit(&self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform float in `[lo, hi)`.
    fn uniform(&self, lo: f64, hi: f64) -> f64 {
        lo + self.unit() * (hi - lo)
    }

    /// Uniform index in `0..len`. Returns 0 for an empty range.
    fn pick_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.unit() * len as f64) as usize).min(len - 1)
    }

    /// 16 random bytes (reading ids).
    fn random_bytes_16(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.next_u64().to_le_bytes());
        bytes[8..].copy_from_slice(&self.next_u64().to_le_bytes());
        bytes
    }
}

/// Production implementation using the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn next_u64(&self) -> u64 {
        rand::rng().next_u64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_stays_in_half_open_range() {
        let rng = ThreadRandom::new();
        for _ in 0..1_000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u), "unit out of range: {u}");
        }
    }

    #[test]
    fn pick_index_handles_empty_and_bounds() {
        let rng = ThreadRandom::new();
        assert_eq!(rng.pick_index(0), 0);
        for _ in 0..1_000 {
            assert!(rng.pick_index(3) < 3);
        }
    }

    #[test]
    fn id_bytes_differ_between_calls() {
        let rng = ThreadRandom::new();
        assert_ne!(rng.random_bytes_16(), rng.random_bytes_16());
    }
}
