//! Unbiased sampling on top of a cryptographic RNG.

use rand_core::{CryptoRng, RngCore};

/// A cryptographically secure uniform random source.
///
/// Implemented for every `RngCore + CryptoRng` type, so `OsRng`,
/// `ChaCha20Rng` and [`ReseedingRng`](super::ReseedingRng) all qualify.
/// Non-cryptographic generators do not, since they lack the
/// `CryptoRng` marker.
pub trait SecureRandomSource: RngCore + CryptoRng {
    /// Returns an index drawn uniformly from `[0, bound)`.
    ///
    /// Uses rejection sampling over 64-bit draws: values in the
    /// incomplete top bucket are discarded so every index is equally
    /// likely.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    fn uniform_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "uniform_index called with an empty range");

        let range = bound as u64;
        // 2^64 mod range, computed without overflowing.
        let rejected = range.wrapping_neg() % range;
        let zone = u64::MAX - rejected;

        loop {
            let value = self.next_u64();
            if value <= zone {
                return (value % range) as usize;
            }
        }
    }

    /// Permutes `items` in place (Fisher-Yates).
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.uniform_index(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: RngCore + CryptoRng> SecureRandomSource for R {}
