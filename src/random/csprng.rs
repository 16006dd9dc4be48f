//! ChaCha-based CSPRNG with periodic reseeding.
//!
//! Wraps ChaCha20 seeded from the operating system. After a configured
//! number of output bytes the generator pulls fresh OS entropy and
//! derives a new key.
//!
//! # Reseeding Model
//!
//! Reseeding uses BLAKE3 to mix:
//! - Previous seed material (retained across reseeds)
//! - Fresh OS entropy
//! - A domain separator and reseed counter
//!
//! A compromised key therefore stops predicting output at the next
//! reseed, and weak fresh input cannot degrade the retained seed.

use super::RandomError;
use blake3::Hasher;
use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, OsRng, RngCore, SeedableRng};
use zeroize::Zeroize;

/// Domain separator for reseeding operations.
const RESEED_DOMAIN: &[u8] = b"passforge-reseed-v1";

/// Default output volume between automatic reseeds (1 MiB).
pub const DEFAULT_RESEED_INTERVAL: u64 = 1024 * 1024;

/// A reseeding CSPRNG backed by ChaCha20.
///
/// Each instance owns its state; share one across threads only behind
/// external synchronization, or give every thread its own.
pub struct ReseedingRng {
    /// The underlying ChaCha20 CSPRNG.
    inner: ChaCha20Rng,
    /// Retained seed material for mixing during reseed.
    /// This is NOT the ChaCha internal state.
    seed_material: [u8; 32],
    /// Output bytes between automatic reseeds. `None` disables them.
    reseed_interval: Option<u64>,
    /// Total reseeds performed.
    reseed_count: u64,
    /// Bytes generated since last reseed.
    bytes_since_reseed: u64,
}

impl ReseedingRng {
    /// Creates a new CSPRNG seeded from the OS entropy source.
    pub fn from_os_entropy() -> Self {
        Self::with_reseed_interval(DEFAULT_RESEED_INTERVAL)
    }

    /// Creates an OS-seeded CSPRNG reseeding every `interval` bytes.
    ///
    /// An interval of zero disables automatic reseeding.
    pub fn with_reseed_interval(interval: u64) -> Self {
        let mut seed_material = [0u8; 32];
        OsRng.fill_bytes(&mut seed_material);

        Self {
            inner: ChaCha20Rng::from_seed(seed_material),
            seed_material,
            reseed_interval: (interval > 0).then_some(interval),
            reseed_count: 0,
            bytes_since_reseed: 0,
        }
    }

    /// Creates a deterministic CSPRNG from a known seed.
    ///
    /// Automatic reseeding is disabled so output is reproducible.
    /// Intended for tests and benchmarks; never use a fixed seed for
    /// real passwords.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(seed),
            seed_material: seed,
            reseed_interval: None,
            reseed_count: 0,
            bytes_since_reseed: 0,
        }
    }

    /// Reseeds from fresh OS entropy.
    ///
    /// The new key is derived by hashing together:
    /// - The previous seed material
    /// - 32 fresh bytes from the OS
    /// - A domain separator and reseed counter
    pub fn reseed(&mut self) -> Result<(), RandomError> {
        let mut fresh = [0u8; 32];
        OsRng.try_fill_bytes(&mut fresh)?;
        self.mix(&fresh);
        fresh.zeroize();

        tracing::info!(reseed_count = self.reseed_count, "CSPRNG reseeded from OS entropy");
        Ok(())
    }

    /// Returns the number of reseeds performed.
    pub fn reseed_count(&self) -> u64 {
        self.reseed_count
    }

    /// Returns bytes generated since last reseed.
    pub fn bytes_since_reseed(&self) -> u64 {
        self.bytes_since_reseed
    }

    /// Returns the automatic reseed interval, if enabled.
    pub fn reseed_interval(&self) -> Option<u64> {
        self.reseed_interval
    }

    fn mix(&mut self, fresh: &[u8]) {
        // new_seed = BLAKE3(domain || counter || old_seed_material || fresh)
        let mut hasher = Hasher::new();
        hasher.update(RESEED_DOMAIN);
        hasher.update(&self.reseed_count.to_le_bytes());
        hasher.update(&self.seed_material);
        hasher.update(fresh);

        self.seed_material = *hasher.finalize().as_bytes();
        self.inner = ChaCha20Rng::from_seed(self.seed_material);
        self.reseed_count += 1;
        self.bytes_since_reseed = 0;
    }

    /// Accounts for `n` output bytes, reseeding first if the interval
    /// has been reached.
    fn consume(&mut self, n: u64) {
        if let Some(interval) = self.reseed_interval {
            if self.bytes_since_reseed >= interval {
                let mut fresh = [0u8; 32];
                // Panics if the OS source fails.
                OsRng.fill_bytes(&mut fresh);
                self.mix(&fresh);
                fresh.zeroize();

                tracing::debug!(
                    reseed_count = self.reseed_count,
                    interval,
                    "CSPRNG reseeded automatically"
                );
            }
        }
        self.bytes_since_reseed += n;
    }
}

impl Default for ReseedingRng {
    fn default() -> Self {
        Self::from_os_entropy()
    }
}

impl Drop for ReseedingRng {
    fn drop(&mut self) {
        self.seed_material.zeroize();
    }
}

impl std::fmt::Debug for ReseedingRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReseedingRng")
            .field("reseed_interval", &self.reseed_interval)
            .field("reseed_count", &self.reseed_count)
            .field("bytes_since_reseed", &self.bytes_since_reseed)
            .finish_non_exhaustive()
    }
}

impl RngCore for ReseedingRng {
    fn next_u32(&mut self) -> u32 {
        self.consume(4);
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.consume(8);
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.consume(dest.len() as u64);
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.consume(dest.len() as u64);
        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for ReseedingRng {}
