use crate::error::Result;
use rand::rngs::OsRng;
use rand::RngCore;

/// Source of bounded random values for dice rolls.
///
/// Implementations must return values uniformly distributed in `0..bound`.
/// The default implementation is [`OsRandom`]; tests substitute deterministic
/// sources to drive the generator reproducibly.
pub trait RandomSource {
    /// Returns a uniformly distributed value in `0..bound`.
    ///
    /// `bound` must be at least 1. Fails with [`Error::Randomness`] if the
    /// underlying entropy source is unavailable.
    ///
    /// [`Error::Randomness`]: crate::Error::Randomness
    fn next(&mut self, bound: u32) -> Result<u32>;
}

/// Cryptographically secure random source backed by the operating system.
///
/// Stateless and safe for concurrent use from multiple threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next(&mut self, bound: u32) -> Result<u32> {
        debug_assert!(bound > 0, "bound must be positive");

        // Rejection sampling keeps the modulo unbiased.
        let zone = (u32::MAX / bound) * bound;

        loop {
            let mut buf = [0u8; 4];
            OsRng.try_fill_bytes(&mut buf)?;

            let value = u32::from_le_bytes(buf);
            if value < zone {
                return Ok(value % bound);
            }
        }
    }
}
