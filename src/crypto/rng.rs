//! Cryptographically secure random number generation.

use num_bigint::BigUint;
use num_traits::One;
use rand_core::{CryptoRng, CryptoRngCore, OsRng, RngCore};
use zeroize::Zeroize;

use crate::{Error, Result};

/// Number of extra bits sampled before reduction, so that the reduction bias
/// is statistically negligible.
const EXTRA_SECURITY_BITS: u64 = 128;

/// Cryptographically secure random number generator.
///
/// This is a thin wrapper around `OsRng` that provides a consistent interface
/// for cryptographic randomness throughout the library.
pub struct SecureRng(OsRng);

impl SecureRng {
    /// Creates a new cryptographically secure random number generator.
    pub fn new() -> Self {
        Self(OsRng)
    }
}

impl Default for SecureRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for SecureRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand_core::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureRng {}

/// Draws a scalar uniformly from `[1, q-1]`.
///
/// Samples `bits(q) + 128` bits and reduces into the range, so the result is
/// statistically uniform. Entropy failure surfaces as
/// [`Error::RandomnessUnavailable`](crate::Error::RandomnessUnavailable); it is
/// never masked by retrying against a weaker source.
pub fn random_scalar<R: CryptoRngCore>(rng: &mut R, q: &BigUint) -> Result<BigUint> {
    if *q <= BigUint::one() {
        return Err(Error::InvalidParameters(
            "order q must exceed 1".to_string(),
        ));
    }

    let byte_len = ((q.bits() + EXTRA_SECURITY_BITS) as usize).div_ceil(8);
    let mut buf = vec![0u8; byte_len];
    rng.try_fill_bytes(&mut buf)?;

    let wide = BigUint::from_bytes_be(&buf);
    buf.zeroize();

    let range = q - BigUint::one();
    Ok(wide % range + BigUint::one())
}
