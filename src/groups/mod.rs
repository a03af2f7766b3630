//! Prime-order subgroup descriptions for the Schnorr protocol.

pub mod rfc5114;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};

use crate::crypto::primality::{is_probably_prime, MILLER_RABIN_ROUNDS};
use crate::crypto::SecureRng;
use crate::{Error, Result};

/// Description of a prime-order subgroup of `Z_p^*`.
///
/// Holds a prime modulus `p`, a generator `g`, and the prime order `q` of the
/// subgroup generated by `g`, with `q | p - 1` and `g^q ≡ 1 (mod p)`.
///
/// A `GroupParams` is immutable once constructed and is meant to be created
/// once per deployment and reused across keypairs, proofs, and verifications.
///
/// # Security
///
/// For real use, `p` should be at least 2048 bits with a `q` of at least 256
/// bits. Parameter *generation* is out of scope here; use a standardized named
/// group such as [`GroupParams::rfc5114_2048_256`] or values vetted out of
/// band.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupParams {
    p: BigUint,
    g: BigUint,
    q: BigUint,
}

impl GroupParams {
    /// Constructs a group description, validating it in full.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` if:
    /// - `p` or `q` fails a 40-round Miller-Rabin primality test
    /// - `q` does not divide `p - 1`
    /// - `g ≤ 1` or `g ≥ p - 1`
    /// - `g^q mod p ≠ 1` (so `g` does not generate an order-`q` subgroup)
    ///
    /// Primality witnesses are drawn from the OS entropy source; use
    /// [`GroupParams::new_with_rng`] to supply a randomness source explicitly.
    pub fn new(p: BigUint, g: BigUint, q: BigUint) -> Result<Self> {
        let mut rng = SecureRng::new();
        Self::new_with_rng(p, g, q, &mut rng)
    }

    /// Like [`GroupParams::new`], drawing primality-test witnesses from the
    /// supplied randomness source.
    pub fn new_with_rng<R: CryptoRngCore>(
        p: BigUint,
        g: BigUint,
        q: BigUint,
        rng: &mut R,
    ) -> Result<Self> {
        if !is_probably_prime(&p, MILLER_RABIN_ROUNDS, rng)? {
            return Err(Error::InvalidParameters(
                "modulus p is not prime".to_string(),
            ));
        }

        if !is_probably_prime(&q, MILLER_RABIN_ROUNDS, rng)? {
            return Err(Error::InvalidParameters(
                "subgroup order q is not prime".to_string(),
            ));
        }

        let p_minus_1 = &p - 1u32;
        if !(&p_minus_1 % &q).is_zero() {
            return Err(Error::InvalidParameters(
                "q does not divide p - 1".to_string(),
            ));
        }

        if g <= BigUint::one() || g >= p_minus_1 {
            return Err(Error::InvalidParameters(
                "generator g must lie in (1, p - 1)".to_string(),
            ));
        }

        // g != 1 and g^q == 1 with q prime pins the order of g to exactly q.
        if !g.modpow(&q, &p).is_one() {
            return Err(Error::InvalidParameters(
                "g does not generate a subgroup of order q".to_string(),
            ));
        }

        Ok(Self { p, g, q })
    }

    /// Constructs a group description without validation.
    ///
    /// Intended for parameters already known to be valid, such as named-group
    /// constants, where re-running primality tests on every construction is
    /// wasted work. Running the protocol over an invalid group voids every
    /// security property of the scheme.
    pub fn new_unchecked(p: BigUint, g: BigUint, q: BigUint) -> Self {
        Self { p, g, q }
    }

    /// RFC 5114 2048-bit MODP group with a 256-bit prime-order subgroup.
    pub fn rfc5114_2048_256() -> Self {
        rfc5114::params()
    }

    /// Returns the prime modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Returns the subgroup generator `g`.
    pub fn generator(&self) -> &BigUint {
        &self.g
    }

    /// Returns the prime subgroup order `q`.
    pub fn order(&self) -> &BigUint {
        &self.q
    }

    /// Checks that `e` lies in `[1, p)` and in the order-`q` subgroup.
    ///
    /// # Errors
    ///
    /// Returns `MalformedProof` on violation; used at trust boundaries for
    /// public keys and decoded proof fields.
    pub fn validate_element(&self, e: &BigUint) -> Result<()> {
        if e.is_zero() || *e >= self.p {
            return Err(Error::MalformedProof(
                "element must lie in [1, p)".to_string(),
            ));
        }

        if !e.modpow(&self.q, &self.p).is_one() {
            return Err(Error::MalformedProof(
                "element is not in the order-q subgroup".to_string(),
            ));
        }

        Ok(())
    }

    /// Checks that `x` is a valid secret exponent in `[1, q-1]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSecret` when `x = 0` or `x ≥ q`.
    pub fn validate_scalar(&self, x: &BigUint) -> Result<()> {
        if x.is_zero() || *x >= self.q {
            return Err(Error::InvalidSecret(
                "secret exponent must lie in [1, q-1]".to_string(),
            ));
        }
        Ok(())
    }

    /// Computes `g^e mod p`.
    pub(crate) fn pow_generator(&self, e: &BigUint) -> BigUint {
        self.g.modpow(e, &self.p)
    }
}
