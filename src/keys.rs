//! Keypair generation for the Schnorr identification scheme.

use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::rng::random_scalar;
use crate::groups::GroupParams;
use crate::Result;

/// Secret exponent `x` with `h = g^x mod p`.
///
/// Owned exclusively by the prover. It is never serialized, its `Debug`
/// output is redacted, and the value is overwritten with zero on drop.
#[derive(Clone, Eq, PartialEq)]
pub struct SecretKey(BigUint);

impl SecretKey {
    /// Wraps a secret exponent. The value is not range-checked here; that
    /// happens against a concrete group in [`Prover::new`](crate::Prover::new)
    /// and [`KeyPair::from_secret`].
    pub fn new(x: BigUint) -> Self {
        Self(x)
    }

    pub(crate) fn exponent(&self) -> &BigUint {
        &self.0
    }
}

impl Zeroize for SecretKey {
    fn zeroize(&mut self) {
        // BigUint carries no Zeroize impl; overwriting with zero is the best
        // effort available without reaching into its allocation.
        self.0.set_zero();
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// Public value `h = g^x mod p`. Freely shareable.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PublicKey(BigUint);

impl PublicKey {
    /// Wraps a public value.
    pub fn new(h: BigUint) -> Self {
        Self(h)
    }

    /// Returns the group element `h`.
    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

/// A secret/public keypair for one prover identity.
#[derive(Clone, Debug)]
pub struct KeyPair {
    secret: SecretKey,
    public: PublicKey,
}

impl KeyPair {
    /// Draws `x` uniformly from `[1, q-1]` using the supplied CSPRNG and
    /// computes `h = g^x mod p`.
    ///
    /// # Errors
    ///
    /// `RandomnessUnavailable` if the entropy source fails; there is no other
    /// failure path.
    pub fn generate<R: CryptoRngCore>(params: &GroupParams, rng: &mut R) -> Result<Self> {
        let x = random_scalar(rng, params.order())?;
        let public = PublicKey::new(params.pow_generator(&x));
        Ok(Self {
            secret: SecretKey::new(x),
            public,
        })
    }

    /// Rebuilds a keypair from an existing secret, recomputing `h`.
    ///
    /// # Errors
    ///
    /// `InvalidSecret` if the exponent is outside `[1, q-1]`.
    pub fn from_secret(params: &GroupParams, secret: SecretKey) -> Result<Self> {
        params.validate_scalar(secret.exponent())?;
        let public = PublicKey::new(params.pow_generator(secret.exponent()));
        Ok(Self { secret, public })
    }

    /// Returns the secret half.
    pub fn secret(&self) -> &SecretKey {
        &self.secret
    }

    /// Returns the public half.
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    /// Splits the keypair into its halves.
    pub fn into_parts(self) -> (SecretKey, PublicKey) {
        let Self { secret, public } = self;
        (secret, public)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::SecureRng;
    use crate::Error;

    fn toy() -> GroupParams {
        GroupParams::new(
            BigUint::from(23u32),
            BigUint::from(4u32),
            BigUint::from(11u32),
        )
        .unwrap()
    }

    #[test]
    fn generated_keypair_is_consistent() {
        let params = toy();
        let mut rng = SecureRng::new();

        for _ in 0..50 {
            let keypair = KeyPair::generate(&params, &mut rng).unwrap();
            params.validate_scalar(keypair.secret().exponent()).unwrap();
            params.validate_element(keypair.public().value()).unwrap();
            assert_eq!(
                keypair.public().value(),
                &params.pow_generator(keypair.secret().exponent()),
            );
        }
    }

    #[test]
    fn from_secret_recomputes_public() {
        let params = toy();
        let keypair = KeyPair::from_secret(&params, SecretKey::new(BigUint::from(6u32))).unwrap();
        // 4^6 mod 23 = 4096 mod 23 = 2
        assert_eq!(keypair.public().value(), &BigUint::from(2u32));
    }

    #[test]
    fn out_of_range_secret_rejected() {
        let params = toy();
        for x in [0u32, 11, 15] {
            let result = KeyPair::from_secret(&params, SecretKey::new(BigUint::from(x)));
            assert!(matches!(result, Err(Error::InvalidSecret(_))), "x={x}");
        }
    }

    #[test]
    fn secret_debug_is_redacted() {
        let secret = SecretKey::new(BigUint::from(6u32));
        assert_eq!(format!("{secret:?}"), "SecretKey(<redacted>)");
    }

    #[test]
    fn secret_zeroizes() {
        let mut secret = SecretKey::new(BigUint::from(6u32));
        secret.zeroize();
        assert!(secret.exponent().is_zero());
    }
}
