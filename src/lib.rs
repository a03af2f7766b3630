//! Non-interactive Schnorr zero-knowledge proof of knowledge of a discrete
//! logarithm.
//!
//! A prover demonstrates knowledge of a secret exponent `x` such that
//! `h = g^x mod p` over a prime-order subgroup of `Z_p^*`, without revealing
//! `x`. The three-message sigma protocol (commit, challenge, response) is
//! exposed both interactively ([`Prover::commit`] / [`Prover::respond`] /
//! [`Verifier::verify_response`]) and non-interactively via the Fiat-Shamir
//! transform ([`Prover::prove`] / [`Verifier::verify`]), where the challenge
//! is derived from a domain-separated [`Transcript`] over
//! `(p, g, q, h, t, context)`.
//!
//! Every operation is a pure function of its inputs and an injected
//! randomness source; proofs may be generated and verified concurrently
//! without coordination.
//!
//! # Example
//!
//! ```
//! use schnorr_dlog::{generate_keypair, prove, verify, GroupParams, SecureRng};
//!
//! let params = GroupParams::rfc5114_2048_256();
//! let mut rng = SecureRng::new();
//!
//! let keypair = generate_keypair(&params, &mut rng)?;
//! let proof = prove(&params, keypair.secret(), keypair.public(), &mut rng)?;
//! assert!(verify(&params, keypair.public(), &proof)?);
//! # Ok::<(), schnorr_dlog::Error>(())
//! ```

/// Cryptographic primitives (randomness, modular arithmetic, primality).
pub mod crypto;
/// Error types.
pub mod error;
/// Group parameter descriptions and named groups.
pub mod groups;
/// Secret/public keypairs.
pub mod keys;
/// The sigma protocol: prover, verifier, transcript, proof encoding.
pub mod protocol;

pub use crypto::SecureRng;
pub use error::Error;
pub use groups::GroupParams;
pub use keys::{KeyPair, PublicKey, SecretKey};
pub use protocol::{Commitment, Nonce, Proof, Prover, Response, Transcript, Verifier};

use rand_core::CryptoRngCore;

/// Convenience alias for results returned by this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Generates a keypair: `x` uniform in `[1, q-1]`, `h = g^x mod p`.
pub fn generate_keypair<R: CryptoRngCore>(params: &GroupParams, rng: &mut R) -> Result<KeyPair> {
    KeyPair::generate(params, rng)
}

/// Produces a non-interactive proof of knowledge of `secret` for `public`.
pub fn prove<R: CryptoRngCore>(
    params: &GroupParams,
    secret: &SecretKey,
    public: &PublicKey,
    rng: &mut R,
) -> Result<Proof> {
    Prover::with_public_key(params.clone(), secret.clone(), public.clone())?.prove(rng)
}

/// Verifies a non-interactive proof against `public`.
///
/// Returns `Ok(false)` for a well-formed proof that does not hold; errors are
/// reserved for malformed inputs.
pub fn verify(params: &GroupParams, public: &PublicKey, proof: &Proof) -> Result<bool> {
    Verifier::new(params.clone(), public.clone())?.verify(proof)
}
