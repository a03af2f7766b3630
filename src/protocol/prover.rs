//! Prover side of the Schnorr identification scheme.

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::proof::{Commitment, Proof, Response};
use super::transcript::Transcript;
use crate::crypto::rng::random_scalar;
use crate::groups::GroupParams;
use crate::keys::{PublicKey, SecretKey};
use crate::Result;

/// Prover for the Schnorr zero-knowledge protocol.
///
/// Demonstrates knowledge of a secret exponent `x` with `h = g^x mod p`
/// without revealing `x`.
///
/// Two modes are available:
/// - non-interactive: [`prove`](Prover::prove) /
///   [`prove_with_transcript`](Prover::prove_with_transcript), with the
///   challenge derived by Fiat-Shamir;
/// - interactive: [`commit`](Prover::commit) produces the first message, an
///   external verifier supplies the challenge, and
///   [`respond`](Prover::respond) produces the third message.
pub struct Prover {
    params: GroupParams,
    secret: SecretKey,
    public: PublicKey,
}

impl Prover {
    /// Creates a prover, computing `h = g^x mod p` from the secret.
    ///
    /// # Errors
    ///
    /// `InvalidSecret` if the exponent is outside `[1, q-1]`.
    pub fn new(params: GroupParams, secret: SecretKey) -> Result<Self> {
        params.validate_scalar(secret.exponent())?;
        let public = PublicKey::new(params.pow_generator(secret.exponent()));
        Ok(Self {
            params,
            secret,
            public,
        })
    }

    /// Creates a prover from an already-computed public key.
    ///
    /// The caller must ensure `public` matches the secret; nothing is
    /// recomputed here.
    ///
    /// # Errors
    ///
    /// `InvalidSecret` if the exponent is outside `[1, q-1]`.
    pub fn with_public_key(
        params: GroupParams,
        secret: SecretKey,
        public: PublicKey,
    ) -> Result<Self> {
        params.validate_scalar(secret.exponent())?;
        Ok(Self {
            params,
            secret,
            public,
        })
    }

    /// Returns the public key `h`.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Generates a non-interactive zero-knowledge proof via Fiat-Shamir.
    pub fn prove<R: CryptoRngCore>(&self, rng: &mut R) -> Result<Proof> {
        let mut transcript = Transcript::new();
        self.prove_with_transcript(rng, &mut transcript)
    }

    /// Generates a proof over a caller-supplied transcript.
    ///
    /// Lets the caller bind the proof to application context (session
    /// identifiers and the like) via [`Transcript::append_context`] before
    /// proving.
    pub fn prove_with_transcript<R: CryptoRngCore>(
        &self,
        rng: &mut R,
        transcript: &mut Transcript,
    ) -> Result<Proof> {
        let (commitment, nonce) = self.commit(rng)?;

        transcript.append_parameters(&self.params);
        transcript.append_public_key(self.public.value());
        transcript.append_commitment(commitment.value());

        let challenge = transcript.challenge_scalar(self.params.order());
        let response = self.respond(nonce, &challenge);

        Ok(Proof::new(commitment, response))
    }

    /// Interactive first message: draws a fresh nonce `r` from `[1, q-1]` and
    /// commits to `t = g^r mod p`.
    ///
    /// The nonce must stay secret; only the commitment is sent. Dropping the
    /// nonce (abandoning the session) zeroizes it with no other side effect.
    pub fn commit<R: CryptoRngCore>(&self, rng: &mut R) -> Result<(Commitment, Nonce)> {
        let r = random_scalar(rng, self.params.order())?;
        let t = self.params.pow_generator(&r);
        Ok((Commitment::new(t), Nonce::new(r)))
    }

    /// Interactive third message: `s = (r + c·x) mod q`.
    ///
    /// Consumes the nonce, which is zeroized when this returns: answering two
    /// different challenges with one nonce hands the observer the secret, so
    /// single use is enforced by move.
    pub fn respond(&self, nonce: Nonce, challenge: &BigUint) -> Response {
        let q = self.params.order();
        let cx = (challenge % q) * self.secret.exponent() % q;
        let s = (nonce.value() + cx) % q;
        Response::new(s)
    }
}

/// Ephemeral nonce `r` from the commitment phase.
///
/// Single use, never transmitted, zeroized on drop.
pub struct Nonce(BigUint);

impl Nonce {
    /// Wraps a nonce value.
    pub fn new(r: BigUint) -> Self {
        Self(r)
    }

    fn value(&self) -> &BigUint {
        &self.0
    }
}

impl Zeroize for Nonce {
    fn zeroize(&mut self) {
        self.0.set_zero();
    }
}

impl Drop for Nonce {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Nonce {}
