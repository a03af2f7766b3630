//! Verifier side of the Schnorr identification scheme.

use num_bigint::BigUint;
use num_traits::Zero;

use super::proof::Proof;
use super::transcript::Transcript;
use crate::groups::GroupParams;
use crate::keys::PublicKey;
use crate::{Error, Result};

/// Verifier for the Schnorr zero-knowledge protocol.
///
/// Checks `g^s ≡ t · h^c (mod p)`. A proof that is well-formed but wrong
/// yields `Ok(false)` — that is the normal outcome for a prover who does not
/// know the secret, never an error. Errors are reserved for malformed inputs.
pub struct Verifier {
    params: GroupParams,
    public: PublicKey,
}

impl Verifier {
    /// Creates a verifier for the given public key.
    ///
    /// # Errors
    ///
    /// `MalformedProof` if `h` is out of range or outside the order-`q`
    /// subgroup.
    pub fn new(params: GroupParams, public: PublicKey) -> Result<Self> {
        params.validate_element(public.value())?;
        Ok(Self { params, public })
    }

    /// Verifies a non-interactive proof, recomputing the Fiat-Shamir
    /// challenge from scratch.
    pub fn verify(&self, proof: &Proof) -> Result<bool> {
        let mut transcript = Transcript::new();
        self.verify_with_transcript(proof, &mut transcript)
    }

    /// Verifies a proof over a caller-supplied transcript.
    ///
    /// The transcript must carry the same context the prover appended, or the
    /// recomputed challenge differs and the proof is rejected.
    pub fn verify_with_transcript(
        &self,
        proof: &Proof,
        transcript: &mut Transcript,
    ) -> Result<bool> {
        self.check_proof_shape(proof)?;

        transcript.append_parameters(&self.params);
        transcript.append_public_key(self.public.value());
        transcript.append_commitment(proof.commitment().value());

        let challenge = transcript.challenge_scalar(self.params.order());
        Ok(self.check_equation(&challenge, proof))
    }

    /// Interactive fourth step: checks the response against an explicit
    /// challenge.
    pub fn verify_response(&self, challenge: &BigUint, proof: &Proof) -> Result<bool> {
        self.check_proof_shape(proof)?;
        Ok(self.check_equation(challenge, proof))
    }

    /// Range checks on the proof fields: `t ∈ [1, p)`, `s ∈ [0, q)`.
    fn check_proof_shape(&self, proof: &Proof) -> Result<()> {
        let t = proof.commitment().value();
        if t.is_zero() || t >= self.params.modulus() {
            return Err(Error::MalformedProof(
                "commitment must lie in [1, p)".to_string(),
            ));
        }

        if proof.response().value() >= self.params.order() {
            return Err(Error::MalformedProof(
                "response must lie in [0, q)".to_string(),
            ));
        }

        Ok(())
    }

    /// `g^s mod p == t · h^c mod p`.
    fn check_equation(&self, challenge: &BigUint, proof: &Proof) -> bool {
        let p = self.params.modulus();
        let c = challenge % self.params.order();

        let lhs = self.params.pow_generator(proof.response().value());
        let rhs = proof.commitment().value() * self.public.value().modpow(&c, p) % p;

        lhs == rhs
    }
}
