//! Fiat-Shamir transcript for non-interactive proofs.
//!
//! Provides domain-separated, transcript-based challenge derivation using
//! Merlin: `c = H(p, g, q, h, t, context) mod q`.

use merlin::Transcript as MerlinTranscript;
use num_bigint::BigUint;

use crate::groups::GroupParams;

/// Protocol label for transcript initialization.
const PROTOCOL_LABEL: &[u8] = b"Schnorr discrete-log ZKP v1";

/// Domain separation tag for protocol name.
const PROTOCOL_DST: &[u8] = b"schnorr-dlog";

/// Domain separation tag for challenge generation.
const CHALLENGE_DST: &[u8] = b"challenge";

/// Number of extra bits for statistical security when reducing mod q.
const EXTRA_SECURITY_BITS: u64 = 128;

/// Transcript wrapper for the Fiat-Shamir transformation.
pub struct Transcript(MerlinTranscript);

impl Transcript {
    /// Creates a new transcript for the Schnorr protocol.
    pub fn new() -> Self {
        let mut transcript = MerlinTranscript::new(PROTOCOL_LABEL);
        transcript.append_message(b"protocol", PROTOCOL_DST);
        Self(transcript)
    }

    /// Appends application-specific context to prevent cross-protocol replay.
    ///
    /// # Security
    ///
    /// Call this with a session identifier, domain separator, or purpose
    /// string before proving so that a proof generated in one context cannot
    /// be replayed in another. Prover and verifier must append identical
    /// context.
    pub fn append_context(&mut self, context: &[u8]) {
        self.0.append_message(b"context", context);
    }

    /// Appends the group description `(p, g, q)` to the transcript.
    pub fn append_parameters(&mut self, params: &GroupParams) {
        self.0
            .append_message(b"modulus-p", &params.modulus().to_bytes_be());
        self.0
            .append_message(b"generator-g", &params.generator().to_bytes_be());
        self.0
            .append_message(b"order-q", &params.order().to_bytes_be());
    }

    /// Appends the public key `h` to the transcript.
    pub fn append_public_key(&mut self, h: &BigUint) {
        self.0.append_message(b"public-h", &h.to_bytes_be());
    }

    /// Appends the commitment `t` to the transcript.
    pub fn append_commitment(&mut self, t: &BigUint) {
        self.0.append_message(b"commitment-t", &t.to_bytes_be());
    }

    /// Derives the challenge `c ∈ [0, q)`.
    ///
    /// Extracts `bits(q) + 128` bits from the transcript and reduces mod `q`,
    /// so the challenge is statistically uniform.
    pub fn challenge_scalar(&mut self, q: &BigUint) -> BigUint {
        let byte_len = ((q.bits() + EXTRA_SECURITY_BITS) as usize).div_ceil(8);
        let mut buf = vec![0u8; byte_len];
        self.0.challenge_bytes(CHALLENGE_DST, &mut buf);
        BigUint::from_bytes_be(&buf) % q
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
