//! Error types for the Schnorr discrete-log proof.

/// Main error types for the library.
///
/// An honest-but-wrong proof is *not* an error: verifying such a proof returns
/// `Ok(false)`. Errors are reserved for malformed inputs and for an
/// environment that cannot supply entropy.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The group description fails primality or subgroup-order checks.
    #[error("invalid group parameters: {0}")]
    InvalidParameters(String),

    /// The secret exponent is outside `[1, q-1]`.
    #[error("invalid secret: {0}")]
    InvalidSecret(String),

    /// A proof or public-key field is out of range or fails to decode.
    #[error("malformed proof: {0}")]
    MalformedProof(String),

    /// The system entropy source failed. Fatal; the operation is aborted
    /// rather than falling back to weaker randomness.
    #[error("randomness source unavailable: {0}")]
    RandomnessUnavailable(#[from] rand_core::Error),
}
