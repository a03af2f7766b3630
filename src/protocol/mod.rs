//! The three-message Schnorr sigma protocol and its Fiat-Shamir transform.

/// Proof data structures and wire encoding.
pub mod proof;
/// Prover implementation for generating proofs.
pub mod prover;
/// Merlin transcript wrapper for Fiat-Shamir challenge derivation.
pub mod transcript;
/// Verifier implementation for checking proofs.
pub mod verifier;

pub use proof::{Commitment, Proof, Response};
pub use prover::{Nonce, Prover};
pub use transcript::Transcript;
pub use verifier::Verifier;
