//! Cryptographic building blocks shared by the protocol.

/// Modular arithmetic helpers.
pub mod field;
/// Miller-Rabin primality testing.
pub mod primality;
/// Cryptographically secure random number generation.
pub mod rng;

pub use rng::SecureRng;
