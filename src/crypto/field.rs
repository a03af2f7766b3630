//! Modular arithmetic helpers over arbitrary-precision integers.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{Error, Result};

/// Computes `(a - b) mod m`.
///
/// # Errors
///
/// Returns `InvalidParameters` if the modulus is zero.
pub fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> Result<BigUint> {
    if m.is_zero() {
        return Err(Error::InvalidParameters("modulus cannot be zero".to_string()));
    }

    let a = a % m;
    let b = b % m;
    if a >= b {
        Ok(a - b)
    } else {
        Ok(m - b + a)
    }
}

/// Computes the multiplicative inverse of `a` modulo the prime `m`, as
/// `a^(m-2) mod m`.
///
/// Returns `None` when `a ≡ 0 (mod m)`, which has no inverse. The caller is
/// responsible for `m` being prime.
pub fn inv_mod_prime(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let reduced = a % m;
    if reduced.is_zero() {
        return None;
    }

    let exp = m - BigUint::from(2u32);
    Some(reduced.modpow(&exp, m))
}
