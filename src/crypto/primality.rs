//! Miller-Rabin probabilistic primality testing.
//!
//! Used by parameter validation only; `num-bigint` ships no primality test of
//! its own. The randomness here affects nothing but the false-accept
//! probability, which is at most `4^-rounds`.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand_core::CryptoRngCore;

use crate::crypto::rng::random_scalar;
use crate::Result;

/// Number of Miller-Rabin rounds used for parameter validation.
pub const MILLER_RABIN_ROUNDS: usize = 40;

/// Miller-Rabin primality test with the given number of random witness rounds.
///
/// # Errors
///
/// Returns `RandomnessUnavailable` if the entropy source fails while drawing
/// witnesses.
pub fn is_probably_prime<R: CryptoRngCore>(
    n: &BigUint,
    rounds: usize,
    rng: &mut R,
) -> Result<bool> {
    let two = BigUint::from(2u32);
    if n < &two {
        return Ok(false);
    }
    if *n == two || *n == BigUint::from(3u32) {
        return Ok(true);
    }
    if n.is_even() {
        return Ok(false);
    }

    // Write n - 1 as d * 2^r with d odd.
    let n_minus_1 = n - 1u32;
    let mut d = n_minus_1.clone();
    let mut r = 0u32;
    while d.is_even() {
        d >>= 1;
        r += 1;
    }

    'witness: for _ in 0..rounds {
        // Witness in [2, n-2]: a uniform draw from [1, n-3] shifted up by one.
        let a = random_scalar(rng, &(n - 2u32))? + 1u32;
        let mut x = a.modpow(&d, n);

        if x.is_one() || x == n_minus_1 {
            continue 'witness;
        }

        for _ in 0..r.saturating_sub(1) {
            x = x.modpow(&two, n);
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        return Ok(false);
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::SecureRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn small_primes_accepted() {
        let mut rng = SecureRng::new();
        for p in [2u32, 3, 5, 7, 11, 13, 23, 101, 99991] {
            assert!(
                is_probably_prime(&BigUint::from(p), MILLER_RABIN_ROUNDS, &mut rng).unwrap(),
                "{p}"
            );
        }
    }

    #[test]
    fn small_composites_rejected() {
        let mut rng = SecureRng::new();
        for n in [0u32, 1, 4, 9, 15, 21, 25, 561, 99993] {
            assert!(
                !is_probably_prime(&BigUint::from(n), MILLER_RABIN_ROUNDS, &mut rng).unwrap(),
                "{n}"
            );
        }
    }

    #[test]
    fn carmichael_numbers_rejected() {
        // Fermat pseudoprimes to many bases; Miller-Rabin must still catch them.
        let mut rng = SecureRng::new();
        for n in [561u32, 1105, 1729, 2465, 2821, 6601] {
            assert!(
                !is_probably_prime(&BigUint::from(n), MILLER_RABIN_ROUNDS, &mut rng).unwrap(),
                "{n}"
            );
        }
    }

    #[test]
    fn large_prime_accepted() {
        let mut rng = SecureRng::new();
        // 2^127 - 1, a Mersenne prime.
        let m127 = (BigUint::one() << 127u32) - 1u32;
        assert!(is_probably_prime(&m127, MILLER_RABIN_ROUNDS, &mut rng).unwrap());
        assert!(!is_probably_prime(&(m127 + 2u32), MILLER_RABIN_ROUNDS, &mut rng).unwrap());
    }

    #[test]
    fn witnesses_come_from_the_injected_rng() {
        // Deterministic seed, deterministic verdicts.
        let mut rng = StdRng::seed_from_u64(5);
        assert!(is_probably_prime(&BigUint::from(99991u32), MILLER_RABIN_ROUNDS, &mut rng).unwrap());
        assert!(!is_probably_prime(&BigUint::from(99993u32), MILLER_RABIN_ROUNDS, &mut rng).unwrap());
    }
}
