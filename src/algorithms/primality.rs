//! Probabilistic primality checks.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use rand_core::CryptoRngCore;

use crate::algorithms::sample::random_integer_with;
use crate::errors::Result;
use crate::options::Options;

/// The first 250 odd primes, used to discard candidates with a small factor
/// before running any modular exponentiation.
#[rustfmt::skip]
const SMALL_PRIMES: [u16; 250] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47,
    53, 59, 61, 67, 71, 73, 79, 83, 89, 97, 101, 103, 107, 109,
    113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269,
    271, 277, 281, 283, 293, 307, 311, 313, 317, 331, 337, 347, 349, 353,
    359, 367, 373, 379, 383, 389, 397, 401, 409, 419, 421, 431, 433, 439,
    443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509, 521, 523,
    541, 547, 557, 563, 569, 571, 577, 587, 593, 599, 601, 607, 613, 617,
    619, 631, 641, 643, 647, 653, 659, 661, 673, 677, 683, 691, 701, 709,
    719, 727, 733, 739, 743, 751, 757, 761, 769, 773, 787, 797, 809, 811,
    821, 823, 827, 829, 839, 853, 857, 859, 863, 877, 881, 883, 887, 907,
    911, 919, 929, 937, 941, 947, 953, 967, 971, 977, 983, 991, 997, 1009,
    1013, 1019, 1021, 1031, 1033, 1039, 1049, 1051, 1061, 1063, 1069, 1087, 1091, 1093,
    1097, 1103, 1109, 1117, 1123, 1129, 1151, 1153, 1163, 1171, 1181, 1187, 1193, 1201,
    1213, 1217, 1223, 1229, 1231, 1237, 1249, 1259, 1277, 1279, 1283, 1289, 1291, 1297,
    1301, 1303, 1307, 1319, 1321, 1327, 1361, 1367, 1373, 1381, 1399, 1409, 1423, 1427,
    1429, 1433, 1439, 1447, 1451, 1453, 1459, 1471, 1481, 1483, 1487, 1489, 1493, 1499,
    1511, 1523, 1531, 1543, 1549, 1553, 1559, 1567, 1571, 1579, 1583, 1597,
];

/// Outcome of a primality check.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Primality {
    /// Passed every round; composite only with negligible probability.
    ProbablyPrime,
    /// Definitely composite.
    Composite,
}

impl Primality {
    /// Returns `true` for [`Primality::ProbablyPrime`].
    pub fn is_probably_prime(&self) -> bool {
        matches!(self, Primality::ProbablyPrime)
    }
}

/// Decides `candidate` if it is even, one, or has a factor among
/// [`SMALL_PRIMES`]. Returns `None` when the Miller-Rabin rounds are needed.
fn trial_division(candidate: &BigUint) -> Option<Primality> {
    // Only set when the candidate is small enough to be in the table.
    let small = candidate.to_u64();

    if small == Some(2) {
        return Some(Primality::ProbablyPrime);
    }
    if candidate.is_even() || candidate.is_one() {
        return Some(Primality::Composite);
    }

    for &p in SMALL_PRIMES.iter() {
        let p = u64::from(p);
        if let Some(c) = small {
            if p > c {
                break;
            }
            if p == c {
                return Some(Primality::ProbablyPrime);
            }
        }
        if (candidate % p).is_zero() {
            return Some(Primality::Composite);
        }
    }

    None
}

/// Miller-Rabin probabilistic primality test, FIPS 186-4 Appendix C.3.1.
///
/// Runs `options.iterations` rounds, each with a fresh witness drawn uniformly
/// from `[2, candidate - 1]`. No trial division is performed.
///
/// `options.max_attempts` does not limit witness draws: a rejected witness is
/// redrawn until one falls in range.
///
/// Panics if `candidate` is even or less than 3.
pub fn miller_rabin<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    candidate: &BigUint,
    options: &Options,
) -> Result<Primality> {
    assert!(
        candidate.is_odd() && candidate.bits() > 1,
        "`candidate` must be odd and greater than 2"
    );

    let two = BigUint::from(2u8);
    let witness_options = Options {
        max_attempts: None,
        ..*options
    };
    let nm1 = candidate - BigUint::one();

    // candidate - 1 = d * 2^a with d odd
    let mut d = nm1.clone();
    let mut a = 0usize;
    while d.is_even() {
        d >>= 1;
        a += 1;
    }

    'round: for _ in 0..options.iterations {
        let b = random_integer_with(rng, &nm1, &two, &witness_options)?;
        let mut z = b.modpow(&d, candidate);

        if z.is_one() || z == nm1 {
            continue;
        }

        for _ in 1..a {
            z = (&z * &z) % candidate;
            if z == nm1 {
                continue 'round;
            }
            if z.is_one() {
                break;
            }
        }

        return Ok(Primality::Composite);
    }

    Ok(Primality::ProbablyPrime)
}

/// Checks `candidate` with trial division by small primes followed by
/// `options.iterations` Miller-Rabin rounds.
///
/// Returns [`Error::InvalidIterations`](crate::Error::InvalidIterations) when
/// `options.iterations` is zero.
pub fn primality<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    candidate: &BigUint,
    options: &Options,
) -> Result<Primality> {
    options.validate()?;

    if let Some(verdict) = trial_division(candidate) {
        return Ok(verdict);
    }

    miller_rabin(rng, candidate, options)
}

/// Reports whether `candidate` is probably prime after `iterations`
/// Miller-Rabin rounds.
///
/// A prime is always reported as such. A composite passes with probability at
/// most 4^-iterations.
///
/// This check is not constant time and must not be run on secret values in a
/// setting where timing can be observed.
pub fn is_probably_prime<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    candidate: &BigUint,
    iterations: usize,
) -> Result<bool> {
    primality(rng, candidate, &Options::new(iterations)).map(|p| p.is_probably_prime())
}
