//! Generate random probable primes of an exact bit length

use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, Zeroizing};

use crate::algorithms::pad::uint_from_be;
use crate::algorithms::primality::{primality, Primality};
use crate::algorithms::sample::random_bits;
use crate::errors::{Error, Result};
use crate::options::{Options, DEFAULT_ITERATIONS};

/// Generates a random probable prime with exactly `bit_length` bits.
///
/// Candidates are drawn with their top bit set and tested with
/// [`primality`](crate::primality) until one passes. The low bit is left
/// random, even candidates are discarded by the cheap prefilter. Bit lengths
/// need not be a multiple of 8.
///
/// With `options.max_attempts` unset the loop runs until a prime is found;
/// expected work grows with `bit_length`, roughly `bit_length * ln 2`
/// candidates.
pub fn generate_prime_with<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_length: usize,
    options: &Options,
) -> Result<BigUint> {
    if bit_length < 2 {
        return Err(Error::InvalidBitLength);
    }
    options.validate()?;

    let mut attempts = 0usize;
    loop {
        options.check_attempts(attempts)?;
        attempts += 1;

        let bytes = Zeroizing::new(random_bits(rng, bit_length, true)?);
        let mut candidate = uint_from_be(&bytes);

        if primality(rng, &candidate, options)? == Primality::ProbablyPrime {
            tracing::debug!(bit_length, attempts, "found probable prime");
            return Ok(candidate);
        }

        tracing::trace!(bit_length, attempts, "candidate is composite");
        candidate.zeroize();
    }
}

/// Generates a random probable prime with exactly `bit_length` bits, checked
/// with `iterations` Miller-Rabin rounds.
pub fn generate_prime<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_length: usize,
    iterations: usize,
) -> Result<BigUint> {
    generate_prime_with(rng, bit_length, &Options::new(iterations))
}

/// [`generate_prime`] with [`DEFAULT_ITERATIONS`] rounds.
pub(crate) fn generate_prime_default<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_length: usize,
) -> Result<BigUint> {
    generate_prime(rng, bit_length, DEFAULT_ITERATIONS)
}
