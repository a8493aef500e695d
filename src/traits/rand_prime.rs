//! Method-call access to prime generation on any secure random source.

use num_bigint::BigUint;
use rand_core::CryptoRngCore;

use crate::algorithms::generate::generate_prime_default;
use crate::algorithms::primality::is_probably_prime;
use crate::algorithms::sample::{random_integer, random_integer_up_to};
use crate::errors::Result;
use crate::options::DEFAULT_ITERATIONS;

/// A generic trait for generating random primes and bounded random integers.
///
/// *Warning*: This is highly dependent on the provided random number generator
/// to provide actually random primes.
///
/// # Example
#[cfg_attr(feature = "getrandom", doc = "```")]
#[cfg_attr(not(feature = "getrandom"), doc = "```ignore")]
/// use bigprime::RandPrime;
/// use rand_core::OsRng;
///
/// let p = OsRng.gen_prime(256).expect("failed to generate a prime");
/// assert_eq!(p.bits(), 256);
/// ```
pub trait RandPrime {
    /// Generate a random probable prime with exactly `bit_length` bits, using
    /// [`DEFAULT_ITERATIONS`] Miller-Rabin rounds.
    fn gen_prime(&mut self, bit_length: usize) -> Result<BigUint>;

    /// Generate a uniformly distributed integer in `[min, max]`.
    fn gen_biguint_between(&mut self, min: &BigUint, max: &BigUint) -> Result<BigUint>;

    /// Generate a uniformly distributed integer in `[1, max]`.
    fn gen_biguint_up_to(&mut self, max: &BigUint) -> Result<BigUint>;

    /// Check `candidate` with [`DEFAULT_ITERATIONS`] Miller-Rabin rounds.
    fn is_probably_prime(&mut self, candidate: &BigUint) -> Result<bool>;
}

impl<R: CryptoRngCore + ?Sized> RandPrime for R {
    fn gen_prime(&mut self, bit_length: usize) -> Result<BigUint> {
        generate_prime_default(self, bit_length)
    }

    fn gen_biguint_between(&mut self, min: &BigUint, max: &BigUint) -> Result<BigUint> {
        random_integer(self, max, min)
    }

    fn gen_biguint_up_to(&mut self, max: &BigUint) -> Result<BigUint> {
        random_integer_up_to(self, max)
    }

    fn is_probably_prime(&mut self, candidate: &BigUint) -> Result<bool> {
        is_probably_prime(self, candidate, DEFAULT_ITERATIONS)
    }
}
