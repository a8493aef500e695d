//! Useful algorithms related to random integers and probable primes.

pub(crate) mod generate;
pub(crate) mod pad;
pub(crate) mod primality;
pub(crate) mod sample;
