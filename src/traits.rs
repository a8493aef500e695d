//! Extension traits for random sources.

mod rand_prime;

pub use rand_prime::RandPrime;
