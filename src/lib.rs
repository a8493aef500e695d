#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Usage
//!
//! Every operation borrows a cryptographically secure random source
//! implementing [`rand_core::CryptoRngCore`], such as `rand_core::OsRng`
//! (enable the `getrandom` feature) or a seeded ChaCha generator.
//!
//! ## Generating a prime
//!
#![cfg_attr(feature = "getrandom", doc = "```")]
#![cfg_attr(not(feature = "getrandom"), doc = "```ignore")]
//! use bigprime::{generate_prime, is_probably_prime, DEFAULT_ITERATIONS};
//! use rand_core::OsRng;
//!
//! let p = generate_prime(&mut OsRng, 512, DEFAULT_ITERATIONS).expect("failed to generate a prime");
//! assert_eq!(p.bits(), 512);
//! assert!(is_probably_prime(&mut OsRng, &p, DEFAULT_ITERATIONS).unwrap());
//! ```
//!
//! ## Sampling a bounded integer
//!
//! ```
//! use bigprime::{random_integer, BigUint};
//! use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};
//!
//! // Seeded for reproducibility only: use an OS-backed source for real keys.
//! let mut rng = ChaCha20Rng::from_seed([7; 32]);
//!
//! let min = BigUint::from(10u32);
//! let max = BigUint::from(1_000_000u32);
//! let v = random_integer(&mut rng, &max, &min).unwrap();
//! assert!(v >= min && v <= max);
//! ```
//!
//! ## Bounding the search
//!
//! Sampling and prime generation retry until they succeed. [`Options`] can cap
//! the number of draws, in which case [`Error::AttemptsExhausted`] is returned:
//!
//! ```
//! use bigprime::{generate_prime_with, Error, Options};
//! use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};
//!
//! let mut rng = ChaCha20Rng::from_seed([7; 32]);
//! let options = Options::default().with_iterations(32).with_max_attempts(1);
//!
//! match generate_prime_with(&mut rng, 1024, &options) {
//!     Ok(p) => assert_eq!(p.bits(), 1024),
//!     Err(err) => assert_eq!(err, Error::AttemptsExhausted),
//! }
//! ```
//!
//! # Timing side channels
//!
//! None of the operations run in constant time. Sampling loops, trial division
//! and modular exponentiation all take time that depends on the values
//! involved.

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;
pub use rand_core;

mod algorithms;
pub mod errors;
pub mod options;
pub mod traits;

#[cfg(test)]
mod dummy_rng;

pub use crate::{
    algorithms::generate::{generate_prime, generate_prime_with},
    algorithms::pad::{bit_length, uint_from_be, uint_to_be_pad},
    algorithms::primality::{is_probably_prime, primality, Primality},
    algorithms::sample::{
        random_bits, random_bytes, random_integer, random_integer_up_to, random_integer_with,
    },
    errors::{Error, Result},
    options::{Options, DEFAULT_ITERATIONS},
    traits::RandPrime,
};

#[cfg(feature = "hazmat")]
pub mod hazmat;
