//! ⚠️ Low-level primality functions.
//!
//! # ☢️️ WARNING: HAZARDOUS API ☢️
//!
//! [`miller_rabin`] skips the even/small-factor prefilter that
//! [`primality`](crate::primality) applies and panics on inputs the prefilter
//! would have decided. It is meant for testing pseudoprimes and for callers
//! that already sieve their candidates.

pub use crate::algorithms::primality::miller_rabin;
