//! Secure random bytes and uniformly distributed integers.

use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::One;
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::algorithms::pad::{bit_length, byte_layout, uint_from_be};
use crate::errors::{Error, Result};
use crate::options::Options;

/// Fills `byte_length` bytes from `rng`. With `force_top_bit` the most
/// significant bit of the first byte is set.
pub fn random_bytes<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    byte_length: usize,
    force_top_bit: bool,
) -> Result<Vec<u8>> {
    if byte_length == 0 {
        return Err(Error::InvalidByteLength);
    }

    let mut bytes = vec![0u8; byte_length];
    rng.try_fill_bytes(&mut bytes)?;
    if force_top_bit {
        bytes[0] |= 0x80;
    }
    Ok(bytes)
}

/// Returns `bit_length` random bits as the shortest big-endian byte string
/// that holds them. Unused high bits of the first byte are cleared. With
/// `force_top_bit` the highest requested bit is set, so the value has exactly
/// `bit_length` bits.
pub fn random_bits<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_length: usize,
    force_top_bit: bool,
) -> Result<Vec<u8>> {
    if bit_length == 0 {
        return Err(Error::InvalidBitLength);
    }

    let (byte_length, mask) = byte_layout(bit_length);
    let mut bytes = random_bytes(rng, byte_length, false)?;
    bytes[0] &= mask;
    if force_top_bit {
        // `mask` is all ones up to and including the top bit.
        bytes[0] |= mask ^ (mask >> 1);
    }
    Ok(bytes)
}

/// Uniformly samples an integer in `[min, max]` by rejection.
///
/// Draws `bit_length(max)` fresh random bits per attempt and discards values
/// outside the range. Each attempt succeeds with probability above
/// `(max - min + 1) / 2^bit_length(max)`.
pub fn random_integer_with<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    max: &BigUint,
    min: &BigUint,
    options: &Options,
) -> Result<BigUint> {
    if max < min {
        return Err(Error::InvalidRange);
    }

    let bits = bit_length(max);
    let mut attempts = 0usize;
    loop {
        options.check_attempts(attempts)?;
        attempts += 1;

        let bytes = Zeroizing::new(random_bits(rng, bits, false)?);
        let rnd = uint_from_be(&bytes);
        if &rnd <= max && &rnd >= min {
            return Ok(rnd);
        }
        tracing::trace!(attempts, "rejected out-of-range sample");
    }
}

/// Uniformly samples an integer in `[min, max]` without an attempt limit.
pub fn random_integer<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    max: &BigUint,
    min: &BigUint,
) -> Result<BigUint> {
    random_integer_with(rng, max, min, &Options::default())
}

/// Uniformly samples an integer in `[1, max]` without an attempt limit.
pub fn random_integer_up_to<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    max: &BigUint,
) -> Result<BigUint> {
    random_integer(rng, max, &BigUint::one())
}
