//! Conversions between `BigUint` and big-endian byte strings

use alloc::vec::Vec;
use num_bigint::BigUint;

use crate::errors::{Error, Result};

/// Returns a new vector of the given length, with 0s left padded.
#[inline]
fn left_pad(input: &[u8], padded_len: usize) -> Result<Vec<u8>> {
    if input.len() > padded_len {
        return Err(Error::InvalidPadLen);
    }

    let mut out = vec![0u8; padded_len];
    out[padded_len - input.len()..].copy_from_slice(input);
    Ok(out)
}

/// Converts input to the new vector of the given length, using BE and with 0s left padded.
///
/// Zero encodes as `padded_len` zero bytes.
#[inline]
pub fn uint_to_be_pad(input: &BigUint, padded_len: usize) -> Result<Vec<u8>> {
    if input.bits() == 0 {
        return left_pad(&[], padded_len);
    }
    left_pad(&input.to_bytes_be(), padded_len)
}

/// Interprets `bytes` as a big-endian unsigned integer, most significant byte first.
#[inline]
pub fn uint_from_be(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Number of bits needed to represent `x`.
///
/// Zero is treated as a one-bit value so that ranges ending at zero still
/// sample a single byte.
#[inline]
pub fn bit_length(x: &BigUint) -> usize {
    core::cmp::max(x.bits(), 1)
}

/// Splits a bit length into the number of bytes needed to hold it and the
/// mask that clears the unused high bits of the first byte.
#[inline]
pub(crate) fn byte_layout(bit_length: usize) -> (usize, u8) {
    let remaining = bit_length % 8;
    let byte_length = bit_length.div_ceil(8);
    let mask = if remaining > 0 {
        ((1u16 << remaining) - 1) as u8
    } else {
        0xff
    };
    (byte_length, mask)
}
