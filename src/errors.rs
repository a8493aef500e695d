//! Error types.

/// Alias for [`core::result::Result`] with the `bigprime` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The random source failed to produce bytes.
    Rng,

    /// Upper bound of the sampling range is smaller than the lower bound.
    InvalidRange,

    /// Requested bit length is too small for the operation.
    InvalidBitLength,

    /// Requested an empty byte sequence.
    InvalidByteLength,

    /// Number of Miller-Rabin rounds must be at least one.
    InvalidIterations,

    /// Configured attempt limit reached before a value was found.
    AttemptsExhausted,

    /// Integer does not fit into the requested number of bytes.
    InvalidPadLen,
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Rng => write!(f, "random number generator failure"),
            Error::InvalidRange => write!(f, "invalid range: max must not be less than min"),
            Error::InvalidBitLength => write!(f, "invalid bit length"),
            Error::InvalidByteLength => write!(f, "byte length must be at least 1"),
            Error::InvalidIterations => write!(f, "iterations must be at least 1"),
            Error::AttemptsExhausted => write!(f, "attempt limit exhausted"),
            Error::InvalidPadLen => write!(f, "invalid padding length"),
        }
    }
}

impl From<rand_core::Error> for Error {
    fn from(_err: rand_core::Error) -> Self {
        Error::Rng
    }
}
