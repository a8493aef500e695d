//! Tuning knobs shared by sampling, primality testing and prime generation.

use crate::errors::{Error, Result};

/// Default number of Miller-Rabin rounds.
///
/// Each round lowers the false-positive bound by a factor of four, so 64 rounds
/// leave at most a 2^-128 chance of accepting an adversarially chosen composite.
pub const DEFAULT_ITERATIONS: usize = 64;

/// Options controlling the probabilistic loops of this crate.
///
/// ```
/// use bigprime::Options;
///
/// let options = Options::default().with_iterations(32).with_max_attempts(10_000);
/// assert_eq!(options.iterations, 32);
/// assert_eq!(options.max_attempts, Some(10_000));
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Options {
    /// Number of Miller-Rabin rounds performed with random witnesses.
    pub iterations: usize,

    /// Upper bound on the number of draws made by
    /// [`random_integer_with`](crate::random_integer_with) and by the candidate
    /// loop of [`generate_prime_with`](crate::generate_prime_with). Miller-Rabin
    /// witness draws are never limited. `None` keeps looping until it succeeds.
    pub max_attempts: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            max_attempts: None,
        }
    }
}

impl Options {
    /// Default options with the given number of Miller-Rabin rounds.
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            ..Default::default()
        }
    }

    /// Sets the number of Miller-Rabin rounds.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Bounds the number of sampling draws and prime candidates.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::InvalidIterations);
        }
        Ok(())
    }

    /// Returns an error once `attempts` draws have used up the budget.
    pub(crate) fn check_attempts(&self, attempts: usize) -> Result<()> {
        match self.max_attempts {
            Some(max) if attempts >= max => {
                tracing::warn!(attempts, "attempt limit exhausted");
                Err(Error::AttemptsExhausted)
            }
            _ => Ok(()),
        }
    }
}
