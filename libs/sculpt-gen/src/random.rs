//! # Randomness Sources
//!
//! Generators never reach for a global RNG. Every run takes a
//! [`RandomSource`], which hands out uniform draws in `[0, 1)` one at a
//! time and may fail. Failing sources stop the run; there is no fallback
//! seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use thiserror::Error;

/// Errors raised by a randomness source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomSourceError {
    /// A scripted sequence ran out of draws.
    #[error("random sequence exhausted after {consumed} draws")]
    Exhausted { consumed: usize },

    /// The operating system could not provide entropy.
    #[error("entropy unavailable: {0}")]
    Entropy(String),
}

/// A stream of uniform draws.
///
/// Only [`next_unit`](RandomSource::next_unit) is required; the range
/// helpers consume exactly one draw each.
pub trait RandomSource {
    /// Next draw in `[0, 1)`.
    fn next_unit(&mut self) -> Result<f64, RandomSourceError>;

    /// Uniform draw in `[min, max)`.
    fn uniform(&mut self, min: f64, max: f64) -> Result<f64, RandomSourceError> {
        Ok(self.next_unit()? * (max - min) + min)
    }

    /// Uniform draw in `[-spread, spread)`.
    fn symmetric(&mut self, spread: f64) -> Result<f64, RandomSourceError> {
        self.uniform(-spread, spread)
    }

    /// Bernoulli trial succeeding with probability `p`.
    fn chance(&mut self, p: f64) -> Result<bool, RandomSourceError> {
        Ok(self.next_unit()? < p)
    }

    /// Uniform index in `0..n`; `n` must be non-zero.
    fn index(&mut self, n: usize) -> Result<usize, RandomSourceError> {
        let i = (self.next_unit()? * n as f64).floor() as usize;
        Ok(i.min(n.saturating_sub(1)))
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_unit(&mut self) -> Result<f64, RandomSourceError> {
        (**self).next_unit()
    }
}

/// Adapter over any [`rand::Rng`].
///
/// # Example
///
/// ```rust
/// use sculpt_gen::random::{RandomSource, RngSource};
///
/// let mut a = RngSource::seeded(7);
/// let mut b = RngSource::seeded(7);
/// assert_eq!(a.next_unit().unwrap(), b.next_unit().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
    consumed: usize,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, consumed: 0 }
    }

    /// Draws handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<Pcg64> {
    /// Reproducible source seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg64::seed_from_u64(seed))
    }

    /// Source seeded from operating-system entropy.
    pub fn from_entropy() -> Result<Self, RandomSourceError> {
        Pcg64::try_from_os_rng()
            .map(Self::new)
            .map_err(|e| RandomSourceError::Entropy(e.to_string()))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> Result<f64, RandomSourceError> {
        self.consumed += 1;
        Ok(self.rng.random::<f64>())
    }
}

/// Replays a fixed list of draws, then fails with
/// [`RandomSourceError::Exhausted`].
///
/// # Example
///
/// ```rust
/// use sculpt_gen::random::{DrawSequence, RandomSource, RandomSourceError};
///
/// let mut seq = DrawSequence::new([0.25]);
/// assert_eq!(seq.uniform(0.0, 4.0).unwrap(), 1.0);
/// assert_eq!(seq.next_unit(), Err(RandomSourceError::Exhausted { consumed: 1 }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DrawSequence {
    draws: Vec<f64>,
    next: usize,
}

impl DrawSequence {
    /// Scripted source; each value should lie in `[0, 1)`.
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            next: 0,
        }
    }

    pub fn consumed(&self) -> usize {
        self.next
    }

    pub fn remaining(&self) -> usize {
        self.draws.len() - self.next
    }
}

impl RandomSource for DrawSequence {
    fn next_unit(&mut self) -> Result<f64, RandomSourceError> {
        let value = self
            .draws
            .get(self.next)
            .copied()
            .ok_or(RandomSourceError::Exhausted {
                consumed: self.next,
            })?;
        self.next += 1;
        Ok(value)
    }
}
