//! Parameters of the lattice samplers.
//!
//! The structs carry plain public fields so that experiment drivers can
//! build them directly or deserialize them. Samplers validate them when
//! they are constructed.

use serde::{Deserialize, Serialize};

use crate::LatticeError;

/// Default cap on rejection draws or whole-sample retries.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1 << 20;

/// Rejection range multiplier used by the sieve when it samples fresh vectors.
pub const SIEVE_TAIL: u32 = 10;

#[inline]
fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

#[inline]
fn positive(name: &'static str, value: u64) -> Result<(), LatticeError> {
    if value == 0 {
        Err(LatticeError::InvalidParameter {
            name,
            value,
            reason: "must be positive",
        })
    } else {
        Ok(())
    }
}

/// Parameters for discrete gaussian row sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscreteGaussianParameters {
    /// Number of sampled row vectors, refers to **`n`** in the paper.
    pub rows: usize,
    /// Length of each row vector, refers to **`d`** in the paper.
    pub cols: usize,
    /// Gaussian width, refers to **`s`** in the paper.
    pub width: u32,
    /// Rejection range multiplier, refers to **`t`** in the paper.
    /// Candidates are drawn from `[-t s, t s]`.
    pub tail: u32,
    /// Candidate draws allowed per entry.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

impl DiscreteGaussianParameters {
    /// Creates a new [`DiscreteGaussianParameters`] with the default attempt cap.
    #[inline]
    pub fn new(rows: usize, cols: usize, width: u32, tail: u32) -> Self {
        Self {
            rows,
            cols,
            width,
            tail,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Returns the half width `t s` of the candidate range.
    pub fn range(&self) -> Result<i64, LatticeError> {
        i64::from(self.width)
            .checked_mul(i64::from(self.tail))
            .ok_or(LatticeError::InvalidParameter {
                name: "tail",
                value: self.tail as u64,
                reason: "t * s overflows i64",
            })
    }

    /// Checks every field.
    pub fn validate(&self) -> Result<(), LatticeError> {
        positive("rows", self.rows as u64)?;
        positive("cols", self.cols as u64)?;
        positive("width", self.width as u64)?;
        positive("tail", self.tail as u64)?;
        positive("max_attempts", self.max_attempts as u64)?;
        self.range().map(|_| ())
    }
}

/// Parameters for the unimodular product sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnimodularProductParameters {
    /// Lattice dimension, refers to **`n`** in the paper.
    pub dimension: usize,
    /// Entry bound of the random blocks, refers to **`B`** in the paper.
    pub bound: u32,
    /// Word length, the number of multiplied blocks, refers to **`L`** in the paper.
    pub rounds: usize,
    /// Dimension of every unimodular block, refers to **`d`** in the paper.
    pub block: usize,
    /// Random block draws allowed per round.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

impl UnimodularProductParameters {
    /// Creates a new [`UnimodularProductParameters`] with the default attempt cap.
    #[inline]
    pub fn new(dimension: usize, bound: u32, rounds: usize, block: usize) -> Self {
        Self {
            dimension,
            bound,
            rounds,
            block,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Checks every field, including `2 <= block <= dimension`.
    pub fn validate(&self) -> Result<(), LatticeError> {
        positive("dimension", self.dimension as u64)?;
        positive("bound", self.bound as u64)?;
        positive("rounds", self.rounds as u64)?;
        positive("max_attempts", self.max_attempts as u64)?;
        if self.block < 2 || self.block > self.dimension {
            return Err(LatticeError::BlockDimensionNotCompatible {
                block: self.block,
                dimension: self.dimension,
            });
        }
        Ok(())
    }
}

/// Parameters for the Bézout coefficient sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BezoutParameters {
    /// Lattice dimension, refers to **`n`** in the paper.
    pub dimension: usize,
    /// Entry bound of the random matrix, refers to **`B`** in the paper.
    pub bound: u32,
    /// Whole-matrix retries allowed before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

impl BezoutParameters {
    /// Creates a new [`BezoutParameters`] with the default attempt cap.
    #[inline]
    pub fn new(dimension: usize, bound: u32) -> Self {
        Self {
            dimension,
            bound,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Checks every field.
    pub fn validate(&self) -> Result<(), LatticeError> {
        positive("dimension", self.dimension as u64)?;
        positive("bound", self.bound as u64)?;
        positive("max_attempts", self.max_attempts as u64)
    }
}

/// Parameters for the Gauss sieve experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SieveParameters {
    /// Dimension of the sieved vectors.
    pub dimension: usize,
    /// Gaussian width of the fresh samples.
    pub width: u32,
    /// Number of zero vectors after which the sieve stops.
    pub max_collisions: usize,
    /// Cap on the vectors pushed through the reduction.
    #[serde(default = "default_max_attempts")]
    pub max_iterations: usize,
}

impl SieveParameters {
    /// Creates a new [`SieveParameters`] with the default iteration cap.
    #[inline]
    pub fn new(dimension: usize, width: u32, max_collisions: usize) -> Self {
        Self {
            dimension,
            width,
            max_collisions,
            max_iterations: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Returns the parameters of the sampler feeding the sieve.
    #[inline]
    pub fn sampler_parameters(&self) -> DiscreteGaussianParameters {
        DiscreteGaussianParameters::new(1, self.dimension, self.width, SIEVE_TAIL)
    }

    /// Checks every field.
    ///
    /// Every squared norm the sieve handles stays below
    /// `4 * dimension * (t s)^2`, which must fit into an `i64`.
    pub fn validate(&self) -> Result<(), LatticeError> {
        positive("dimension", self.dimension as u64)?;
        positive("width", self.width as u64)?;
        positive("max_collisions", self.max_collisions as u64)?;
        positive("max_iterations", self.max_iterations as u64)?;

        let range = self.sampler_parameters().range()?;
        range
            .checked_mul(range)
            .and_then(|r| r.checked_mul(4))
            .and_then(|r| r.checked_mul(i64::try_from(self.dimension).ok()?))
            .map(|_| ())
            .ok_or(LatticeError::InvalidParameter {
                name: "width",
                value: self.width as u64,
                reason: "squared norms overflow i64",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(DiscreteGaussianParameters::new(2, 3, 4, 5).validate().is_ok());
        assert_eq!(
            DiscreteGaussianParameters::new(0, 3, 4, 5).validate(),
            Err(LatticeError::InvalidParameter {
                name: "rows",
                value: 0,
                reason: "must be positive"
            })
        );
        assert!(DiscreteGaussianParameters::new(1, 1, u32::MAX, u32::MAX)
            .validate()
            .is_err());

        assert!(UnimodularProductParameters::new(4, 1, 3, 4).validate().is_ok());
        assert_eq!(
            UnimodularProductParameters::new(4, 1, 3, 5).validate(),
            Err(LatticeError::BlockDimensionNotCompatible {
                block: 5,
                dimension: 4
            })
        );
        assert!(UnimodularProductParameters::new(4, 1, 3, 1)
            .validate()
            .is_err());

        assert!(BezoutParameters::new(1, 1).validate().is_ok());
        assert!(BezoutParameters::new(3, 0).validate().is_err());

        assert!(SieveParameters::new(8, 10, 1).validate().is_ok());
        assert!(SieveParameters::new(8, u32::MAX, 1).validate().is_err());
    }
}
