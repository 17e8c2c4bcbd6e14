//! Rejection sampling of discrete gaussian integer matrices.

use std::f64::consts::PI;

use algebra::random::{bernoulli, uniform_int};
use algebra::IntMatrix;
use rand::Rng;
use tracing::{debug, warn};

use crate::parameter::DiscreteGaussianParameters;
use crate::LatticeError;

use super::LatticeSampler;

/// Rejection sampler for integers distributed proportionally to
/// `exp(-π x² / s²)` on `[-t s, t s]`.
///
/// A candidate is drawn uniformly from the range and kept with probability
/// `exp(-π x² / s²)`. The density is not normalized, so `s` is a width
/// parameter and not the standard deviation.
#[derive(Debug, Clone, Copy)]
pub struct DiscreteGaussianSampler {
    params: DiscreteGaussianParameters,
    range: i64,
}

impl DiscreteGaussianSampler {
    /// Creates a new [`DiscreteGaussianSampler`].
    pub fn new(params: DiscreteGaussianParameters) -> Result<Self, LatticeError> {
        params.validate()?;
        let range = params.range()?;
        Ok(Self { params, range })
    }

    /// Returns the parameters of this [`DiscreteGaussianSampler`].
    #[inline]
    pub fn params(&self) -> &DiscreteGaussianParameters {
        &self.params
    }

    /// Returns the acceptance probability of the candidate `x`.
    #[inline]
    pub fn acceptance(&self, x: i64) -> f64 {
        let x = x as f64;
        let s = self.params.width as f64;
        (-PI * x * x / (s * s)).exp()
    }

    /// Samples a single entry.
    #[inline]
    pub fn sample_value<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<i64, LatticeError> {
        self.sample_value_counted(rng).map(|(x, _)| x)
    }

    /// Samples a vector of `len` independent entries.
    pub fn sample_vector<R: Rng + ?Sized>(
        &self,
        len: usize,
        rng: &mut R,
    ) -> Result<Vec<i64>, LatticeError> {
        (0..len).map(|_| self.sample_value(rng)).collect()
    }

    /// Returns an accepted value and the number of candidates it took.
    fn sample_value_counted<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(i64, usize), LatticeError> {
        for draws in 1..=self.params.max_attempts {
            let x = uniform_int(rng, -self.range, self.range)?;
            if bernoulli(rng, self.acceptance(x))? {
                return Ok((x, draws));
            }
        }

        warn!(
            width = self.params.width,
            tail = self.params.tail,
            attempts = self.params.max_attempts,
            "discrete gaussian rejection loop exhausted"
        );
        Err(LatticeError::AttemptsExhausted {
            sampler: "discrete gaussian",
            attempts: self.params.max_attempts,
        })
    }
}

impl LatticeSampler for DiscreteGaussianSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<IntMatrix, LatticeError> {
        let DiscreteGaussianParameters { rows, cols, .. } = self.params;

        let mut total_draws = 0;
        let mut values = Vec::with_capacity(rows);
        for _ in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for _ in 0..cols {
                let (x, draws) = self.sample_value_counted(rng)?;
                total_draws += draws;
                row.push(x);
            }
            values.push(row);
        }

        debug!(
            rows,
            cols,
            width = self.params.width,
            tail = self.params.tail,
            total_draws,
            "sampled discrete gaussian matrix"
        );
        Ok(IntMatrix::from_rows(values)?)
    }
}
