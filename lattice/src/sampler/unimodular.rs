//! Bases of `Z^n` built from products of random unimodular blocks.

use algebra::random::{sample_indices, uniform_matrix};
use algebra::{BigInt, IntMatrix, SparseMatrix};
use num_traits::One;
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::parameter::UnimodularProductParameters;
use crate::LatticeError;

use super::LatticeSampler;

/// Samples bases of `Z^n` as words of random unimodular blocks.
///
/// Starting from the identity, every round draws a `d x d` matrix `U` with
/// entries in `[-B, B]` until `|det U| = 1`, picks `d` distinct coordinates
/// `K` and right-multiplies the basis by the identity with `U` written over
/// the rows and columns `K`. Each factor has determinant `±1`, so the
/// product still generates `Z^n`.
#[derive(Debug, Clone, Copy)]
pub struct UnimodularProductSampler {
    params: UnimodularProductParameters,
}

impl UnimodularProductSampler {
    /// Creates a new [`UnimodularProductSampler`].
    pub fn new(params: UnimodularProductParameters) -> Result<Self, LatticeError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Returns the parameters of this [`UnimodularProductSampler`].
    #[inline]
    pub fn params(&self) -> &UnimodularProductParameters {
        &self.params
    }

    /// Draws a `d x d` block with entries in `[-B, B]` and determinant `±1`,
    /// together with the number of draws it took.
    ///
    /// Candidates are screened with the floating point determinant and the
    /// survivors confirmed exactly.
    pub fn sample_block<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(IntMatrix, usize), LatticeError> {
        let d = self.params.block;
        let bound = i64::from(self.params.bound);

        for attempt in 1..=self.params.max_attempts {
            let u = uniform_matrix(rng, d, d, bound)?;
            if u.is_unimodular_f64()? && u.is_unimodular()? {
                return Ok((u, attempt));
            }
        }

        warn!(
            block = d,
            bound,
            attempts = self.params.max_attempts,
            "no unimodular block found"
        );
        Err(LatticeError::AttemptsExhausted {
            sampler: "unimodular product",
            attempts: self.params.max_attempts,
        })
    }
}

/// Builds the `n x n` sparse matrix `Y` with `Y[K[i], K[j]] = U[i, j] - [i = j]`
/// and zeros elsewhere, so that `I + Y` is `U` embedded at the coordinates `K`.
pub fn embed_block(
    block: &IntMatrix,
    positions: &[usize],
    n: usize,
) -> Result<SparseMatrix, LatticeError> {
    let mut y = SparseMatrix::new(n, n);
    for (i, &ki) in positions.iter().enumerate() {
        for (j, &kj) in positions.iter().enumerate() {
            let value = if i == j {
                &block[(i, j)] - BigInt::one()
            } else {
                block[(i, j)].clone()
            };
            y.insert(ki, kj, value)?;
        }
    }
    Ok(y)
}

impl LatticeSampler for UnimodularProductSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<IntMatrix, LatticeError> {
        let UnimodularProductParameters {
            dimension,
            rounds,
            block,
            ..
        } = self.params;

        let mut basis = IntMatrix::identity(dimension);
        let mut total_draws = 0;
        for round in 0..rounds {
            let (u, draws) = self.sample_block(rng)?;
            let positions = sample_indices(rng, dimension, block)?;
            let y = embed_block(&u, &positions, dimension)?;

            // A <- A (I + Y)
            let delta = basis.mul_sparse(&y)?;
            basis.add_assign_matrix(&delta)?;

            total_draws += draws;
            trace!(round, draws, ?positions, "applied unimodular block");
        }

        debug!(
            dimension,
            bound = self.params.bound,
            rounds,
            block,
            total_draws,
            "sampled unimodular product basis"
        );
        Ok(basis)
    }
}
