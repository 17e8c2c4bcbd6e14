//! Bases of `Z^n` completed from Bézout coefficients of an adjugate row.

use algebra::random::uniform_matrix;
use algebra::{xgcd_list, IntMatrix};
use num_traits::One;
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::parameter::BezoutParameters;
use crate::LatticeError;

use super::LatticeSampler;

/// Samples bases of `Z^n` from Bézout coefficients of an adjugate row.
///
/// A random matrix `M` with entries in `[-B, B]` is drawn and `L`, the first
/// row of `adj(M)^T`, is taken. When `gcd(L) = 1` with `Σ c_j L_j = 1`, the
/// matrix built from rows `1..n` of `M` followed by the row `c` has
/// determinant `±1` by cofactor expansion along its last row. Otherwise a
/// fresh `M` is drawn.
#[derive(Debug, Clone, Copy)]
pub struct BezoutSampler {
    params: BezoutParameters,
}

impl BezoutSampler {
    /// Creates a new [`BezoutSampler`].
    pub fn new(params: BezoutParameters) -> Result<Self, LatticeError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Returns the parameters of this [`BezoutSampler`].
    #[inline]
    pub fn params(&self) -> &BezoutParameters {
        &self.params
    }

    /// Builds the basis from `m`, or returns `None` when the adjugate row of
    /// `m` is not primitive.
    pub fn complete(&self, m: &IntMatrix) -> Result<Option<IntMatrix>, LatticeError> {
        // first row of adj(M)^T
        let row = m.cofactor_row(0)?;
        let (gcd, coefs) = xgcd_list(&row)?;
        if !gcd.is_one() {
            trace!(%gcd, "adjugate row is not primitive");
            return Ok(None);
        }

        let last = IntMatrix::from_rows(vec![coefs])?;
        Ok(Some(m.remove_row(0)?.vstack(&last)?))
    }
}

impl LatticeSampler for BezoutSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<IntMatrix, LatticeError> {
        let BezoutParameters {
            dimension, bound, ..
        } = self.params;

        for attempt in 1..=self.params.max_attempts {
            let m = uniform_matrix(rng, dimension, dimension, i64::from(bound))?;
            if let Some(basis) = self.complete(&m)? {
                debug!(dimension, bound, attempt, "sampled bezout basis");
                return Ok(basis);
            }
        }

        warn!(
            dimension,
            bound,
            attempts = self.params.max_attempts,
            "bezout sampling exhausted its retries"
        );
        Err(LatticeError::AttemptsExhausted {
            sampler: "bezout",
            attempts: self.params.max_attempts,
        })
    }
}
