//! The lattice samplers and their shared interface.

use algebra::IntMatrix;
use rand::Rng;

use crate::parameter::{BezoutParameters, DiscreteGaussianParameters, UnimodularProductParameters};
use crate::LatticeError;

mod bezout;
mod discrete_gaussian;
mod unimodular;

pub use bezout::BezoutSampler;
pub use discrete_gaussian::DiscreteGaussianSampler;
pub use unimodular::{embed_block, UnimodularProductSampler};

/// A sampler producing an integer matrix from an injected random generator.
pub trait LatticeSampler {
    /// Draws one matrix.
    ///
    /// Fails with [`LatticeError::AttemptsExhausted`] when a rejection or
    /// retry loop reaches its cap.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<IntMatrix, LatticeError>;
}

/// Samples `rows` discrete gaussian row vectors of length `cols` with width
/// `width`, rejecting inside `[-tail * width, tail * width]`.
///
/// The result is meant to be fed into a lattice reduction, it is not a basis
/// by itself.
pub fn discrete_gaussian<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    width: u32,
    tail: u32,
    rng: &mut R,
) -> Result<IntMatrix, LatticeError> {
    DiscreteGaussianSampler::new(DiscreteGaussianParameters::new(rows, cols, width, tail))?
        .sample(rng)
}

/// Samples a `dimension x dimension` basis of `Z^n` as a product of `rounds`
/// random unimodular `block x block` matrices with entries in `[-bound, bound]`.
pub fn unimodular_product<R: Rng + ?Sized>(
    dimension: usize,
    bound: u32,
    rounds: usize,
    block: usize,
    rng: &mut R,
) -> Result<IntMatrix, LatticeError> {
    UnimodularProductSampler::new(UnimodularProductParameters::new(
        dimension, bound, rounds, block,
    ))?
    .sample(rng)
}

/// Samples a `dimension x dimension` basis of `Z^n` from the Bézout
/// coefficients of an adjugate row of a random matrix with entries in
/// `[-bound, bound]`.
pub fn bezout_sampling<R: Rng + ?Sized>(
    dimension: usize,
    bound: u32,
    rng: &mut R,
) -> Result<IntMatrix, LatticeError> {
    BezoutSampler::new(BezoutParameters::new(dimension, bound))?.sample(rng)
}
