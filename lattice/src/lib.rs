#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Samplers for bases of the integer lattice `Z^n`.
//!
//! Three independent strategies are provided: discrete gaussian row vectors
//! (input for a later lattice reduction), products of random unimodular
//! blocks, and the Bézout coefficient construction over an adjugate row.
//! A Gauss sieve over `Z^n` is included for experiments on the sampled
//! vectors.

mod error;
mod sampler;

pub mod parameter;
pub mod sieve;

pub use error::LatticeError;
pub use parameter::{
    BezoutParameters, DiscreteGaussianParameters, SieveParameters, UnimodularProductParameters,
    DEFAULT_MAX_ATTEMPTS,
};
pub use sampler::{
    bezout_sampling, discrete_gaussian, embed_block, unimodular_product, BezoutSampler,
    DiscreteGaussianSampler, LatticeSampler, UnimodularProductSampler,
};
pub use sieve::{gauss_reduce, gauss_sieve, SieveReport};

pub use algebra::{BigInt, IntMatrix};
