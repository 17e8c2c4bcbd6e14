#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Exact integer arithmetic for lattice basis sampling: extended gcd,
//! dense and sparse integer matrices, and the random primitives the
//! samplers draw from.

pub mod arith;
pub mod error;
pub mod matrix;
pub mod random;

pub use arith::{xgcd_list, xgcd_pair};
pub use error::AlgebraError;
pub use matrix::{IntMatrix, SparseMatrix, UNIMODULAR_TOLERANCE};

pub use num_bigint::BigInt;
