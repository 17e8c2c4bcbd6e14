use algebra::AlgebraError;

/// Errors that may occur.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    /// Error that occurs when a sampling parameter is out of its valid range.
    #[error("Parameter {name} = {value} is not valid: {reason}!")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// The rejected value.
        value: u64,
        /// What the parameter must satisfy.
        reason: &'static str,
    },
    /// Error that occurs when the block dimension does not fit
    /// into the lattice dimension.
    #[error("Block dimension {block} is not compatible with lattice dimension {dimension}!")]
    BlockDimensionNotCompatible {
        /// block dimension
        block: usize,
        /// lattice dimension
        dimension: usize,
    },
    /// Error that occurs when a rejection or retry loop runs out of attempts.
    #[error("{sampler} sampling gave up after {attempts} attempts")]
    AttemptsExhausted {
        /// The sampler that gave up.
        sampler: &'static str,
        /// The attempt cap that was reached.
        attempts: usize,
    },
    /// Error raised by the underlying integer arithmetic.
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}
