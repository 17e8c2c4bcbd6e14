//! This module defines some errors that
//! may occur during the execution of the library.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Error that occurs when two matrices have incompatible shapes for an operation.
    #[error("Matrix shape {lhs:?} is not compatible with {rhs:?} for {op}!")]
    DimensionMismatch {
        /// The operation being performed.
        op: &'static str,
        /// `(rows, cols)` of the left operand.
        lhs: (usize, usize),
        /// `(rows, cols)` of the right operand.
        rhs: (usize, usize),
    },
    /// Error that occurs when a square matrix is required.
    #[error("Matrix of shape {rows}x{cols} is not square!")]
    NotSquare {
        /// row count
        rows: usize,
        /// column count
        cols: usize,
    },
    /// Error that occurs when the rows given to build a matrix have different lengths.
    #[error("Row {row} has length {len}, expected {expected}")]
    RaggedRows {
        /// index of the offending row
        row: usize,
        /// its length
        len: usize,
        /// the length of the first row
        expected: usize,
    },
    /// Error that occurs when an entry position lies outside the matrix.
    #[error("Position {index:?} is out of range for a {shape:?} matrix")]
    IndexOutOfRange {
        /// requested `(row, col)`
        index: (usize, usize),
        /// `(rows, cols)` of the matrix
        shape: (usize, usize),
    },
    /// Error that occurs when an operation needs at least one operand.
    #[error("The input sequence is empty")]
    EmptyInput,
    /// Error that occurs when fails to generate the distribution.
    #[error("Fail to generate the desired distribution.")]
    DistributionErr,
}
