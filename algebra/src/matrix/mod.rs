//! Dense and sparse integer matrices with exact entries.

use std::ops::{Index, IndexMut};

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::AlgebraError;

mod determinant;
mod sparse;

pub use determinant::UNIMODULAR_TOLERANCE;
pub use sparse::SparseMatrix;

/// A dense row-major matrix of arbitrary precision integers.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct IntMatrix {
    rows: usize,
    cols: usize,
    data: Vec<BigInt>,
}

impl IntMatrix {
    /// Creates a `rows x cols` matrix filled with zeros.
    #[inline]
    pub fn zero(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![BigInt::zero(); rows * cols],
        }
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zero(n, n);
        for i in 0..n {
            m.data[i * n + i] = BigInt::one();
        }
        m
    }

    /// Creates a matrix whose entry `(i, j)` is `f(i, j)`.
    pub fn from_fn<T, F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        T: Into<BigInt>,
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j).into());
            }
        }
        Self { rows, cols, data }
    }

    /// Creates a matrix from a nested list of rows.
    ///
    /// Every row must have the length of the first one.
    pub fn from_rows<T: Into<BigInt>>(rows: Vec<Vec<T>>) -> Result<Self, AlgebraError> {
        let expected = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();

        let mut data = Vec::with_capacity(row_count * expected);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != expected {
                return Err(AlgebraError::RaggedRows {
                    row,
                    len: values.len(),
                    expected,
                });
            }
            data.extend(values.into_iter().map(Into::into));
        }

        Ok(Self {
            rows: row_count,
            cols: expected,
            data,
        })
    }

    /// Returns the nested-list view of this matrix, rows in order.
    pub fn to_rows(&self) -> Vec<Vec<BigInt>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks_exact(self.cols).map(<[_]>::to_vec).collect()
    }

    /// Returns the row count of this [`IntMatrix`].
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the column count of this [`IntMatrix`].
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Checks whether this matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the `i`-th row.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline]
    pub fn row(&self, i: usize) -> &[BigInt] {
        assert!(i < self.rows, "row {i} out of range");
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Returns an iterator over all entries in row-major order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &BigInt> {
        self.data.iter()
    }

    /// Returns the transpose of this matrix.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |i, j| self[(j, i)].clone())
    }

    /// Returns `self + rhs`.
    pub fn add_matrix(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        let mut out = self.clone();
        out.add_assign_matrix(rhs)?;
        Ok(out)
    }

    /// Performs `self += rhs` in place.
    pub fn add_assign_matrix(&mut self, rhs: &Self) -> Result<(), AlgebraError> {
        if self.shape() != rhs.shape() {
            return Err(AlgebraError::DimensionMismatch {
                op: "addition",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        self.data
            .iter_mut()
            .zip(rhs.data.iter())
            .for_each(|(a, b)| *a += b);
        Ok(())
    }

    /// Returns the matrix product `self * rhs`.
    pub fn mul_matrix(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        if self.cols != rhs.rows {
            return Err(AlgebraError::DimensionMismatch {
                op: "multiplication",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        let mut out = Self::zero(self.rows, rhs.cols);
        for i in 0..self.rows {
            for (k, a) in self.row(i).iter().enumerate() {
                if a.is_zero() {
                    continue;
                }
                for j in 0..rhs.cols {
                    out.data[i * rhs.cols + j] += a * &rhs.data[k * rhs.cols + j];
                }
            }
        }
        Ok(out)
    }

    /// Returns the matrix product `self * rhs` for a sparse right operand.
    ///
    /// Only the columns of `rhs` holding non-zero entries are touched.
    pub fn mul_sparse(&self, rhs: &SparseMatrix) -> Result<Self, AlgebraError> {
        if self.cols != rhs.rows() {
            return Err(AlgebraError::DimensionMismatch {
                op: "sparse multiplication",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        let mut out = Self::zero(self.rows, rhs.cols());
        for (k, j, value) in rhs.iter() {
            for i in 0..self.rows {
                out.data[i * rhs.cols() + j] += &self.data[i * self.cols + k] * value;
            }
        }
        Ok(out)
    }

    /// Stacks the rows of `below` under the rows of `self`.
    pub fn vstack(&self, below: &Self) -> Result<Self, AlgebraError> {
        if self.cols != below.cols {
            return Err(AlgebraError::DimensionMismatch {
                op: "vertical stacking",
                lhs: self.shape(),
                rhs: below.shape(),
            });
        }

        let mut data = Vec::with_capacity(self.data.len() + below.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&below.data);
        Ok(Self {
            rows: self.rows + below.rows,
            cols: self.cols,
            data,
        })
    }

    /// Returns a copy of this matrix without its `i`-th row.
    pub fn remove_row(&self, i: usize) -> Result<Self, AlgebraError> {
        if i >= self.rows {
            return Err(AlgebraError::IndexOutOfRange {
                index: (i, 0),
                shape: self.shape(),
            });
        }

        let mut data = self.data.clone();
        data.drain(i * self.cols..(i + 1) * self.cols);
        Ok(Self {
            rows: self.rows - 1,
            cols: self.cols,
            data,
        })
    }

    #[inline]
    fn require_square(&self) -> Result<(), AlgebraError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(AlgebraError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl Index<(usize, usize)> for IntMatrix {
    type Output = BigInt;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of range");
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for IntMatrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of range");
        &mut self.data[i * self.cols + j]
    }
}
