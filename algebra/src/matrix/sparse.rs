use std::collections::BTreeMap;

use num_bigint::BigInt;
use num_traits::Zero;

use crate::AlgebraError;

use super::IntMatrix;

/// A sparse integer matrix in coordinate form.
///
/// Only non-zero entries are stored, ordered by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    entries: BTreeMap<(usize, usize), BigInt>,
}

impl SparseMatrix {
    /// Creates an empty `rows x cols` sparse matrix.
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: BTreeMap::new(),
        }
    }

    /// Returns the row count of this [`SparseMatrix`].
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the column count of this [`SparseMatrix`].
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Sets the entry at `(row, col)`, a zero value clears it.
    pub fn insert(&mut self, row: usize, col: usize, value: BigInt) -> Result<(), AlgebraError> {
        if row >= self.rows || col >= self.cols {
            return Err(AlgebraError::IndexOutOfRange {
                index: (row, col),
                shape: self.shape(),
            });
        }
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    /// Returns the entry at `(row, col)` if it is non-zero.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&BigInt> {
        self.entries.get(&(row, col))
    }

    /// Returns the number of stored non-zero entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over the non-zero entries as `(row, col, value)`.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &BigInt)> {
        self.entries.iter().map(|(&(i, j), v)| (i, j, v))
    }

    /// Converts into a dense matrix.
    pub fn to_dense(&self) -> IntMatrix {
        let mut dense = IntMatrix::zero(self.rows, self.cols);
        for (i, j, v) in self.iter() {
            dense[(i, j)] = v.clone();
        }
        dense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_skips_zero() {
        let mut s = SparseMatrix::new(3, 3);
        s.insert(1, 2, BigInt::from(4)).unwrap();
        s.insert(0, 0, BigInt::zero()).unwrap();
        assert_eq!(s.nnz(), 1);
        assert_eq!(s.get(1, 2), Some(&BigInt::from(4)));

        s.insert(1, 2, BigInt::zero()).unwrap();
        assert_eq!(s.nnz(), 0);

        assert_eq!(
            s.insert(3, 0, BigInt::from(1)),
            Err(AlgebraError::IndexOutOfRange {
                index: (3, 0),
                shape: (3, 3)
            })
        );
    }
}
