use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::AlgebraError;

use super::IntMatrix;

/// Absolute tolerance used when a floating point determinant is compared with `±1`.
pub const UNIMODULAR_TOLERANCE: f64 = 1e-6;

impl IntMatrix {
    /// Computes the exact determinant with fraction-free Bareiss elimination.
    ///
    /// The determinant of the empty `0 x 0` matrix is `1`.
    pub fn determinant(&self) -> Result<BigInt, AlgebraError> {
        self.require_square()?;
        Ok(bareiss(self.data.clone(), self.rows))
    }

    /// Computes the determinant in `f64` with partially pivoted LU elimination.
    ///
    /// Entries too large for `f64` turn the result into an infinity or NaN,
    /// so callers must compare against a tolerance and not for equality.
    pub fn determinant_f64(&self) -> Result<f64, AlgebraError> {
        self.require_square()?;

        let n = self.rows;
        let mut a: Vec<f64> = self
            .data
            .iter()
            .map(|v| v.to_f64().unwrap_or(f64::NAN))
            .collect();

        let mut det = 1.0;
        for k in 0..n {
            let pivot = (k..n)
                .max_by(|&x, &y| a[x * n + k].abs().total_cmp(&a[y * n + k].abs()))
                .unwrap_or(k);
            if a[pivot * n + k] == 0.0 {
                return Ok(0.0);
            }
            if pivot != k {
                for j in 0..n {
                    a.swap(k * n + j, pivot * n + j);
                }
                det = -det;
            }

            let p = a[k * n + k];
            det *= p;
            for i in k + 1..n {
                let factor = a[i * n + k] / p;
                for j in k + 1..n {
                    a[i * n + j] -= factor * a[k * n + j];
                }
            }
        }
        Ok(det)
    }

    /// Checks whether `|det| = 1` holds exactly.
    pub fn is_unimodular(&self) -> Result<bool, AlgebraError> {
        Ok(self.determinant()?.abs().is_one())
    }

    /// Checks whether the floating point determinant is within
    /// [`UNIMODULAR_TOLERANCE`] of `±1`.
    pub fn is_unimodular_f64(&self) -> Result<bool, AlgebraError> {
        let det = self.determinant_f64()?;
        Ok((det.abs() - 1.0).abs() < UNIMODULAR_TOLERANCE)
    }

    /// Returns the `i`-th row of the cofactor matrix, that is
    /// `(-1)^(i+j) * det(minor(i, j))` for every column `j`.
    ///
    /// This equals the `i`-th row of the transposed adjugate.
    pub fn cofactor_row(&self, i: usize) -> Result<Vec<BigInt>, AlgebraError> {
        self.require_square()?;
        if i >= self.rows {
            return Err(AlgebraError::IndexOutOfRange {
                index: (i, 0),
                shape: self.shape(),
            });
        }

        Ok((0..self.cols)
            .map(|j| {
                let det = bareiss(self.minor(i, j), self.rows - 1);
                if (i + j) % 2 == 0 {
                    det
                } else {
                    -det
                }
            })
            .collect())
    }

    /// Computes the adjugate, the transpose of the cofactor matrix.
    ///
    /// It satisfies `M * adj(M) = det(M) * I`. The adjugate of a `1 x 1`
    /// matrix is `[[1]]`.
    pub fn adjugate(&self) -> Result<IntMatrix, AlgebraError> {
        self.require_square()?;

        let n = self.rows;
        let mut adj = IntMatrix::zero(n, n);
        for i in 0..n {
            for (j, c) in self.cofactor_row(i)?.into_iter().enumerate() {
                adj[(j, i)] = c;
            }
        }
        Ok(adj)
    }

    /// Row-major entries of the matrix with row `skip_row` and column `skip_col` removed.
    fn minor(&self, skip_row: usize, skip_col: usize) -> Vec<BigInt> {
        let mut data = Vec::with_capacity(self.rows.saturating_sub(1) * self.cols.saturating_sub(1));
        for i in (0..self.rows).filter(|&i| i != skip_row) {
            for j in (0..self.cols).filter(|&j| j != skip_col) {
                data.push(self.data[i * self.cols + j].clone());
            }
        }
        data
    }
}

/// Bareiss elimination on a row-major `n x n` buffer. Every division is exact.
fn bareiss(mut a: Vec<BigInt>, n: usize) -> BigInt {
    if n == 0 {
        return BigInt::one();
    }

    let mut negate = false;
    let mut prev = BigInt::one();
    for k in 0..n - 1 {
        if a[k * n + k].is_zero() {
            match (k + 1..n).find(|&i| !a[i * n + k].is_zero()) {
                Some(i) => {
                    for j in 0..n {
                        a.swap(k * n + j, i * n + j);
                    }
                    negate = !negate;
                }
                None => return BigInt::zero(),
            }
        }

        for i in k + 1..n {
            for j in k + 1..n {
                let v = (&a[i * n + j] * &a[k * n + k] - &a[i * n + k] * &a[k * n + j]) / &prev;
                a[i * n + j] = v;
            }
        }
        prev = a[k * n + k].clone();
    }

    let det = a[n * n - 1].clone();
    if negate {
        -det
    } else {
        det
    }
}
