//! Extended Euclidean algorithm over arbitrary precision integers.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::AlgebraError;

/// Returns `(d, x, y)` such that `d = gcd(a, b)` and `d = a x + b y`.
///
/// Both inputs are expected to be non-negative. The loop keeps two runs of
/// Bézout coefficients next to the remainder sequence and stops once the
/// remainder reaches zero, at which point the previous run is the answer.
pub fn xgcd_pair(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let mut a = a.clone();
    let mut b = b.clone();

    let (mut x_prev, mut x) = (BigInt::one(), BigInt::zero());
    let (mut y_prev, mut y) = (BigInt::zero(), BigInt::one());

    while b.is_positive() {
        let (q, r) = a.div_rem(&b);

        let next_x = &x_prev - &q * &x;
        x_prev = std::mem::replace(&mut x, next_x);

        let next_y = &y_prev - &q * &y;
        y_prev = std::mem::replace(&mut y, next_y);

        a = std::mem::replace(&mut b, r);
    }

    (a, x_prev, y_prev)
}

/// Returns the gcd `d` of every entry of `values` together with coefficients
/// `c` such that `d = Σ c[i] * values[i]`, using the signed entries.
///
/// The result is a left fold: the running `(gcd, coefficients)` pair is
/// combined with the absolute value of each next entry through
/// [`xgcd_pair`], the earlier coefficients are scaled by `x` and the sign of
/// the entry is folded into `y`.
///
/// The gcd is always non-negative, a single negative entry `[-a]` yields
/// `(a, [-1])`.
pub fn xgcd_list(values: &[BigInt]) -> Result<(BigInt, Vec<BigInt>), AlgebraError> {
    let (first, rest) = values.split_first().ok_or(AlgebraError::EmptyInput)?;

    let mut coefs = Vec::with_capacity(values.len());
    let mut gcd = first.abs();
    coefs.push(if first.is_negative() {
        -BigInt::one()
    } else {
        BigInt::one()
    });

    for value in rest {
        let (d, x, y) = xgcd_pair(&gcd, &value.abs());
        coefs.iter_mut().for_each(|c| *c *= &x);
        coefs.push(value.signum() * y);
        gcd = d;
    }

    Ok((gcd, coefs))
}
