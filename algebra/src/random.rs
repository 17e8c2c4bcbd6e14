//! Random primitives used by the lattice samplers.
//!
//! Every function draws from an injected generator so that callers can
//! replay a sample from a seeded stream.

use rand::distributions::{Bernoulli, Distribution, Uniform};
use rand::seq::index;
use rand::Rng;

use crate::{AlgebraError, IntMatrix};

/// Samples an integer uniformly from the closed range `[low, high]`.
#[inline]
pub fn uniform_int<R>(rng: &mut R, low: i64, high: i64) -> Result<i64, AlgebraError>
where
    R: Rng + ?Sized,
{
    if low > high {
        return Err(AlgebraError::DistributionErr);
    }
    Ok(Uniform::new_inclusive(low, high).sample(rng))
}

/// Samples a `rows x cols` matrix whose entries are uniform in `[-bound, bound]`.
pub fn uniform_matrix<R>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    bound: i64,
) -> Result<IntMatrix, AlgebraError>
where
    R: Rng + ?Sized,
{
    if bound < 0 {
        return Err(AlgebraError::DistributionErr);
    }
    let dis = Uniform::new_inclusive(-bound, bound);
    Ok(IntMatrix::from_fn(rows, cols, |_, _| rng.sample(dis)))
}

/// Runs a Bernoulli trial which succeeds with probability `p`.
#[inline]
pub fn bernoulli<R>(rng: &mut R, p: f64) -> Result<bool, AlgebraError>
where
    R: Rng + ?Sized,
{
    Bernoulli::new(p)
        .map(|b| b.sample(rng))
        .map_err(|_| AlgebraError::DistributionErr)
}

/// Picks `amount` distinct indices from `0..length` without replacement.
///
/// The indices come back in random order.
pub fn sample_indices<R>(
    rng: &mut R,
    length: usize,
    amount: usize,
) -> Result<Vec<usize>, AlgebraError>
where
    R: Rng + ?Sized,
{
    if amount > length {
        return Err(AlgebraError::DistributionErr);
    }
    Ok(index::sample(rng, length, amount).into_vec())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    use super::*;

    #[test]
    fn test_uniform_bounds() {
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        for _ in 0..1000 {
            let v = uniform_int(&mut rng, -3, 3).unwrap();
            assert!((-3..=3).contains(&v));
        }
        assert_eq!(uniform_int(&mut rng, 0, 0), Ok(0));
        assert_eq!(
            uniform_int(&mut rng, 1, 0),
            Err(AlgebraError::DistributionErr)
        );

        let a = uniform_matrix(&mut rng, 4, 6, 2).unwrap();
        assert_eq!(a.shape(), (4, 6));
        assert!(a.iter().all(|v| (-2..=2).contains(&i64::try_from(v).unwrap())));
    }

    #[test]
    fn test_bernoulli_extremes() {
        let mut rng = ChaCha12Rng::seed_from_u64(2);
        assert_eq!(bernoulli(&mut rng, 1.0), Ok(true));
        assert_eq!(bernoulli(&mut rng, 0.0), Ok(false));
        assert_eq!(
            bernoulli(&mut rng, 1.5),
            Err(AlgebraError::DistributionErr)
        );
    }

    #[test]
    fn test_sample_indices_distinct() {
        let mut rng = ChaCha12Rng::seed_from_u64(3);
        for _ in 0..100 {
            let k = sample_indices(&mut rng, 10, 4).unwrap();
            assert_eq!(k.len(), 4);
            assert!(k.iter().all(|&i| i < 10));
            assert_eq!(k.iter().collect::<HashSet<_>>().len(), 4);
        }

        let mut full = sample_indices(&mut rng, 5, 5).unwrap();
        full.sort_unstable();
        assert_eq!(full, vec![0, 1, 2, 3, 4]);
        assert!(sample_indices(&mut rng, 3, 4).is_err());
    }
}
