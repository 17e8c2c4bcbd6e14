//! Gauss sieve over `Z^n` fed by the discrete gaussian sampler.
//!
//! Vectors are popped from the stack, or freshly sampled when the stack is
//! empty, reduced against the list and then appended to it. A vector
//! reducing to zero is a collision; the sieve stops after the requested
//! number of collisions.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info, warn};

use crate::parameter::SieveParameters;
use crate::sampler::DiscreteGaussianSampler;
use crate::LatticeError;

/// Counters and norm statistics collected by [`gauss_sieve`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SieveReport {
    /// Fresh vectors drawn from the sampler.
    pub sampled: u64,
    /// Vectors pushed through the reduction.
    pub sieved: u64,
    /// Pairwise comparisons performed.
    pub compared: u64,
    /// Squared norm -> count, over the final list.
    pub list_norms: BTreeMap<i64, usize>,
    /// Squared norm -> count, over the vectors left on the stack.
    pub stack_norms: BTreeMap<i64, usize>,
    /// Wall time of the run.
    pub elapsed: Duration,
}

#[inline]
fn dot(a: &[i64], b: &[i64]) -> i64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[inline]
fn diff(a: &[i64], b: &[i64]) -> Vec<i64> {
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

/// Returns the histogram of squared norms of `vectors`.
pub fn norm_histogram(vectors: &[Vec<i64>]) -> BTreeMap<i64, usize> {
    let mut histogram = BTreeMap::new();
    for v in vectors {
        *histogram.entry(dot(v, v)).or_insert(0) += 1;
    }
    histogram
}

/// Reduces `v` against `list` and returns the reduced vector.
///
/// While some `w` in `list` has `|w| <= |v|` and `|v - w| < |v|`, `v` is
/// replaced by `v - round(<v, w> / |w|²) w`. Afterwards every `w` in `list`
/// with `|w| > |v|` and `|w - v| < |w|` is removed and `w - v` is pushed to
/// `stack`. Each pair examined increments `compared`.
pub fn gauss_reduce(
    mut v: Vec<i64>,
    list: &mut Vec<Vec<i64>>,
    stack: &mut Vec<Vec<i64>>,
    compared: &mut u64,
) -> Vec<i64> {
    let mut norm_v = dot(&v, &v);
    let mut updated = true;
    while updated {
        updated = false;
        for w in list.iter() {
            *compared += 1;
            let norm_w = dot(w, w);
            let d = diff(&v, w);
            if norm_w <= norm_v && dot(&d, &d) < norm_v {
                let c = (dot(&v, w) as f64 / norm_w as f64).round() as i64;
                v.iter_mut().zip(w).for_each(|(x, y)| *x -= c * y);
                norm_v = dot(&v, &v);
                updated = true;
            }
        }
    }

    list.retain(|w| {
        *compared += 1;
        let norm_w = dot(w, w);
        let d = diff(w, &v);
        if norm_w > norm_v && dot(&d, &d) < norm_w {
            stack.push(d);
            false
        } else {
            true
        }
    });

    v
}

/// Runs the Gauss sieve until `max_collisions` zero vectors were found.
pub fn gauss_sieve<R: Rng + ?Sized>(
    params: &SieveParameters,
    rng: &mut R,
) -> Result<SieveReport, LatticeError> {
    params.validate()?;
    let sampler = DiscreteGaussianSampler::new(params.sampler_parameters())?;

    let start = Instant::now();
    let mut report = SieveReport::default();
    let mut list: Vec<Vec<i64>> = Vec::new();
    let mut stack: Vec<Vec<i64>> = Vec::new();
    let mut collisions = 0;

    while collisions < params.max_collisions {
        if report.sieved >= params.max_iterations as u64 {
            warn!(
                dimension = params.dimension,
                width = params.width,
                collisions,
                "sieve reached its iteration cap"
            );
            return Err(LatticeError::AttemptsExhausted {
                sampler: "gauss sieve",
                attempts: params.max_iterations,
            });
        }

        report.sieved += 1;
        let v = match stack.pop() {
            Some(v) => v,
            None => {
                report.sampled += 1;
                sampler.sample_vector(params.dimension, rng)?
            }
        };

        let v = gauss_reduce(v, &mut list, &mut stack, &mut report.compared);
        let collision = v.iter().all(|&x| x == 0);
        list.push(v);
        if collision {
            collisions += 1;
            debug!(collisions, sieved = report.sieved, list = list.len(), "collision");
        }
    }

    report.list_norms = norm_histogram(&list);
    report.stack_norms = norm_histogram(&stack);
    report.elapsed = start.elapsed();

    info!(
        dimension = params.dimension,
        width = params.width,
        sampled = report.sampled,
        sieved = report.sieved,
        compared = report.compared,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "gauss sieve finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_to_zero() {
        let mut list = vec![vec![1, 0], vec![0, 1]];
        let mut stack = Vec::new();
        let mut compared = 0;

        let v = gauss_reduce(vec![3, 2], &mut list, &mut stack, &mut compared);
        assert_eq!(v, vec![0, 0]);
        assert_eq!(list.len(), 2);
        assert!(stack.is_empty());
        assert_eq!(compared, 6);
    }

    #[test]
    fn test_reduce_moves_longer_vectors() {
        let mut list = vec![vec![5, 0], vec![0, 1]];
        let mut stack = Vec::new();
        let mut compared = 0;

        let v = gauss_reduce(vec![1, 0], &mut list, &mut stack, &mut compared);
        assert_eq!(v, vec![1, 0]);
        assert_eq!(list, vec![vec![0, 1]]);
        assert_eq!(stack, vec![vec![4, 0]]);
    }

    #[test]
    fn test_norm_histogram() {
        let h = norm_histogram(&[vec![1, 1], vec![0, 0], vec![-1, 1], vec![2, 0]]);
        assert_eq!(h, BTreeMap::from([(0, 1), (2, 2), (4, 1)]));
    }
}
