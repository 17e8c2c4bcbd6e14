use lattice::sieve::norm_histogram;
use lattice::{gauss_sieve, LatticeError, SieveParameters};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

#[test]
fn test_gauss_sieve_small_dimension() {
    let mut rng = ChaCha12Rng::seed_from_u64(2024);
    let mut params = SieveParameters::new(4, 3, 2);
    params.max_iterations = 200_000;

    let report = gauss_sieve(&params, &mut rng).unwrap();

    assert!(report.sampled >= 1);
    assert!(report.sieved >= report.sampled);
    assert!(report.list_norms.get(&0).copied().unwrap_or(0) >= 2);

    let listed: usize = report.list_norms.values().sum();
    assert!(listed >= 2);
    assert!(report.list_norms.keys().all(|&norm| norm >= 0));
}

#[test]
fn test_gauss_sieve_iteration_cap() {
    let mut rng = ChaCha12Rng::seed_from_u64(7);
    let mut params = SieveParameters::new(16, 100, 1);
    params.max_iterations = 1;

    assert_eq!(
        gauss_sieve(&params, &mut rng),
        Err(LatticeError::AttemptsExhausted {
            sampler: "gauss sieve",
            attempts: 1
        })
    );
}

#[test]
fn test_norm_histogram_counts() {
    let vectors = vec![vec![3, 4], vec![5, 0], vec![0, 0]];
    let h = norm_histogram(&vectors);
    assert_eq!(h.get(&25), Some(&2));
    assert_eq!(h.get(&0), Some(&1));
}
