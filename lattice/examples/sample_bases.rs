use lattice::{
    bezout_sampling, discrete_gaussian, gauss_sieve, unimodular_product, IntMatrix, LatticeError,
    SieveParameters,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print(name: &str, a: &IntMatrix) {
    println!("{name} ({}x{}):", a.rows(), a.cols());
    for row in a.to_rows() {
        let row: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("  [{}]", row.join(", "));
    }
}

fn main() -> Result<(), LatticeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut rng = rand::thread_rng();
    let n = 6;

    print("discrete gaussian", &discrete_gaussian(n, n + 10, 10, 6, &mut rng)?);
    print("unimodular product", &unimodular_product(n, 2, 20, 3, &mut rng)?);
    print("bezout", &bezout_sampling(n, 4, &mut rng)?);

    for dimension in [8, 12, 16] {
        for width in [10, 100] {
            let report = gauss_sieve(&SieveParameters::new(dimension, width, 1), &mut rng)?;
            info!(dimension, width, "list norms: {:?}", report.list_norms);
            info!(dimension, width, "stack norms: {:?}", report.stack_norms);
        }
    }

    Ok(())
}
