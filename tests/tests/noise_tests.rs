// tests/noise_tests.rs
//
// Statistical check of the reconciliation failure bound.

use frodokexp_kem::frodokexp::{generate_keypair_a, generate_keypair_b, generate_parameters, Seed};
use frodokexp_tests::noise::{
    analytic_variance, count_failures, count_failures_with_reuse, ephemeral_variance,
    failure_bound, key_differences, TOLERANCE,
};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use statrs::statistics::Statistics;

const EXCHANGES: usize = 8;

#[test]
fn test_analytic_failure_bound() {
    let sigma = analytic_variance().sqrt();
    let bound = failure_bound(sigma);
    println!("sigma = {:.2}, per-exchange failure bound = {:.3e} (2^{:.1})", sigma, bound, bound.log2());
    assert!(bound < 2f64.powi(-60));
    // Tolerance is more than nine standard deviations
    assert!(TOLERANCE as f64 / sigma > 9.0);
}

#[test]
fn test_empirical_noise_matches_analytic_variance() {
    let params = generate_parameters(&Seed::new([0x5A; 32]));
    let mut rng = ChaChaRng::seed_from_u64(99);

    let mut samples: Vec<f64> = Vec::new();
    let mut max_abs = 0i64;
    for _ in 0..EXCHANGES {
        let a = generate_keypair_a(&params, &mut rng).unwrap();
        let b = generate_keypair_b(&params, &mut rng).unwrap();
        for d in key_differences(&a, &b) {
            max_abs = max_abs.max(d.abs());
            samples.push(d as f64);
        }
    }

    let mean = samples.iter().mean();
    // E' is sampled inside encapsulate; add its known variance
    let variance = samples.iter().variance() + ephemeral_variance();
    let sigma = variance.sqrt();
    let expected = analytic_variance().sqrt();
    println!(
        "{} samples: mean {:.2}, sigma {:.2} (analytic {:.2}), max |d| {}",
        samples.len(),
        mean,
        sigma,
        expected,
        max_abs
    );

    assert!((sigma - expected).abs() / expected < 0.15);
    // Mean of 512 samples with sigma 54 stays well inside 4 standard errors
    assert!(mean.abs() < 4.0 * expected / (samples.len() as f64).sqrt() + 1.0);
    assert!(max_abs < TOLERANCE);
    assert!(failure_bound(sigma) < 1e-12);
}

#[test]
fn test_failure_counters_report_every_trial() {
    let params = generate_parameters(&Seed::new([0x3C; 32]));
    let mut rng = ChaChaRng::seed_from_u64(100);

    let fresh = count_failures(&params, 2, &mut rng).unwrap();
    assert_eq!(fresh.trials, 2);
    assert_eq!(fresh.mismatches, 0);

    let reused = count_failures_with_reuse(&params, 2, 64, &mut rng).unwrap();
    assert_eq!(reused.trials, 128);
    assert_eq!(reused.mismatches, 0);
    assert_eq!(reused.rate(), 0.0);
}
