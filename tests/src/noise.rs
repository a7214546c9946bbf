//! Reconciliation noise analysis
//!
//! The decapsulator's W and the encapsulator's V differ by
//! `S_A·E_Bᵀ − E_A·S_Bᵀ + F_A − E'`. Everything except the ephemeral E' is a
//! function of the two keypairs, so it can be recomputed from their public
//! encodings and compared with the analytic distribution.

use frodokexp_api::{Serialize, SerializeSecret};
use frodokexp_kem::frodokexp::{
    decapsulate, encapsulate, generate_keypair_a, generate_keypair_b, KeyPair, PublicParameters,
};
use frodokexp_params::pqc::frodokexp::{
    FRODOKEXP_ETA_EPHEMERAL, FRODOKEXP_EXTRACTED_BITS, FRODOKEXP_LOG_Q, FRODOKEXP_N,
    FRODOKEXP_N_BAR,
};
use rand::{CryptoRng, RngCore};
use statrs::function::erf::erfc;

const N: usize = FRODOKEXP_N;
const N_BAR: usize = FRODOKEXP_N_BAR;
const Q: i64 = 1 << FRODOKEXP_LOG_Q;

/// Number of reconciled coefficients per exchange.
pub const COEFFICIENTS: usize = N_BAR * N_BAR;

/// Largest |W − V| that reconciliation always tolerates.
pub const TOLERANCE: i64 = 1 << (FRODOKEXP_LOG_Q - FRODOKEXP_EXTRACTED_BITS - 2);

/// Variance of one coefficient of the key-dependent part of W − V:
/// 2N products of independent ±1 values plus one ±1 entry of F.
pub fn key_variance() -> f64 {
    2.0 * N as f64 + 1.0
}

/// Variance of the centered binomial E' of width η.
pub fn ephemeral_variance() -> f64 {
    FRODOKEXP_ETA_EPHEMERAL as f64 / 2.0
}

/// Variance of one coefficient of W − V.
pub fn analytic_variance() -> f64 {
    key_variance() + ephemeral_variance()
}

/// Gaussian tail estimate of the probability that one exchange disagrees,
/// for per-coefficient standard deviation `sigma`.
pub fn failure_bound(sigma: f64) -> f64 {
    let threshold = TOLERANCE as f64 + 0.5;
    let per_coefficient = erfc(threshold / (sigma * core::f64::consts::SQRT_2));
    COEFFICIENTS as f64 * per_coefficient
}

fn decode_u16(bytes: &[u8]) -> Vec<i64> {
    bytes
        .chunks_exact(2)
        .map(|p| u16::from_le_bytes([p[0], p[1]]) as i64)
        .collect()
}

fn decode_i16(bytes: &[u8]) -> Vec<i64> {
    bytes
        .chunks_exact(2)
        .map(|p| i16::from_le_bytes([p[0], p[1]]) as i64)
        .collect()
}

/// Centered representative of `x mod q` in `[-q/2, q/2)`.
fn centered(x: i64) -> i64 {
    let r = x.rem_euclid(Q);
    if r >= Q / 2 {
        r - Q
    } else {
        r
    }
}

/// `X·Yᵀ` for two N_BAR x N matrices given as flat row-major vectors.
fn mul_transposed(x: &[i64], y: &[i64]) -> Vec<i64> {
    let mut out = vec![0i64; COEFFICIENTS];
    for i in 0..N_BAR {
        for j in 0..N_BAR {
            out[i * N_BAR + j] = x[i * N..(i + 1) * N]
                .iter()
                .zip(&y[j * N..(j + 1) * N])
                .map(|(a, b)| a * b)
                .sum();
        }
    }
    out
}

/// The key-dependent part of W − V for initiator `a` and responder `b`:
/// `S_A·B_Bᵀ + F_A − B_A·S_Bᵀ`, centered mod q.
pub fn key_differences(a: &KeyPair, b: &KeyPair) -> Vec<i64> {
    let pk_a = decode_u16(&a.public_key().to_bytes());
    let pk_b = decode_u16(&b.public_key().to_bytes());
    let sk_a = decode_i16(&a.secret_key().to_bytes_zeroizing());
    let sk_b = decode_i16(&b.secret_key().to_bytes_zeroizing());
    let f_a = decode_i16(&a.confirmation().to_bytes_zeroizing());

    let w = mul_transposed(&sk_a, &pk_b);
    let v = mul_transposed(&pk_a, &sk_b);
    w.iter()
        .zip(&v)
        .zip(&f_a)
        .map(|((w, v), f)| centered(w + f - v))
        .collect()
}

/// Outcome of a batch of exchanges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FailureCount {
    pub trials: u64,
    pub mismatches: u64,
}

impl FailureCount {
    /// Observed mismatch rate.
    pub fn rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.mismatches as f64 / self.trials as f64
        }
    }
}

/// Run `trials` full exchanges with fresh keypairs and count disagreements.
pub fn count_failures<R: RngCore + CryptoRng>(
    params: &PublicParameters,
    trials: u64,
    rng: &mut R,
) -> frodokexp_api::Result<FailureCount> {
    let mut count = FailureCount::default();
    for _ in 0..trials {
        let a = generate_keypair_a(params, rng)?;
        let b = generate_keypair_b(params, rng)?;
        let (ss_b, ct) = encapsulate(a.public_key(), b.secret_key(), rng)?;
        let ss_a = decapsulate(b.public_key(), a.secret_key(), a.confirmation(), &ct);
        count.trials += 1;
        if ss_a != ss_b {
            count.mismatches += 1;
        }
    }
    Ok(count)
}

/// Run `pairs` fresh keypair pairs, each through `exchanges_per_pair`
/// encapsulate/decapsulate rounds, and count disagreements.
///
/// Within one pair only E' is re-sampled, so the key-dependent part of
/// W − V is fixed and each round redraws a single ±2 term per coefficient.
/// The count therefore covers `pairs` independent draws of the key noise
/// and `pairs · exchanges_per_pair` draws of E', not that many independent
/// exchanges.
pub fn count_failures_with_reuse<R: RngCore + CryptoRng>(
    params: &PublicParameters,
    pairs: u64,
    exchanges_per_pair: u64,
    rng: &mut R,
) -> frodokexp_api::Result<FailureCount> {
    let mut count = FailureCount::default();
    for _ in 0..pairs {
        let a = generate_keypair_a(params, rng)?;
        let b = generate_keypair_b(params, rng)?;
        for _ in 0..exchanges_per_pair {
            let (ss_b, ct) = encapsulate(a.public_key(), b.secret_key(), rng)?;
            let ss_a = decapsulate(b.public_key(), a.secret_key(), a.confirmation(), &ct);
            count.trials += 1;
            if ss_a != ss_b {
                count.mismatches += 1;
            }
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered() {
        assert_eq!(centered(0), 0);
        assert_eq!(centered(Q - 1), -1);
        assert_eq!(centered(Q / 2 - 1), Q / 2 - 1);
        assert_eq!(centered(Q / 2), -Q / 2);
        assert_eq!(centered(-3), -3);
    }

    #[test]
    fn test_constants() {
        assert_eq!(TOLERANCE, 512);
        assert_eq!(COEFFICIENTS, 64);
        assert_eq!(analytic_variance(), 2906.0);
    }

    #[test]
    fn test_bound_is_monotone_in_sigma() {
        assert!(failure_bound(40.0) < failure_bound(54.0));
        assert!(failure_bound(54.0) < failure_bound(80.0));
        assert!(failure_bound(1000.0) <= COEFFICIENTS as f64);
    }
}
