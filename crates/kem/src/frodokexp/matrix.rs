// kem/src/frodokexp/matrix.rs

//! Matrix containers and arithmetic mod q.
//!
//! All matrices are row-major. Coefficients are kept as 16-bit words and
//! every product and sum wraps mod 2^16; reduction mod q = 2^LOG_Q is a mask
//! applied when a result is stored. Secret coefficients in {-1, +1} are
//! therefore represented as `0xFFFF` and `0x0001`.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::common::Seed;
use super::params::{N, N_BAR, Q_MASK, SQUARE_LEN, WIDE_LEN};
use super::sample;

/// Expanded public parameters: the seed and the N x N matrix A it determines.
///
/// A is 4 MiB and lives in one heap allocation. It is recomputed from the
/// seed whenever it is needed and never serialized.
pub struct PublicParameters {
    seed: Seed,
    a: Box<[u16]>,
}

impl PublicParameters {
    pub(crate) fn expand(seed: &Seed) -> Self {
        let mut a = vec![0u16; N * N].into_boxed_slice();
        for (i, row) in a.chunks_exact_mut(N).enumerate() {
            sample::expand_row(seed.as_bytes(), i, row);
        }
        Self {
            seed: seed.clone(),
            a,
        }
    }

    /// Seed these parameters were expanded from.
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Row `i` of A.
    pub fn row(&self, i: usize) -> &[u16] {
        &self.a[i * N..(i + 1) * N]
    }

    /// Entry A[i][j].
    pub fn get(&self, i: usize, j: usize) -> u16 {
        self.a[i * N + j]
    }

    /// Dimension of A.
    pub fn dimension(&self) -> usize {
        N
    }
}

impl core::fmt::Debug for PublicParameters {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PublicParameters")
            .field("seed", &self.seed)
            .field("dimension", &N)
            .finish()
    }
}

macro_rules! wide_matrix {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name {
            coeffs: Box<[u16]>,
        }

        impl $name {
            /// All-zero N_BAR x N matrix.
            pub fn zero() -> Self {
                Self {
                    coeffs: vec![0u16; WIDE_LEN].into_boxed_slice(),
                }
            }

            /// Row `i`.
            pub fn row(&self, i: usize) -> &[u16] {
                &self.coeffs[i * N..(i + 1) * N]
            }

            /// Coefficients in row-major order.
            pub fn as_slice(&self) -> &[u16] {
                &self.coeffs
            }

            pub(crate) fn as_mut_slice(&mut self) -> &mut [u16] {
                &mut self.coeffs
            }
        }
    };
}

wide_matrix! {
    /// N_BAR x N matrix holding secret coefficients; zeroized on drop.
    #[derive(Clone, Zeroize, ZeroizeOnDrop)]
    SecretMatrix
}

wide_matrix! {
    /// N_BAR x N matrix holding a public key, coefficients in [0, q).
    #[derive(Clone, Debug, PartialEq, Eq)]
    PublicMatrix
}

/// N_BAR x N_BAR matrix; zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SmallMatrix {
    coeffs: [u16; SQUARE_LEN],
}

impl SmallMatrix {
    /// All-zero N_BAR x N_BAR matrix.
    pub fn zero() -> Self {
        Self {
            coeffs: [0u16; SQUARE_LEN],
        }
    }

    /// Entry in row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> u16 {
        self.coeffs[i * N_BAR + j]
    }

    /// Coefficients in row-major order.
    pub fn as_slice(&self) -> &[u16] {
        &self.coeffs
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u16] {
        &mut self.coeffs
    }
}

/// `out = S·Aᵀ + E`, the role A public matrix.
pub(crate) fn mul_add_sa_transposed(
    s: &SecretMatrix,
    params: &PublicParameters,
    e: &SecretMatrix,
) -> PublicMatrix {
    let mut out = PublicMatrix::zero();
    for i in 0..N_BAR {
        let s_row = s.row(i);
        let e_row = e.row(i);
        let out_row = &mut out.as_mut_slice()[i * N..(i + 1) * N];
        for (j, dst) in out_row.iter_mut().enumerate() {
            // Row i of S against row j of A
            let acc = dot(s_row, params.row(j));
            *dst = acc.wrapping_add(e_row[j]) & Q_MASK;
        }
    }
    out
}

/// `out = S·A + E`, the role B public matrix.
pub(crate) fn mul_add_sa(s: &SecretMatrix, params: &PublicParameters, e: &SecretMatrix) -> PublicMatrix {
    let mut out = PublicMatrix::zero();
    for i in 0..N_BAR {
        let out_row = &mut out.as_mut_slice()[i * N..(i + 1) * N];
        out_row.copy_from_slice(e.row(i));
        // Accumulate s[i][k]·A[k][..] row by row
        for (k, &sik) in s.row(i).iter().enumerate() {
            for (dst, &a) in out_row.iter_mut().zip(params.row(k)) {
                *dst = dst.wrapping_add(sik.wrapping_mul(a));
            }
        }
        for dst in out_row.iter_mut() {
            *dst &= Q_MASK;
        }
    }
    out
}

/// `out = X·Yᵀ + C` for N_BAR x N inputs, producing an N_BAR x N_BAR matrix.
///
/// Either operand may hold the secret; the loop structure does not depend
/// on coefficient values.
pub(crate) fn mul_add_transposed(x: &[u16], y: &[u16], c: &SmallMatrix) -> SmallMatrix {
    debug_assert_eq!(x.len(), WIDE_LEN);
    debug_assert_eq!(y.len(), WIDE_LEN);

    let mut out = SmallMatrix::zero();
    for i in 0..N_BAR {
        let x_row = &x[i * N..(i + 1) * N];
        for j in 0..N_BAR {
            let y_row = &y[j * N..(j + 1) * N];
            out.coeffs[i * N_BAR + j] = dot(x_row, y_row).wrapping_add(c.get(i, j)) & Q_MASK;
        }
    }
    out
}

#[inline]
fn dot(a: &[u16], b: &[u16]) -> u16 {
    a.iter()
        .zip(b)
        .fold(0u16, |acc, (&x, &y)| acc.wrapping_add(x.wrapping_mul(y)))
}
