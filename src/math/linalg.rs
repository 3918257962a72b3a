//! Linear algebra backend abstraction for RBF fitting.
//!
//! ## Purpose
//!
//! This module provides the minimum-norm least-squares solve used to fit the
//! output layer, standardizing on the nalgebra backend.
//!
//! ## Design notes
//!
//! * Uses the SVD-based Moore–Penrose pseudoinverse rather than normal
//!   equations: the augmented design matrix is rarely square and may be rank
//!   deficient.
//! * Singular values below `rcond × σ_max` are treated as zero
//!   (`rcond = 1e-15` for f64, `f32::EPSILON` for f32).
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.
//! * Matrices cross the trait boundary as flat row-major slices.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Debug + Send + Sync + 'static {
    /// Solve `A·X ≈ B` in the least-squares sense with minimum norm.
    ///
    /// `a` is `rows × cols`, `b` is `rows × n_rhs`; the result is `cols × n_rhs`.
    /// All buffers are row-major. Returns `None` if the SVD does not converge.
    fn solve_least_squares(
        a: &[Self],
        rows: usize,
        cols: usize,
        b: &[Self],
        n_rhs: usize,
    ) -> Option<Vec<Self>>;

    /// Moore–Penrose pseudoinverse of a row-major `rows × cols` matrix.
    ///
    /// The result is row-major `cols × rows`.
    fn pseudo_inverse(a: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_least_squares(
        a: &[Self],
        rows: usize,
        cols: usize,
        b: &[Self],
        n_rhs: usize,
    ) -> Option<Vec<Self>> {
        nalgebra_backend::solve_least_squares_f64(a, rows, cols, b, n_rhs)
    }
    #[inline]
    fn pseudo_inverse(a: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>> {
        nalgebra_backend::pseudo_inverse_f64(a, rows, cols)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_least_squares(
        a: &[Self],
        rows: usize,
        cols: usize,
        b: &[Self],
        n_rhs: usize,
    ) -> Option<Vec<Self>> {
        nalgebra_backend::solve_least_squares_f32(a, rows, cols, b, n_rhs)
    }
    #[inline]
    fn pseudo_inverse(a: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>> {
        nalgebra_backend::pseudo_inverse_f32(a, rows, cols)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, RealField};

    /// Relative singular value cutoff for f64.
    pub const RCOND_F64: f64 = 1e-15;

    /// Relative singular value cutoff for f32.
    pub const RCOND_F32: f32 = f32::EPSILON;

    fn pinv<R: RealField + Copy>(matrix: DMatrix<R>, svd_eps: R, rcond: R) -> Option<DMatrix<R>> {
        let svd = matrix.try_svd(true, true, svd_eps, 0)?;
        let sigma_max = svd
            .singular_values
            .iter()
            .fold(R::zero(), |m, &s| if s > m { s } else { m });
        svd.pseudo_inverse(rcond * sigma_max).ok()
    }

    fn to_row_major<R: RealField + Copy>(m: &DMatrix<R>) -> Vec<R> {
        let (rows, cols) = m.shape();
        let mut out = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                out.push(m[(i, j)]);
            }
        }
        out
    }

    fn solve_generic<R: RealField + Copy>(
        a: &[R],
        rows: usize,
        cols: usize,
        b: &[R],
        n_rhs: usize,
        svd_eps: R,
        rcond: R,
    ) -> Option<Vec<R>> {
        let matrix = DMatrix::from_row_slice(rows, cols, a);
        let rhs = DMatrix::from_row_slice(rows, n_rhs, b);
        let inv = pinv(matrix, svd_eps, rcond)?;
        Some(to_row_major(&(inv * rhs)))
    }

    /// Minimum-norm least-squares solve using f64 precision.
    pub fn solve_least_squares_f64(
        a: &[f64],
        rows: usize,
        cols: usize,
        b: &[f64],
        n_rhs: usize,
    ) -> Option<Vec<f64>> {
        solve_generic(a, rows, cols, b, n_rhs, f64::EPSILON, RCOND_F64)
    }

    /// Pseudoinverse using f64 precision.
    pub fn pseudo_inverse_f64(a: &[f64], rows: usize, cols: usize) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_row_slice(rows, cols, a);
        pinv(matrix, f64::EPSILON, RCOND_F64).map(|inv| to_row_major(&inv))
    }

    /// Minimum-norm least-squares solve using f32 precision.
    pub fn solve_least_squares_f32(
        a: &[f32],
        rows: usize,
        cols: usize,
        b: &[f32],
        n_rhs: usize,
    ) -> Option<Vec<f32>> {
        solve_generic(a, rows, cols, b, n_rhs, f32::EPSILON, RCOND_F32)
    }

    /// Pseudoinverse using f32 precision.
    pub fn pseudo_inverse_f32(a: &[f32], rows: usize, cols: usize) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_row_slice(rows, cols, a);
        pinv(matrix, f32::EPSILON, RCOND_F32).map(|inv| to_row_major(&inv))
    }
}
