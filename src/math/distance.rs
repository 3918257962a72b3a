//! Euclidean distance for RBF evaluation and clustering.
//!
//! ## Purpose
//!
//! This module provides the L2 distance used everywhere in the network:
//! kernel evaluation, pairwise center distances for the spread estimate, and
//! nearest-center assignment in k-means.
//!
//! ## Design notes
//!
//! * **SIMD**: `f64` and `f32` use `wide` lanes (`f64x2`, `f32x4`) for the
//!   squared-difference accumulation, with a scalar tail.
//! * **Squared first**: Callers that only compare distances use
//!   `squared_euclidean` and skip the square root.
//!
//! ## Invariants
//!
//! * Distance is always non-negative.
//! * Distance is symmetric and zero for identical points.
//!
//! ## Non-goals
//!
//! * Other metrics (the network is defined over L2 only).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use wide::{f32x4, f64x2};

// ============================================================================
// DistanceLinalg Trait
// ============================================================================

/// Float types with an accelerated squared-distance kernel.
pub trait DistanceLinalg: Float {
    /// Compute Σ(aᵢ - bᵢ)² over two equally sized slices.
    fn squared_euclidean(a: &[Self], b: &[Self]) -> Self;
}

impl DistanceLinalg for f64 {
    #[inline]
    fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "Points must have same dimension");
        let n = a.len();
        let mut acc = f64x2::splat(0.0);
        let mut i = 0;

        while i + 2 <= n {
            let va = f64x2::new([a[i], a[i + 1]]);
            let vb = f64x2::new([b[i], b[i + 1]]);
            let diff = va - vb;
            acc += diff * diff;
            i += 2;
        }

        let [l0, l1] = acc.to_array();
        let mut sum = l0 + l1;
        while i < n {
            let diff = a[i] - b[i];
            sum += diff * diff;
            i += 1;
        }
        sum
    }
}

impl DistanceLinalg for f32 {
    #[inline]
    fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
        debug_assert_eq!(a.len(), b.len(), "Points must have same dimension");
        let n = a.len();
        let mut acc = f32x4::splat(0.0);
        let mut i = 0;

        while i + 4 <= n {
            let va = f32x4::new([a[i], a[i + 1], a[i + 2], a[i + 3]]);
            let vb = f32x4::new([b[i], b[i + 1], b[i + 2], b[i + 3]]);
            let diff = va - vb;
            acc += diff * diff;
            i += 4;
        }

        let lanes = acc.to_array();
        let mut sum = lanes[0] + lanes[1] + lanes[2] + lanes[3];
        while i < n {
            let diff = a[i] - b[i];
            sum += diff * diff;
            i += 1;
        }
        sum
    }
}

// ============================================================================
// Distance Computation Functions
// ============================================================================

/// Euclidean (L2) distance: √(Σ(aᵢ - bᵢ)²)
#[inline]
pub fn euclidean<T: DistanceLinalg>(a: &[T], b: &[T]) -> T {
    T::squared_euclidean(a, b).sqrt()
}

/// Index and squared distance of the row in `points` closest to `query`.
///
/// Ties resolve to the lowest index. Returns `None` when `points` is empty.
pub fn nearest<T: DistanceLinalg>(query: &[T], points: &[T], dimensions: usize) -> Option<(usize, T)> {
    let mut best: Option<(usize, T)> = None;
    for (j, row) in points.chunks_exact(dimensions).enumerate() {
        let d2 = T::squared_euclidean(query, row);
        match best {
            Some((_, b)) if d2 >= b => {}
            _ => best = Some((j, d2)),
        }
    }
    best
}

/// Per-dimension mean of a row-major point set.
pub fn column_means<T: Float>(points: &[T], dimensions: usize) -> Vec<T> {
    let mut means = vec![T::zero(); dimensions];
    let mut count = T::zero();
    for row in points.chunks_exact(dimensions) {
        for (m, &v) in means.iter_mut().zip(row) {
            *m = *m + v;
        }
        count = count + T::one();
    }
    if count > T::zero() {
        for m in means.iter_mut() {
            *m = *m / count;
        }
    }
    means
}

/// Mean of the per-dimension population variances of a row-major point set.
pub fn mean_variance<T: Float>(points: &[T], dimensions: usize) -> T {
    let n = points.len() / dimensions;
    if n == 0 {
        return T::zero();
    }
    let means = column_means(points, dimensions);
    let mut total = T::zero();
    for row in points.chunks_exact(dimensions) {
        for (&v, &m) in row.iter().zip(&means) {
            let diff = v - m;
            total = total + diff * diff;
        }
    }
    let n_t = T::from(n).unwrap_or_else(T::one);
    let d_t = T::from(dimensions).unwrap_or_else(T::one);
    total / (n_t * d_t)
}
