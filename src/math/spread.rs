//! Spread (sigma) estimation from a center set.
//!
//! ## Purpose
//!
//! This module computes the single spread shared by every hidden unit:
//! twice the mean Euclidean distance over all unordered pairs of centers.
//!
//! ## Design notes
//!
//! * **Scale-adaptive**: Denser center sets give narrower basis functions.
//! * **Order-free**: The estimate is a symmetric function of the centers.
//!
//! ## Invariants
//!
//! * At least two centers are required; one center has no pairs.
//! * The result is non-negative, and zero only when all centers coincide.
//!
//! ## Non-goals
//!
//! * Per-center spreads or data-driven tuning of sigma.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::math::distance::{DistanceLinalg, euclidean};
use crate::primitives::errors::RbfnError;

/// Estimate sigma as `2 × Σ‖cᵢ − cⱼ‖ / #pairs` over all `i < j`.
///
/// `centers` is row-major `k × dimensions`.
pub fn estimate_sigma<T: DistanceLinalg>(centers: &[T], dimensions: usize) -> Result<T, RbfnError> {
    if dimensions == 0 {
        return Err(RbfnError::config("center dimensionality must be at least 1"));
    }
    if centers.len() % dimensions != 0 {
        return Err(RbfnError::DimensionMismatch {
            context: "center buffer length",
            expected: centers.len() - centers.len() % dimensions,
            got: centers.len(),
        });
    }

    let k = centers.len() / dimensions;
    if k < 2 {
        return Err(RbfnError::config(format!(
            "spread estimation needs at least 2 centers, got {}",
            k
        )));
    }

    let mut total = T::zero();
    let mut pairs = 0usize;
    for i in 0..k - 1 {
        let ci = &centers[i * dimensions..(i + 1) * dimensions];
        for j in i + 1..k {
            let cj = &centers[j * dimensions..(j + 1) * dimensions];
            total = total + euclidean(ci, cj);
            pairs += 1;
        }
    }

    let pairs = T::from(pairs).ok_or_else(|| RbfnError::config("pair count overflows float type"))?;
    Ok((T::one() + T::one()) * total / pairs)
}
