//! Design (interpolation) matrix construction and output-layer evaluation.
//!
//! ## Purpose
//!
//! This module expands raw inputs into hidden-unit activations,
//! `G[i][j] = φ(‖cⱼ − xᵢ‖)`, and combines activations with the output layer
//! weights. The same expansion is used for fitting and for prediction.
//!
//! ## Design notes
//!
//! * **Row-major**: `G` is stored as a flat `n × width` buffer.
//! * **Bias column**: When requested, a trailing column of ones is written so
//!   the bias is solved together with the weights.
//! * **Recomputed**: Nothing is cached between calls; inputs differ between
//!   fit and predict.
//!
//! ## Invariants
//!
//! * Row order follows input order; column order follows center order.
//!
//! ## Non-goals
//!
//! * Solving for the weights (see `math::linalg`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::distance::DistanceLinalg;
use crate::math::kernel::RadialBasis;

/// Build the design matrix for `x` (row-major `n × dimensions`).
///
/// The result is row-major `n × (k + bias_column as usize)` where `k` is the
/// number of centers.
pub fn design_matrix<T: DistanceLinalg>(
    x: &[T],
    dimensions: usize,
    centers: &[T],
    basis: &RadialBasis<T>,
    bias_column: bool,
) -> Vec<T> {
    let n = x.len() / dimensions;
    let k = centers.len() / dimensions;
    let width = k + usize::from(bias_column);
    let mut g = Vec::with_capacity(n * width);

    for point in x.chunks_exact(dimensions) {
        for center in centers.chunks_exact(dimensions) {
            g.push(basis.evaluate(center, point));
        }
        if bias_column {
            g.push(T::one());
        }
    }

    g
}

/// Evaluate the output layer: `G · W + b`.
///
/// `design` is row-major `n × k`, `weights` is row-major `k × outputs`, and
/// `bias` has `outputs` entries. The result is row-major `n × outputs`.
pub fn linear_output<T: DistanceLinalg>(
    design: &[T],
    k: usize,
    weights: &[T],
    bias: &[T],
) -> Vec<T> {
    if k == 0 {
        return Vec::new();
    }
    let outputs = bias.len();
    let mut out = Vec::with_capacity(design.len() / k * outputs);

    for row in design.chunks_exact(k) {
        for (o, &b) in bias.iter().enumerate() {
            let acc = row
                .iter()
                .enumerate()
                .fold(b, |acc, (j, &g)| acc + g * weights[j * outputs + o]);
            out.push(acc);
        }
    }

    out
}
