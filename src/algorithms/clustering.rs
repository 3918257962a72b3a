//! Center selection for the hidden layer.
//!
//! ## Purpose
//!
//! This module turns the training inputs into the centers of the hidden
//! units. The network only needs "partition N points into K groups and return
//! one representative per group"; that contract is the [`CenterSelector`]
//! trait. [`KMeans`] is the default implementation and [`FixedCenters`]
//! injects a precomputed set.
//!
//! ## Design notes
//!
//! * **k-means++ seeding**: The first center is drawn uniformly, later ones
//!   with probability proportional to the squared distance to the nearest
//!   center already chosen. If every remaining distance is zero the draw
//!   falls back to uniform.
//! * **Lloyd iterations**: Assign to the nearest center (ties go to the lowest
//!   index), then move each center to the mean of its members. Empty clusters
//!   keep their previous position.
//! * **Scale-aware tolerance**: Iteration stops when the total squared center
//!   shift is at most `tolerance × mean per-dimension variance`.
//! * **Restarts**: Several seeded runs; the lowest inertia wins.
//! * **Deterministic**: All randomness comes from one `SmallRng` seeded by
//!   `KMeans::seed`, so equal inputs give equal centers.
//!
//! ## Invariants
//!
//! * `1 ≤ k ≤ n`; violations are configuration errors, never clamped.
//! * The returned buffer is row-major `k × dimensions`, in a fixed order.
//!
//! ## Non-goals
//!
//! * Choosing `k` automatically.
//! * Mini-batch or Elkan variants.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{trace, warn};
use num_traits::Float;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// Internal dependencies
use crate::math::distance::{DistanceLinalg, mean_variance, nearest};
use crate::primitives::errors::RbfnError;

// ============================================================================
// CenterSelector Trait
// ============================================================================

/// Capability that picks `k` representative centers from a point set.
pub trait CenterSelector<T> {
    /// Return `k` centers as a row-major `k × dimensions` buffer.
    ///
    /// Implementations must fail with [`RbfnError::InvalidConfiguration`] when
    /// `k == 0` or `k` exceeds the number of points.
    fn select_centers(&self, x: &[T], dimensions: usize, k: usize) -> Result<Vec<T>, RbfnError>;
}

/// Check the shape of a point buffer and the requested cluster count.
///
/// Returns the number of points.
pub fn check_cluster_request<T>(x: &[T], dimensions: usize, k: usize) -> Result<usize, RbfnError> {
    if dimensions == 0 {
        return Err(RbfnError::config("input dimensionality must be at least 1"));
    }
    if x.is_empty() {
        return Err(RbfnError::EmptyInput);
    }
    if x.len() % dimensions != 0 {
        return Err(RbfnError::DimensionMismatch {
            context: "input buffer length",
            expected: x.len() - x.len() % dimensions,
            got: x.len(),
        });
    }
    let n = x.len() / dimensions;
    if k == 0 {
        return Err(RbfnError::config("hidden_shape must be at least 1"));
    }
    if k > n {
        return Err(RbfnError::config(format!(
            "hidden_shape ({}) exceeds the number of samples ({})",
            k, n
        )));
    }
    Ok(n)
}

// ============================================================================
// K-Means
// ============================================================================

/// Seeded k-means clustering with k-means++ initialization.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KMeans {
    /// Maximum Lloyd iterations per restart.
    pub max_iterations: usize,
    /// Relative convergence tolerance on the squared center shift.
    pub tolerance: f64,
    /// Number of independent initializations.
    pub restarts: usize,
    /// RNG seed.
    pub seed: u64,
}

impl Default for KMeans {
    fn default() -> Self {
        Self {
            max_iterations: 300,
            tolerance: 1e-4,
            restarts: 10,
            seed: 0,
        }
    }
}

/// Outcome of a k-means run.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterResult<T> {
    /// Row-major `k × dimensions` centers.
    pub centers: Vec<T>,
    /// Cluster index of each input point.
    pub labels: Vec<usize>,
    /// Sum of squared distances from each point to its center.
    pub inertia: T,
    /// Lloyd iterations of the winning restart.
    pub iterations: usize,
    /// Whether the winning restart met the tolerance.
    pub converged: bool,
}

impl KMeans {
    /// Check that the options describe a runnable configuration.
    pub fn validate(&self) -> Result<(), RbfnError> {
        if self.max_iterations == 0 {
            return Err(RbfnError::config("max_iterations must be at least 1"));
        }
        if self.restarts == 0 {
            return Err(RbfnError::config("restarts must be at least 1"));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(RbfnError::config(format!(
                "tolerance must be finite and >= 0, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Cluster `x` (row-major `n × dimensions`) into `k` groups.
    pub fn run<T: DistanceLinalg>(
        &self,
        x: &[T],
        dimensions: usize,
        k: usize,
    ) -> Result<ClusterResult<T>, RbfnError> {
        let n = check_cluster_request(x, dimensions, k)?;
        self.validate()?;

        let tol = T::from(self.tolerance).unwrap_or_else(T::zero) * mean_variance(x, dimensions);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut best: Option<ClusterResult<T>> = None;

        for restart in 0..self.restarts {
            let init = plus_plus_init(x, dimensions, n, k, &mut rng);
            let result = lloyd(x, dimensions, n, k, init, tol, self.max_iterations);
            trace!(
                "k-means restart {}: inertia={:?} iterations={} converged={}",
                restart,
                result.inertia.to_f64(),
                result.iterations,
                result.converged
            );
            let better = match &best {
                Some(b) => result.inertia < b.inertia,
                None => true,
            };
            if better {
                best = Some(result);
            }
        }

        let best = best.ok_or_else(|| RbfnError::config("k-means produced no result"))?;
        if !best.converged {
            warn!(
                "k-means did not converge within {} iterations (k={}, n={})",
                self.max_iterations, k, n
            );
        }
        Ok(best)
    }
}

impl<T: DistanceLinalg> CenterSelector<T> for KMeans {
    fn select_centers(&self, x: &[T], dimensions: usize, k: usize) -> Result<Vec<T>, RbfnError> {
        self.run(x, dimensions, k).map(|r| r.centers)
    }
}

/// k-means++ seeding.
fn plus_plus_init<T: DistanceLinalg>(
    x: &[T],
    d: usize,
    n: usize,
    k: usize,
    rng: &mut SmallRng,
) -> Vec<T> {
    let row = |i: usize| &x[i * d..(i + 1) * d];
    let mut centers = Vec::with_capacity(k * d);

    let first = rng.random_range(0..n);
    centers.extend_from_slice(row(first));
    let mut min_d2: Vec<T> = (0..n).map(|i| T::squared_euclidean(row(i), row(first))).collect();

    for _ in 1..k {
        let total: f64 = min_d2.iter().map(|v| v.to_f64().unwrap_or(0.0)).sum();
        let chosen = if total > 0.0 && total.is_finite() {
            let threshold = rng.random::<f64>() * total;
            let mut cumulative = 0.0;
            let mut pick = None;
            let mut last_positive = 0;
            for (i, v) in min_d2.iter().enumerate() {
                let w = v.to_f64().unwrap_or(0.0);
                if w > 0.0 {
                    last_positive = i;
                }
                cumulative += w;
                if cumulative > threshold {
                    pick = Some(i);
                    break;
                }
            }
            pick.unwrap_or(last_positive)
        } else {
            rng.random_range(0..n)
        };

        centers.extend_from_slice(row(chosen));
        for (i, slot) in min_d2.iter_mut().enumerate() {
            let d2 = T::squared_euclidean(row(i), row(chosen));
            if d2 < *slot {
                *slot = d2;
            }
        }
    }

    centers
}

/// Lloyd iterations from an initial center set.
fn lloyd<T: DistanceLinalg>(
    x: &[T],
    d: usize,
    n: usize,
    k: usize,
    mut centers: Vec<T>,
    tol: T,
    max_iterations: usize,
) -> ClusterResult<T> {
    let mut labels = vec![0usize; n];
    let mut sums = vec![T::zero(); k * d];
    let mut counts = vec![0usize; k];
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..max_iterations {
        iterations += 1;

        for (i, point) in x.chunks_exact(d).enumerate() {
            labels[i] = nearest(point, &centers, d).map_or(0, |(j, _)| j);
        }

        sums.iter_mut().for_each(|s| *s = T::zero());
        counts.iter_mut().for_each(|c| *c = 0);
        for (point, &label) in x.chunks_exact(d).zip(&labels) {
            counts[label] += 1;
            for (s, &v) in sums[label * d..(label + 1) * d].iter_mut().zip(point) {
                *s = *s + v;
            }
        }

        let mut shift = T::zero();
        for j in 0..k {
            if counts[j] == 0 {
                continue;
            }
            let count = T::from(counts[j]).unwrap_or_else(T::one);
            let old = &mut centers[j * d..(j + 1) * d];
            for (c, &s) in old.iter_mut().zip(&sums[j * d..(j + 1) * d]) {
                let updated = s / count;
                let diff = updated - *c;
                shift = shift + diff * diff;
                *c = updated;
            }
        }

        if shift <= tol {
            converged = true;
            break;
        }
    }

    let mut inertia = T::zero();
    for (i, point) in x.chunks_exact(d).enumerate() {
        if let Some((j, d2)) = nearest(point, &centers, d) {
            labels[i] = j;
            inertia = inertia + d2;
        }
    }

    ClusterResult {
        centers,
        labels,
        inertia,
        iterations,
        converged,
    }
}

// ============================================================================
// Fixed Centers
// ============================================================================

/// A precomputed center set, returned as-is when its shape matches the request.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedCenters<T>(pub Vec<T>);

impl<T: Float> CenterSelector<T> for FixedCenters<T> {
    fn select_centers(&self, x: &[T], dimensions: usize, k: usize) -> Result<Vec<T>, RbfnError> {
        check_cluster_request(x, dimensions, k)?;
        if self.0.len() != k * dimensions {
            return Err(RbfnError::DimensionMismatch {
                context: "fixed center buffer length",
                expected: k * dimensions,
                got: self.0.len(),
            });
        }
        Ok(self.0.clone())
    }
}
