//! Fit result reporting.
//!
//! ## Purpose
//!
//! This module defines [`FitSummary`], the value returned by a successful fit.
//! It carries the shapes, the fitted spread, clustering statistics, training
//! diagnostics, and the in-sample predictions.
//!
//! ## Non-goals
//!
//! * This module does not hold the model parameters (see `FittedState`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::kernel::Kernel;

/// Statistics from the k-means center selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterStats<T> {
    /// Lloyd iterations of the winning restart.
    pub iterations: usize,
    /// Sum of squared distances to the assigned centers.
    pub inertia: T,
    /// Whether the tolerance was met.
    pub converged: bool,
}

/// Report returned by a successful fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FitSummary<T> {
    /// Number of training samples.
    pub n_samples: usize,
    /// Input dimensionality.
    pub dimensions: usize,
    /// Number of hidden units.
    pub hidden_shape: usize,
    /// Number of output columns.
    pub outputs: usize,
    /// Radial profile.
    pub kernel: Kernel,
    /// Fitted spread.
    pub sigma: T,
    /// k-means statistics; `None` when centers came from a custom selector.
    pub clustering: Option<ClusterStats<T>>,
    /// Training-set fit quality.
    pub diagnostics: Diagnostics<T>,
    /// In-sample predictions, row-major `n_samples × outputs`.
    pub fitted: Vec<T>,
}

impl<T: Float + fmt::Display> fmt::Display for FitSummary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Samples: {}", self.n_samples)?;
        writeln!(f, "  Dimensions: {}", self.dimensions)?;
        writeln!(f, "  Hidden units: {}", self.hidden_shape)?;
        writeln!(f, "  Outputs: {}", self.outputs)?;
        writeln!(f, "  Kernel: {}", self.kernel)?;
        writeln!(f, "  Sigma: {:.6}", self.sigma)?;
        if let Some(stats) = &self.clustering {
            writeln!(
                f,
                "  K-means: {} iterations, inertia {:.6}{}",
                stats.iterations,
                stats.inertia,
                if stats.converged { "" } else { " (not converged)" }
            )?;
        }
        writeln!(f)?;
        write!(f, "{}", self.diagnostics)
    }
}
