//! Execution engine for RBF network fitting and prediction.
//!
//! ## Purpose
//!
//! This module runs the fit pipeline (centers → spread → design matrix →
//! pseudoinverse solve) and owns the immutable [`FittedState`] it produces.
//! Prediction is a method on the fitted state.
//!
//! ## Design notes
//!
//! * **Atomic fit**: Every derived quantity is computed into locals and only
//!   assembled into a `FittedState` once all steps succeed. The caller swaps
//!   the new state in, so a failed re-fit never leaves a half-updated model.
//! * **Bias in the solve**: A ones column is appended to the design matrix and
//!   the bias is read back as the last solution row.
//! * **Selector seam**: Centers come either from the configured k-means or from
//!   any [`CenterSelector`].
//!
//! ## Key concepts
//!
//! * **Pipeline**: validate → select centers → estimate sigma → expand → solve.
//! * **Fitted state**: `(kernel, centers, sigma, weights, bias)` plus shapes.
//!
//! ## Invariants
//!
//! * `centers.len() == hidden_shape × dimensions`.
//! * `weights.len() == hidden_shape × outputs`, `bias.len() == outputs`.
//! * `sigma` is finite and strictly positive.
//!
//! ## Non-goals
//!
//! * Incremental or online updates.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::debug;

// Internal dependencies
use crate::algorithms::clustering::{CenterSelector, KMeans};
use crate::algorithms::design::{design_matrix, linear_output};
use crate::engine::output::{ClusterStats, FitSummary};
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::distance::DistanceLinalg;
use crate::math::kernel::{Kernel, RadialBasis};
use crate::math::linalg::FloatLinalg;
use crate::math::spread::estimate_sigma;
use crate::primitives::errors::RbfnError;

// ============================================================================
// Configuration
// ============================================================================

/// Construction-time configuration of a network.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RbfnConfig {
    /// Input dimensionality (row width of `x`).
    pub input_shape: usize,
    /// Number of hidden units (centers).
    pub hidden_shape: usize,
    /// Radial profile of the hidden units.
    pub kernel: Kernel,
    /// Number of output columns (row width of `y`).
    pub outputs: usize,
    /// Clustering options for the default center selector.
    pub kmeans: KMeans,
}

impl RbfnConfig {
    /// Check the configuration independently of any data.
    pub fn validate(&self) -> Result<(), RbfnError> {
        Validator::validate_positive(self.input_shape, "input_shape")?;
        Validator::validate_positive(self.hidden_shape, "hidden_shape")?;
        Validator::validate_positive(self.outputs, "outputs")?;
        Validator::validate_kmeans(&self.kmeans)
    }
}

// ============================================================================
// Fitted State
// ============================================================================

/// Everything a fit derives from data. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FittedState<T> {
    /// Radial profile used during the fit.
    pub kernel: Kernel,
    /// Input dimensionality seen during the fit.
    pub dimensions: usize,
    /// Number of output columns.
    pub outputs: usize,
    /// Row-major `hidden_shape × dimensions` centers.
    pub centers: Vec<T>,
    /// Shared spread.
    pub sigma: T,
    /// Row-major `hidden_shape × outputs` output weights.
    pub weights: Vec<T>,
    /// One bias per output column.
    pub bias: Vec<T>,
}

impl<T: FloatLinalg + DistanceLinalg> FittedState<T> {
    /// Number of hidden units.
    pub fn hidden_shape(&self) -> usize {
        if self.dimensions == 0 {
            0
        } else {
            self.centers.len() / self.dimensions
        }
    }

    /// Kernel bound to the fitted spread.
    pub fn basis(&self) -> RadialBasis<T> {
        self.kernel.with_sigma(self.sigma)
    }

    /// Evaluate the network on `x` (row-major `n × dimensions`).
    ///
    /// Returns row-major `n × outputs` predictions. A flat buffer carries no
    /// row boundaries, so only a length that is not a multiple of
    /// `dimensions` is reported as `DimensionMismatch`.
    pub fn predict(&self, x: &[T]) -> Result<Vec<T>, RbfnError> {
        let n = Validator::validate_query(x, self.dimensions)?;
        if n == 0 {
            return Ok(Vec::new());
        }
        let g = design_matrix(x, self.dimensions, &self.centers, &self.basis(), false);
        Ok(linear_output(&g, self.hidden_shape(), &self.weights, &self.bias))
    }

    /// Check that this state is internally consistent and matches `config`.
    pub fn check_against(&self, config: &RbfnConfig) -> Result<(), RbfnError> {
        if self.kernel != config.kernel {
            return Err(RbfnError::config(format!(
                "state was fitted with kernel '{}' but the model uses '{}'",
                self.kernel, config.kernel
            )));
        }
        let center_len =
            Validator::checked_size(config.hidden_shape, config.input_shape, "centers")?;
        let weight_len =
            Validator::checked_size(config.hidden_shape, config.outputs, "weights")?;
        let checks = [
            ("state input dimensionality", config.input_shape, self.dimensions),
            ("state output count", config.outputs, self.outputs),
            ("state center buffer length", center_len, self.centers.len()),
            ("state weight buffer length", weight_len, self.weights.len()),
            ("state bias length", config.outputs, self.bias.len()),
        ];
        for (context, expected, got) in checks {
            if expected != got {
                return Err(RbfnError::DimensionMismatch {
                    context,
                    expected,
                    got,
                });
            }
        }
        Validator::validate_sigma(self.sigma)?;
        Validator::validate_finite(&self.centers, "centers")?;
        Validator::validate_finite(&self.weights, "weights")?;
        Validator::validate_finite(&self.bias, "bias")
    }
}

// ============================================================================
// Fit Outcome
// ============================================================================

/// A successful fit: the new state and its summary.
#[derive(Debug, Clone)]
pub struct FitOutcome<T> {
    /// State to install in the model.
    pub state: FittedState<T>,
    /// Report on the fit.
    pub summary: FitSummary<T>,
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless runner for the fit pipeline.
pub struct RbfnExecutor;

impl RbfnExecutor {
    /// Fit with the configured k-means center selector.
    pub fn fit<T: FloatLinalg + DistanceLinalg>(
        config: &RbfnConfig,
        x: &[T],
        y: &[T],
    ) -> Result<FitOutcome<T>, RbfnError> {
        let n = Self::prepare(config, x, y)?;
        let clusters = config.kmeans.run(x, config.input_shape, config.hidden_shape)?;
        debug!(
            "k-means selected {} centers in {} iterations (inertia={:?})",
            config.hidden_shape,
            clusters.iterations,
            clusters.inertia.to_f64()
        );
        let stats = ClusterStats {
            iterations: clusters.iterations,
            inertia: clusters.inertia,
            converged: clusters.converged,
        };
        Self::fit_from_centers(config, x, y, n, clusters.centers, Some(stats))
    }

    /// Fit with a caller-supplied center selector.
    pub fn fit_with<T, S>(
        config: &RbfnConfig,
        selector: &S,
        x: &[T],
        y: &[T],
    ) -> Result<FitOutcome<T>, RbfnError>
    where
        T: FloatLinalg + DistanceLinalg,
        S: CenterSelector<T> + ?Sized,
    {
        let n = Self::prepare(config, x, y)?;
        let centers = selector.select_centers(x, config.input_shape, config.hidden_shape)?;
        Self::fit_from_centers(config, x, y, n, centers, None)
    }

    /// Validate training data against the configuration.
    ///
    /// Returns the number of samples.
    fn prepare<T: FloatLinalg>(config: &RbfnConfig, x: &[T], y: &[T]) -> Result<usize, RbfnError> {
        config.validate()?;
        let n = Validator::validate_inputs(x, y, config.input_shape, config.outputs)?;
        Validator::validate_hidden_shape(config.hidden_shape, n)?;
        Ok(n)
    }

    /// Run the spread estimate, expansion, and solve for a given center set.
    fn fit_from_centers<T: FloatLinalg + DistanceLinalg>(
        config: &RbfnConfig,
        x: &[T],
        y: &[T],
        n: usize,
        centers: Vec<T>,
        clustering: Option<ClusterStats<T>>,
    ) -> Result<FitOutcome<T>, RbfnError> {
        let d = config.input_shape;
        let k = config.hidden_shape;
        let m = config.outputs;

        if centers.len() != k * d {
            return Err(RbfnError::DimensionMismatch {
                context: "selected center buffer length",
                expected: k * d,
                got: centers.len(),
            });
        }
        Validator::validate_finite(&centers, "centers")?;

        let sigma = estimate_sigma(&centers, d)?;
        Validator::validate_sigma(sigma)?;
        debug!("spread sigma={:?} from {} centers", sigma.to_f64(), k);

        let basis = config.kernel.with_sigma(sigma);
        let g = design_matrix(x, d, &centers, &basis, true);
        debug!("solving {}x{} least-squares system for {} output(s)", n, k + 1, m);

        let solution = T::solve_least_squares(&g, n, k + 1, y, m)
            .ok_or_else(|| RbfnError::SolverFailure("SVD did not converge".into()))?;
        if solution.iter().any(|v| !v.is_finite()) {
            return Err(RbfnError::SolverFailure(format!(
                "non-finite weights for kernel '{}' with sigma={:?}",
                config.kernel,
                sigma.to_f64()
            )));
        }

        // The bias row multiplies the ones column, so no separate bias is added here.
        let no_bias = vec![T::zero(); m];
        let fitted = linear_output(&g, k + 1, &solution, &no_bias);
        let diagnostics = Diagnostics::compute(y, &fitted, m);

        let (weights, bias) = solution.split_at(k * m);
        let state = FittedState {
            kernel: config.kernel,
            dimensions: d,
            outputs: m,
            centers,
            sigma,
            weights: weights.to_vec(),
            bias: bias.to_vec(),
        };

        let summary = FitSummary {
            n_samples: n,
            dimensions: d,
            hidden_shape: k,
            outputs: m,
            kernel: config.kernel,
            sigma,
            clustering,
            diagnostics,
            fitted,
        };

        Ok(FitOutcome { state, summary })
    }
}
