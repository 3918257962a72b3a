//! High-level API for RBF network surrogates.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: the fluent
//! [`RbfnBuilder`] for configuration and the [`RbfnModel`] it builds, which
//! exposes `fit` and `predict`.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for everything except the
//!   number of hidden units.
//! * **Validated**: Parameters are validated when `.build()` is called;
//!   duplicate settings and unparseable kernel tags are reported there.
//! * **Atomic**: `fit` swaps in a complete fitted state or leaves the model
//!   untouched.
//! * **Type-Safe**: Generic over `f32` and `f64`.
//!
//! ## Key concepts
//!
//! * **Lifecycle**: `Unfitted → Fitted`; re-fitting replaces the whole state.
//! * **Buffers**: Inputs are row-major `n × input_shape`, targets and
//!   predictions are row-major `n × outputs`.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Rbfn::new()`.
//! 2. Chain configuration methods (`.input_shape()`, `.hidden_shape()`, `.kernel()`, ...).
//! 3. Call `.build()` to obtain an unfitted [`RbfnModel`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::executor::RbfnExecutor;
use crate::engine::validator::Validator;
use crate::math::distance::DistanceLinalg;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::algorithms::clustering::{CenterSelector, FixedCenters, KMeans};
pub use crate::engine::executor::{FittedState, RbfnConfig};
pub use crate::engine::output::FitSummary;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::kernel::Kernel;
pub use crate::primitives::errors::RbfnError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an RBF network.
#[derive(Debug, Clone, Default)]
pub struct RbfnBuilder {
    /// Input dimensionality (default: 1).
    pub input_shape: Option<usize>,

    /// Number of hidden units (required).
    pub hidden_shape: Option<usize>,

    /// Radial profile (default: Gaussian).
    pub kernel: Option<Kernel>,

    /// Number of output columns (default: 1).
    pub outputs: Option<usize>,

    /// Lloyd iterations per k-means restart (default: 300).
    pub max_iterations: Option<usize>,

    /// Relative k-means convergence tolerance (default: 1e-4).
    pub tolerance: Option<f64>,

    /// Number of k-means restarts (default: 10).
    pub restarts: Option<usize>,

    /// k-means RNG seed (default: 0).
    pub seed: Option<u64>,

    /// Deferred error from parsing a kernel tag.
    pub deferred_error: Option<RbfnError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl RbfnBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input dimensionality.
    pub fn input_shape(mut self, dimensions: usize) -> Self {
        if self.input_shape.is_some() {
            self.duplicate_param = Some("input_shape");
        }
        self.input_shape = Some(dimensions);
        self
    }

    /// Set the number of hidden units (centers).
    pub fn hidden_shape(mut self, units: usize) -> Self {
        if self.hidden_shape.is_some() {
            self.duplicate_param = Some("hidden_shape");
        }
        self.hidden_shape = Some(units);
        self
    }

    /// Set the radial profile.
    pub fn kernel(mut self, kernel: Kernel) -> Self {
        if self.kernel.is_some() {
            self.duplicate_param = Some("kernel");
        }
        self.kernel = Some(kernel);
        self
    }

    /// Set the radial profile from its tag: `"gaussian"`, `"reflect"`, `"mul"`, or `"inmul"`.
    ///
    /// An unknown tag is reported by `build()`.
    pub fn kernel_name(mut self, tag: &str) -> Self {
        match tag.parse::<Kernel>() {
            Ok(kernel) => self.kernel(kernel),
            Err(err) => {
                if self.deferred_error.is_none() {
                    self.deferred_error = Some(err);
                }
                self
            }
        }
    }

    /// Set the number of output columns.
    pub fn outputs(mut self, outputs: usize) -> Self {
        if self.outputs.is_some() {
            self.duplicate_param = Some("outputs");
        }
        self.outputs = Some(outputs);
        self
    }

    /// Set the maximum Lloyd iterations per k-means restart.
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(iterations);
        self
    }

    /// Set the relative k-means convergence tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the number of k-means restarts.
    pub fn restarts(mut self, restarts: usize) -> Self {
        if self.restarts.is_some() {
            self.duplicate_param = Some("restarts");
        }
        self.restarts = Some(restarts);
        self
    }

    /// Set the k-means RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Resolve defaults into a configuration without validating it.
    pub fn config(&self) -> Result<RbfnConfig, RbfnError> {
        let defaults = KMeans::default();
        let hidden_shape = self
            .hidden_shape
            .ok_or_else(|| RbfnError::InvalidConfiguration("hidden_shape must be set".into()))?;
        Ok(RbfnConfig {
            input_shape: self.input_shape.unwrap_or(1),
            hidden_shape,
            kernel: self.kernel.unwrap_or_default(),
            outputs: self.outputs.unwrap_or(1),
            kmeans: KMeans {
                max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
                tolerance: self.tolerance.unwrap_or(defaults.tolerance),
                restarts: self.restarts.unwrap_or(defaults.restarts),
                seed: self.seed.unwrap_or(defaults.seed),
            },
        })
    }

    /// Build an unfitted model.
    pub fn build<T: FloatLinalg + DistanceLinalg>(self) -> Result<RbfnModel<T>, RbfnError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        RbfnModel::from_config(self.config()?)
    }
}

// ============================================================================
// Model
// ============================================================================

/// A radial basis function network.
///
/// Created unfitted; [`fit`](Self::fit) installs centers, spread, weights and
/// bias, after which [`predict`](Self::predict) is available.
#[derive(Debug, Clone, PartialEq)]
pub struct RbfnModel<T> {
    config: RbfnConfig,
    state: Option<FittedState<T>>,
}

impl<T: FloatLinalg + DistanceLinalg> RbfnModel<T> {
    /// Create an unfitted model from the three core settings.
    ///
    /// `kernel` is one of `"gaussian"`, `"reflect"`, `"mul"`, `"inmul"`.
    pub fn new(input_shape: usize, hidden_shape: usize, kernel: &str) -> Result<Self, RbfnError> {
        RbfnBuilder::new()
            .input_shape(input_shape)
            .hidden_shape(hidden_shape)
            .kernel_name(kernel)
            .build()
    }

    /// Create an unfitted model from a full configuration.
    pub fn from_config(config: RbfnConfig) -> Result<Self, RbfnError> {
        config.validate()?;
        Ok(Self {
            config,
            state: None,
        })
    }

    /// Recreate a fitted model from a previously obtained state.
    pub fn restore(config: RbfnConfig, state: FittedState<T>) -> Result<Self, RbfnError> {
        config.validate()?;
        state.check_against(&config)?;
        Ok(Self {
            config,
            state: Some(state),
        })
    }

    // ========================================================================
    // Fitting
    // ========================================================================

    /// Fit the network to `x` (row-major `n × input_shape`) and `y`
    /// (row-major `n × outputs`), selecting centers with k-means.
    ///
    /// On error the previous state, if any, is kept.
    pub fn fit(&mut self, x: &[T], y: &[T]) -> Result<FitSummary<T>, RbfnError> {
        let outcome = RbfnExecutor::fit(&self.config, x, y)?;
        self.state = Some(outcome.state);
        Ok(outcome.summary)
    }

    /// Fit the network using a caller-supplied center selector.
    ///
    /// On error the previous state, if any, is kept.
    pub fn fit_with<S>(&mut self, selector: &S, x: &[T], y: &[T]) -> Result<FitSummary<T>, RbfnError>
    where
        S: CenterSelector<T> + ?Sized,
    {
        let outcome = RbfnExecutor::fit_with(&self.config, selector, x, y)?;
        self.state = Some(outcome.state);
        Ok(outcome.summary)
    }

    // ========================================================================
    // Prediction
    // ========================================================================

    /// Predict outputs for `x` (row-major `n × input_shape`).
    ///
    /// Returns row-major `n × outputs` values.
    ///
    /// `x` is split into rows of `input_shape` values. A length that is not a
    /// multiple of `input_shape` fails with `DimensionMismatch`, but rows of a
    /// different width whose total happens to divide evenly cannot be told
    /// apart. Use [`predict_point`](Self::predict_point) to check each point's
    /// width.
    pub fn predict(&self, x: &[T]) -> Result<Vec<T>, RbfnError> {
        self.state
            .as_ref()
            .ok_or(RbfnError::ModelNotFitted)?
            .predict(x)
    }

    /// Predict outputs for a single point of exactly `input_shape` values.
    pub fn predict_point(&self, point: &[T]) -> Result<Vec<T>, RbfnError> {
        let state = self.state.as_ref().ok_or(RbfnError::ModelNotFitted)?;
        if point.len() != state.dimensions {
            return Err(RbfnError::DimensionMismatch {
                context: "point dimensionality",
                expected: state.dimensions,
                got: point.len(),
            });
        }
        state.predict(point)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The model configuration.
    pub fn config(&self) -> &RbfnConfig {
        &self.config
    }

    /// Radial profile.
    pub fn kernel(&self) -> Kernel {
        self.config.kernel
    }

    /// Configured input dimensionality.
    pub fn input_shape(&self) -> usize {
        self.config.input_shape
    }

    /// Number of hidden units.
    pub fn hidden_shape(&self) -> usize {
        self.config.hidden_shape
    }

    /// Number of output columns.
    pub fn outputs(&self) -> usize {
        self.config.outputs
    }

    /// Whether a fit has succeeded.
    pub fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    /// The fitted state, if any.
    pub fn state(&self) -> Option<&FittedState<T>> {
        self.state.as_ref()
    }

    /// Consume the model and return its fitted state.
    pub fn into_state(self) -> Option<FittedState<T>> {
        self.state
    }

    /// Row-major `hidden_shape × input_shape` centers.
    pub fn centers(&self) -> Option<&[T]> {
        self.state.as_ref().map(|s| s.centers.as_slice())
    }

    /// Fitted spread.
    pub fn sigma(&self) -> Option<T> {
        self.state.as_ref().map(|s| s.sigma)
    }

    /// Row-major `hidden_shape × outputs` output weights.
    pub fn weights(&self) -> Option<&[T]> {
        self.state.as_ref().map(|s| s.weights.as_slice())
    }

    /// One bias per output column.
    pub fn bias(&self) -> Option<&[T]> {
        self.state.as_ref().map(|s| s.bias.as_slice())
    }
}
