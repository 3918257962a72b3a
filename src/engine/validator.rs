//! Input validation for RBFN configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions run at the boundary of
//! `build`, `fit`, and `predict`. It checks buffer shapes, finite values,
//! center counts, and clustering options.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Row-major buffers**: `x` holds `n × input_shape` values, `y` holds
//!   `n × outputs` values; the row counts must agree.
//! * **Center count**: `1 ≤ hidden_shape ≤ n`.
//! * **Spread**: A fitted sigma must be finite and strictly positive.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not reshape, clamp, or filter input data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::clustering::KMeans;
use crate::primitives::errors::RbfnError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for RBFN configuration and input data.
///
/// Provides static methods that return `Result<_, RbfnError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate training arrays and return the number of samples.
    pub fn validate_inputs<T: Float>(
        x: &[T],
        y: &[T],
        dimensions: usize,
        outputs: usize,
    ) -> Result<usize, RbfnError> {
        Self::validate_positive(dimensions, "input_shape")?;
        Self::validate_positive(outputs, "outputs")?;

        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(RbfnError::EmptyInput);
        }

        // Check 2: Whole rows
        if x.len() % dimensions != 0 {
            return Err(RbfnError::DimensionMismatch {
                context: "input row width",
                expected: dimensions,
                got: x.len() % dimensions,
            });
        }
        let n = x.len() / dimensions;

        // Check 3: One target row per input row
        let expected = Self::checked_size(n, outputs, "targets")?;
        if y.len() != expected {
            return Err(RbfnError::DimensionMismatch {
                context: "target length",
                expected,
                got: y.len(),
            });
        }

        // Check 4: All values finite
        Self::validate_finite(x, "x")?;
        Self::validate_finite(y, "y")?;

        Ok(n)
    }

    /// Validate prediction inputs and return the number of query points.
    pub fn validate_query<T: Float>(x: &[T], dimensions: usize) -> Result<usize, RbfnError> {
        Self::validate_positive(dimensions, "input_shape")?;
        if x.len() % dimensions != 0 {
            return Err(RbfnError::DimensionMismatch {
                context: "query row width",
                expected: dimensions,
                got: x.len() % dimensions,
            });
        }
        Self::validate_finite(x, "x")?;
        Ok(x.len() / dimensions)
    }

    /// Validate that every value in `values` is finite.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), RbfnError> {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(RbfnError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a size parameter that must be at least 1.
    pub fn validate_positive(value: usize, name: &str) -> Result<(), RbfnError> {
        if value == 0 {
            return Err(RbfnError::config(format!("{} must be at least 1", name)));
        }
        Ok(())
    }

    /// Element count of a `rows × cols` buffer, failing instead of overflowing.
    pub fn checked_size(rows: usize, cols: usize, name: &str) -> Result<usize, RbfnError> {
        rows.checked_mul(cols).ok_or_else(|| {
            RbfnError::config(format!(
                "{} buffer size {} x {} overflows usize",
                name, rows, cols
            ))
        })
    }

    /// Validate the number of hidden units against the sample count.
    pub fn validate_hidden_shape(hidden_shape: usize, n_samples: usize) -> Result<(), RbfnError> {
        Self::validate_positive(hidden_shape, "hidden_shape")?;
        if hidden_shape > n_samples {
            return Err(RbfnError::config(format!(
                "hidden_shape ({}) exceeds the number of samples ({})",
                hidden_shape, n_samples
            )));
        }
        Ok(())
    }

    /// Validate k-means options.
    pub fn validate_kmeans(kmeans: &KMeans) -> Result<(), RbfnError> {
        kmeans.validate()
    }

    /// Validate a fitted spread.
    ///
    /// A zero sigma means every center coincides, which makes the Gaussian and
    /// reflected kernels undefined.
    pub fn validate_sigma<T: Float>(sigma: T) -> Result<(), RbfnError> {
        if !sigma.is_finite() || sigma <= T::zero() {
            return Err(RbfnError::config(format!(
                "degenerate spread sigma={} (all centers coincide)",
                sigma.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), RbfnError> {
        if let Some(param) = duplicate_param {
            return Err(RbfnError::config(format!(
                "parameter '{}' was set more than once",
                param
            )));
        }
        Ok(())
    }
}
