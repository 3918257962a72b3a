//! Error types for RBFN operations.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate, from builder validation through fitting and
//! prediction.
//!
//! ## Design notes
//!
//! * **Flat taxonomy**: One enum, one variant per failure class.
//! * **Recoverable**: Every variant describes a caller-correctable condition;
//!   nothing in the crate panics on bad input.
//! * **no_std**: `Display` is always available; `std::error::Error` is
//!   implemented when the `std` feature is enabled.
//!
//! ## Key concepts
//!
//! * **InvalidConfiguration**: Bad kernel tag, bad center count, degenerate spread.
//! * **ModelNotFitted**: Prediction requested before a successful fit.
//! * **DimensionMismatch**: Input widths or row counts that do not line up.
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt;

/// Errors produced while configuring, fitting, or querying an RBF network.
#[derive(Debug, Clone, PartialEq)]
pub enum RbfnError {
    /// Input arrays are empty.
    EmptyInput,

    /// The model configuration cannot produce a valid network.
    ///
    /// Raised for unknown kernel tags, `hidden_shape` of zero or larger than
    /// the sample count, fewer than two centers when estimating the spread,
    /// a degenerate (zero) spread, and invalid clustering options.
    InvalidConfiguration(String),

    /// `predict` was called before a successful `fit`.
    ModelNotFitted,

    /// Array shapes are inconsistent with each other or with the fitted model.
    DimensionMismatch {
        /// Which quantity was being checked.
        context: &'static str,
        /// The size required.
        expected: usize,
        /// The size received.
        got: usize,
    },

    /// An input contains NaN or infinity.
    InvalidNumericValue(String),

    /// The least-squares solve could not be completed.
    SolverFailure(String),
}

impl fmt::Display for RbfnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RbfnError::EmptyInput => write!(f, "Input arrays are empty"),
            RbfnError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            RbfnError::ModelNotFitted => write!(f, "Model has not been fitted"),
            RbfnError::DimensionMismatch {
                context,
                expected,
                got,
            } => write!(
                f,
                "Dimension mismatch in {}: expected {}, got {}",
                context, expected, got
            ),
            RbfnError::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            RbfnError::SolverFailure(msg) => write!(f, "Solver failure: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RbfnError {}

impl RbfnError {
    /// Shorthand for building an [`RbfnError::InvalidConfiguration`].
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        RbfnError::InvalidConfiguration(msg.into())
    }

    /// Returns `true` for configuration errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, RbfnError::InvalidConfiguration(_))
    }
}
