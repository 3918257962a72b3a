//! # RBFN — Radial Basis Function Networks for Rust
//!
//! A compact, deterministic implementation of radial basis function networks
//! for surrogate modeling and nonlinear regression.
//!
//! ## What is an RBF network?
//!
//! An RBF network approximates a function `f: R^d → R^m` with a single hidden
//! layer of radially symmetric units followed by a linear readout:
//!
//! ```text
//! ŷ(x) = Σ_j w_j · φ(‖x − c_j‖, σ) + b
//! ```
//!
//! Training is not iterative gradient descent. It runs in three closed-form
//! steps:
//!
//! 1. Pick `K` centers `c_j` by clustering the inputs (k-means).
//! 2. Set one shared spread `σ` to twice the mean pairwise center distance.
//! 3. Solve the linear least-squares problem for `w` and `b` with an SVD
//!    pseudoinverse.
//!
//! **Common applications:**
//! - Cheap surrogates for expensive simulations (optimization, sensitivity studies)
//! - Smooth interpolation of scattered multi-dimensional data
//! - Baselines for nonlinear regression
//!
//! ## Quick Start
//!
//! ```rust
//! use rbfn_rs::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0];
//! let y = vec![0.0, 1.0, 2.0, 3.0];
//!
//! // Build the model
//! let mut model = Rbfn::new()
//!     .input_shape(1)     // One input feature
//!     .hidden_shape(2)    // Two hidden units
//!     .kernel(Gaussian)
//!     .build()?;
//!
//! // Fit the model to the data
//! let summary = model.fit(&x, &y)?;
//! println!("{}", summary);
//!
//! // Predict at new points
//! let y_hat = model.predict(&[0.5, 2.5])?;
//! assert_eq!(y_hat.len(), 2);
//! # Result::<(), RbfnError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Samples: 4
//!   Dimensions: 1
//!   Hidden units: 2
//!   Outputs: 1
//!   Kernel: gaussian
//!   Sigma: 4.000000
//!   K-means: 2 iterations, inertia 1.000000
//!
//! RBFN Diagnostics:
//!   RMSE:      ...
//! ```
//!
//! The three-argument constructor takes the kernel as a tag:
//!
//! ```rust
//! use rbfn_rs::prelude::*;
//!
//! let model = RbfnModel::<f64>::new(2, 10, "inmul")?;
//! assert!(!model.is_fitted());
//! assert_eq!(model.kernel(), InverseMultiquadric);
//! # Result::<(), RbfnError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, RbfnError>`:
//!
//! - **`InvalidConfiguration`**: bad settings, `hidden_shape` larger than the
//!   sample count, fewer than two centers for the spread, coinciding centers.
//! - **`ModelNotFitted`**: `predict` before a successful `fit`.
//! - **`DimensionMismatch`**: buffer widths that disagree with the configuration.
//! - **`EmptyInput`**, **`InvalidNumericValue`**, **`SolverFailure`**.
//!
//! A failed `fit` leaves the model exactly as it was.
//!
//! ```rust
//! use rbfn_rs::prelude::*;
//!
//! let mut model = Rbfn::new().hidden_shape(2).build::<f64>()?;
//! match model.predict(&[1.0]) {
//!     Err(RbfnError::ModelNotFitted) => {}
//!     other => panic!("unexpected: {:?}", other),
//! }
//!
//! // More centers than samples is rejected, never clamped.
//! assert!(model.fit(&[0.0], &[1.0]).is_err());
//! assert!(!model.is_fitted());
//! # Result::<(), RbfnError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! rbfn-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Parameters
//!
//! | Parameter          | Default    | Description                                  |
//! |--------------------|------------|----------------------------------------------|
//! | `input_shape`      | `1`        | Row width of `x`                             |
//! | `hidden_shape`     | (required) | Number of hidden units / centers             |
//! | `kernel`           | `Gaussian` | Radial profile                               |
//! | `outputs`          | `1`        | Row width of `y`                             |
//! | `max_iterations`   | `300`      | Lloyd iterations per k-means restart         |
//! | `tolerance`        | `1e-4`     | Relative k-means convergence tolerance       |
//! | `restarts`         | `10`       | k-means initializations, best inertia wins   |
//! | `seed`             | `0`        | k-means RNG seed                             |
//!
//! Setting any parameter twice on the builder is an error at `build()`.
//!
//! ### Kernels
//!
//! | Variant               | Tag        | `φ(r, σ)`              | Shape               |
//! |-----------------------|------------|------------------------|---------------------|
//! | `Gaussian`            | `gaussian` | `exp(-r² / (2σ²))`     | 1 at r=0, decays    |
//! | `Reflected`           | `reflect`  | `1 / (1 + exp(r²/σ²))` | 0.5 at r=0, decays  |
//! | `Multiquadric`        | `mul`      | `sqrt(r² + σ²)`        | σ at r=0, grows     |
//! | `InverseMultiquadric` | `inmul`    | `1 / sqrt(r² + σ²)`    | 1/σ at r=0, decays  |
//!
//! ### Custom center selection
//!
//! k-means is the default, but any [`CenterSelector`](prelude::CenterSelector)
//! can be passed to `fit_with`. [`FixedCenters`](prelude::FixedCenters) injects
//! a precomputed set:
//!
//! ```rust
//! use rbfn_rs::prelude::*;
//!
//! let x = vec![0.0, 1.0, 5.0];
//! let y = vec![1.0, -1.0, 2.0];
//!
//! let mut model = Rbfn::new().hidden_shape(2).build()?;
//! model.fit_with(&FixedCenters(vec![0.0, 5.0]), &x, &y)?;
//! assert_eq!(model.centers(), Some(&[0.0, 5.0][..]));
//! # Result::<(), RbfnError>::Ok(())
//! ```
//!
//! ### Multiple outputs
//!
//! With `outputs(m)`, `y` is row-major `n × m`, and so is every prediction.
//! Each output column gets its own weights and its own bias.
//!
//! ## Logging
//!
//! The crate emits records through the [`log`] facade: `debug` for fit
//! milestones, `trace` per k-means restart, and `warn` when k-means stops
//! before converging. Install any logger to see them.
//!
//! ## Feature flags
//!
//! - `std` (default): standard library support.
//! - `serde`: `Serialize`/`Deserialize` for the configuration, the fitted
//!   state, and `Kernel`, so a fitted model can be persisted and restored with
//!   `RbfnModel::restore`.
//! - `dev`: exposes internal modules under [`internals`] for testing.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error type.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains SIMD distances, the radial kernels, the spread heuristic, and the
// SVD-backed least-squares solver.
mod math;

// Layer 3: Algorithms - center selection and design matrix expansion.
mod algorithms;

// Layer 4: Evaluation - training-set diagnostics (RMSE, MAE, R^2).
mod evaluation;

// Layer 5: Engine - validation, the fit pipeline, and the fitted state.
mod engine;

// High-level fluent API.
//
// Provides the `Rbfn` builder and the `RbfnModel` it produces.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard RBFN prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use rbfn_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CenterSelector, Diagnostics, FitSummary, FittedState, FixedCenters, KMeans,
        Kernel::{self, Gaussian, InverseMultiquadric, Multiquadric, Reflected},
        RbfnBuilder as Rbfn, RbfnConfig, RbfnError, RbfnModel,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
