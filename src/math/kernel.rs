//! Radial basis kernels.
//!
//! ## Purpose
//!
//! This module defines the four radial profiles an RBF network can use and the
//! sigma-bound evaluator used inside the design-matrix loop.
//!
//! ## Design notes
//!
//! * **Tagged variants**: [`Kernel`] is a fieldless enum chosen once at model
//!   construction. It parses from and prints to the short tags
//!   `"gaussian"`, `"reflect"`, `"mul"` and `"inmul"`.
//! * **Bound evaluator**: [`RadialBasis`] pairs a kernel with the fitted
//!   spread so the hot loop is a plain `match` with no configuration lookups.
//! * **Radial**: Every kernel depends only on `r = ‖c − x‖`, so evaluation is
//!   symmetric in its two arguments.
//!
//! ## Key concepts
//!
//! | Kernel                | Profile φ(r)               | φ(0)            |
//! |-----------------------|----------------------------|-----------------|
//! | `Gaussian`            | exp(−½ (r/σ)²)             | 1               |
//! | `Reflected`           | 1 / (1 + exp((r/σ)²))      | ½               |
//! | `Multiquadric`        | √(r² + σ²)                 | σ               |
//! | `InverseMultiquadric` | 1 / √(r² + σ²)             | 1/σ             |
//!
//! ## Invariants
//!
//! * Gaussian and reflected profiles are decreasing in `r` and bounded.
//! * Multiquadric is increasing and never zero for σ > 0.
//! * Inverse multiquadric is finite at `r = 0` for σ > 0.
//!
//! ## Non-goals
//!
//! * This module does not pick sigma (see `math::spread`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use core::fmt;
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::math::distance::DistanceLinalg;
use crate::primitives::errors::RbfnError;

// ============================================================================
// Kernel Enum
// ============================================================================

/// Radial profile of each hidden unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kernel {
    /// Gaussian bell curve: exp(−½ (r/σ)²).
    #[default]
    Gaussian,

    /// Reflected sigmoid: 1 / (1 + exp((r/σ)²)).
    #[cfg_attr(feature = "serde", serde(rename = "reflect"))]
    Reflected,

    /// Multiquadric: √(r² + σ²).
    #[cfg_attr(feature = "serde", serde(rename = "mul"))]
    Multiquadric,

    /// Inverse multiquadric: 1 / √(r² + σ²).
    #[cfg_attr(feature = "serde", serde(rename = "inmul"))]
    InverseMultiquadric,
}

impl Kernel {
    /// All kernels, in declaration order.
    pub const ALL: [Kernel; 4] = [
        Kernel::Gaussian,
        Kernel::Reflected,
        Kernel::Multiquadric,
        Kernel::InverseMultiquadric,
    ];

    /// Short tag used in configuration (`"gaussian"`, `"reflect"`, `"mul"`, `"inmul"`).
    pub fn tag(self) -> &'static str {
        match self {
            Kernel::Gaussian => "gaussian",
            Kernel::Reflected => "reflect",
            Kernel::Multiquadric => "mul",
            Kernel::InverseMultiquadric => "inmul",
        }
    }

    /// Evaluate the radial profile at distance `r` with spread `sigma`.
    #[inline]
    pub fn evaluate_distance<T: Float>(self, r: T, sigma: T) -> T {
        match self {
            Kernel::Gaussian => {
                let s = r / sigma;
                let half = T::one() / (T::one() + T::one());
                (-half * s * s).exp()
            }
            Kernel::Reflected => {
                let s = r / sigma;
                T::one() / (T::one() + (s * s).exp())
            }
            Kernel::Multiquadric => (r * r + sigma * sigma).sqrt(),
            Kernel::InverseMultiquadric => T::one() / (r * r + sigma * sigma).sqrt(),
        }
    }

    /// Bind this kernel to a spread value.
    pub fn with_sigma<T: Float>(self, sigma: T) -> RadialBasis<T> {
        RadialBasis {
            kernel: self,
            sigma,
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Kernel {
    type Err = RbfnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gaussian" => Ok(Kernel::Gaussian),
            "reflect" => Ok(Kernel::Reflected),
            "mul" => Ok(Kernel::Multiquadric),
            "inmul" => Ok(Kernel::InverseMultiquadric),
            other => Err(RbfnError::config(format!(
                "unknown kernel '{}' (expected one of: gaussian, reflect, mul, inmul)",
                other
            ))),
        }
    }
}

// ============================================================================
// Radial Basis Evaluator
// ============================================================================

/// A kernel bound to the spread of a fitted network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialBasis<T> {
    /// Radial profile.
    pub kernel: Kernel,
    /// Spread shared by all hidden units.
    pub sigma: T,
}

impl<T: DistanceLinalg> RadialBasis<T> {
    /// Evaluate the basis function centered at `center` for `point`.
    #[inline]
    pub fn evaluate(&self, center: &[T], point: &[T]) -> T {
        let r = crate::math::distance::euclidean(center, point);
        self.kernel.evaluate_distance(r, self.sigma)
    }
}
