//! Goodness-of-fit diagnostics for a fitted network.
//!
//! ## Purpose
//!
//! This module summarizes how closely the fitted network reproduces its
//! training outputs. Surrogate-assisted optimizers use these numbers to decide
//! whether a surrogate is trustworthy enough to rank candidates.
//!
//! ## Key concepts
//!
//! * **RMSE**: √(Σ rᵢ² / n)
//! * **MAE**: Σ |rᵢ| / n
//! * **R²**: 1 − SS_res / SS_tot (1 when the targets are constant and fit exactly,
//!   0 when they are constant and not)
//! * **Max error**: maxᵢ |rᵢ|
//!
//! Multi-output targets are pooled: every `(row, output)` cell counts as one
//! residual, and SS_tot is taken per output column around that column's mean.
//!
//! ## Non-goals
//!
//! * Out-of-sample validation or cross-validation.

// External dependencies
use core::fmt;
use num_traits::Float;

/// Training-set fit statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Root mean squared error.
    pub rmse: T,
    /// Mean absolute error.
    pub mae: T,
    /// Coefficient of determination.
    pub r_squared: T,
    /// Largest absolute residual.
    pub max_error: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compare `fitted` against `y`, both row-major `n × outputs`.
    pub fn compute(y: &[T], fitted: &[T], outputs: usize) -> Self {
        debug_assert_eq!(y.len(), fitted.len());
        let cells = y.len().min(fitted.len());
        if cells == 0 || outputs == 0 {
            return Self {
                rmse: T::zero(),
                mae: T::zero(),
                r_squared: T::one(),
                max_error: T::zero(),
            };
        }

        let mut ss_res = T::zero();
        let mut abs_sum = T::zero();
        let mut max_error = T::zero();
        for (&yi, &fi) in y.iter().zip(fitted) {
            let r = yi - fi;
            ss_res = ss_res + r * r;
            abs_sum = abs_sum + r.abs();
            max_error = max_error.max(r.abs());
        }

        let rows = cells / outputs;
        let rows_t = T::from(rows).unwrap_or_else(T::one);
        let mut ss_tot = T::zero();
        for o in 0..outputs {
            let column = y.iter().skip(o).step_by(outputs).take(rows);
            let mean = column.clone().fold(T::zero(), |acc, &v| acc + v) / rows_t;
            ss_tot = column.fold(ss_tot, |acc, &v| acc + (v - mean) * (v - mean));
        }

        let cells_t = T::from(cells).unwrap_or_else(T::one);
        let r_squared = if ss_tot > T::zero() {
            T::one() - ss_res / ss_tot
        } else if ss_res <= T::epsilon() {
            T::one()
        } else {
            T::zero()
        };

        Self {
            rmse: (ss_res / cells_t).sqrt(),
            mae: abs_sum / cells_t,
            r_squared,
            max_error,
        }
    }
}

impl<T: Float + fmt::Display> fmt::Display for Diagnostics<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RBFN Diagnostics:")?;
        writeln!(f, "  RMSE:       {:.6}", self.rmse)?;
        writeln!(f, "  MAE:        {:.6}", self.mae)?;
        writeln!(f, "  R^2:        {:.6}", self.r_squared)?;
        write!(f, "  Max error:  {:.6}", self.max_error)
    }
}
