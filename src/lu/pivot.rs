use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::SolveError;
use crate::residual::norm_inf;
use crate::validate::DEFAULT_SINGULARITY_EPS;

/// Criterion deciding when a pivot counts as zero
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PivotTolerance {
    /// Pivots with `|p| ≤ eps` are singular.
    Absolute(f64),
    /// Pivots with `|p| ≤ fraction · ‖A‖∞` are singular.
    Relative(f64),
}

impl PivotTolerance {
    /// Resolves the criterion into an absolute threshold for the matrix `a`.
    pub fn threshold(&self, a: &Array2<f64>) -> f64 {
        match *self {
            PivotTolerance::Absolute(eps) => eps,
            PivotTolerance::Relative(fraction) => fraction * norm_inf(a),
        }
    }

    /// Checks that the tolerance is finite and non-negative.
    pub fn validate(&self) -> Result<(), SolveError> {
        let value = match *self {
            PivotTolerance::Absolute(v) | PivotTolerance::Relative(v) => v,
        };
        if !(value.is_finite() && value >= 0.0) {
            return Err(SolveError::InvalidParameter {
                name: "pivot_tolerance",
                value,
            });
        }
        Ok(())
    }
}

impl Default for PivotTolerance {
    fn default() -> Self {
        PivotTolerance::Absolute(DEFAULT_SINGULARITY_EPS)
    }
}
