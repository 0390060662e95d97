use ndarray::{Array1, Array2};

use crate::error::SolveError;
use crate::lu::{factorize_with, LuFactorization, PivotTolerance};

/// Newton direction for the residual `F(x) = A·x − b`.
///
/// The Jacobian is `A` in every step, so it is factorized once, when the
/// direction is created, and the factors are reused for all steps.
pub struct Direction {
    fact: LuFactorization,
}

impl Direction {
    /// Factorizes the Jacobian, failing if it is singular under `tolerance`.
    pub fn new(jacobian: &Array2<f64>, tolerance: PivotTolerance) -> Result<Self, SolveError> {
        let fact = factorize_with(jacobian, tolerance)?;
        Ok(Direction { fact })
    }

    /// Solves `J·Δ = −r` for the step `Δ`.
    pub fn compute(&self, r: &Array1<f64>) -> Result<Array1<f64>, SolveError> {
        self.fact.solve(&r.mapv(|ri| -ri))
    }

    /// Factors of the Jacobian.
    pub fn factorization(&self) -> &LuFactorization {
        &self.fact
    }
}
