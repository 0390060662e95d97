//! Direct solution by LU factorization with partial pivoting
use ndarray::{Array1, Array2};

use crate::error::SolveError;
use crate::validate::validate_system;

mod factorize;
mod permutation;
mod pivot;
mod triangular;

pub use factorize::{determinant, factorize, factorize_with, LuFactorization};
pub use permutation::Permutation;
pub use pivot::PivotTolerance;
pub use triangular::{backward_substitution, forward_substitution, solve_triangular};

/// Solves `A·x = b` by factorizing `A` and substituting.
pub fn solve_lu(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>, SolveError> {
    solve_lu_with(a, b, PivotTolerance::default())
}

/// Solves `A·x = b`, using `tolerance` to detect singular pivots.
pub fn solve_lu_with(
    a: &Array2<f64>,
    b: &Array1<f64>,
    tolerance: PivotTolerance,
) -> Result<Array1<f64>, SolveError> {
    validate_system(a, b)?;
    let fact = factorize_with(a, tolerance)?;
    solve_triangular(&fact, b)
}
