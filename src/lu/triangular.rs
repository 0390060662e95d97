//! Forward and backward substitution with stored LU factors
use ndarray::Array1;

use super::factorize::LuFactorization;
use crate::error::SolveError;
use crate::validate::check_rhs;

/// Solves `L·y = P·b` for the intermediate vector `y`.
pub fn forward_substitution(
    fact: &LuFactorization,
    b: &Array1<f64>,
) -> Result<Array1<f64>, SolveError> {
    let n = fact.dim();
    check_rhs(n, b)?;
    let lu = fact.packed();
    let mut y = fact.permutation().apply(b);
    for i in 0..n {
        let mut sum = 0.0;
        for j in 0..i {
            sum += lu[(i, j)] * y[j];
        }
        // unit diagonal
        y[i] -= sum;
    }
    Ok(y)
}

/// Solves `U·x = y`.
///
/// A zero on the diagonal of `U` is reported as [`SolveError::SingularMatrix`]
/// instead of producing infinite entries.
pub fn backward_substitution(
    fact: &LuFactorization,
    y: &Array1<f64>,
) -> Result<Array1<f64>, SolveError> {
    let n = fact.dim();
    check_rhs(n, y)?;
    let lu = fact.packed();
    let mut x = y.clone();
    for i in (0..n).rev() {
        let mut sum = 0.0;
        for j in (i + 1)..n {
            sum += lu[(i, j)] * x[j];
        }
        let u_ii = lu[(i, i)];
        if u_ii == 0.0 {
            return Err(SolveError::SingularMatrix {
                index: i,
                pivot: u_ii,
            });
        }
        x[i] = (x[i] - sum) / u_ii;
    }
    Ok(x)
}

/// Solves `A·x = b` given the factorization `P·A = L·U`.
pub fn solve_triangular(
    fact: &LuFactorization,
    b: &Array1<f64>,
) -> Result<Array1<f64>, SolveError> {
    let y = forward_substitution(fact, b)?;
    backward_substitution(fact, &y)
}
