//! Precondition checks shared by the direct and the iterative solvers
use ndarray::{Array1, Array2};

use crate::error::SolveError;
use crate::lu::determinant;

/// Threshold on `|det(A)|` below which a matrix is rejected upfront.
pub const DEFAULT_SINGULARITY_EPS: f64 = 1e-9;

/// Checks that the matrix is square and not empty.
pub fn check_square(a: &Array2<f64>) -> Result<usize, SolveError> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(SolveError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(SolveError::Empty);
    }
    Ok(rows)
}

/// Checks that a vector has length `n`.
pub fn check_rhs(n: usize, b: &Array1<f64>) -> Result<(), SolveError> {
    if b.len() != n {
        return Err(SolveError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    Ok(())
}

/// Checks that the matrix contains no NaN or infinite values.
pub fn check_finite_matrix(a: &Array2<f64>) -> Result<(), SolveError> {
    match a.indexed_iter().find(|(_, v)| !v.is_finite()) {
        Some(((row, col), _)) => Err(SolveError::NonFinite { row, col }),
        None => Ok(()),
    }
}

/// Checks that neither the matrix nor the vector contain NaN or infinite values.
pub fn check_finite(a: &Array2<f64>, b: &Array1<f64>) -> Result<(), SolveError> {
    check_finite_matrix(a)?;
    match b.indexed_iter().find(|(_, v)| !v.is_finite()) {
        Some((row, _)) => Err(SolveError::NonFinite { row, col: 0 }),
        None => Ok(()),
    }
}

/// Runs the structural checks on a system `A·x = b` in order: squareness, right-hand side
/// length and finiteness. Returns the dimension of the system.
pub fn validate_system(a: &Array2<f64>, b: &Array1<f64>) -> Result<usize, SolveError> {
    let n = check_square(a)?;
    check_rhs(n, b)?;
    check_finite(a, b)?;
    Ok(n)
}

/// Rejects a matrix whose determinant is smaller than `eps` in magnitude.
///
/// This is the coarse upfront test. The factorization repeats the singularity
/// check on every pivot, and that check decides when the two disagree.
pub fn check_determinant(a: &Array2<f64>, eps: f64) -> Result<f64, SolveError> {
    check_square(a)?;
    check_finite_matrix(a)?;
    let det = determinant(a);
    if det.abs() < eps {
        return Err(SolveError::SingularDeterminant { determinant: det });
    }
    Ok(det)
}
