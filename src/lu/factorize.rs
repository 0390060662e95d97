//! Gaussian elimination with partial pivoting
use log::{debug, trace};
use ndarray::{Array1, Array2};

use super::permutation::Permutation;
use super::pivot::PivotTolerance;
use super::triangular::solve_triangular;
use crate::error::SolveError;
use crate::validate::{check_finite_matrix, check_square};

/// Factors `P·A = L·U` of a square matrix.
///
/// Both triangular factors share one array: the strict lower part holds the
/// multipliers of `L` (whose unit diagonal is implicit) and the upper part,
/// diagonal included, holds `U`.
#[derive(Debug, Clone)]
pub struct LuFactorization {
    lu: Array2<f64>,
    perm: Permutation,
}

impl LuFactorization {
    #[cfg(test)]
    pub(crate) fn from_parts(lu: Array2<f64>, perm: Permutation) -> Self {
        LuFactorization { lu, perm }
    }

    /// Dimension of the factored matrix.
    pub fn dim(&self) -> usize {
        self.lu.nrows()
    }

    /// Row permutation `P`.
    pub fn permutation(&self) -> &Permutation {
        &self.perm
    }

    /// Combined storage of `L` and `U`.
    pub fn packed(&self) -> &Array2<f64> {
        &self.lu
    }

    /// Explicit permutation matrix `P`.
    pub fn p(&self) -> Array2<f64> {
        self.perm.to_matrix()
    }

    /// Unit lower triangular factor `L`.
    pub fn l(&self) -> Array2<f64> {
        let n = self.dim();
        Array2::from_shape_fn((n, n), |(i, j)| match i.cmp(&j) {
            std::cmp::Ordering::Greater => self.lu[(i, j)],
            std::cmp::Ordering::Equal => 1.0,
            std::cmp::Ordering::Less => 0.0,
        })
    }

    /// Upper triangular factor `U`.
    pub fn u(&self) -> Array2<f64> {
        let n = self.dim();
        Array2::from_shape_fn((n, n), |(i, j)| if i <= j { self.lu[(i, j)] } else { 0.0 })
    }

    /// Determinant of the factored matrix.
    pub fn determinant(&self) -> f64 {
        self.lu.diag().iter().product::<f64>() * self.perm.sign()
    }

    /// Rebuilds the factored matrix as `P⁻¹·L·U`.
    pub fn reconstruct(&self) -> Array2<f64> {
        self.perm.apply_inverse_rows(&self.l().dot(&self.u()))
    }

    /// Solves `A·x = b` with the stored factors.
    pub fn solve(&self, b: &Array1<f64>) -> Result<Array1<f64>, SolveError> {
        solve_triangular(self, b)
    }

    /// Solves `A·X = B` column by column.
    pub fn solve_many(&self, b: &Array2<f64>) -> Result<Array2<f64>, SolveError> {
        let mut x = Array2::zeros(b.dim());
        for (j, bj) in b.columns().into_iter().enumerate() {
            let xj = self.solve(&bj.to_owned())?;
            x.column_mut(j).assign(&xj);
        }
        Ok(x)
    }
}

/// Runs the elimination in place. A pivot with `|p| ≤ threshold` fails the factorization.
fn eliminate(lu: &mut Array2<f64>, threshold: f64) -> Result<Permutation, SolveError> {
    let n = lu.nrows();
    let mut perm = Permutation::identity(n);

    for k in 0..n {
        // find pivot
        let mut max_val = lu[(k, k)].abs();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = lu[(i, k)].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_val <= threshold {
            return Err(SolveError::SingularMatrix {
                index: k,
                pivot: lu[(max_row, k)],
            });
        }

        if max_row != k {
            trace!("pivot step {}: swapping rows {} and {}", k, k, max_row);
            for j in 0..n {
                lu.swap((k, j), (max_row, j));
            }
            perm.swap(k, max_row);
        }

        // compute multipliers and eliminate
        let pivot = lu[(k, k)];
        for i in (k + 1)..n {
            let mult = lu[(i, k)] / pivot;
            lu[(i, k)] = mult;
            for j in (k + 1)..n {
                lu[(i, j)] -= mult * lu[(k, j)];
            }
        }
    }
    Ok(perm)
}

/// Computes the LU factorization with the default pivot tolerance.
pub fn factorize(a: &Array2<f64>) -> Result<LuFactorization, SolveError> {
    factorize_with(a, PivotTolerance::default())
}

/// Computes the LU factorization, rejecting pivots according to `tolerance`.
pub fn factorize_with(
    a: &Array2<f64>,
    tolerance: PivotTolerance,
) -> Result<LuFactorization, SolveError> {
    let n = check_square(a)?;
    check_finite_matrix(a)?;
    tolerance.validate()?;
    let threshold = tolerance.threshold(a);
    let mut lu = a.clone();
    let perm = eliminate(&mut lu, threshold)?;
    debug!("factorized {}x{} matrix, permutation sign {}", n, n, perm.sign());
    Ok(LuFactorization { lu, perm })
}

/// Computes the determinant by elimination, returning `0.0` for exactly singular matrices.
///
/// The matrix must be square.
pub fn determinant(a: &Array2<f64>) -> f64 {
    let mut lu = a.clone();
    match eliminate(&mut lu, 0.0) {
        Ok(perm) => LuFactorization { lu, perm }.determinant(),
        Err(_) => 0.0,
    }
}
