//! Residual of a linear system
use ndarray::{Array1, Array2};

/// Computes the residual `A·x − b`.
pub fn residual(a: &Array2<f64>, x: &Array1<f64>, b: &Array1<f64>) -> Array1<f64> {
    a.dot(x) - b
}

/// Computes the Euclidean norm of a vector.
pub fn norm(v: &Array1<f64>) -> f64 {
    v.iter().fold(0.0, |acc, vi| acc + vi * vi).sqrt()
}

/// Computes `‖A·x − b‖₂`.
pub fn residual_norm(a: &Array2<f64>, x: &Array1<f64>, b: &Array1<f64>) -> f64 {
    norm(&residual(a, x, b))
}

/// Maximum absolute row sum `‖A‖∞`.
pub fn norm_inf(a: &Array2<f64>) -> f64 {
    a.outer_iter()
        .map(|row| row.iter().map(|v| v.abs()).sum::<f64>())
        .fold(0.0, f64::max)
}
