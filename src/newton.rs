//! Relaxed Newton-Raphson iteration
//!
//! For the residual `F(x) = A·x − b` each step solves `A·Δ = −F(x)` and updates
//! `x ← x + ω·Δ`. With `ω = 1` a single step reaches the solution up to
//! rounding; other values of ω damp (`ω < 1`) or over-relax (`ω > 1`) the update.
use ndarray::{Array1, Array2};

use crate::error::SolveError;
use crate::status::Status;

mod direction;
mod params;
mod solve;

pub use self::direction::Direction;
pub use self::params::Params;
pub use self::solve::{solve, solve_from, solve_with_status};

/// Runs the iteration with relaxation `relaxation`, tolerance `tol` and at most
/// `max_steps` steps, starting from `x0` or the zero vector.
pub fn solve_relaxed_newton(
    a: &Array2<f64>,
    b: &Array1<f64>,
    relaxation: f64,
    tol: f64,
    max_steps: usize,
    x0: Option<&Array1<f64>>,
) -> Result<Status, SolveError> {
    let params = Params::new()
        .with_relaxation(relaxation)
        .with_tol(tol)
        .with_max_steps(max_steps);
    match x0 {
        Some(x0) => solve_from(a, b, x0, &params),
        None => solve(a, b, &params, None),
    }
}
