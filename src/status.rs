use ndarray::Array1;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Possible outcomes of the iterative solver
pub enum StatusCode {
    /// Iteration not started
    Initialized,
    /// Residual norm dropped below the tolerance
    Converged,
    /// Maximum number of steps reached
    NotConverged,
    /// Time limit reached
    TimeLimit,
    /// Stopped by the callback function
    Callback,
}

impl StatusCode {
    /// Process exit code for command line front ends (`0` only on convergence).
    pub fn exit_code(&self) -> i32 {
        match self {
            StatusCode::Converged => 0,
            _ => 3,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A struct containing the current iterate and the state of the iterative solver
pub struct Status {
    /// Current approximation of the solution
    pub x: Array1<f64>,
    /// Euclidean norm of the residual `A·x − b` at `x`
    pub residual_norm: f64,
    /// Current status
    pub code: StatusCode,
    /// Number of conducted steps
    pub steps: usize,
    /// Elapsed time (in seconds)
    pub time: f64,
}

impl Status {
    /// Create a [`Status`] struct starting from the zero vector with `n` unknowns
    pub fn new(n: usize) -> Status {
        Status::from_guess(Array1::zeros(n))
    }

    /// Create a [`Status`] struct starting from the initial guess `x0`
    pub fn from_guess(x0: Array1<f64>) -> Status {
        Status {
            x: x0,
            residual_norm: f64::INFINITY,
            code: StatusCode::Initialized,
            steps: 0,
            time: 0.0,
        }
    }

    /// Checks whether the solver terminated with a converged iterate
    pub fn is_converged(&self) -> bool {
        self.code == StatusCode::Converged
    }
}
