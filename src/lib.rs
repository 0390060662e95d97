//! Solve dense square linear systems `A·x = b`.
//!
//! Two strategies are available: a direct solve by LU factorization with
//! partial pivoting ([`lu`]) and a relaxed Newton-Raphson iteration on the
//! residual `A·x − b` ([`newton`]).
#![warn(missing_docs)]

mod error;
pub mod lu;
pub mod newton;
pub mod residual;
mod status;
mod time;
pub mod validate;

pub use crate::error::SolveError;
pub use crate::lu::{factorize, solve_lu, solve_triangular, LuFactorization, Permutation};
pub use crate::newton::solve_relaxed_newton;
pub use crate::status::{Status, StatusCode};
