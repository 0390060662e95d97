use log::{info, warn};
use ndarray::{Array1, Array2};

use super::direction::Direction;
use super::params::Params;
use crate::error::SolveError;
use crate::residual::{norm, residual};
use crate::status::{Status, StatusCode};
use crate::time;
use crate::validate::{check_finite, check_rhs, validate_system};

/// Uses the relaxed Newton-Raphson iteration to solve `A·x = b` starting from the zero vector.
pub fn solve(
    a: &Array2<f64>,
    b: &Array1<f64>,
    params: &Params,
    callback: Option<&dyn Fn(&Status) -> bool>,
) -> Result<Status, SolveError> {
    let n = validate_system(a, b)?;
    solve_with_status(Status::new(n), a, b, params, callback)
}

/// Uses the relaxed Newton-Raphson iteration to solve `A·x = b` starting from the initial guess `x0`.
pub fn solve_from(
    a: &Array2<f64>,
    b: &Array1<f64>,
    x0: &Array1<f64>,
    params: &Params,
) -> Result<Status, SolveError> {
    solve_with_status(Status::from_guess(x0.clone()), a, b, params, None)
}

/// Uses the relaxed Newton-Raphson iteration to solve `A·x = b` starting from a particular [`Status`].
///
/// The Jacobian `A` is factorized before the first step, so a singular matrix
/// fails with [`SolveError::LinearSolve`] at step 0 even when no step is taken.
/// Exhausting `max_steps` is not an error: the returned status carries
/// [`StatusCode::NotConverged`] together with the last iterate and its residual.
pub fn solve_with_status(
    status: Status,
    a: &Array2<f64>,
    b: &Array1<f64>,
    params: &Params,
    callback: Option<&dyn Fn(&Status) -> bool>,
) -> Result<Status, SolveError> {
    let n = validate_system(a, b)?;
    check_rhs(n, &status.x)?;
    check_finite(a, &status.x)?;
    params.validate()?;

    let mut status = status;
    let start = time::now();
    let direction =
        Direction::new(a, params.pivot_tolerance).map_err(|source| SolveError::LinearSolve {
            step: 0,
            source: Box::new(source),
        })?;
    let mut step: usize = 0;
    let mut stop = false;

    loop {
        // update steps and time
        status.steps = step;
        let elapsed = time::until_now(start);
        status.time = elapsed;

        let r = residual(a, &status.x, b);
        status.residual_norm = norm(&r);

        // check for convergence, only while steps remain
        if step < params.max_steps && status.residual_norm < params.tol {
            status.code = StatusCode::Converged;
            stop = true;
        }

        // handle step limit
        if step >= params.max_steps {
            status.code = StatusCode::NotConverged;
            stop = true;
        }

        // handle time limit
        if !stop && params.time_limit > 0.0 && elapsed >= params.time_limit {
            status.code = StatusCode::TimeLimit;
            stop = true;
        }

        // handle callback
        if let Some(callback_fn) = callback {
            if !stop && callback_fn(&status) {
                status.code = StatusCode::Callback;
                stop = true;
            }
        };

        // handle progress output
        if params.verbose > 0 && (step % params.verbose == 0 || stop) {
            info!(
                "{:10} {:10.2} {:10.4e} {}",
                step, elapsed, status.residual_norm, status.x
            );
        }

        // terminate
        if stop {
            break;
        }

        let delta = direction
            .compute(&r)
            .map_err(|source| SolveError::LinearSolve {
                step,
                source: Box::new(source),
            })?;
        status.x.scaled_add(params.relaxation, &delta);
        step += 1;
    }

    if status.is_converged() {
        info!(
            "converged after {} steps, residual norm {:.4e}",
            status.steps, status.residual_norm
        );
    } else {
        warn!(
            "stopped without convergence ({:?}) after {} steps, residual norm {:.4e}",
            status.code, status.steps, status.residual_norm
        );
    }
    Ok(status)
}
