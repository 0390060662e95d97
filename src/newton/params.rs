use serde::{Deserialize, Serialize};

use crate::error::SolveError;
use crate::lu::PivotTolerance;

/// Parameters of the relaxed Newton-Raphson iteration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Relaxation factor ω applied to every Newton step
    pub relaxation: f64,
    /// Termination tolerance on the residual norm
    pub tol: f64,
    /// Maximum number of steps
    pub max_steps: usize,
    /// Frequency of logging (`0` for no logging)
    pub verbose: usize,
    /// Time limit (in seconds)
    pub time_limit: f64,
    /// Criterion for singular pivots in the inner linear solve
    pub pivot_tolerance: PivotTolerance,
}

impl Params {
    const DEFAULT_RELAXATION: f64 = 1.0;
    const DEFAULT_TOL: f64 = 1e-8;
    const DEFAULT_MAX_STEPS: usize = 100;

    /// Creates a new [`Params`] struct with default parameter values.
    pub fn new() -> Self {
        Params {
            relaxation: Self::DEFAULT_RELAXATION,
            tol: Self::DEFAULT_TOL,
            max_steps: Self::DEFAULT_MAX_STEPS,
            verbose: 0,
            time_limit: f64::INFINITY,
            pivot_tolerance: PivotTolerance::default(),
        }
    }

    /// Sets the relaxation factor ω.
    pub fn with_relaxation(mut self, relaxation: f64) -> Self {
        self.relaxation = relaxation;
        self
    }

    /// Sets the termination tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Sets the maximum number of steps.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Sets the logging frequency.
    pub fn with_verbose(mut self, verbose: usize) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the time limit (in seconds).
    pub fn with_time_limit(mut self, time_limit: f64) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Sets the singular pivot criterion.
    pub fn with_pivot_tolerance(mut self, pivot_tolerance: PivotTolerance) -> Self {
        self.pivot_tolerance = pivot_tolerance;
        self
    }

    /// Checks that ω and the tolerance are positive and finite, and that the
    /// pivot tolerance is finite and non-negative.
    pub fn validate(&self) -> Result<(), SolveError> {
        if !(self.relaxation.is_finite() && self.relaxation > 0.0) {
            return Err(SolveError::InvalidParameter {
                name: "relaxation",
                value: self.relaxation,
            });
        }
        if !(self.tol.is_finite() && self.tol > 0.0) {
            return Err(SolveError::InvalidParameter {
                name: "tol",
                value: self.tol,
            });
        }
        self.pivot_tolerance.validate()
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_validation() {
        let params = Params::new().with_relaxation(1.27).with_tol(1e-7);
        assert!(params.validate().is_ok());
        assert!(Params::new().with_relaxation(0.0).validate().is_err());
        assert!(Params::new().with_relaxation(f64::NAN).validate().is_err());
        assert_eq!(
            Params::new().with_tol(-1.0).validate(),
            Err(SolveError::InvalidParameter {
                name: "tol",
                value: -1.0
            })
        );
        assert!(Params::new().with_max_steps(0).validate().is_ok());
    }

    #[test]
    fn rejects_bad_pivot_tolerance() {
        let params = Params::new().with_pivot_tolerance(PivotTolerance::Absolute(-1e-9));
        assert_eq!(
            params.validate(),
            Err(SolveError::InvalidParameter {
                name: "pivot_tolerance",
                value: -1e-9
            })
        );
        let params: Params =
            serde_json::from_str(r#"{"pivot_tolerance": {"Relative": -0.5}}"#).unwrap();
        assert!(params.validate().is_err());
        let params = Params::new().with_pivot_tolerance(PivotTolerance::Relative(f64::NAN));
        assert!(params.validate().is_err());
        let params = Params::new().with_pivot_tolerance(PivotTolerance::Absolute(0.0));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn partial_config_uses_defaults() {
        let params: Params =
            serde_json::from_str(r#"{"relaxation": 1.27, "tol": 1e-7, "max_steps": 50}"#).unwrap();
        assert_eq!(params.relaxation, 1.27);
        assert_eq!(params.max_steps, 50);
        assert_eq!(params.verbose, 0);
        assert!(params.time_limit.is_infinite());
        assert_eq!(params.pivot_tolerance, PivotTolerance::Absolute(1e-9));
    }

    #[test]
    fn relative_pivot_tolerance_from_config() {
        let params: Params =
            serde_json::from_str(r#"{"pivot_tolerance": {"Relative": 1e-12}}"#).unwrap();
        assert_eq!(params.pivot_tolerance, PivotTolerance::Relative(1e-12));
    }
}
