//! Error taxonomy shared by the direct and the iterative solvers
use thiserror::Error;

/// Failures reported by validation, factorization and the solvers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The coefficient matrix has a different number of rows and columns.
    #[error("matrix must be square (got {rows}x{cols})")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// A vector does not match the dimension of the matrix.
    #[error("right-hand side dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Dimension of the matrix
        expected: usize,
        /// Length of the offending vector
        got: usize,
    },

    /// An index array is not a bijection on `{0, …, n−1}`.
    #[error("invalid permutation of length {len}: index {index} is out of range or repeated")]
    InvalidPermutation {
        /// Length of the index array
        len: usize,
        /// First offending index
        index: usize,
    },

    /// The system has no unknowns.
    #[error("matrix must have at least one row")]
    Empty,

    /// An entry of the input is NaN or infinite.
    #[error("non-finite entry at ({row}, {col})")]
    NonFinite {
        /// Row of the entry (the index for vectors)
        row: usize,
        /// Column of the entry (`0` for vectors)
        col: usize,
    },

    /// A pivot vanished during factorization or backward substitution.
    #[error("matrix is singular: pivot {pivot:e} at step {index}")]
    SingularMatrix {
        /// Elimination step (row of U) where the pivot was found
        index: usize,
        /// Value of the offending pivot
        pivot: f64,
    },

    /// The determinant is below the singularity threshold.
    #[error("matrix is singular: |det| = {determinant:e}")]
    SingularDeterminant {
        /// Computed determinant
        determinant: f64,
    },

    /// The linear solve for a Newton step failed.
    #[error("linear solve failed in Newton step {step}: {source}")]
    LinearSolve {
        /// Iteration in which the step was requested
        step: usize,
        /// Failure of the inner solve
        #[source]
        source: Box<SolveError>,
    },

    /// A solver parameter is out of range.
    #[error("invalid parameter {name} = {value}")]
    InvalidParameter {
        /// Name of the parameter
        name: &'static str,
        /// Rejected value
        value: f64,
    },
}

impl SolveError {
    /// Checks whether the error is a structural (dimension) violation.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            SolveError::NotSquare { .. } | SolveError::DimensionMismatch { .. } | SolveError::Empty
        )
    }

    /// Checks whether the error reports a singular matrix.
    pub fn is_singular(&self) -> bool {
        matches!(
            self,
            SolveError::SingularMatrix { .. } | SolveError::SingularDeterminant { .. }
        )
    }

    /// Process exit code for command line front ends.
    pub fn exit_code(&self) -> i32 {
        match self {
            SolveError::LinearSolve { .. } => 2,
            _ => 1,
        }
    }
}
