//! Unified error handling for regression routines.
//!
//! This module defines `RegressionError`, the error type used by lag-matrix
//! construction, ordinary least squares fitting, and Wald restriction
//! tests. It groups shape failures, non-finite inputs, and numerical
//! breakdowns of the underlying linear algebra. An alias
//! `RegressionResult<T>` standardizes the return type across regression
//! code.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Unified error type for regression routines.
///
/// Covers malformed designs, lag orders that leave no usable rows,
/// numerical degeneracies, and distribution construction failures, with
/// readable diagnostics through `Display`.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    // ---- Design construction ----
    /// Design has no rows or no columns.
    EmptyDesign { rows: usize, cols: usize },

    /// Two inputs that must be conformable are not.
    DimensionMismatch { what: &'static str, expected: usize, found: usize },

    /// Lag order leaves no rows after trimming.
    InsufficientRows { rows: usize, lag: usize },

    /// Input contains NaN or ±∞.
    NonFiniteInput { row: usize, col: usize, value: f64 },

    // ---- Fitting ----
    /// Rank of the design leaves no residual degrees of freedom.
    NoResidualDof { nobs: usize, rank: usize },

    /// Singular value decomposition could not produce a pseudoinverse.
    Decomposition { text: String },

    /// Covariance of the restricted parameters is numerically zero.
    SingularRestriction,

    // ---- Distributions ----
    /// Reference distribution rejected its degrees of freedom.
    Distribution { text: String },
}

pub type RegressionResult<T> = Result<T, RegressionError>;

impl std::error::Error for RegressionError {}

impl std::fmt::Display for RegressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Design construction ----
            RegressionError::EmptyDesign { rows, cols } => {
                write!(f, "Regression Error: empty design ({} rows × {} columns)", rows, cols)
            }
            RegressionError::DimensionMismatch { what, expected, found } => write!(
                f,
                "Regression Error: dimension mismatch in {} (expected {}, found {})",
                what, expected, found
            ),
            RegressionError::InsufficientRows { rows, lag } => write!(
                f,
                "Regression Error: {} rows cannot support lag order {}",
                rows, lag
            ),
            RegressionError::NonFiniteInput { row, col, value } => write!(
                f,
                "Regression Error: non-finite value {} at row {}, column {}",
                value, row, col
            ),

            // ---- Fitting ----
            RegressionError::NoResidualDof { nobs, rank } => write!(
                f,
                "Regression Error: no residual degrees of freedom (nobs = {}, rank = {})",
                nobs, rank
            ),
            RegressionError::Decomposition { text } => {
                write!(f, "Regression Error: SVD failed: {}", text)
            }
            RegressionError::SingularRestriction => write!(
                f,
                "Regression Error: covariance of the restricted parameters is singular"
            ),

            // ---- Distributions ----
            RegressionError::Distribution { text } => {
                write!(f, "Regression Error: invalid reference distribution: {}", text)
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<RegressionError> for PyErr {
    fn from(err: RegressionError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
