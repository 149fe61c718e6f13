//! statistical_tests::errors — error type for the Granger causality battery.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for Granger causality testing,
//! together with a conversion layer to Python exceptions for PyO3-based
//! bindings. Configuration mistakes, malformed inputs, and statistically
//! infeasible fits each get their own variant so callers can tell "you
//! asked for something invalid" apart from "your data cannot support the
//! test".
//!
//! Key behaviors
//! -------------
//! - Define [`GrangerResult`] and [`GrangerError`] as the canonical result
//!   and error types for `statistical_tests`.
//! - Wrap lower-level [`RegressionError`] values without altering them.
//! - Implement `From<GrangerError> for PyErr` when the `python-bindings`
//!   feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - `InsufficientObservations::max_allowed_lag` follows the classical rule
//!   `⌊(nobs − c) / 3⌋ − 1` (c = 1 with a constant) and may be negative for
//!   tiny samples.
//! - `PerfectFit` and `RankDeficient` are reported for the first lag order
//!   at which the unrestricted regression degenerates; no partial results
//!   are returned.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints
//!   ("maxlag must be a positive integer", "insufficient observations")
//!   rather than low-level linear-algebra details.
//!
//! Testing notes
//! -------------
//! - Unit tests below verify that messages embed their payloads and that
//!   regression errors convert losslessly.
use crate::regression::errors::RegressionError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type GrangerResult<T> = Result<T, GrangerError>;

/// GrangerError — failure conditions of the Granger causality battery.
///
/// Variants
/// --------
/// - `InvalidLag(lag)`
///   A requested lag order is zero.
/// - `EmptyLagList`
///   An explicit lag list contains no lags.
/// - `UnknownTest(name)` / `InvalidLagSpec(text)`
///   String parsing failures for [`GrangerTest`](crate::statistical_tests::GrangerTest)
///   and [`LagSpec`](crate::statistical_tests::LagSpec).
/// - `InvalidShape { rows, cols }`
///   The input table is not `n × 2`.
/// - `InvalidData { row, col, value }`
///   A cell is NaN or ±∞.
/// - `InsufficientObservations { nobs, max_allowed_lag }`
///   `nobs ≤ 3 · maxlag + c`; the largest admissible lag is reported.
/// - `PerfectFit { lag }`
///   The unrestricted regression fits the data exactly (zero total or
///   residual variation), so no test statistic can be computed.
/// - `RankDeficient { lag, rank, cols }`
///   The unrestricted design is perfectly collinear.
/// - `Regression(err)`
///   Any other failure of the underlying least-squares machinery.
/// - `Distribution { text }`
///   A reference distribution rejected its degrees of freedom.
#[derive(Debug, Clone, PartialEq)]
pub enum GrangerError {
    // ---- Configuration ----
    InvalidLag(usize),
    EmptyLagList,
    UnknownTest(String),
    InvalidLagSpec(String),

    // ---- Input validation ----
    InvalidShape { rows: usize, cols: usize },
    InvalidData { row: usize, col: usize, value: f64 },
    InsufficientObservations { nobs: usize, max_allowed_lag: i64 },

    // ---- Infeasible fits ----
    PerfectFit { lag: usize },
    RankDeficient { lag: usize, rank: usize, cols: usize },

    // ---- Wrapped ----
    Regression(RegressionError),
    Distribution { text: String },
}

impl std::error::Error for GrangerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrangerError::Regression(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for GrangerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Configuration ----
            GrangerError::InvalidLag(lag) => {
                write!(f, "Invalid lag {lag}: maxlag must be a positive integer.")
            }
            GrangerError::EmptyLagList => write!(f, "Lag list must contain at least one lag."),
            GrangerError::UnknownTest(name) => write!(
                f,
                "Unknown test '{name}'. Expected one of ssr_ftest, ssr_chi2test, lrtest, \
                 params_ftest."
            ),
            GrangerError::InvalidLagSpec(text) => write!(
                f,
                "Invalid lag specification '{text}'. Use a positive integer or a \
                 comma-separated list of positive integers."
            ),

            // ---- Input validation ----
            GrangerError::InvalidShape { rows, cols } => write!(
                f,
                "Input must have exactly 2 columns (dependent, independent); got {rows} × {cols}."
            ),
            GrangerError::InvalidData { row, col, value } => write!(
                f,
                "Invalid data value {value} at row {row}, column {col}. Must be a finite number."
            ),
            GrangerError::InsufficientObservations { nobs, max_allowed_lag } => write!(
                f,
                "Insufficient observations ({nobs}). Maximum allowable lag is {max_allowed_lag}."
            ),

            // ---- Infeasible fits ----
            GrangerError::PerfectFit { lag } => write!(
                f,
                "The Granger causality test statistic cannot be computed at lag {lag} because \
                 the VAR has a perfect fit of the data."
            ),
            GrangerError::RankDeficient { lag, rank, cols } => write!(
                f,
                "The unrestricted design at lag {lag} is perfectly collinear \
                 (rank {rank} < {cols} columns)."
            ),

            // ---- Wrapped ----
            GrangerError::Regression(err) => write!(f, "{err}"),
            GrangerError::Distribution { text } => {
                write!(f, "Invalid reference distribution: {text}")
            }
        }
    }
}

impl From<RegressionError> for GrangerError {
    fn from(err: RegressionError) -> Self {
        GrangerError::Regression(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<GrangerError> for PyErr {
    fn from(err: GrangerError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
