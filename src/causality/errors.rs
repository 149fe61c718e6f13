//! causality::errors — error type for the causality tester.
//!
//! Purpose
//! -------
//! Separate the two ways a causality run can fail: the requested columns
//! could not be read from the dataset, or the prepared series could not
//! support the Granger battery.
//!
//! Conventions
//! -----------
//! - Inner errors are wrapped unchanged and exposed via `source()`.
//! - `From<CausalityError> for PyErr` (feature-gated) maps to `ValueError`.
use crate::{data::errors::DataError, statistical_tests::errors::GrangerError};

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type CausalityResult<T> = Result<T, CausalityError>;

/// CausalityError — failure of [`CausalityTester`](crate::causality::CausalityTester).
///
/// Variants
/// --------
/// - `Data(DataError)`
///   Column lookup failed (e.g. an unknown column name).
/// - `Test(GrangerError)`
///   Insufficient observations or an ill-conditioned fit after
///   differencing and alignment.
#[derive(Debug, Clone, PartialEq)]
pub enum CausalityError {
    Data(DataError),
    Test(GrangerError),
}

impl std::error::Error for CausalityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CausalityError::Data(err) => Some(err),
            CausalityError::Test(err) => Some(err),
        }
    }
}

impl std::fmt::Display for CausalityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CausalityError::Data(err) => write!(f, "{err}"),
            CausalityError::Test(err) => write!(f, "Granger causality test failed: {err}"),
        }
    }
}

impl From<DataError> for CausalityError {
    fn from(err: DataError) -> Self {
        CausalityError::Data(err)
    }
}

impl From<GrangerError> for CausalityError {
    fn from(err: GrangerError) -> Self {
        CausalityError::Test(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<CausalityError> for PyErr {
    fn from(err: CausalityError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
