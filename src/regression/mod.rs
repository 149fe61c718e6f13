//! regression — lagged designs, least squares, and restriction tests.
//!
//! Purpose
//! -------
//! Provide the linear-model machinery behind the Granger causality
//! battery: building restricted and unrestricted lag designs from an
//! aligned pair, fitting them by ordinary least squares, and testing
//! exclusion restrictions on the fitted coefficients.
//!
//! Key behaviors
//! -------------
//! - Define a unified error and result type, [`RegressionError`] and
//!   [`RegressionResult`], for shape, finiteness and numerical failures.
//! - Build the per-lag regression inputs with [`LagDesign::build`].
//! - Fit OLS via an SVD pseudoinverse with [`OlsFit::fit`] and expose the
//!   classical summary statistics (SSR, TSS, R², log-likelihood, dof).
//! - Test `Rβ = 0` with [`OlsFit::f_test`], returning a [`WaldFTest`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Designs are `n × k` with rows as observations and columns as
//!   regressors; a constant column, when present, is the last column.
//! - All numerical routines return [`RegressionError`] on failure rather
//!   than panicking.
//!
//! Conventions
//! -----------
//! - Matrices are `ndarray` at the API boundary; `nalgebra` is used only
//!   internally for decompositions.
//! - All functions are pure: no logging, no global state, no `unsafe`.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule; the Granger-level behavior is
//!   exercised in `statistical_tests::granger` and the integration tests.

pub mod errors;
pub mod lagmat;
pub mod ols;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::errors::{RegressionError, RegressionResult};
pub use self::lagmat::LagDesign;
pub use self::ols::{OlsFit, WaldFTest};

pub mod prelude {
    pub use super::errors::{RegressionError, RegressionResult};
    pub use super::lagmat::LagDesign;
    pub use super::ols::{OlsFit, WaldFTest};
}
