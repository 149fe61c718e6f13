//! statistical_tests — the Granger causality battery and its plumbing.
//!
//! Purpose
//! -------
//! Collect the bivariate Granger causality tests together with their
//! configuration, input validation and error handling, including the
//! Python bridge for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Run the classical four-test battery per lag via
//!   [`granger_causality_tests`] (on an `n × 2` array) or
//!   [`granger_causality_pair`] (on an [`AlignedPair`](crate::data::AlignedPair)).
//! - Configure lags, constant term and verbosity with [`GrangerOptions`]
//!   and [`LagSpec`].
//! - Centralize input guards in [`validate_input`] so shape, finiteness
//!   and sample-size checks happen once, before any regression.
//! - Report failures through [`GrangerError`] / [`GrangerResult`], with a
//!   conversion to Python exceptions when `python-bindings` is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Column 0 of the input is the dependent series; column 1 is the
//!   candidate cause. The direction is never swapped.
//! - Routines never panic on user-facing invalid inputs; every failure is
//!   a [`GrangerError`].
//! - At the Python boundary, all [`GrangerError`] values map to
//!   `ValueError` with the `Display` message preserved verbatim.
//!
//! Conventions
//! -----------
//! - Regression mechanics (lag matrices, OLS, Wald tests) live in
//!   [`crate::regression`]; this subtree only orchestrates and interprets.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   # use ndarray::Array2;
//!   use rust_granger::statistical_tests::{GrangerOptions, GrangerTest, granger_causality_tests};
//!   # let data = Array2::from_shape_fn((50, 2), |(t, j)| {
//!   #     ((t * t * 7919 + t * 31 + j * 104_729) % 1009) as f64
//!   # });
//!
//!   let outcome = granger_causality_tests(data.view(), &GrangerOptions::default())?;
//!   let p = outcome.get(1).and_then(|r| r.p_value(GrangerTest::SsrFTest));
//!   # Ok::<(), rust_granger::statistical_tests::GrangerError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests in [`errors`] verify `Display` payloads and wrapping.
//! - Unit tests in [`options`] cover defaults, lag validation and parsing.
//! - Unit tests in [`validation`] exercise every branch of
//!   [`validate_input`].
//! - Unit tests in [`granger`] cover statistic consistency, detection of
//!   a lagged copy, degenerate-fit guards and the printed summary.

pub mod errors;
pub mod granger;
pub mod options;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{GrangerError, GrangerResult};
pub use self::granger::{
    GrangerOutcome, GrangerTest, LagResult, TestStatistic, granger_causality_pair,
    granger_causality_tests,
};
pub use self::options::{DEFAULT_MAXLAG, GrangerOptions, LagSpec};
pub use self::validation::validate_input;

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::errors::{GrangerError, GrangerResult};
    pub use super::granger::{
        GrangerOutcome, GrangerTest, LagResult, TestStatistic, granger_causality_tests,
    };
    pub use super::options::{GrangerOptions, LagSpec};
}
