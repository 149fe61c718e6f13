//! causality — Granger causality between two columns of a dataset.
//!
//! Purpose
//! -------
//! Provide the user-facing component that selects two named columns,
//! makes them stationary by first differencing, aligns them on their
//! index, and delegates to the Granger battery in
//! [`crate::statistical_tests`].
//!
//! Key behaviors
//! -------------
//! - [`CausalityTester`] borrows a [`Dataset`](crate::data::Dataset) and
//!   two column names; it performs no validation at construction.
//! - [`CausalityError`] separates lookup failures from test failures.
//!
//! Testing notes
//! -------------
//! - Unit tests live in [`tester`] and [`errors`]; end-to-end behavior on
//!   simulated random walks and lagged copies is covered in
//!   `tests/integration_granger_pipeline.rs`.

pub mod errors;
pub mod tester;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{CausalityError, CausalityResult};
pub use self::tester::CausalityTester;

pub mod prelude {
    pub use super::errors::{CausalityError, CausalityResult};
    pub use super::tester::CausalityTester;
}
