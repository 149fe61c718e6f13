//! rust_granger — Granger causality testing for index-ordered tabular data.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the causality tester to Python via the `_rust_granger`
//! extension module. When the `python-bindings` feature is enabled, this
//! module defines the Python-facing class and submodule used by the
//! `rust_granger` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules as the public crate surface:
//!   * [`data`]: datasets, differencing, alignment.
//!   * [`regression`]: lag designs, OLS, Wald F-tests.
//!   * [`statistical_tests`]: the Granger battery.
//!   * [`causality`]: the [`CausalityTester`](causality::CausalityTester).
//! - Define the `GrangerCausality` `#[pyclass]` and the `#[pymodule]`
//!   initializer for `_rust_granger`, registering the `causality`
//!   submodule under `rust_granger` so dotted imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue and error mapping.
//! - Python inputs are copied into an owned [`Dataset`](data::Dataset) with
//!   a `0..n` index before testing.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code propagate as typed errors internally and are
//!   converted to `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use rust_granger::causality::CausalityTester;
//! use rust_granger::data::Dataset;
//!
//! let a: Vec<f64> = (0..10).map(f64::from).collect();
//! let b: Vec<f64> = a.iter().map(|v| 2.0 * v).collect();
//! let ds = Dataset::with_range_index(vec![("A".into(), a), ("B".into(), b)]).unwrap();
//!
//! // Proportional linear series leave nothing to explain after differencing.
//! assert!(CausalityTester::new(&ds, "A", "B").test_causality(2, false).is_err());
//! ```
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by
//!   `tests/integration_granger_pipeline.rs`.
//! - The PyO3 class is exercised from Python; it contains no logic beyond
//!   conversion and lookup.

pub mod causality;
pub mod data;
pub mod regression;
pub mod statistical_tests;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    causality::CausalityTester,
    data::Dataset,
    statistical_tests::{GrangerOutcome, GrangerTest, TestStatistic},
    utils::{extract_column, extract_test},
};

/// GrangerCausality — Python-facing wrapper around [`CausalityTester`].
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `GrangerCausality(dependent, independent, maxlag=2, verbose=False)`:
/// - `dependent`: array-like of float64
///   Series tested for being Granger-caused. NaN marks a missing value.
/// - `independent`: array-like of float64
///   Candidate causing series, same length as `dependent`.
/// - `maxlag`: `usize`
///   Largest lag order tested.
/// - `verbose`: `bool`
///   Print the per-lag summary while testing.
///
/// Fields
/// ------
/// - `inner`: [`GrangerOutcome`]
///   Results for every lag in `1..=maxlag`.
///
/// Notes
/// -----
/// - Native Rust callers should use [`CausalityTester`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_granger.causality")]
pub struct GrangerCausality {
    inner: GrangerOutcome,
}

#[cfg(feature = "python-bindings")]
impl GrangerCausality {
    fn lookup(&self, lag: usize, test: Option<&str>) -> PyResult<TestStatistic> {
        let kind: GrangerTest = extract_test(test)?;
        self.inner
            .get(lag)
            .and_then(|result| result.test(kind))
            .copied()
            .ok_or_else(|| PyValueError::new_err(format!("no result for lag {lag}")))
    }
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl GrangerCausality {
    #[new]
    #[pyo3(
        text_signature = "(dependent, independent, /, maxlag=2, verbose=False)",
        signature = (dependent, independent, maxlag = 2, verbose = false)
    )]
    pub fn new<'py>(
        py: Python<'py>, dependent: &Bound<'py, PyAny>, independent: &Bound<'py, PyAny>,
        maxlag: usize, verbose: bool,
    ) -> PyResult<Self> {
        let columns = vec![
            extract_column(py, dependent, "dependent")?,
            extract_column(py, independent, "independent")?,
        ];
        let dataset = Dataset::with_range_index(columns)?;
        let inner = CausalityTester::new(&dataset, "dependent", "independent")
            .test_causality(maxlag, verbose)?;
        Ok(GrangerCausality { inner })
    }

    /// Tested lag orders in ascending order.
    #[getter]
    pub fn lags(&self) -> Vec<usize> {
        self.inner.lags()
    }

    /// Test statistic at `lag` for `test` (default `"ssr_ftest"`).
    #[pyo3(signature = (lag, test = None))]
    pub fn statistic(&self, lag: usize, test: Option<&str>) -> PyResult<f64> {
        Ok(self.lookup(lag, test)?.statistic)
    }

    /// p-value at `lag` for `test` (default `"ssr_ftest"`).
    #[pyo3(signature = (lag, test = None))]
    pub fn pvalue(&self, lag: usize, test: Option<&str>) -> PyResult<f64> {
        Ok(self.lookup(lag, test)?.p_value)
    }

    /// Degrees of freedom `(df_num, df_denom)`; `df_denom` is `None` for χ² tests.
    #[pyo3(signature = (lag, test = None))]
    pub fn df(&self, lag: usize, test: Option<&str>) -> PyResult<(usize, Option<usize>)> {
        let t = self.lookup(lag, test)?;
        Ok((t.df_num, t.df_denom))
    }

    /// Printed summary of every lag.
    pub fn summary(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("GrangerCausality(lags={:?})", self.inner.lags())
    }
}

/// _rust_granger — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_granger` Python module and register its `causality`
/// submodule, also under `sys.modules`, so `rust_granger.causality` is
/// importable via a dotted path.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_granger<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let causality_mod = PyModule::new(_py, "causality")?;
    causality_module(_py, m, &causality_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_granger.causality", causality_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn causality_module<'py>(
    _py: Python, rust_granger: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<GrangerCausality>()?;
    rust_granger.add_submodule(m)?;
    Ok(())
}
