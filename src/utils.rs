//! utils — conversion helpers for the Python binding layer.
//!
//! Purpose
//! -------
//! Turn loosely typed Python inputs (numpy arrays, pandas Series, plain
//! sequences, test names) into the owned Rust values the core modules
//! expect. Everything here is compiled only with `python-bindings`.
//!
//! Conventions
//! -----------
//! - NaN is passed through unchanged; it marks a missing value and is
//!   removed by the data pipeline.
//! - Conversion failures are raised as `TypeError` (wrong kind of object)
//!   or `ValueError` (right kind, unusable content).

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
use crate::statistical_tests::GrangerTest;

/// Borrow or copy a 1-D float64 array from a numpy array, pandas Series
/// (via `to_numpy`), or any sequence of floats.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Owned copy of a named 1-D input, ready for a `Dataset` column.
#[cfg(feature = "python-bindings")]
pub fn extract_column<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, name: &str,
) -> PyResult<(String, Vec<f64>)> {
    let arr = extract_f64_array(py, raw_data)?;
    let values = arr.as_slice().map_err(|_| {
        PyValueError::new_err(format!("{name} must be a 1-D contiguous float64 array or sequence"))
    })?;
    Ok((name.to_string(), values.to_vec()))
}

/// Parse a test name such as `"ssr_ftest"`.
#[cfg(feature = "python-bindings")]
pub fn extract_test(test: Option<&str>) -> PyResult<GrangerTest> {
    match test {
        None => Ok(GrangerTest::SsrFTest),
        Some(name) => Ok(name.parse::<GrangerTest>()?),
    }
}
