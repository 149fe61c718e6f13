//! data::frame — index-ordered table of named numeric columns.
//!
//! Purpose
//! -------
//! Hold the caller's tabular time-series data: one strictly increasing
//! `i64` index shared by every column, and an ordered list of uniquely
//! named `f64` columns. Missing cells are encoded as `NaN`.
//!
//! Key behaviors
//! -------------
//! - Validate shape and ordering once in [`Dataset::new`] so that every
//!   borrowed [`SeriesView`] can assume a clean, sorted index.
//! - Resolve columns by name lazily via [`Dataset::column`]; unknown names
//!   surface as [`DataError::ColumnNotFound`] at lookup time.
//!
//! Invariants & assumptions
//! ------------------------
//! - `index` is strictly increasing.
//! - Every column has exactly `index.len()` values.
//! - Column names are unique; cells are finite or `NaN`.
//!
//! Conventions
//! -----------
//! - Column order is preserved as supplied.
//! - The dataset is never mutated after construction; all derived series
//!   (differences, alignments) are new allocations.
use crate::data::{
    errors::{DataError, DataResult},
    series::SeriesView,
};
use ndarray::Array1;

/// Dataset — validated, index-ordered table of numeric columns.
///
/// Purpose
/// -------
/// Own the raw observations that a
/// [`CausalityTester`](crate::causality::CausalityTester) borrows. The
/// type is intentionally small: an index vector and a list of named
/// `ndarray` columns.
///
/// Fields
/// ------
/// - `index`: `Vec<i64>`
///   Row keys (e.g. period ordinals or epoch seconds), strictly increasing.
/// - `columns`: `Vec<(String, Array1<f64>)>`
///   Named columns in insertion order.
///
/// Invariants
/// ----------
/// - See the module-level documentation; all are checked by
///   [`Dataset::new`].
///
/// Performance
/// -----------
/// - Construction is O(rows × columns) for validation; column lookup is a
///   linear scan over names, which is cheap for the handful of columns a
///   causality study uses.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    index: Vec<i64>,
    columns: Vec<(String, Array1<f64>)>,
}

impl Dataset {
    /// Construct a validated [`Dataset`] from an index and named columns.
    ///
    /// Parameters
    /// ----------
    /// - `index`: `Vec<i64>`
    ///   Strictly increasing row keys.
    /// - `columns`: `Vec<(String, Vec<f64>)>`
    ///   Named columns; each must have `index.len()` values that are finite
    ///   or `NaN`.
    ///
    /// Returns
    /// -------
    /// `DataResult<Dataset>`
    ///
    /// Errors
    /// ------
    /// - `DataError::UnsortedIndex { position }`
    ///   When `index[position] <= index[position - 1]`.
    /// - `DataError::DuplicateColumn { name }`
    /// - `DataError::LengthMismatch { column, expected, found }`
    /// - `DataError::InfiniteValue { column, position, value }`
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_granger::data::Dataset;
    /// let ds = Dataset::new(
    ///     vec![2001, 2002, 2003],
    ///     vec![("gdp".to_string(), vec![1.0, 1.5, 2.5])],
    /// )
    /// .unwrap();
    /// assert_eq!(ds.len(), 3);
    /// assert!(ds.column("gdp").is_ok());
    /// assert!(ds.column("cpi").is_err());
    /// ```
    pub fn new(index: Vec<i64>, columns: Vec<(String, Vec<f64>)>) -> DataResult<Self> {
        if let Some(position) = index.windows(2).position(|w| w[1] <= w[0]) {
            return Err(DataError::UnsortedIndex { position: position + 1 });
        }

        let mut validated: Vec<(String, Array1<f64>)> = Vec::with_capacity(columns.len());
        for (name, values) in columns {
            if validated.iter().any(|(existing, _)| *existing == name) {
                return Err(DataError::DuplicateColumn { name });
            }
            if values.len() != index.len() {
                return Err(DataError::LengthMismatch {
                    column: name,
                    expected: index.len(),
                    found: values.len(),
                });
            }
            if let Some(position) = values.iter().position(|v| v.is_infinite()) {
                let value = values[position];
                return Err(DataError::InfiniteValue { column: name, position, value });
            }
            validated.push((name, Array1::from(values)));
        }

        Ok(Dataset { index, columns: validated })
    }

    /// Construct a [`Dataset`] with a default `0..n` index.
    ///
    /// The row count is taken from the first column; the remaining columns
    /// are checked against it exactly as in [`Dataset::new`].
    pub fn with_range_index(columns: Vec<(String, Vec<f64>)>) -> DataResult<Self> {
        let n = columns.first().map_or(0, |(_, values)| values.len());
        let index: Vec<i64> = (0..n as i64).collect();
        Self::new(index, columns)
    }

    /// Borrow the column called `name` together with the shared index.
    ///
    /// Errors
    /// ------
    /// - `DataError::ColumnNotFound { name }` if no such column exists.
    pub fn column(&self, name: &str) -> DataResult<SeriesView<'_>> {
        self.columns
            .iter()
            .find(|(col_name, _)| col_name == name)
            .map(|(col_name, values)| SeriesView::new(col_name, &self.index, values.view()))
            .ok_or_else(|| DataError::ColumnNotFound { name: name.to_string() })
    }

    pub fn index(&self) -> &[i64] {
        &self.index
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Successful construction with explicit and range indices.
    // - Every construction error branch of `Dataset::new`.
    // - Lazy column lookup, including the not-found path.
    //
    // They intentionally DO NOT cover:
    // - Differencing or alignment; see `data::series` and `data::align`.
    // -------------------------------------------------------------------------

    fn col(name: &str, values: &[f64]) -> (String, Vec<f64>) {
        (name.to_string(), values.to_vec())
    }

    #[test]
    // Purpose
    // -------
    // Verify that a well-formed table builds and exposes its columns in
    // insertion order.
    //
    // Given
    // -----
    // - Index [10, 20, 30] and columns "a", "b" of length 3.
    //
    // Expect
    // ------
    // - `Dataset::new` succeeds, `len() == 3`, names are ["a", "b"].
    fn dataset_new_valid_table_succeeds() {
        // Arrange
        let index = vec![10, 20, 30];
        let columns = vec![col("a", &[1.0, 2.0, 3.0]), col("b", &[0.5, f64::NAN, 1.5])];

        // Act
        let ds = Dataset::new(index, columns).expect("valid table should build");

        // Assert
        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
        assert_eq!(ds.column_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(ds.index(), &[10, 20, 30]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a non-increasing index is rejected at the first violation.
    //
    // Given
    // -----
    // - Index [1, 2, 2, 3].
    //
    // Expect
    // ------
    // - `Err(DataError::UnsortedIndex { position: 2 })`.
    fn dataset_new_unsorted_index_returns_error() {
        // Arrange
        let index = vec![1, 2, 2, 3];
        let columns = vec![col("a", &[1.0, 2.0, 3.0, 4.0])];

        // Act
        let result = Dataset::new(index, columns);

        // Assert
        assert_eq!(result, Err(DataError::UnsortedIndex { position: 2 }));
    }

    #[test]
    // Purpose
    // -------
    // Ensure duplicate names, ragged columns and infinite cells are all
    // rejected.
    //
    // Given
    // -----
    // - Three malformed column lists over a 3-row index.
    //
    // Expect
    // ------
    // - `DuplicateColumn`, `LengthMismatch` and `InfiniteValue` respectively.
    fn dataset_new_malformed_columns_return_errors() {
        // Arrange
        let index = vec![0, 1, 2];

        // Act
        let dup = Dataset::new(
            index.clone(),
            vec![col("a", &[1.0, 2.0, 3.0]), col("a", &[1.0, 2.0, 3.0])],
        );
        let ragged = Dataset::new(index.clone(), vec![col("a", &[1.0, 2.0])]);
        let inf = Dataset::new(index, vec![col("a", &[1.0, f64::NEG_INFINITY, 3.0])]);

        // Assert
        assert_eq!(dup, Err(DataError::DuplicateColumn { name: "a".to_string() }));
        assert_eq!(
            ragged,
            Err(DataError::LengthMismatch { column: "a".to_string(), expected: 3, found: 2 })
        );
        match inf {
            Err(DataError::InfiniteValue { column, position, .. }) => {
                assert_eq!(column, "a");
                assert_eq!(position, 1);
            }
            other => panic!("expected InfiniteValue, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that the range-index constructor assigns 0..n keys.
    //
    // Given
    // -----
    // - Two columns of length 4 and no explicit index.
    //
    // Expect
    // ------
    // - Index equals [0, 1, 2, 3].
    fn dataset_with_range_index_assigns_ordinal_keys() {
        // Arrange
        let columns = vec![col("x", &[1.0, 2.0, 3.0, 4.0]), col("y", &[4.0, 3.0, 2.0, 1.0])];

        // Act
        let ds = Dataset::with_range_index(columns).expect("range index should build");

        // Assert
        assert_eq!(ds.index(), &[0, 1, 2, 3]);
    }

    #[test]
    // Purpose
    // -------
    // Check that column lookup returns the stored values and reports
    // unknown names as `ColumnNotFound`.
    //
    // Given
    // -----
    // - A dataset with a single column "price".
    //
    // Expect
    // ------
    // - `column("price")` yields the stored values and name.
    // - `column("volume")` yields `ColumnNotFound { name: "volume" }`.
    fn dataset_column_lookup_resolves_or_reports_missing() {
        // Arrange
        let ds = Dataset::with_range_index(vec![col("price", &[3.0, 4.0, 6.0])])
            .expect("dataset should build");

        // Act
        let found = ds.column("price").expect("price should exist");
        let missing = ds.column("volume");

        // Assert
        assert_eq!(found.name(), "price");
        assert_eq!(found.values().to_vec(), vec![3.0, 4.0, 6.0]);
        assert_eq!(missing.err(), Some(DataError::ColumnNotFound { name: "volume".to_string() }));
    }
}
