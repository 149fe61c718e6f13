//! statistical_tests::validation — input guards for the Granger battery.
//!
//! Purpose
//! -------
//! Centralize the checks that must pass before any regression is fitted:
//! table shape, finiteness, lag configuration, and the minimum sample size
//! needed to support the largest requested lag.
//!
//! Key behaviors
//! -------------
//! - Enforce preconditions on the `n × 2` input before building designs.
//! - Map each violation to a structured [`GrangerError`] variant.
//!
//! Invariants & assumptions
//! ------------------------
//! - Column 0 is the dependent series, column 1 the candidate cause.
//! - All cells must be finite; missing values are removed upstream.
//! - With `maxlag = max(lags)` and `c = add_const as usize`, the sample
//!   must satisfy `nobs > 3 · maxlag + c`.
//!
//! Conventions
//! -----------
//! - Pure validation: no I/O, no allocation beyond error construction.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover every error branch and a success path.
use crate::statistical_tests::{
    errors::{GrangerError, GrangerResult},
    options::GrangerOptions,
};
use ndarray::ArrayView2;

/// Validate shape, finiteness, lags and sample size for the Granger battery.
///
/// Parameters
/// ----------
/// - `data`: `ArrayView2<f64>`
///   `n × 2` table; column 0 is tested for being Granger-caused by
///   column 1.
/// - `opts`: `&GrangerOptions`
///   Lag selection and constant-term flag.
///
/// Returns
/// -------
/// `GrangerResult<()>`
///
/// Errors
/// ------
/// - `GrangerError::InvalidLag` / `GrangerError::EmptyLagList`
///   When the lag selection is unusable.
/// - `GrangerError::InvalidShape`
///   When `data.ncols() != 2`.
/// - `GrangerError::InvalidData`
///   For the first NaN/±∞ cell, in row-major order.
/// - `GrangerError::InsufficientObservations`
///   When `nobs ≤ 3 · maxlag + c`, or when that bound overflows `usize`;
///   `max_allowed_lag = (nobs − c) / 3 − 1` using truncating integer
///   division.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::Array2;
/// # use rust_granger::statistical_tests::{GrangerError, GrangerOptions};
/// # use rust_granger::statistical_tests::validation::validate_input;
/// let data = Array2::<f64>::zeros((7, 2));
/// let opts = GrangerOptions::default();
/// match validate_input(data.view(), &opts) {
///     Err(GrangerError::InsufficientObservations { nobs: 7, max_allowed_lag: 1 }) => (),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn validate_input(data: ArrayView2<'_, f64>, opts: &GrangerOptions) -> GrangerResult<()> {
    opts.lags.validate()?;

    let (rows, cols) = data.dim();
    if cols != 2 {
        return Err(GrangerError::InvalidShape { rows, cols });
    }

    if let Some(((row, col), &value)) = data.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(GrangerError::InvalidData { row, col, value });
    }

    let c = usize::from(opts.add_const);
    let maxlag = opts.lags.max_lag();
    let required = maxlag.checked_mul(3).and_then(|v| v.checked_add(c));
    if required.is_none_or(|required| rows <= required) {
        let max_allowed_lag = (rows as i64 - c as i64) / 3 - 1;
        return Err(GrangerError::InsufficientObservations { nobs: rows, max_allowed_lag });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistical_tests::options::LagSpec;
    use ndarray::{Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Successful validation of a well-formed table.
    // - Each error branch in `validate_input`:
    //   * wrong column count,
    //   * non-finite cell,
    //   * insufficient observations (with and without a constant),
    //   * lag requests whose sample bound overflows,
    //   * invalid lag configuration.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that the smallest admissible sample passes.
    //
    // Given
    // -----
    // - 8 finite rows, maxlag = 2, constant on (8 > 3·2 + 1).
    //
    // Expect
    // ------
    // - `Ok(())`.
    fn validate_input_boundary_sample_succeeds() {
        // Arrange
        let data = Array2::from_shape_fn((8, 2), |(i, j)| (i * 2 + j) as f64);
        let opts = GrangerOptions::default();

        // Act
        let result = validate_input(data.view(), &opts);

        // Assert
        assert!(result.is_ok(), "Expected Ok(()) for valid inputs, got {result:?}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure tables with other than two columns are rejected.
    //
    // Given
    // -----
    // - A 10 × 3 table.
    //
    // Expect
    // ------
    // - `InvalidShape { rows: 10, cols: 3 }`.
    fn validate_input_wrong_column_count_returns_invalid_shape() {
        // Arrange
        let data = Array2::<f64>::zeros((10, 3));

        // Act
        let result = validate_input(data.view(), &GrangerOptions::default());

        // Assert
        assert_eq!(result, Err(GrangerError::InvalidShape { rows: 10, cols: 3 }));
    }

    #[test]
    // Purpose
    // -------
    // Verify that a non-finite cell is reported with its position.
    //
    // Given
    // -----
    // - A 10 × 2 table with +∞ at (4, 1).
    //
    // Expect
    // ------
    // - `InvalidData { row: 4, col: 1, .. }` with an infinite payload.
    fn validate_input_non_finite_value_returns_invalid_data() {
        // Arrange
        let mut data = Array2::<f64>::ones((10, 2));
        data[[4, 1]] = f64::INFINITY;

        // Act
        let result = validate_input(data.view(), &GrangerOptions::default());

        // Assert
        match result {
            Err(GrangerError::InvalidData { row: 4, col: 1, value }) => {
                assert!(value.is_infinite(), "payload should be the offending value: {value}");
            }
            other => panic!("expected InvalidData error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Check the insufficient-observations rule and its reported maximum lag,
    // with and without a constant, including a negative maximum.
    //
    // Given
    // -----
    // - 7 rows, maxlag = 2, constant on  → 7 ≤ 7.
    // - 6 rows, maxlag = 2, constant off → 6 ≤ 6.
    // - 2 rows, maxlag = 1, constant on  → 2 ≤ 4.
    //
    // Expect
    // ------
    // - max_allowed_lag = 1, 1 and −1 respectively.
    fn validate_input_short_sample_reports_max_allowed_lag() {
        // Arrange
        let seven = Array2::<f64>::ones((7, 2));
        let six = Array2::<f64>::ones((6, 2));
        let two = array![[1.0, 2.0], [3.0, 4.0]];
        let no_const = GrangerOptions::new(LagSpec::UpTo(2), false, false).unwrap();
        let lag_one = GrangerOptions::with_maxlag(1, false).unwrap();

        // Act
        let with_const = validate_input(seven.view(), &GrangerOptions::default());
        let without_const = validate_input(six.view(), &no_const);
        let tiny = validate_input(two.view(), &lag_one);

        // Assert
        assert_eq!(
            with_const,
            Err(GrangerError::InsufficientObservations { nobs: 7, max_allowed_lag: 1 })
        );
        assert_eq!(
            without_const,
            Err(GrangerError::InsufficientObservations { nobs: 6, max_allowed_lag: 1 })
        );
        assert_eq!(
            tiny,
            Err(GrangerError::InsufficientObservations { nobs: 2, max_allowed_lag: -1 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure lag requests whose sample bound does not fit in `usize` are
    // reported as insufficient data rather than overflowing.
    //
    // Given
    // -----
    // - 40 rows, `UpTo(usize::MAX / 2)` with a constant.
    // - 40 rows, `Only([1, usize::MAX])` without a constant.
    //
    // Expect
    // ------
    // - `InsufficientObservations` with max_allowed_lag = 12 in both cases.
    fn validate_input_huge_lag_returns_insufficient_observations() {
        // Arrange
        let data = Array2::from_shape_fn((40, 2), |(i, j)| (i * 3 + j) as f64);
        let half = GrangerOptions::with_maxlag(usize::MAX / 2, false).unwrap();
        let max = GrangerOptions::new(LagSpec::Only(vec![1, usize::MAX]), false, false).unwrap();

        // Act
        let with_const = validate_input(data.view(), &half);
        let without_const = validate_input(data.view(), &max);

        // Assert
        assert_eq!(
            with_const,
            Err(GrangerError::InsufficientObservations { nobs: 40, max_allowed_lag: 12 })
        );
        assert_eq!(
            without_const,
            Err(GrangerError::InsufficientObservations { nobs: 40, max_allowed_lag: 12 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure options mutated into an invalid state after construction are
    // still caught.
    //
    // Given
    // -----
    // - Default options with `lags` overwritten to `UpTo(0)`.
    //
    // Expect
    // ------
    // - `InvalidLag(0)`.
    fn validate_input_zero_lag_returns_invalid_lag() {
        // Arrange
        let data = Array2::<f64>::ones((20, 2));
        let mut opts = GrangerOptions::default();
        opts.lags = LagSpec::UpTo(0);

        // Act
        let result = validate_input(data.view(), &opts);

        // Assert
        assert_eq!(result, Err(GrangerError::InvalidLag(0)));
    }
}
