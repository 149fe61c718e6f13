//! causality::tester — Granger causality between two columns of a dataset.
//!
//! Purpose
//! -------
//! Answer "does the history of `independent` help predict `dependent`?"
//! for two named columns of a [`Dataset`]. The tester prepares the data
//! (first differences, missing-value removal, inner-join on the index) and
//! hands the aligned pair to the Granger battery in
//! [`crate::statistical_tests`].
//!
//! Key behaviors
//! -------------
//! - Construction only records a borrowed dataset and two names; nothing
//!   is looked up or validated until a test runs.
//! - Every run recomputes from the dataset, so repeated calls with the same
//!   inputs return identical outcomes.
//! - Lookup failures surface as `CausalityError::Data`; insufficient or
//!   ill-conditioned data surfaces as `CausalityError::Test`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Exactly one differencing pass is applied; no stationarity test is
//!   performed on the differenced series.
//! - The direction is fixed: `dependent` is column 0 (tested for being
//!   caused), `independent` is column 1.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! # use rust_granger::causality::CausalityTester;
//! # use rust_granger::data::Dataset;
//! # use rust_granger::statistical_tests::GrangerTest;
//! let a: Vec<f64> = (0..40).map(|t| ((t * t * 7919 + t * 31) % 1009) as f64).collect();
//! let b: Vec<f64> = (0..40).map(|t| ((t * t * 104_729 + 17) % 1013) as f64).collect();
//! let ds = Dataset::with_range_index(vec![("A".into(), a), ("B".into(), b)]).unwrap();
//!
//! let outcome = CausalityTester::new(&ds, "A", "B").test_causality(2, false).unwrap();
//! assert_eq!(outcome.lags(), vec![1, 2]);
//! let p = outcome.get(1).and_then(|r| r.p_value(GrangerTest::SsrFTest)).unwrap();
//! assert!((0.0..=1.0).contains(&p));
//! ```
use crate::{
    causality::errors::CausalityResult,
    data::{
        align::{AlignedPair, align},
        frame::Dataset,
    },
    statistical_tests::{
        granger::{GrangerOutcome, granger_causality_pair},
        options::{DEFAULT_MAXLAG, GrangerOptions},
    },
};
use tracing::debug;

/// CausalityTester — Granger causality test bound to two dataset columns.
///
/// Fields
/// ------
/// - `data`: `&Dataset`
///   Borrowed source table; never mutated.
/// - `dependent`: `String`
///   Column tested for being Granger-caused.
/// - `independent`: `String`
///   Candidate causing column.
#[derive(Debug, Clone)]
pub struct CausalityTester<'a> {
    data: &'a Dataset,
    dependent: String,
    independent: String,
}

impl<'a> CausalityTester<'a> {
    /// Bind a tester to `dependent` and `independent` in `data`.
    ///
    /// Neither name is checked here; an unknown column is reported by the
    /// first operation that reads it.
    pub fn new(
        data: &'a Dataset, dependent: impl Into<String>, independent: impl Into<String>,
    ) -> Self {
        Self { data, dependent: dependent.into(), independent: independent.into() }
    }

    pub fn dependent(&self) -> &str {
        &self.dependent
    }

    pub fn independent(&self) -> &str {
        &self.independent
    }

    /// Run the Granger battery over lags `1..=maxlag`.
    ///
    /// Parameters
    /// ----------
    /// - `maxlag`: `usize`
    ///   Largest lag order, ≥ 1 (conventionally [`DEFAULT_MAXLAG`]).
    /// - `verbose`: `bool`
    ///   Print the per-lag summary to standard output.
    ///
    /// Returns
    /// -------
    /// `CausalityResult<GrangerOutcome>`
    ///   The battery's outcome, unchanged.
    ///
    /// Errors
    /// ------
    /// - `CausalityError::Data(DataError::ColumnNotFound)`
    ///   When either column is absent.
    /// - `CausalityError::Test(_)`
    ///   When `maxlag == 0`, when too few aligned rows remain
    ///   (`InsufficientObservations`), or when a fit is degenerate
    ///   (`PerfectFit`, `RankDeficient`).
    pub fn test_causality(&self, maxlag: usize, verbose: bool) -> CausalityResult<GrangerOutcome> {
        let opts = GrangerOptions::with_maxlag(maxlag, verbose)?;
        self.test_causality_with(&opts)
    }

    /// [`test_causality`](Self::test_causality) with `maxlag = 2`, quiet.
    pub fn test_causality_default(&self) -> CausalityResult<GrangerOutcome> {
        self.test_causality(DEFAULT_MAXLAG, false)
    }

    /// Run the Granger battery with full control over lags and constant.
    pub fn test_causality_with(&self, opts: &GrangerOptions) -> CausalityResult<GrangerOutcome> {
        let pair = self.stationary_pair()?;
        let outcome = granger_causality_pair(&pair, opts)?;
        debug!(
            dependent = %self.dependent,
            independent = %self.independent,
            lags = outcome.len(),
            "granger causality completed"
        );
        Ok(outcome)
    }

    /// First-differenced, missing-free, index-aligned pair.
    ///
    /// Errors
    /// ------
    /// - `CausalityError::Data(DataError::ColumnNotFound)` for an unknown
    ///   column name.
    pub fn stationary_pair(&self) -> CausalityResult<AlignedPair> {
        let dependent = self.data.column(&self.dependent)?.difference().drop_missing();
        let independent = self.data.column(&self.independent)?.difference().drop_missing();
        let pair = align(&dependent, &independent);
        debug!(
            dependent = %self.dependent,
            independent = %self.independent,
            dependent_rows = dependent.len(),
            independent_rows = independent.len(),
            aligned_rows = pair.len(),
            "differenced and aligned"
        );
        Ok(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::causality::errors::CausalityError;
    use crate::data::errors::DataError;
    use crate::statistical_tests::{GrangerError, GrangerTest, LagSpec};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Lazy column lookup (construction never fails).
    // - Differencing, NaN removal and alignment in `stationary_pair`.
    // - Error routing for degenerate and short inputs.
    // - Idempotence and option forwarding.
    //
    // They intentionally DO NOT cover:
    // - Statistical power and size, exercised in the integration tests.
    // -------------------------------------------------------------------------

    fn scrambled(n: usize, mult: usize, modulus: usize) -> Vec<f64> {
        (0..n).map(|t| ((t * t * mult + t * 31 + 13) % modulus) as f64).collect()
    }

    fn dataset(a: Vec<f64>, b: Vec<f64>) -> Dataset {
        Dataset::with_range_index(vec![("A".to_string(), a), ("B".to_string(), b)])
            .expect("dataset should build")
    }

    #[test]
    // Purpose
    // -------
    // Ensure an unknown column is reported when the test runs, not when the
    // tester is built.
    //
    // Given
    // -----
    // - A dataset with columns A, B and a tester for (A, C).
    //
    // Expect
    // ------
    // - Construction succeeds; `test_causality` returns
    //   `Data(ColumnNotFound { name: "C" })`.
    fn tester_unknown_column_fails_at_call_time() {
        // Arrange
        let ds = dataset(scrambled(30, 7919, 1009), scrambled(30, 104_729, 1013));
        let tester = CausalityTester::new(&ds, "A", "C");

        // Act
        let result = tester.test_causality(2, false);

        // Assert
        assert_eq!(tester.independent(), "C");
        assert_eq!(
            result,
            Err(CausalityError::Data(DataError::ColumnNotFound { name: "C".to_string() }))
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that the prepared pair is differenced, drops missing rows and
    // keeps the dependent series in column 0.
    //
    // Given
    // -----
    // - Index [10, 20, 30, 40, 50]; A = [1, 2, 4, 7, 11];
    //   B = [0, NaN, 1, 1, 3].
    //
    // Expect
    // ------
    // - ΔB is NaN at keys 20 and 30, so the pair keeps keys [40, 50] with
    //   ΔA = [3, 4] and ΔB = [0, 2].
    fn tester_stationary_pair_differences_and_aligns() {
        // Arrange
        let ds = Dataset::new(
            vec![10, 20, 30, 40, 50],
            vec![
                ("A".to_string(), vec![1.0, 2.0, 4.0, 7.0, 11.0]),
                ("B".to_string(), vec![0.0, f64::NAN, 1.0, 1.0, 3.0]),
            ],
        )
        .expect("dataset should build");
        let tester = CausalityTester::new(&ds, "A", "B");

        // Act
        let pair = tester.stationary_pair().expect("pair should build");

        // Assert
        assert_eq!(pair.index(), &[40, 50]);
        assert_eq!(pair.dependent().to_vec(), vec![3.0, 4.0]);
        assert_eq!(pair.independent().to_vec(), vec![0.0, 2.0]);
        assert_eq!(pair.dependent_name(), "A");
        assert_eq!(pair.independent_name(), "B");
    }

    #[test]
    // Purpose
    // -------
    // Ensure a proportional pair (B = 2A, A linear) fails with a degenerate
    // fit instead of returning a misleading result.
    //
    // Given
    // -----
    // - A = 1..=10, B = 2A; both differences are constant.
    //
    // Expect
    // ------
    // - `Test(PerfectFit { lag: 1 })`.
    fn tester_proportional_linear_columns_return_perfect_fit() {
        // Arrange
        let a: Vec<f64> = (1..=10).map(f64::from).collect();
        let b: Vec<f64> = a.iter().map(|v| 2.0 * v).collect();
        let ds = dataset(a, b);

        // Act
        let result = CausalityTester::new(&ds, "A", "B").test_causality(2, false);

        // Assert
        assert_eq!(result, Err(CausalityError::Test(GrangerError::PerfectFit { lag: 1 })));
    }

    #[test]
    // Purpose
    // -------
    // Check routing of configuration and sample-size failures.
    //
    // Given
    // -----
    // - 8 rows (7 after differencing) with maxlag = 2, and maxlag = 0.
    //
    // Expect
    // ------
    // - `Test(InsufficientObservations { nobs: 7, max_allowed_lag: 1 })`.
    // - `Test(InvalidLag(0))`.
    fn tester_short_sample_and_zero_lag_return_test_errors() {
        // Arrange
        let ds = dataset(scrambled(8, 7919, 1009), scrambled(8, 104_729, 1013));
        let tester = CausalityTester::new(&ds, "A", "B");

        // Act
        let short = tester.test_causality_default();
        let zero = tester.test_causality(0, false);

        // Assert
        assert_eq!(
            short,
            Err(CausalityError::Test(GrangerError::InsufficientObservations {
                nobs: 7,
                max_allowed_lag: 1,
            }))
        );
        assert_eq!(zero, Err(CausalityError::Test(GrangerError::InvalidLag(0))));
    }

    #[test]
    // Purpose
    // -------
    // Verify idempotence and that explicit options reach the battery.
    //
    // Given
    // -----
    // - 60 rows of scrambled data; two default runs and one run with
    //   `LagSpec::Only([3])`.
    //
    // Expect
    // ------
    // - Default runs are identical and cover lags [1, 2].
    // - The explicit run covers only lag 3 on 59 − 3 rows.
    fn tester_is_idempotent_and_forwards_options() {
        // Arrange
        let ds = dataset(scrambled(60, 7919, 1009), scrambled(60, 104_729, 1013));
        let tester = CausalityTester::new(&ds, "A", "B");
        let only_three = GrangerOptions::new(LagSpec::Only(vec![3]), true, false).unwrap();

        // Act
        let first = tester.test_causality_default().expect("first run");
        let second = tester.test_causality_default().expect("second run");
        let explicit = tester.test_causality_with(&only_three).expect("explicit run");

        // Assert
        assert_eq!(first, second);
        assert_eq!(first.lags(), vec![1, 2]);
        assert_eq!(explicit.lags(), vec![3]);
        let lag3 = explicit.get(3).unwrap();
        assert_eq!(lag3.nobs(), 56);
        assert!(lag3.p_value(GrangerTest::LrTest).is_some());
    }
}
