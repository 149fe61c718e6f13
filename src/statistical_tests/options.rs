//! statistical_tests::options — configuration of the Granger battery.
//!
//! Purpose
//! -------
//! Describe *which* lag orders to test and *how* each regression is set
//! up, validated once at construction so the runner can rely on it.
//!
//! Key behaviors
//! -------------
//! - [`LagSpec`] selects either every lag `1..=k` or an explicit list.
//! - [`GrangerOptions`] bundles the lag selection with the constant-term
//!   and verbosity flags and provides the conventional defaults
//!   (`maxlag = 2`, constant on, quiet).
//! - Both types parse from strings for the binding layer.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every lag is ≥ 1; explicit lists are sorted and deduplicated by
//!   [`GrangerOptions::new`].
use crate::statistical_tests::errors::{GrangerError, GrangerResult};
use std::str::FromStr;

/// Default maximum lag order.
pub const DEFAULT_MAXLAG: usize = 2;

/// Lag orders to evaluate.
///
/// Variants:
/// - `UpTo(k)`: every lag `1..=k`.
/// - `Only(lags)`: exactly the listed lags.
///
/// Parsing:
/// `"3"` parses to `UpTo(3)`; `"1,3"` or `"[1, 3]"` parse to `Only(vec![1, 3])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LagSpec {
    UpTo(usize),
    Only(Vec<usize>),
}

impl LagSpec {
    /// Lag orders in ascending order.
    pub fn lags(&self) -> Vec<usize> {
        match self {
            LagSpec::UpTo(k) => (1..=*k).collect(),
            LagSpec::Only(lags) => {
                let mut lags = lags.clone();
                lags.sort_unstable();
                lags.dedup();
                lags
            }
        }
    }

    /// Largest lag order; `0` for an empty list.
    pub fn max_lag(&self) -> usize {
        match self {
            LagSpec::UpTo(k) => *k,
            LagSpec::Only(lags) => lags.iter().copied().max().unwrap_or(0),
        }
    }

    /// Reject zero lags and empty lists.
    pub fn validate(&self) -> GrangerResult<()> {
        match self {
            LagSpec::UpTo(0) => Err(GrangerError::InvalidLag(0)),
            LagSpec::UpTo(_) => Ok(()),
            LagSpec::Only(lags) if lags.is_empty() => Err(GrangerError::EmptyLagList),
            LagSpec::Only(lags) => match lags.iter().find(|&&lag| lag == 0) {
                Some(&lag) => Err(GrangerError::InvalidLag(lag)),
                None => Ok(()),
            },
        }
    }
}

impl FromStr for LagSpec {
    type Err = GrangerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || GrangerError::InvalidLagSpec(s.to_string());
        let is_list = trimmed.starts_with('[') || trimmed.contains(',');
        let inner = trimmed.trim_start_matches('[').trim_end_matches(']');

        if !is_list {
            return inner.trim().parse::<usize>().map(LagSpec::UpTo).map_err(|_| invalid());
        }
        let lags = inner
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<usize>().map_err(|_| invalid()))
            .collect::<GrangerResult<Vec<usize>>>()?;
        Ok(LagSpec::Only(lags))
    }
}

/// Options for [`granger_causality_tests`](crate::statistical_tests::granger_causality_tests).
///
/// Fields:
/// - `lags: LagSpec` — lag orders to evaluate.
/// - `add_const: bool` — include an intercept in both regressions.
/// - `verbose: bool` — print the per-lag summary to standard output.
///
/// Constructors:
/// - `new(lags, add_const, verbose) -> GrangerResult<Self>` — validates and
///   normalizes the lag selection.
/// - `with_maxlag(maxlag, verbose)` — the common `UpTo(maxlag)` case.
///
/// Defaults:
/// - `lags`: `UpTo(DEFAULT_MAXLAG)`
/// - `add_const`: `true`
/// - `verbose`: `false`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrangerOptions {
    pub lags: LagSpec,
    pub add_const: bool,
    pub verbose: bool,
}

impl GrangerOptions {
    pub fn new(lags: LagSpec, add_const: bool, verbose: bool) -> GrangerResult<Self> {
        lags.validate()?;
        let lags = match lags {
            LagSpec::Only(_) => LagSpec::Only(lags.lags()),
            upto => upto,
        };
        Ok(Self { lags, add_const, verbose })
    }

    pub fn with_maxlag(maxlag: usize, verbose: bool) -> GrangerResult<Self> {
        Self::new(LagSpec::UpTo(maxlag), true, verbose)
    }
}

impl Default for GrangerOptions {
    fn default() -> Self {
        Self { lags: LagSpec::UpTo(DEFAULT_MAXLAG), add_const: true, verbose: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Defaults of `GrangerOptions`.
    // - Validation and normalization of `LagSpec` in `GrangerOptions::new`.
    // - String parsing of `LagSpec`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that the defaults match the documented baseline.
    //
    // Given
    // -----
    // - `GrangerOptions::default()`.
    //
    // Expect
    // ------
    // - lags = UpTo(2), constant on, quiet.
    fn granger_options_default_matches_documented_defaults() {
        // Arrange
        let opts = GrangerOptions::default();

        // Act / Assert
        assert_eq!(opts.lags, LagSpec::UpTo(DEFAULT_MAXLAG));
        assert_eq!(opts.lags.lags(), vec![1, 2]);
        assert!(opts.add_const);
        assert!(!opts.verbose);
    }

    #[test]
    // Purpose
    // -------
    // Ensure zero lags and empty lists are rejected, and explicit lists are
    // sorted and deduplicated.
    //
    // Given
    // -----
    // - UpTo(0), Only([]), Only([2, 0]), Only([4, 1, 4]).
    //
    // Expect
    // ------
    // - InvalidLag(0), EmptyLagList, InvalidLag(0), Only([1, 4]).
    fn granger_options_new_validates_and_normalizes_lags() {
        // Act
        let zero = GrangerOptions::new(LagSpec::UpTo(0), true, false);
        let empty = GrangerOptions::new(LagSpec::Only(vec![]), true, false);
        let zero_in_list = GrangerOptions::new(LagSpec::Only(vec![2, 0]), true, false);
        let normalized = GrangerOptions::new(LagSpec::Only(vec![4, 1, 4]), false, true)
            .expect("list of positive lags should validate");

        // Assert
        assert_eq!(zero, Err(GrangerError::InvalidLag(0)));
        assert_eq!(empty, Err(GrangerError::EmptyLagList));
        assert_eq!(zero_in_list, Err(GrangerError::InvalidLag(0)));
        assert_eq!(normalized.lags, LagSpec::Only(vec![1, 4]));
        assert_eq!(normalized.lags.max_lag(), 4);
        assert!(!normalized.add_const);
        assert!(normalized.verbose);
    }

    #[test]
    // Purpose
    // -------
    // Check the accepted string forms of `LagSpec`.
    //
    // Given
    // -----
    // - "3", " [1, 3] ", "2,5", "abc", "1,x".
    //
    // Expect
    // ------
    // - UpTo(3), Only([1, 3]), Only([2, 5]), and two InvalidLagSpec errors.
    fn lag_spec_from_str_parses_scalar_and_list_forms() {
        // Act / Assert
        assert_eq!("3".parse::<LagSpec>(), Ok(LagSpec::UpTo(3)));
        assert_eq!(" [1, 3] ".parse::<LagSpec>(), Ok(LagSpec::Only(vec![1, 3])));
        assert_eq!("2,5".parse::<LagSpec>(), Ok(LagSpec::Only(vec![2, 5])));
        assert!(matches!("abc".parse::<LagSpec>(), Err(GrangerError::InvalidLagSpec(_))));
        assert!(matches!("1,x".parse::<LagSpec>(), Err(GrangerError::InvalidLagSpec(_))));
    }
}
