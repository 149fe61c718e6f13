//! statistical_tests::granger — bivariate Granger causality battery.
//!
//! Purpose
//! -------
//! Test whether the second column of an `n × 2` table helps predict the
//! first beyond the first column's own history. For each requested lag
//! order k a restricted autoregression of y on its own lags is compared
//! with an unrestricted regression that adds k lags of x, and four
//! classical significance tests are reported.
//!
//! Key behaviors
//! -------------
//! - [`granger_causality_tests`] validates the input, fits both models per
//!   lag, guards against degenerate fits, and collects a
//!   [`GrangerOutcome`] keyed by lag.
//! - The four tests per lag, with s_r / s_u the restricted / unrestricted
//!   SSR, df_u the unrestricted residual dof and n the rows of the lag
//!   design:
//!   * `ssr_ftest`:    F = ((s_r − s_u) / s_u) / k · df_u ~ F(k, df_u)
//!   * `ssr_chi2test`: n (s_r − s_u) / s_u ~ χ²(k)
//!   * `lrtest`:       −2 (llf_r − llf_u) ~ χ²(k)
//!   * `params_ftest`: Wald F of `Rβ = 0` in the unrestricted fit
//! - With `verbose` set, each lag's header is printed to standard output
//!   before it is fitted and its test lines once it has been evaluated, so a
//!   lag that fails still shows its header.
//!
//! Invariants & assumptions
//! ------------------------
//! - Each lag is evaluated on its own trimmed design (n − k rows), so the
//!   sample differs slightly between lags.
//! - A degenerate unrestricted fit at any lag aborts the whole battery;
//!   there are no partial outcomes.
//!
//! Conventions
//! -----------
//! - Test names follow the conventional spelling (`ssr_ftest`, …) in
//!   `Display`/`FromStr` so results can be keyed the same way from Python.
//! - Pipeline diagnostics are emitted as `tracing` debug events; no
//!   subscriber is installed here.
//!
//! Downstream usage
//! ----------------
//! - `causality::CausalityTester` prepares an [`AlignedPair`] and calls
//!   [`granger_causality_pair`].
//! - Callers usually read `outcome.get(k)?.p_value(GrangerTest::SsrFTest)`.
//!
//! Testing notes
//! -------------
//! - Unit tests below check the algebraic links between the tests
//!   (ssr F = params F, χ² = F · k · n / df_u), strong rejection on a
//!   lagged copy, the degenerate-fit guards, and the summary layout.
use crate::{
    data::align::AlignedPair,
    regression::{lagmat::LagDesign, ols::OlsFit, ols::f_upper_tail},
    statistical_tests::{
        errors::{GrangerError, GrangerResult},
        options::GrangerOptions,
        validation::validate_input,
    },
};
use ndarray::{Array2, ArrayView2};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use std::{collections::BTreeMap, fmt, str::FromStr};
use tracing::debug;

/// The four significance tests reported per lag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GrangerTest {
    SsrFTest,
    SsrChi2Test,
    LrTest,
    ParamsFTest,
}

impl GrangerTest {
    pub const ALL: [GrangerTest; 4] = [
        GrangerTest::SsrFTest,
        GrangerTest::SsrChi2Test,
        GrangerTest::LrTest,
        GrangerTest::ParamsFTest,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GrangerTest::SsrFTest => "ssr_ftest",
            GrangerTest::SsrChi2Test => "ssr_chi2test",
            GrangerTest::LrTest => "lrtest",
            GrangerTest::ParamsFTest => "params_ftest",
        }
    }
}

impl fmt::Display for GrangerTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GrangerTest {
    type Err = GrangerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GrangerTest::ALL
            .into_iter()
            .find(|test| test.name() == s.trim())
            .ok_or_else(|| GrangerError::UnknownTest(s.to_string()))
    }
}

/// Statistic, p-value and degrees of freedom of one test.
///
/// `df_denom` is `None` for the χ² tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestStatistic {
    pub statistic: f64,
    pub p_value: f64,
    pub df_num: usize,
    pub df_denom: Option<usize>,
}

/// LagResult — everything computed for a single lag order.
///
/// Fields
/// ------
/// - `lag`: lag order k.
/// - `tests`: the four [`TestStatistic`]s keyed by [`GrangerTest`].
/// - `restricted`: OLS fit of y on its own lags (and constant).
/// - `unrestricted`: OLS fit of y on own lags, x lags (and constant).
/// - `restriction`: k × (2k + c) matrix used by `params_ftest`.
#[derive(Debug, Clone, PartialEq)]
pub struct LagResult {
    lag: usize,
    tests: BTreeMap<GrangerTest, TestStatistic>,
    restricted: OlsFit,
    unrestricted: OlsFit,
    restriction: Array2<f64>,
}

impl LagResult {
    pub fn lag(&self) -> usize {
        self.lag
    }

    /// Rows of the lag design, n − k.
    pub fn nobs(&self) -> usize {
        self.unrestricted.nobs()
    }

    pub fn tests(&self) -> &BTreeMap<GrangerTest, TestStatistic> {
        &self.tests
    }

    pub fn test(&self, test: GrangerTest) -> Option<&TestStatistic> {
        self.tests.get(&test)
    }

    pub fn p_value(&self, test: GrangerTest) -> Option<f64> {
        self.test(test).map(|t| t.p_value)
    }

    pub fn restricted(&self) -> &OlsFit {
        &self.restricted
    }

    pub fn unrestricted(&self) -> &OlsFit {
        &self.unrestricted
    }

    pub fn restriction(&self) -> ArrayView2<'_, f64> {
        self.restriction.view()
    }
}

impl fmt::Display for LagResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", LagHeader(self.lag), TestLines(self))
    }
}

/// First two lines of a lag summary; printed before the lag is fitted.
struct LagHeader(usize);

impl fmt::Display for LagHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Granger Causality")?;
        write!(f, "number of lags (no zero) {}", self.0)
    }
}

/// One line per test, each preceded by a newline.
struct TestLines<'a>(&'a LagResult);

impl fmt::Display for TestLines<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (test, t) in &self.0.tests {
            let df_denom = t.df_denom.unwrap_or_default();
            match test {
                GrangerTest::SsrFTest => write!(
                    f,
                    "\nssr based F test:         F={:<8.4}, p={:<8.4}, df_denom={}, df_num={}",
                    t.statistic, t.p_value, df_denom, t.df_num
                )?,
                GrangerTest::SsrChi2Test => write!(
                    f,
                    "\nssr based chi2 test:   chi2={:<8.4}, p={:<8.4}, df={}",
                    t.statistic, t.p_value, t.df_num
                )?,
                GrangerTest::LrTest => write!(
                    f,
                    "\nlikelihood ratio test: chi2={:<8.4}, p={:<8.4}, df={}",
                    t.statistic, t.p_value, t.df_num
                )?,
                GrangerTest::ParamsFTest => write!(
                    f,
                    "\nparameter F test:         F={:<8.4}, p={:<8.4}, df_denom={}, df_num={}",
                    t.statistic, t.p_value, df_denom, t.df_num
                )?,
            }
        }
        Ok(())
    }
}

/// GrangerOutcome — per-lag results of the battery, ordered by lag.
#[derive(Debug, Clone, PartialEq)]
pub struct GrangerOutcome {
    results: BTreeMap<usize, LagResult>,
}

impl GrangerOutcome {
    pub fn lags(&self) -> Vec<usize> {
        self.results.keys().copied().collect()
    }

    pub fn get(&self, lag: usize) -> Option<&LagResult> {
        self.results.get(&lag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &LagResult)> {
        self.results.iter().map(|(&lag, result)| (lag, result))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Smallest p-value of `test` across lags, with the lag attaining it.
    pub fn min_p_value(&self, test: GrangerTest) -> Option<(usize, f64)> {
        self.iter()
            .filter_map(|(lag, r)| r.p_value(test).map(|p| (lag, p)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl fmt::Display for GrangerOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, result) in self.results.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "\n{result}")?;
        }
        Ok(())
    }
}

/// Run the Granger causality battery on an `n × 2` table.
///
/// Parameters
/// ----------
/// - `data`: `ArrayView2<f64>`
///   Column 0 is the series tested for being Granger-caused by column 1.
///   Values must be finite.
/// - `opts`: `&GrangerOptions`
///   Lags to test, constant term, and verbosity.
///
/// Returns
/// -------
/// `GrangerResult<GrangerOutcome>`
///   One [`LagResult`] per requested lag.
///
/// Errors
/// ------
/// - Any error of [`validate_input`].
/// - `GrangerError::PerfectFit`
///   When the unrestricted regression at some lag has zero total or
///   residual variation, or SSR/TSS below machine epsilon.
/// - `GrangerError::RankDeficient`
///   When the unrestricted design at some lag is perfectly collinear.
/// - `GrangerError::Regression` / `GrangerError::Distribution`
///   On numerical failures of the fits or reference distributions.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::Array2;
/// # use rust_granger::statistical_tests::{granger_causality_tests, GrangerOptions, GrangerTest};
/// let data = Array2::from_shape_fn((40, 2), |(t, j)| {
///     ((t * t * 7919 + t * 31 + j * 104_729) % 1009) as f64
/// });
/// let outcome = granger_causality_tests(data.view(), &GrangerOptions::default()).unwrap();
/// assert_eq!(outcome.lags(), vec![1, 2]);
/// let p = outcome.get(1).unwrap().p_value(GrangerTest::SsrFTest).unwrap();
/// assert!((0.0..=1.0).contains(&p));
/// ```
pub fn granger_causality_tests(
    data: ArrayView2<'_, f64>, opts: &GrangerOptions,
) -> GrangerResult<GrangerOutcome> {
    validate_input(data, opts)?;

    let lags = opts.lags.lags();
    debug!(nobs = data.nrows(), ?lags, add_const = opts.add_const, "granger causality battery");

    let y = data.column(0);
    let x = data.column(1);
    let mut results = BTreeMap::new();
    for lag in lags {
        if opts.verbose {
            print!("\n{}", LagHeader(lag));
        }
        let design = LagDesign::build(y, x, lag, opts.add_const)?;
        let result = evaluate_lag(&design)?;
        if opts.verbose {
            println!("{}", TestLines(&result));
        }
        results.insert(lag, result);
    }

    Ok(GrangerOutcome { results })
}

/// Run the battery on an aligned pair (dependent in column 0).
pub fn granger_causality_pair(
    pair: &AlignedPair, opts: &GrangerOptions,
) -> GrangerResult<GrangerOutcome> {
    granger_causality_tests(pair.to_array().view(), opts)
}

// ---- Helper methods ----

fn evaluate_lag(design: &LagDesign) -> GrangerResult<LagResult> {
    let lag = design.lag;
    let restricted = OlsFit::fit(design.target.view(), design.restricted.view(), design.add_const)?;
    let unrestricted =
        OlsFit::fit(design.target.view(), design.unrestricted.view(), design.add_const)?;
    check_feasible(&unrestricted, lag)?;

    let (ssr_r, ssr_u) = (restricted.ssr(), unrestricted.ssr());
    let df_u = unrestricted.df_resid();
    let nobs = design.nobs() as f64;
    debug!(lag, nobs = design.nobs(), ssr_r, ssr_u, df_u, "fitted lag");

    let mut tests = BTreeMap::new();

    let f_stat = (ssr_r - ssr_u) / ssr_u / lag as f64 * df_u as f64;
    tests.insert(
        GrangerTest::SsrFTest,
        TestStatistic {
            statistic: f_stat,
            p_value: f_upper_tail(f_stat, lag, df_u)?,
            df_num: lag,
            df_denom: Some(df_u),
        },
    );

    let chi2_stat = nobs * (ssr_r - ssr_u) / ssr_u;
    tests.insert(
        GrangerTest::SsrChi2Test,
        TestStatistic {
            statistic: chi2_stat,
            p_value: chi2_upper_tail(chi2_stat, lag)?,
            df_num: lag,
            df_denom: None,
        },
    );

    let lr_stat = -2.0 * (restricted.llf() - unrestricted.llf());
    tests.insert(
        GrangerTest::LrTest,
        TestStatistic {
            statistic: lr_stat,
            p_value: chi2_upper_tail(lr_stat, lag)?,
            df_num: lag,
            df_denom: None,
        },
    );

    let wald = unrestricted.f_test(design.restriction.view())?;
    tests.insert(
        GrangerTest::ParamsFTest,
        TestStatistic {
            statistic: wald.statistic,
            p_value: wald.p_value,
            df_num: wald.df_num,
            df_denom: Some(wald.df_denom),
        },
    );

    Ok(LagResult { lag, tests, restricted, unrestricted, restriction: design.restriction.clone() })
}

/// Reject unrestricted fits for which the test statistics are undefined.
fn check_feasible(fit: &OlsFit, lag: usize) -> GrangerResult<()> {
    let (tss, ssr) = (fit.tss(), fit.ssr());
    if tss == 0.0 || ssr == 0.0 || fit.rsquared().is_nan() || ssr / tss < f64::EPSILON {
        return Err(GrangerError::PerfectFit { lag });
    }
    if fit.rank() < fit.n_params() {
        return Err(GrangerError::RankDeficient { lag, rank: fit.rank(), cols: fit.n_params() });
    }
    Ok(())
}

fn chi2_upper_tail(stat: f64, df: usize) -> GrangerResult<f64> {
    let dist =
        ChiSquared::new(df as f64).map_err(|e| GrangerError::Distribution { text: e.to_string() })?;
    Ok(dist.sf(stat))
}
