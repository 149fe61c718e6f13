//! regression::ols — ordinary least squares and Wald restriction tests.
//!
//! Purpose
//! -------
//! Fit the restricted and unrestricted autoregressions of a Granger test by
//! ordinary least squares, and test linear restrictions `Rβ = 0` on the
//! fitted coefficients. This module handles conversion between `ndarray`
//! (the crate-facing representation) and `nalgebra` (used for the singular
//! value decomposition).
//!
//! Key behaviors
//! -------------
//! - [`OlsFit::fit`] solves `min ‖y − Xβ‖²` through the Moore–Penrose
//!   pseudoinverse `X⁺` of the design, so rank-deficient designs still
//!   produce the minimum-norm solution while reporting their rank.
//! - Summary quantities mirror the classical OLS results object: residual
//!   sum of squares, centered/uncentered total sum of squares, R²,
//!   residual degrees of freedom, Gaussian log-likelihood, scale, and
//!   coefficient standard errors.
//! - [`OlsFit::f_test`] computes the Wald F-statistic
//!   `F = (Rβ̂)ᵀ [R V̂ Rᵀ]⁺ (Rβ̂) / q` with `V̂ = σ̂² (XᵀX)⁺` and its upper-tail
//!   probability under `F(q, df_resid)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite; non-finite cells are rejected before any linear
//!   algebra runs.
//! - Singular values at most `σ_max · max(m, n) · ε` do not count towards
//!   the rank; the pseudoinverse only drops those at most `1e-15 · σ_max`.
//! - `df_resid = nobs − rank > 0` for every successful fit.
//!
//! Conventions
//! -----------
//! - `normalized_cov` stores `X⁺ (X⁺)ᵀ = (XᵀX)⁺`; multiply by
//!   [`OlsFit::scale`] for the coefficient covariance.
//! - Errors are reported via [`RegressionResult<T>`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover a hand-computable simple regression, exact recovery
//!   of noise-free coefficients, rank reporting for collinear designs,
//!   nearly collinear designs kept by the pseudoinverse,
//!   agreement between the Wald F-test and the SSR-based F-test, and the
//!   input error paths.
use crate::regression::errors::{RegressionError, RegressionResult};
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// Relative singular-value cutoff for every pseudoinverse.
const PINV_RCOND: f64 = 1e-15;

/// OlsFit — summary of an ordinary least squares regression.
///
/// Purpose
/// -------
/// Carry everything downstream tests need from one regression: the
/// coefficients, their normalized covariance, and the scalar goodness-of-fit
/// quantities.
///
/// Fields
/// ------
/// - `params`: `Array1<f64>`
///   Coefficient vector β̂ of length k (one per design column).
/// - `normalized_cov`: `Array2<f64>`
///   `(XᵀX)⁺`, k × k.
/// - `nobs`, `rank`, `df_resid`: `usize`
///   Row count, numerical rank of X, and `nobs − rank`.
/// - `ssr`: `f64`
///   Residual sum of squares.
/// - `centered_tss`, `uncentered_tss`: `f64`
///   Σ(yᵢ − ȳ)² and Σyᵢ².
/// - `has_const`: `bool`
///   Whether the design carries an intercept column.
/// - `llf`: `f64`
///   Gaussian log-likelihood `−n/2 (ln 2π + ln(ssr/n) + 1)`.
///
/// Invariants
/// ----------
/// - `df_resid ≥ 1`.
/// - `params.len() == normalized_cov.nrows() == normalized_cov.ncols()`.
#[derive(Debug, Clone, PartialEq)]
pub struct OlsFit {
    params: Array1<f64>,
    normalized_cov: Array2<f64>,
    nobs: usize,
    rank: usize,
    df_resid: usize,
    ssr: f64,
    centered_tss: f64,
    uncentered_tss: f64,
    has_const: bool,
    llf: f64,
}

/// WaldFTest — outcome of an F-test of linear restrictions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaldFTest {
    pub statistic: f64,
    pub p_value: f64,
    /// Number of restrictions q.
    pub df_num: usize,
    pub df_denom: usize,
}

impl OlsFit {
    /// Fit `endog` on `exog` by ordinary least squares.
    ///
    /// Parameters
    /// ----------
    /// - `endog`: `ArrayView1<f64>`
    ///   Response vector y of length n.
    /// - `exog`: `ArrayView2<f64>`
    ///   Design matrix X of shape n × k.
    /// - `has_const`: `bool`
    ///   Whether X contains an intercept column; selects the centered total
    ///   sum of squares for [`OlsFit::tss`] and R².
    ///
    /// Returns
    /// -------
    /// `RegressionResult<OlsFit>`
    ///
    /// Errors
    /// ------
    /// - `RegressionError::EmptyDesign` when n = 0 or k = 0.
    /// - `RegressionError::DimensionMismatch` when X has a different number
    ///   of rows than y.
    /// - `RegressionError::NonFiniteInput` for the first NaN/±∞ in y or X
    ///   (y reported as column `k`).
    /// - `RegressionError::NoResidualDof` when `rank(X) ≥ n`.
    /// - `RegressionError::Decomposition` if the SVD cannot be inverted.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_granger::regression::OlsFit;
    /// let y = array![1.0, 3.0, 2.0, 5.0, 4.0];
    /// let x = array![[1.0, 1.0], [2.0, 1.0], [3.0, 1.0], [4.0, 1.0], [5.0, 1.0]];
    /// let fit = OlsFit::fit(y.view(), x.view(), true).unwrap();
    /// assert!((fit.params()[0] - 0.8).abs() < 1e-12);
    /// assert!((fit.ssr() - 3.6).abs() < 1e-12);
    /// ```
    pub fn fit(
        endog: ArrayView1<'_, f64>, exog: ArrayView2<'_, f64>, has_const: bool,
    ) -> RegressionResult<Self> {
        let (nobs, k) = (endog.len(), exog.ncols());
        if nobs == 0 || k == 0 {
            return Err(RegressionError::EmptyDesign { rows: nobs, cols: k });
        }
        if exog.nrows() != nobs {
            return Err(RegressionError::DimensionMismatch {
                what: "design rows vs. response length",
                expected: nobs,
                found: exog.nrows(),
            });
        }
        validate_finite(endog, exog)?;

        let x = to_dmatrix(exog);
        let y = DVector::from_iterator(nobs, endog.iter().copied());

        let svd = x.clone().svd(true, true);
        let s_max = svd.singular_values.iter().copied().fold(0.0_f64, f64::max);
        let tol = s_max * (nobs.max(k) as f64) * f64::EPSILON;
        let rank = svd.rank(tol);
        if rank >= nobs {
            return Err(RegressionError::NoResidualDof { nobs, rank });
        }
        let pinv = svd
            .pseudo_inverse(PINV_RCOND * s_max)
            .map_err(|e| RegressionError::Decomposition { text: e.to_string() })?;

        let beta = &pinv * &y;
        let resid = &y - &x * &beta;
        let ssr = resid.norm_squared();
        let mean = y.mean();
        let centered_tss = y.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
        let uncentered_tss = y.norm_squared();
        let cov = &pinv * pinv.transpose();

        let n = nobs as f64;
        let llf = -0.5 * n * ((2.0 * std::f64::consts::PI).ln() + (ssr / n).ln() + 1.0);

        Ok(OlsFit {
            params: Array1::from_iter(beta.iter().copied()),
            normalized_cov: Array2::from_shape_fn((k, k), |(i, j)| cov[(i, j)]),
            nobs,
            rank,
            df_resid: nobs - rank,
            ssr,
            centered_tss,
            uncentered_tss,
            has_const,
            llf,
        })
    }

    pub fn params(&self) -> ArrayView1<'_, f64> {
        self.params.view()
    }

    pub fn normalized_cov(&self) -> ArrayView2<'_, f64> {
        self.normalized_cov.view()
    }

    pub fn nobs(&self) -> usize {
        self.nobs
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Number of design columns k.
    pub fn n_params(&self) -> usize {
        self.params.len()
    }

    pub fn df_resid(&self) -> usize {
        self.df_resid
    }

    /// Model degrees of freedom, `rank − 1` with an intercept.
    pub fn df_model(&self) -> usize {
        self.rank.saturating_sub(usize::from(self.has_const))
    }

    pub fn ssr(&self) -> f64 {
        self.ssr
    }

    pub fn has_const(&self) -> bool {
        self.has_const
    }

    /// Total sum of squares: centered with an intercept, uncentered without.
    pub fn tss(&self) -> f64 {
        if self.has_const { self.centered_tss } else { self.uncentered_tss }
    }

    pub fn centered_tss(&self) -> f64 {
        self.centered_tss
    }

    pub fn uncentered_tss(&self) -> f64 {
        self.uncentered_tss
    }

    /// `1 − ssr / tss`; NaN when the total sum of squares is zero.
    pub fn rsquared(&self) -> f64 {
        let tss = self.tss();
        if tss == 0.0 { f64::NAN } else { 1.0 - self.ssr / tss }
    }

    /// Residual variance estimate σ̂² = ssr / df_resid.
    pub fn scale(&self) -> f64 {
        self.ssr / self.df_resid as f64
    }

    pub fn llf(&self) -> f64 {
        self.llf
    }

    /// Coefficient standard errors √(σ̂² · diag((XᵀX)⁺)).
    pub fn bse(&self) -> Array1<f64> {
        let scale = self.scale();
        self.normalized_cov.diag().mapv(|v| (v * scale).sqrt())
    }

    /// Wald F-test of the linear restrictions `Rβ = 0`.
    ///
    /// Parameters
    /// ----------
    /// - `restriction`: `ArrayView2<f64>`
    ///   q × k restriction matrix R, k = number of coefficients.
    ///
    /// Returns
    /// -------
    /// `RegressionResult<WaldFTest>`
    ///   Statistic `(Rβ̂)ᵀ [σ̂² R (XᵀX)⁺ Rᵀ]⁺ (Rβ̂) / q`, its `F(q, df_resid)`
    ///   upper-tail p-value, and both degrees of freedom.
    ///
    /// Errors
    /// ------
    /// - `RegressionError::DimensionMismatch` if R has the wrong width or
    ///   no rows.
    /// - `RegressionError::SingularRestriction` if the restricted
    ///   covariance is numerically zero.
    /// - `RegressionError::Decomposition` / `RegressionError::Distribution`
    ///   on numerical or distribution failures.
    pub fn f_test(&self, restriction: ArrayView2<'_, f64>) -> RegressionResult<WaldFTest> {
        let k = self.n_params();
        if restriction.ncols() != k {
            return Err(RegressionError::DimensionMismatch {
                what: "restriction matrix columns",
                expected: k,
                found: restriction.ncols(),
            });
        }
        let q = restriction.nrows();
        if q == 0 {
            return Err(RegressionError::DimensionMismatch {
                what: "restriction matrix rows",
                expected: 1,
                found: 0,
            });
        }

        let r = to_dmatrix(restriction);
        let beta = DVector::from_iterator(k, self.params.iter().copied());
        let cov = to_dmatrix(self.normalized_cov.view());

        let r_beta = &r * &beta;
        let cov_r = (&r * cov * r.transpose()) * self.scale();

        let svd = cov_r.svd(true, true);
        let s_max = svd.singular_values.iter().copied().fold(0.0_f64, f64::max);
        if s_max.is_nan() || s_max <= 0.0 {
            return Err(RegressionError::SingularRestriction);
        }
        let inv = svd
            .pseudo_inverse(PINV_RCOND * s_max)
            .map_err(|e| RegressionError::Decomposition { text: e.to_string() })?;

        let statistic = r_beta.dot(&(&inv * &r_beta)) / q as f64;
        let p_value = f_upper_tail(statistic, q, self.df_resid)?;

        Ok(WaldFTest { statistic, p_value, df_num: q, df_denom: self.df_resid })
    }
}

/// Upper-tail probability `P(F > stat)` under `F(df_num, df_denom)`.
pub(crate) fn f_upper_tail(stat: f64, df_num: usize, df_denom: usize) -> RegressionResult<f64> {
    let dist = FisherSnedecor::new(df_num as f64, df_denom as f64)
        .map_err(|e| RegressionError::Distribution { text: e.to_string() })?;
    Ok(dist.sf(stat))
}

// ---- Helper methods ----

/// Copy an `ndarray` matrix into a column-major `nalgebra::DMatrix`.
fn to_dmatrix(a: ArrayView2<'_, f64>) -> DMatrix<f64> {
    DMatrix::from_fn(a.nrows(), a.ncols(), |i, j| a[[i, j]])
}

fn validate_finite(endog: ArrayView1<'_, f64>, exog: ArrayView2<'_, f64>) -> RegressionResult<()> {
    let k = exog.ncols();
    if let Some((row, &value)) = endog.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(RegressionError::NonFiniteInput { row, col: k, value });
    }
    if let Some(((row, col), &value)) = exog.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(RegressionError::NonFiniteInput { row, col, value });
    }
    Ok(())
}
