//! regression::lagmat — lagged design matrices for bivariate causality fits.
//!
//! Purpose
//! -------
//! Turn an aligned pair (yₜ, xₜ) into the regression inputs of one Granger
//! lag order k: the trimmed target, the restricted design (own lags only),
//! the unrestricted design (own lags plus lags of x), and the restriction
//! matrix selecting the x-lag coefficients.
//!
//! Key behaviors
//! -------------
//! - Trim both ends so that every row has a full set of k lags; the design
//!   has n − k rows, row r corresponding to time t = r + k.
//! - Column layout of the unrestricted design:
//!   `[y_{t-1}, …, y_{t-k}, x_{t-1}, …, x_{t-k}, 1]`, the constant last
//!   and present only when `add_const` is set. The restricted design is the
//!   same without the x block.
//! - Restriction matrix `R = [0_{k×k} | I_k | 0_{k×c}]` so that `Rβ = 0`
//!   states that x has no predictive power.
//!
//! Invariants & assumptions
//! ------------------------
//! - `y.len() == x.len() > k ≥ 1`; violations surface as
//!   [`RegressionError`] values.
//! - Contemporaneous x is never a regressor.
use crate::regression::errors::{RegressionError, RegressionResult};
use ndarray::{Array1, Array2, ArrayView1, s};

/// LagDesign — regression inputs for a single lag order.
///
/// Fields
/// ------
/// - `lag`: `usize`
///   Lag order k.
/// - `add_const`: `bool`
///   Whether a trailing constant column is included in both designs.
/// - `target`: `Array1<f64>`
///   yₜ for t = k,…,n−1.
/// - `restricted`: `Array2<f64>`
///   (n − k) × (k + c) own-lag design.
/// - `unrestricted`: `Array2<f64>`
///   (n − k) × (2k + c) joint design.
/// - `restriction`: `Array2<f64>`
///   k × (2k + c) selector of the x-lag coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct LagDesign {
    pub lag: usize,
    pub add_const: bool,
    pub target: Array1<f64>,
    pub restricted: Array2<f64>,
    pub unrestricted: Array2<f64>,
    pub restriction: Array2<f64>,
}

impl LagDesign {
    /// Build the trimmed target, both designs, and the restriction matrix.
    ///
    /// Parameters
    /// ----------
    /// - `y`: `ArrayView1<f64>`
    ///   Dependent series (the one being predicted).
    /// - `x`: `ArrayView1<f64>`
    ///   Candidate causing series; same length as `y`.
    /// - `lag`: `usize`
    ///   Lag order k ≥ 1.
    /// - `add_const`: `bool`
    ///   Append a constant column to both designs.
    ///
    /// Returns
    /// -------
    /// `RegressionResult<LagDesign>`
    ///
    /// Errors
    /// ------
    /// - `RegressionError::DimensionMismatch`
    ///   When `x.len() != y.len()`.
    /// - `RegressionError::InsufficientRows`
    ///   When `lag == 0` or `y.len() <= lag`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_granger::regression::LagDesign;
    /// let y = array![1.0, 2.0, 3.0, 4.0];
    /// let x = array![10.0, 20.0, 30.0, 40.0];
    /// let d = LagDesign::build(y.view(), x.view(), 1, true).unwrap();
    /// assert_eq!(d.target.to_vec(), vec![2.0, 3.0, 4.0]);
    /// assert_eq!(d.unrestricted.row(0).to_vec(), vec![1.0, 10.0, 1.0]);
    /// ```
    pub fn build(
        y: ArrayView1<'_, f64>, x: ArrayView1<'_, f64>, lag: usize, add_const: bool,
    ) -> RegressionResult<Self> {
        let n = y.len();
        if x.len() != n {
            return Err(RegressionError::DimensionMismatch {
                what: "lagged series lengths",
                expected: n,
                found: x.len(),
            });
        }
        if lag == 0 || n <= lag {
            return Err(RegressionError::InsufficientRows { rows: n, lag });
        }

        let nobs = n - lag;
        let c = usize::from(add_const);
        let mut restricted = Array2::<f64>::zeros((nobs, lag + c));
        let mut unrestricted = Array2::<f64>::zeros((nobs, 2 * lag + c));

        for r in 0..nobs {
            let t = r + lag;
            for j in 1..=lag {
                restricted[[r, j - 1]] = y[t - j];
                unrestricted[[r, j - 1]] = y[t - j];
                unrestricted[[r, lag + j - 1]] = x[t - j];
            }
        }
        if add_const {
            restricted.column_mut(lag).fill(1.0);
            unrestricted.column_mut(2 * lag).fill(1.0);
        }

        let mut restriction = Array2::<f64>::zeros((lag, 2 * lag + c));
        for i in 0..lag {
            restriction[[i, lag + i]] = 1.0;
        }

        Ok(LagDesign {
            lag,
            add_const,
            target: y.slice(s![lag..]).to_owned(),
            restricted,
            unrestricted,
            restriction,
        })
    }

    /// Number of usable rows, n − k.
    pub fn nobs(&self) -> usize {
        self.target.len()
    }
}
