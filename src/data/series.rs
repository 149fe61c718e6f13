//! data::series — indexed numeric series and first-order differencing.
//!
//! Purpose
//! -------
//! Represent one named column together with its index, either borrowed
//! from a [`Dataset`](crate::data::Dataset) ([`SeriesView`]) or owned after
//! a transformation ([`Series`]). Provide the pure transformations the
//! causality pipeline needs before alignment.
//!
//! Key behaviors
//! -------------
//! - [`SeriesView::difference`] / [`Series::difference`]: first difference
//!   Δxᵢ = xᵢ − xᵢ₋₁ for i ≥ 1. The leading position, which has no
//!   predecessor, is dropped rather than filled.
//! - [`Series::drop_missing`]: remove every `NaN` row, index included.
//!
//! Invariants & assumptions
//! ------------------------
//! - `index.len() == values.len()` for every series.
//! - Indices inherited from a dataset are strictly increasing, and both
//!   transformations preserve that ordering.
//! - `NaN` propagates through differencing: a missing xᵢ makes both Δxᵢ
//!   and Δxᵢ₊₁ missing.
//!
//! Conventions
//! -----------
//! - Transformations never mutate their input; each returns a fresh
//!   [`Series`].
//! - A series of length N differences to length N − 1 (0 when N ≤ 1).
use ndarray::{Array1, ArrayView1};

/// SeriesView — borrowed column of a dataset paired with its index.
#[derive(Debug, Clone, Copy)]
pub struct SeriesView<'a> {
    name: &'a str,
    index: &'a [i64],
    values: ArrayView1<'a, f64>,
}

impl<'a> SeriesView<'a> {
    pub(crate) fn new(name: &'a str, index: &'a [i64], values: ArrayView1<'a, f64>) -> Self {
        SeriesView { name, index, values }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn index(&self) -> &'a [i64] {
        self.index
    }

    pub fn values(&self) -> ArrayView1<'a, f64> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First difference with the undefined leading value dropped.
    ///
    /// Parameters
    /// ----------
    /// - `self`: borrowed series {xᵢ} of length N with index {kᵢ}.
    ///
    /// Returns
    /// -------
    /// `Series`
    ///   Series named like the input with values Δxᵢ = xᵢ − xᵢ₋₁ and index
    ///   kᵢ for i = 1,…,N−1. Empty when N ≤ 1.
    ///
    /// Notes
    /// -----
    /// - Missing (`NaN`) inputs propagate into the differences; callers
    ///   remove them with [`Series::drop_missing`].
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_granger::data::Dataset;
    /// let ds = Dataset::with_range_index(vec![("x".to_string(), vec![1.0, 4.0, 9.0])]).unwrap();
    /// let dx = ds.column("x").unwrap().difference();
    /// assert_eq!(dx.values().to_vec(), vec![3.0, 5.0]);
    /// assert_eq!(dx.index(), &[1, 2]);
    /// ```
    pub fn difference(&self) -> Series {
        if self.values.len() < 2 {
            return Series::new(self.name, Vec::new(), Array1::zeros(0));
        }
        let n = self.values.len();
        let diffs: Array1<f64> = Array1::from_iter(
            self.values.slice(ndarray::s![1..]).iter().zip(self.values.iter()).map(
                |(x_t, x_t_min_1): (&f64, &f64)| x_t - x_t_min_1,
            ),
        );
        debug_assert_eq!(diffs.len(), n - 1);
        Series::new(self.name, self.index[1..].to_vec(), diffs)
    }
}

/// Series — owned, indexed numeric series produced by transformations.
///
/// Fields
/// ------
/// - `name`: `String`
///   Column name carried over from the source dataset.
/// - `index`: `Vec<i64>`
///   Row keys, strictly increasing when derived from a dataset.
/// - `values`: `Array1<f64>`
///   Observations; `NaN` marks a missing value.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    index: Vec<i64>,
    values: Array1<f64>,
}

impl Series {
    pub(crate) fn new(name: &str, index: Vec<i64>, values: Array1<f64>) -> Self {
        debug_assert_eq!(index.len(), values.len());
        Series { name: name.to_string(), index, values }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> &[i64] {
        &self.index
    }

    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn view(&self) -> SeriesView<'_> {
        SeriesView::new(&self.name, &self.index, self.values.view())
    }

    /// First difference of an owned series; see [`SeriesView::difference`].
    pub fn difference(&self) -> Series {
        self.view().difference()
    }

    /// Drop every row whose value is `NaN`.
    ///
    /// Returns a new series; index entries are removed together with their
    /// values so the pairing stays intact.
    pub fn drop_missing(&self) -> Series {
        let (index, values): (Vec<i64>, Vec<f64>) = self
            .index
            .iter()
            .zip(self.values.iter())
            .filter(|(_, v)| !v.is_nan())
            .map(|(&k, &v)| (k, v))
            .unzip();
        Series::new(&self.name, index, Array1::from(values))
    }
}
