//! data::align — inner-join of two indexed series.
//!
//! Purpose
//! -------
//! Combine the dependent and independent series into a single two-column
//! table keyed by their common index, dropping every row where either side
//! is absent or missing. Silent misalignment would make the downstream
//! regression compare unrelated periods, so the join is explicit.
//!
//! Key behaviors
//! -------------
//! - [`align`] performs a sorted merge-join on the two indices and keeps a
//!   row only when both values are present and not `NaN`.
//! - [`AlignedPair::to_array`] exposes the result as an `n × 2` matrix with
//!   the dependent series in column 0, ready for
//!   [`granger_causality_tests`](crate::statistical_tests::granger_causality_tests).
//!
//! Invariants & assumptions
//! ------------------------
//! - Both input indices are strictly increasing (guaranteed for series
//!   derived from a [`Dataset`](crate::data::Dataset)).
//! - The output index is strictly increasing, shared by both columns, and
//!   no output value is `NaN`.
use crate::data::series::Series;
use ndarray::{Array1, Array2, ArrayView1};

/// AlignedPair — two series restricted to their common, fully observed rows.
///
/// Fields
/// ------
/// - `index`: `Vec<i64>`
///   Shared row keys.
/// - `dependent` / `independent`: `Array1<f64>`
///   Values of the caused and causing series, row-aligned with `index`.
/// - `dependent_name` / `independent_name`: `String`
///   Source column names, kept for reporting.
///
/// Invariants
/// ----------
/// - `index.len() == dependent.len() == independent.len()`.
/// - No value is `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPair {
    index: Vec<i64>,
    dependent: Array1<f64>,
    independent: Array1<f64>,
    dependent_name: String,
    independent_name: String,
}

impl AlignedPair {
    pub fn index(&self) -> &[i64] {
        &self.index
    }

    pub fn dependent(&self) -> ArrayView1<'_, f64> {
        self.dependent.view()
    }

    pub fn independent(&self) -> ArrayView1<'_, f64> {
        self.independent.view()
    }

    pub fn dependent_name(&self) -> &str {
        &self.dependent_name
    }

    pub fn independent_name(&self) -> &str {
        &self.independent_name
    }

    /// Number of aligned rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Stack both columns into an `n × 2` matrix (dependent first).
    pub fn to_array(&self) -> Array2<f64> {
        let n = self.len();
        let mut out = Array2::<f64>::zeros((n, 2));
        out.column_mut(0).assign(&self.dependent);
        out.column_mut(1).assign(&self.independent);
        out
    }
}

/// Inner-join two series on their index and drop rows with missing values.
///
/// Parameters
/// ----------
/// - `dependent`: `&Series`
///   Series whose predictability is tested (column 0 of the result).
/// - `independent`: `&Series`
///   Candidate causing series (column 1 of the result).
///
/// Returns
/// -------
/// `AlignedPair`
///   Rows whose key appears in both indices and whose two values are both
///   not `NaN`, in ascending key order. May be empty.
///
/// Notes
/// -----
/// - Runs in O(n + m) by walking both sorted indices once.
///
/// Examples
/// --------
/// ```rust
/// # use rust_granger::data::{Dataset, align};
/// let ds = Dataset::new(
///     vec![1, 2, 3, 4],
///     vec![
///         ("y".to_string(), vec![1.0, 2.0, 4.0, 8.0]),
///         ("x".to_string(), vec![f64::NAN, 1.0, 1.0, 2.0]),
///     ],
/// )
/// .unwrap();
/// let dy = ds.column("y").unwrap().difference();
/// let dx = ds.column("x").unwrap().difference().drop_missing();
/// let pair = align(&dy, &dx);
/// assert_eq!(pair.index(), &[3, 4]);
/// ```
pub fn align(dependent: &Series, independent: &Series) -> AlignedPair {
    let (dep_idx, dep_vals) = (dependent.index(), dependent.values());
    let (ind_idx, ind_vals) = (independent.index(), independent.values());

    let capacity = dep_idx.len().min(ind_idx.len());
    let mut index = Vec::with_capacity(capacity);
    let mut dep_out = Vec::with_capacity(capacity);
    let mut ind_out = Vec::with_capacity(capacity);

    let (mut i, mut j) = (0_usize, 0_usize);
    while i < dep_idx.len() && j < ind_idx.len() {
        match dep_idx[i].cmp(&ind_idx[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                let (y, x) = (dep_vals[i], ind_vals[j]);
                if !y.is_nan() && !x.is_nan() {
                    index.push(dep_idx[i]);
                    dep_out.push(y);
                    ind_out.push(x);
                }
                i += 1;
                j += 1;
            }
        }
    }

    AlignedPair {
        index,
        dependent: Array1::from(dep_out),
        independent: Array1::from(ind_out),
        dependent_name: dependent.name().to_string(),
        independent_name: independent.name().to_string(),
    }
}
