//! data — tabular inputs, differencing, and alignment.
//!
//! Purpose
//! -------
//! Hold the caller's index-ordered table of numeric columns and provide the
//! pure series transformations that prepare two columns for a causality
//! test: first differencing, missing-value removal, and an explicit
//! inner-join on the index.
//!
//! Key behaviors
//! -------------
//! - [`Dataset`] validates index ordering, column lengths and cell values
//!   once, at construction.
//! - [`SeriesView`] borrows a column; [`Series`] owns a derived one.
//! - [`align`] joins two series into an [`AlignedPair`] whose rows are all
//!   fully observed.
//!
//! Invariants & assumptions
//! ------------------------
//! - `NaN` is the missing-value marker throughout this subtree.
//! - No transformation mutates its input.
//!
//! Testing notes
//! -------------
//! - Each submodule carries its own unit tests; the differencing
//!   round-trip and the alignment invariant are property-tested with
//!   `proptest`.

pub mod align;
pub mod errors;
pub mod frame;
pub mod series;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::align::{AlignedPair, align};
pub use self::errors::{DataError, DataResult};
pub use self::frame::Dataset;
pub use self::series::{Series, SeriesView};

pub mod prelude {
    pub use super::align::{AlignedPair, align};
    pub use super::errors::{DataError, DataResult};
    pub use super::frame::Dataset;
    pub use super::series::{Series, SeriesView};
}
