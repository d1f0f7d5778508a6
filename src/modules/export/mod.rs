//! Export module for sampled curve points
//!
//! Now supported format:
//! - Point table:
//!     tab-separated `x<TAB>y` lines, two decimal places, one line per
//!     sample in increasing-t order. See the `table` module.

pub mod table;

pub use table::ToPointTable;
