//! Parsing module for curve sampling input
//!
//! Now supported formats:
//! - Point table:
//!     the plain-text format read by the CLI. First line is the control
//!     point count N, followed by N lines of `x y` integer pairs, followed
//!     by the sample count M. See the `table` module.
//! - JSON:
//!     in the form of `{"control_points": [{"x": 0, "y": 0}], "samples": 5}`.
//!     See the `json` module.

pub mod json;
pub mod table;

pub use table::PointTable;
