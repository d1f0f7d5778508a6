//! Core data types for bezier curve sampling.

pub mod macros;
pub mod point;
pub mod polygon;

pub use point::Point;
pub use polygon::{ControlPoint, ControlPolygon};
