// Module definitions
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structures at crate level
pub use data::point::Point;
pub use data::polygon::{ControlPoint, ControlPolygon};
pub use error::{BezierError, BezierResult};
