//! The plain-text point table output format.
//!
//! One line per sampled point, `x<TAB>y`, both coordinates rounded to
//! [`OUTPUT_PRECISION`](crate::constants::OUTPUT_PRECISION) decimal
//! places, in the order the points were generated.
//!
//! # Example
//!
//! ```rust
//! use bezier_plotter::modules::export::table::ToPointTable;
//! use bezier_plotter::pt;
//!
//! let points = vec![pt!(0, 0), pt!(1.5, 0.5), pt!(2, 2)];
//!
//! assert_eq!(points.to_point_table(), "0.00\t0.00\n1.50\t0.50\n2.00\t2.00\n");
//! ```

use crate::constants::OUTPUT_PRECISION;
use crate::data::Point;

/// Trait for types that can be written as a point table
pub trait ToPointTable {
    /// Render as point table text
    fn to_point_table(&self) -> String;
}

impl ToPointTable for [Point] {
    fn to_point_table(&self) -> String {
        let mut result = String::new();
        for point in self {
            result.push_str(&format!(
                "{:.prec$}\t{:.prec$}\n",
                point.x,
                point.y,
                prec = OUTPUT_PRECISION
            ));
        }
        result
    }
}

impl ToPointTable for Vec<Point> {
    fn to_point_table(&self) -> String {
        self.as_slice().to_point_table()
    }
}
