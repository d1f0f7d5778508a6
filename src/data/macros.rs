//! This module provides convenient macros for creating points and control
//! polygons.

/// Macro for creating a Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x as f64, $y as f64)
    };
}

/// Macro for creating a ControlPolygon from integer coordinate pairs
#[macro_export]
macro_rules! polygon {
    ([$(($x:expr, $y:expr)),* $(,)?]) => {
        $crate::data::ControlPolygon::new(vec![
            $($crate::data::ControlPoint::new($x, $y)),*
        ])
    };
}
