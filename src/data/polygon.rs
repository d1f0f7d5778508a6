//! Control polygon: the ordered control points defining a bezier curve.

use crate::data::point::Point;
use crate::error::{BezierError, BezierResult};
use serde::{Deserialize, Serialize};

/// An integer-valued control point, as read from the input table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: i64,
    pub y: i64,
}

impl ControlPoint {
    /// Create a new control point
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Convert to a real-valued point for curve evaluation
    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

/// An ordered sequence of control points defining a degree-(N-1) bezier
/// curve. Index order is significant: points i and i+1 are adjacent in the
/// blending tree. The sequence is immutable once constructed and never
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlPolygon {
    points: Vec<ControlPoint>,
}

impl ControlPolygon {
    /// Create a control polygon from a list of points.
    ///
    /// Returns [`BezierError::NoControlPoints`] for an empty list; a curve
    /// needs at least one control point.
    pub fn new(points: Vec<ControlPoint>) -> BezierResult<Self> {
        if points.is_empty() {
            return Err(BezierError::NoControlPoints);
        }
        Ok(Self { points })
    }

    /// The control points, in input order
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Number of control points (always >= 1)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: the constructor rejects empty point lists
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Degree of the curve this polygon defines
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_polygon_rejected() {
        assert!(matches!(
            ControlPolygon::new(vec![]),
            Err(BezierError::NoControlPoints)
        ));
    }

    #[test]
    fn test_degree() {
        let polygon = ControlPolygon::new(vec![
            ControlPoint::new(0, 0),
            ControlPoint::new(1, 3),
            ControlPoint::new(3, 3),
            ControlPoint::new(4, 0),
        ])
        .unwrap();

        assert_eq!(polygon.len(), 4);
        assert_eq!(polygon.degree(), 3);
        assert!(!polygon.is_empty());
    }

    #[test]
    fn test_to_point() {
        let cp = ControlPoint::new(-2, 7);
        assert_eq!(cp.to_point(), Point::new(-2.0, 7.0));
    }
}
