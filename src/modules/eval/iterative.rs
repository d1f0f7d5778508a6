//! Bottom-up iterative evaluation of de Casteljau's algorithm.
//!
//! Instead of a 2D memo table, this strategy keeps a single rolling buffer
//! of N-1 points and reduces it level by level. Each level overwrites
//! `buffer[i]` with the blend of `buffer[i]` and `buffer[i+1]`; iterating
//! left to right, `buffer[i+1]` still holds the previous level's value at
//! the moment it is read, so the reduction is valid in place. After the
//! last level, `buffer[0]` is the curve point.

use super::CurveEvaluator;
use crate::data::{ControlPolygon, Point};

/// In-place iterative de Casteljau evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeEvaluator;

impl CurveEvaluator for IterativeEvaluator {
    fn evaluate(&self, polygon: &ControlPolygon, t: f64) -> Point {
        let points = polygon.points();
        let n = points.len();

        // A single control point defines a constant curve; there is
        // nothing to blend and the buffer below would be empty.
        if n == 1 {
            return points[0].to_point();
        }

        // First level: blend each adjacent pair of control points.
        let mut buffer: Vec<Point> = points
            .windows(2)
            .map(|pair| pair[0].to_point().lerp(&pair[1].to_point(), t))
            .collect();

        // Remaining levels. A span of `span + 1` control points has
        // n - span blends, so each level shortens the live prefix by one.
        // The loop over i must run left to right; see the module docs.
        for span in 2..n {
            for i in 0..n - span {
                buffer[i] = buffer[i].lerp(&buffer[i + 1], t);
            }
        }

        buffer[0]
    }
}
