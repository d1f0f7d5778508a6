//! Top-down memoized evaluation of de Casteljau's algorithm.
//!
//! The recursive definition blends overlapping sub-spans: B(i, n) needs
//! B(i, n-1) and B(i+1, n-1), which in turn share B(i+1, n-2). Naive
//! recursion recomputes those shared spans exponentially often; caching
//! each (start index, span length) pair the first time it is computed
//! brings one evaluation down to O(N^2).

use super::CurveEvaluator;
use crate::data::{ControlPoint, ControlPolygon, Point};

/// Recursive de Casteljau evaluator with a per-parameter memo table
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoizedEvaluator;

impl CurveEvaluator for MemoizedEvaluator {
    fn evaluate(&self, polygon: &ControlPolygon, t: f64) -> Point {
        let n = polygon.len();
        // memo[i][span] caches the blend of the span of `span` points
        // starting at index i. The table is fresh for every t: the blend
        // weights depend on t, so nothing carries over between samples.
        // A `None` cell is "not yet computed"; no sentinel value can
        // collide with a legitimate result.
        let mut memo: Vec<Vec<Option<Point>>> = vec![vec![None; n + 1]; n];
        blend_span(polygon.points(), 0, n, t, &mut memo)
    }
}

/// Compute B(i, span): the de Casteljau blend of the `span` control points
/// starting at index `i`.
fn blend_span(
    points: &[ControlPoint],
    i: usize,
    span: usize,
    t: f64,
    memo: &mut [Vec<Option<Point>>],
) -> Point {
    // A single-point span is the control point itself; no blending and no
    // table lookup.
    if span == 1 {
        return points[i].to_point();
    }
    if let Some(cached) = memo[i][span] {
        return cached;
    }

    let left = blend_span(points, i, span - 1, t, memo);
    let right = blend_span(points, i + 1, span - 1, t, memo);
    let blended = left.lerp(&right, t);
    memo[i][span] = Some(blended);
    blended
}
