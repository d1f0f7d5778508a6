//! Curve evaluation: de Casteljau's algorithm in two strategies.
//!
//! Both strategies compute the same point B(t) for a given control polygon
//! and parameter t, and differ only in how the intermediate blends are
//! scheduled:
//!
//! - [`MemoizedEvaluator`]: top-down recursion over (start index, span
//!   length) with a per-t memo table.
//! - [`IterativeEvaluator`]: bottom-up in-place reduction over a rolling
//!   buffer of N-1 points.
//!
//! Keeping both behind one trait makes each an oracle for the other: any
//! input on which they disagree beyond floating-point rounding is a bug.

pub mod iterative;
pub mod memoized;

pub use iterative::IterativeEvaluator;
pub use memoized::MemoizedEvaluator;

use crate::constants::MIN_SAMPLE_COUNT;
use crate::data::{ControlPolygon, Point};
use crate::error::{BezierError, BezierResult};

/// Evaluates a point on the bezier curve defined by a control polygon.
pub trait CurveEvaluator {
    /// Compute B(t) for t in [0, 1]
    fn evaluate(&self, polygon: &ControlPolygon, t: f64) -> Point;
}

/// Which evaluation strategy to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Top-down recursion with a memo table
    Memoized,
    /// Bottom-up in-place reduction
    #[default]
    Iterative,
}

impl Strategy {
    /// Construct the evaluator for this strategy
    pub fn evaluator(&self) -> Box<dyn CurveEvaluator> {
        match self {
            Strategy::Memoized => Box::new(MemoizedEvaluator),
            Strategy::Iterative => Box::new(IterativeEvaluator),
        }
    }
}

/// Sample the curve at `sample_count` evenly spaced parameter values.
///
/// Samples are taken at t_k = k / (M - 1) for k = 0 .. M-1, so the first
/// sample is the curve start (t = 0) and the last is the curve end (t = 1).
/// Points are returned in increasing-t order.
///
/// Returns [`BezierError::TooFewSamples`] for `sample_count < 2`, where the
/// parameter step would be undefined.
pub fn sample_curve(
    polygon: &ControlPolygon,
    sample_count: usize,
    evaluator: &dyn CurveEvaluator,
) -> BezierResult<Vec<Point>> {
    if sample_count < MIN_SAMPLE_COUNT {
        return Err(BezierError::TooFewSamples(sample_count));
    }

    // Each t is computed by direct division rather than by accumulating a
    // step, so both strategies are driven by bit-identical parameters.
    Ok((0..sample_count)
        .map(|k| {
            let t = k as f64 / (sample_count - 1) as f64;
            evaluator.evaluate(polygon, t)
        })
        .collect())
}
