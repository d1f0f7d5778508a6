//! Shared numeric constants.

/// Tolerance used when comparing points produced by the two evaluation
/// strategies; both compute the same blends in a different order, so they
/// agree only up to floating-point rounding.
pub const STRATEGY_EPSILON: f64 = 1e-9;

/// Number of decimal places in the point table output format.
pub const OUTPUT_PRECISION: usize = 2;

/// Smallest sample count for which the parameter step 1/(M-1) is defined.
pub const MIN_SAMPLE_COUNT: usize = 2;
