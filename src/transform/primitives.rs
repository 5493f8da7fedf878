//! Numerically-stable element-wise primitives for the sigmoid family.
//!
//! The named transforms never call `exp` on an unbounded argument. The
//! logistic is evaluated in two mathematically identical forms split on the
//! sign of the exponent so that `exp` only ever sees a non-positive input,
//! and the degenerate `high == low` case is routed to a hard 0/1 step
//! instead of dividing by a zero-width threshold window.

use std::f64::consts::LN_10;

/// Hard decision boundary: `1.0` iff `k * x > 0`, else `0.0`.
///
/// NaN inputs fail the comparison and map to `0.0`.
pub fn hard_step_scalar(x: f64, k: f64) -> f64 {
    if k * x > 0.0 { 1.0 } else { 0.0 }
}

/// Base-10 logistic `1 / (1 + exp(-k * x * ln 10))`, branch-safe.
///
/// For `h = k * x * ln 10 >= 0` the direct form is used; for negative `h`
/// the equivalent `exp(h) / (1 + exp(h))` avoids overflowing `exp`. Both
/// forms yield exactly `0.5` at `h = 0`. NaN propagates.
pub fn stable_logistic_scalar(x: f64, k: f64) -> f64 {
    let h = k * x * LN_10;
    if h >= 0.0 {
        1.0 / (1.0 + (-h).exp())
    } else {
        let e = h.exp();
        e / (1.0 + e)
    }
}

pub fn hard_step(values: &[f64], k: f64) -> Vec<f64> {
    values.iter().map(|&x| hard_step_scalar(x, k)).collect()
}

pub fn stable_logistic(values: &[f64], k: f64) -> Vec<f64> {
    values.iter().map(|&x| stable_logistic_scalar(x, k)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_step_sign() {
        assert_eq!(hard_step_scalar(1.0, 2.0), 1.0);
        assert_eq!(hard_step_scalar(-1.0, 2.0), 0.0);
        assert_eq!(hard_step_scalar(0.0, 2.0), 0.0);
        // Negative steepness flips the boundary.
        assert_eq!(hard_step_scalar(1.0, -2.0), 0.0);
        assert_eq!(hard_step_scalar(-1.0, -2.0), 1.0);
    }

    #[test]
    fn test_hard_step_zero_k() {
        assert_eq!(hard_step_scalar(1e9, 0.0), 0.0);
        assert_eq!(hard_step_scalar(-1e9, 0.0), 0.0);
    }

    #[test]
    fn test_hard_step_nan_maps_to_zero() {
        assert_eq!(hard_step_scalar(f64::NAN, 1.0), 0.0);
    }

    #[test]
    fn test_logistic_branch_boundary_is_half() {
        // h = 0 takes the non-negative branch and must give exactly 0.5;
        // the negative-branch form at h = 0 is identical by algebra.
        assert_eq!(stable_logistic_scalar(0.0, 1.0), 0.5);
        let e = 0.0f64.exp();
        assert_eq!(e / (1.0 + e), 0.5);
    }

    #[test]
    fn test_logistic_branch_continuity() {
        let below = stable_logistic_scalar(-1e-12, 1.0);
        let above = stable_logistic_scalar(1e-12, 1.0);
        assert!((below - 0.5).abs() < 1e-11);
        assert!((above - 0.5).abs() < 1e-11);
        assert!(below <= above);
    }

    #[test]
    fn test_logistic_no_overflow_at_extremes() {
        let lo = stable_logistic_scalar(-1e6, 10.0);
        let hi = stable_logistic_scalar(1e6, 10.0);
        assert!(lo.is_finite() && lo >= 0.0);
        assert!(hi.is_finite() && hi <= 1.0);
        assert!(lo < 1e-300 || lo == 0.0);
        assert!(hi == 1.0);
    }

    #[test]
    fn test_logistic_range_and_monotonicity() {
        let xs: Vec<f64> = (-100..=100).map(|i| i as f64 * 0.5).collect();
        let ys = stable_logistic(&xs, 0.7);
        for w in ys.windows(2) {
            assert!(w[1] >= w[0]);
        }
        for y in &ys {
            assert!(*y >= 0.0 && *y <= 1.0);
        }
    }

    #[test]
    fn test_logistic_nan_propagates() {
        assert!(stable_logistic_scalar(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_slice_wrappers_preserve_length() {
        let xs = [3.0, -1.0, 0.5, 7.0];
        assert_eq!(hard_step(&xs, 1.0).len(), xs.len());
        assert_eq!(stable_logistic(&xs, 1.0).len(), xs.len());
    }
}
