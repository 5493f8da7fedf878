//! Curve sampling for transform previews.
//!
//! A visualization caller treats the evaluator as a black box: it asks for
//! a dense linspace over the interesting x-range and plots the resulting
//! curve. 100 points is the conventional density.

use serde::Serialize;

use crate::transform::Transform;

pub const DEFAULT_POINTS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Evenly spaced values from `min` to `max` inclusive.
pub fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![min],
        _ => (0..n)
            .map(|i| min + (max - min) * i as f64 / (n - 1) as f64)
            .collect(),
    }
}

pub fn sample(transform: &Transform, min: f64, max: f64, n: usize) -> Vec<CurvePoint> {
    let xs = linspace(min, max, n);
    let ys = transform.apply(&xs);
    xs.into_iter()
        .zip(ys)
        .map(|(x, y)| CurvePoint { x, y })
        .collect()
}
