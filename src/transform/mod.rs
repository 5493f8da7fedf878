//! The transform evaluator.
//!
//! Every transform is a pure function from a raw score array to a
//! desirability array of the same length; index `i` of the output always
//! corresponds to index `i` of the input. Evaluation never fails: NaN and
//! infinity flow through the arithmetic under IEEE-754 semantics, and
//! inverted bounds (`low > high`) follow the literal formulas rather than
//! being repaired.

pub mod mapping;
pub mod primitives;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::mapping::ValueMapping;
use self::primitives::{hard_step_scalar, stable_logistic_scalar};

/// Default steepness for the single-sigmoid pair.
pub const DEFAULT_K: f64 = 0.5;
/// Default common scaling factor for the double sigmoid.
pub const DEFAULT_K_COMMON: f64 = 100.0;
/// Default per-side scaling factor for the double sigmoid.
pub const DEFAULT_K_SIDE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransformKind {
    Sigmoid,
    ReverseSigmoid,
    DoubleSigmoid,
    Step,
    LeftStep,
    RightStep,
    ValueMapping,
}

impl TransformKind {
    /// The exact `transform.type` string the downstream tool expects.
    /// Note that value mapping is the one kind spelled in lower case.
    pub fn config_name(self) -> &'static str {
        match self {
            TransformKind::Sigmoid => "Sigmoid",
            TransformKind::ReverseSigmoid => "Reverse_Sigmoid",
            TransformKind::DoubleSigmoid => "Double_Sigmoid",
            TransformKind::Step => "Step",
            TransformKind::LeftStep => "Left_Step",
            TransformKind::RightStep => "Right_Step",
            TransformKind::ValueMapping => "value_mapping",
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_name())
    }
}

impl FromStr for TransformKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "sigmoid" => Ok(TransformKind::Sigmoid),
            "reverse_sigmoid" => Ok(TransformKind::ReverseSigmoid),
            "double_sigmoid" => Ok(TransformKind::DoubleSigmoid),
            "step" => Ok(TransformKind::Step),
            "left_step" => Ok(TransformKind::LeftStep),
            "right_step" => Ok(TransformKind::RightStep),
            "value_mapping" => Ok(TransformKind::ValueMapping),
            other => Err(format!(
                "unknown transform type: {other} (use sigmoid|reverse_sigmoid|double_sigmoid|step|left_step|right_step|value_mapping)"
            )),
        }
    }
}

/// A transform selection together with its validated parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Transform {
    Sigmoid { low: f64, high: f64, k: f64 },
    ReverseSigmoid { low: f64, high: f64, k: f64 },
    DoubleSigmoid {
        low: f64,
        high: f64,
        k_common: f64,
        k_left: f64,
        k_right: f64,
    },
    Step { low: f64, high: f64 },
    LeftStep { low: f64 },
    RightStep { high: f64 },
    ValueMapping(ValueMapping),
}

impl Transform {
    pub fn kind(&self) -> TransformKind {
        match self {
            Transform::Sigmoid { .. } => TransformKind::Sigmoid,
            Transform::ReverseSigmoid { .. } => TransformKind::ReverseSigmoid,
            Transform::DoubleSigmoid { .. } => TransformKind::DoubleSigmoid,
            Transform::Step { .. } => TransformKind::Step,
            Transform::LeftStep { .. } => TransformKind::LeftStep,
            Transform::RightStep { .. } => TransformKind::RightStep,
            Transform::ValueMapping(_) => TransformKind::ValueMapping,
        }
    }

    /// Evaluate over a raw score array. Output length equals input length
    /// and order is preserved. Never panics for any numeric input.
    ///
    /// A `ValueMapping` scores labels, not numbers; over numeric input every
    /// element takes the no-match value. Use [`ValueMapping::apply`] for
    /// label input.
    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        match self {
            Transform::Sigmoid { low, high, k } => sigmoid(values, *k, *low, *high),
            Transform::ReverseSigmoid { low, high, k } => sigmoid(values, *k, *low, *high)
                .into_iter()
                .map(|y| 1.0 - y)
                .collect(),
            Transform::DoubleSigmoid {
                low,
                high,
                k_common,
                k_left,
                k_right,
            } => double_sigmoid(values, *low, *high, *k_common, *k_left, *k_right),
            Transform::Step { low, high } => values
                .iter()
                .map(|&x| if *low <= x && x <= *high { 1.0 } else { 0.0 })
                .collect(),
            Transform::LeftStep { low } => values
                .iter()
                .map(|&x| if x <= *low { 1.0 } else { 0.0 })
                .collect(),
            Transform::RightStep { high } => values
                .iter()
                .map(|&x| if x >= *high { 1.0 } else { 0.0 })
                .collect(),
            Transform::ValueMapping(mapping) => values
                .iter()
                .map(|_| mapping.no_match())
                .collect(),
        }
    }
}

/// Shift by the midpoint of `[low, high]`, then apply the logistic with an
/// effective steepness of `10 * k / (high - low)`. A zero-width window
/// degenerates into a hard step at the shared threshold, scaled by `10 * k`.
fn sigmoid(values: &[f64], k: f64, low: f64, high: f64) -> Vec<f64> {
    let center = (high + low) / 2.0;
    if high - low == 0.0 {
        let k = 10.0 * k;
        values
            .iter()
            .map(|&v| hard_step_scalar(v - center, k))
            .collect()
    } else {
        let k = 10.0 * k / (high - low);
        values
            .iter()
            .map(|&v| stable_logistic_scalar(v - center, k))
            .collect()
    }
}

/// Two independently-stabilized half sigmoids meeting at
/// `x_center = (high - low) / 2 + low`: the left half rises through `low`,
/// the right half falls through `high`. Each element is routed to exactly
/// one side; `k_common == 0` replaces both sides with hard steps.
fn double_sigmoid(
    values: &[f64],
    low: f64,
    high: f64,
    k_common: f64,
    k_left: f64,
    k_right: f64,
) -> Vec<f64> {
    let x_center = (high - low) / 2.0 + low;
    if k_common == 0.0 {
        values
            .iter()
            .map(|&x| {
                if x < x_center {
                    hard_step_scalar(x - low, k_left)
                } else {
                    1.0 - hard_step_scalar(x - high, k_right)
                }
            })
            .collect()
    } else {
        let k_left = k_left / k_common;
        let k_right = k_right / k_common;
        values
            .iter()
            .map(|&x| {
                if x < x_center {
                    stable_logistic_scalar(x - low, k_left)
                } else {
                    1.0 - stable_logistic_scalar(x - high, k_right)
                }
            })
            .collect()
    }
}
