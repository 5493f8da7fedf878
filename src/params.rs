//! Loosely-typed transform parameter records.
//!
//! A record arrives sparse, from a saved UI state, a CLI invocation, or a
//! scoring-file fragment, and is resolved against a chosen kind into a
//! validated [`Transform`]. Missing required fields are rejected here, at
//! construction time; evaluation itself never errors.

use serde::Deserialize;
use thiserror::Error;

use crate::transform::mapping::ValueMapping;
use crate::transform::{
    DEFAULT_K, DEFAULT_K_COMMON, DEFAULT_K_SIDE, Transform, TransformKind,
};

#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("{kind} transform requires `{field}`")]
    MissingField {
        kind: TransformKind,
        field: &'static str,
    },
    #[error("value_mapping transform requires at least one mapping entry")]
    EmptyMapping,
}

/// Raw parameter record. Field names mirror the config keys of the
/// downstream tool; the double-sigmoid coefficients also accept their
/// legacy `coef_*` spellings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformParams {
    pub low: Option<f64>,
    pub high: Option<f64>,
    pub k: Option<f64>,
    #[serde(alias = "coef_div")]
    pub k_common: Option<f64>,
    #[serde(alias = "coef_si")]
    pub k_left: Option<f64>,
    #[serde(alias = "coef_se")]
    pub k_right: Option<f64>,
    pub mapping: Option<Vec<(String, f64)>>,
    pub no_match: Option<f64>,
}

impl TransformParams {
    /// Validate the record against `kind` and build the transform. Optional
    /// steepness fields fall back to the conventional defaults; thresholds
    /// are required where the kind uses them.
    pub fn resolve(&self, kind: TransformKind) -> Result<Transform, ParamError> {
        let require = |field: &'static str, value: Option<f64>| {
            value.ok_or(ParamError::MissingField { kind, field })
        };
        match kind {
            TransformKind::Sigmoid => Ok(Transform::Sigmoid {
                low: require("low", self.low)?,
                high: require("high", self.high)?,
                k: self.k.unwrap_or(DEFAULT_K),
            }),
            TransformKind::ReverseSigmoid => Ok(Transform::ReverseSigmoid {
                low: require("low", self.low)?,
                high: require("high", self.high)?,
                k: self.k.unwrap_or(DEFAULT_K),
            }),
            TransformKind::DoubleSigmoid => Ok(Transform::DoubleSigmoid {
                low: require("low", self.low)?,
                high: require("high", self.high)?,
                k_common: self.k_common.unwrap_or(DEFAULT_K_COMMON),
                k_left: self.k_left.unwrap_or(DEFAULT_K_SIDE),
                k_right: self.k_right.unwrap_or(DEFAULT_K_SIDE),
            }),
            TransformKind::Step => Ok(Transform::Step {
                low: require("low", self.low)?,
                high: require("high", self.high)?,
            }),
            TransformKind::LeftStep => Ok(Transform::LeftStep {
                low: require("low", self.low)?,
            }),
            TransformKind::RightStep => Ok(Transform::RightStep {
                high: require("high", self.high)?,
            }),
            TransformKind::ValueMapping => {
                let entries = self.mapping.clone().unwrap_or_default();
                if entries.is_empty() {
                    return Err(ParamError::EmptyMapping);
                }
                let no_match = self
                    .no_match
                    .or_else(|| {
                        entries
                            .iter()
                            .find(|(label, _)| label.starts_with("No "))
                            .map(|(_, value)| *value)
                    })
                    .unwrap_or(0.0);
                Ok(Transform::ValueMapping(ValueMapping::new(entries, no_match)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_defaults_k() {
        let params = TransformParams {
            low: Some(50.0),
            high: Some(100.0),
            ..Default::default()
        };
        let t = params.resolve(TransformKind::Sigmoid).unwrap();
        assert_eq!(t, Transform::Sigmoid { low: 50.0, high: 100.0, k: 0.5 });
    }

    #[test]
    fn test_missing_low_rejected_eagerly() {
        let params = TransformParams {
            high: Some(100.0),
            ..Default::default()
        };
        let err = params.resolve(TransformKind::Sigmoid).unwrap_err();
        assert_eq!(
            err,
            ParamError::MissingField {
                kind: TransformKind::Sigmoid,
                field: "low"
            }
        );
        assert_eq!(err.to_string(), "Sigmoid transform requires `low`");
    }

    #[test]
    fn test_double_sigmoid_defaults() {
        let params = TransformParams {
            low: Some(40.0),
            high: Some(60.0),
            ..Default::default()
        };
        let t = params.resolve(TransformKind::DoubleSigmoid).unwrap();
        assert_eq!(
            t,
            Transform::DoubleSigmoid {
                low: 40.0,
                high: 60.0,
                k_common: 100.0,
                k_left: 10.0,
                k_right: 10.0,
            }
        );
    }

    #[test]
    fn test_step_kinds_require_their_threshold() {
        let empty = TransformParams::default();
        assert!(empty.resolve(TransformKind::LeftStep).is_err());
        assert!(empty.resolve(TransformKind::RightStep).is_err());

        let low_only = TransformParams {
            low: Some(2.0),
            ..Default::default()
        };
        assert!(low_only.resolve(TransformKind::LeftStep).is_ok());
        assert_eq!(
            low_only.resolve(TransformKind::Step).unwrap_err(),
            ParamError::MissingField {
                kind: TransformKind::Step,
                field: "high"
            }
        );
    }

    #[test]
    fn test_value_mapping_requires_entries() {
        let empty = TransformParams::default();
        assert_eq!(
            empty.resolve(TransformKind::ValueMapping).unwrap_err(),
            ParamError::EmptyMapping
        );
    }

    #[test]
    fn test_value_mapping_no_match_inferred_from_no_label() {
        let params = TransformParams {
            mapping: Some(vec![
                ("MMP".to_string(), 0.5),
                ("No MMP".to_string(), 0.1),
            ]),
            ..Default::default()
        };
        let t = params.resolve(TransformKind::ValueMapping).unwrap();
        let Transform::ValueMapping(mapping) = t else {
            panic!("expected value mapping");
        };
        assert_eq!(mapping.no_match(), 0.1);
        assert_eq!(mapping.lookup("unseen"), 0.1);
    }

    #[test]
    fn test_deserialize_legacy_coef_names() {
        let params: TransformParams = serde_json::from_str(
            r#"{"low": 40.0, "high": 60.0, "coef_div": 50.0, "coef_si": 5.0, "coef_se": 7.0}"#,
        )
        .unwrap();
        let t = params.resolve(TransformKind::DoubleSigmoid).unwrap();
        assert_eq!(
            t,
            Transform::DoubleSigmoid {
                low: 40.0,
                high: 60.0,
                k_common: 50.0,
                k_left: 5.0,
                k_right: 7.0,
            }
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let res: Result<TransformParams, _> =
            serde_json::from_str(r#"{"low": 1.0, "steepness": 3.0}"#);
        assert!(res.is_err());
    }
}
