//! Config-field emission.
//!
//! The downstream generator reads a transform as a flat set of
//! `transform.*` keys inside a scoring-component endpoint. This module
//! produces the canonical `(key, value)` pairs for a [`Transform`] and
//! renders them either as literal TOML lines (the format the config
//! builder appends to its input file) or as a JSON fragment.

use serde_json::{Map, Value, json};

use crate::transform::Transform;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Text(String),
    /// Threshold-like number, rendered with full precision.
    Number(f64),
    /// Scaling factor, conventionally rendered with two decimals.
    Factor(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigField {
    pub key: String,
    pub value: ConfigValue,
}

fn field(key: &str, value: ConfigValue) -> ConfigField {
    ConfigField {
        key: key.to_string(),
        value,
    }
}

/// The ordered `(key, value)` pairs a transform contributes to its
/// endpoint. Field order matches the config builder's output, including
/// the Step quirk of writing `high` before `low`. Mapping entries appear
/// as `transform.mapping.<label>` pairs.
pub fn config_fields(transform: &Transform) -> Vec<ConfigField> {
    let type_field = field(
        "transform.type",
        ConfigValue::Text(transform.kind().config_name().to_string()),
    );
    match transform {
        Transform::Sigmoid { low, high, k } | Transform::ReverseSigmoid { low, high, k } => vec![
            type_field,
            field("transform.low", ConfigValue::Number(*low)),
            field("transform.high", ConfigValue::Number(*high)),
            field("transform.k", ConfigValue::Factor(*k)),
        ],
        Transform::DoubleSigmoid {
            low,
            high,
            k_common,
            k_left,
            k_right,
        } => vec![
            type_field,
            field("transform.low", ConfigValue::Number(*low)),
            field("transform.high", ConfigValue::Number(*high)),
            field("transform.coef_div", ConfigValue::Factor(*k_common)),
            field("transform.coef_si", ConfigValue::Factor(*k_left)),
            field("transform.coef_se", ConfigValue::Factor(*k_right)),
        ],
        Transform::Step { low, high } => vec![
            type_field,
            field("transform.high", ConfigValue::Number(*high)),
            field("transform.low", ConfigValue::Number(*low)),
        ],
        Transform::LeftStep { low } => vec![
            type_field,
            field("transform.low", ConfigValue::Number(*low)),
        ],
        Transform::RightStep { high } => vec![
            type_field,
            field("transform.high", ConfigValue::Number(*high)),
        ],
        Transform::ValueMapping(mapping) => {
            let mut fields = vec![type_field];
            for (label, value) in mapping.entries() {
                fields.push(field(
                    &format!("transform.mapping.{label}"),
                    ConfigValue::Number(*value),
                ));
            }
            fields
        }
    }
}

/// Render the transform as the TOML lines appended under a component's
/// endpoint table. `component` is the component's canonical config key,
/// used for the mapping sub-table header.
pub fn render_toml(transform: &Transform, component: &str) -> String {
    let mut out = String::new();
    if let Transform::ValueMapping(mapping) = transform {
        out.push_str("transform.type = \"value_mapping\"\n");
        out.push_str(&format!(
            "[scoring.component.{component}.endpoint.transform.mapping]\n"
        ));
        for (label, value) in mapping.entries() {
            out.push_str(&format!(
                "{} = {}\n",
                toml_key(label),
                fmt_number(*value)
            ));
        }
        return out;
    }
    for f in config_fields(transform) {
        let rendered = match f.value {
            ConfigValue::Text(s) => format!("\"{s}\""),
            ConfigValue::Number(v) => fmt_number(v),
            ConfigValue::Factor(v) => format!("{v:.2}"),
        };
        out.push_str(&format!("{} = {}\n", f.key, rendered));
    }
    out
}

/// Render the transform as a `{"transform": {...}}` JSON fragment.
pub fn render_json(transform: &Transform) -> Value {
    let mut inner = Map::new();
    inner.insert(
        "type".to_string(),
        Value::String(transform.kind().config_name().to_string()),
    );
    match transform {
        Transform::ValueMapping(mapping) => {
            let mut table = Map::new();
            for (label, value) in mapping.entries() {
                table.insert(label.clone(), json!(value));
            }
            inner.insert("mapping".to_string(), Value::Object(table));
        }
        _ => {
            for f in config_fields(transform).into_iter().skip(1) {
                let key = f.key.trim_start_matches("transform.").to_string();
                let value = match f.value {
                    ConfigValue::Text(s) => Value::String(s),
                    ConfigValue::Number(v) | ConfigValue::Factor(v) => json!(v),
                };
                inner.insert(key, value);
            }
        }
    }
    json!({ "transform": inner })
}

fn fmt_number(v: f64) -> String {
    // 50.0 stays "50.0", 0.33 stays "0.33"; TOML floats need the dot.
    format!("{v:?}")
}

fn toml_key(label: &str) -> String {
    let bare = !label.is_empty()
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        label.to_string()
    } else {
        format!("\"{label}\"")
    }
}
