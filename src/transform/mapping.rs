//! Categorical value mapping.
//!
//! Unlike the numeric transforms, a value mapping scores category labels:
//! each label is looked up in an ordered table and an unrecognized label
//! falls back to the designated no-match value. That fallback is the normal
//! path, not an error.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueMapping {
    entries: Vec<(String, f64)>,
    no_match: f64,
}

impl ValueMapping {
    /// Build a mapping from ordered `(label, value)` entries. `no_match` is
    /// returned for any label absent from the table.
    pub fn new(entries: Vec<(String, f64)>, no_match: f64) -> Self {
        Self { entries, no_match }
    }

    /// The two-entry form the config builder populates: a positive-match
    /// threshold under the component's own name and a `"No <component>"`
    /// threshold that doubles as the no-match fallback.
    pub fn matched_pair(component: &str, matched: f64, unmatched: f64) -> Self {
        Self {
            entries: vec![
                (component.to_string(), matched),
                (format!("No {component}"), unmatched),
            ],
            no_match: unmatched,
        }
    }

    /// Entries in insertion order, as emitted into the config mapping table.
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    pub fn no_match(&self) -> f64 {
        self.no_match
    }

    pub fn lookup(&self, label: &str) -> f64 {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, value)| *value)
            .unwrap_or(self.no_match)
    }

    /// Score a sequence of labels. Output index `i` corresponds to label `i`.
    pub fn apply<S: AsRef<str>>(&self, labels: &[S]) -> Vec<f64> {
        labels.iter().map(|l| self.lookup(l.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_match_and_fallback() {
        let mapping = ValueMapping::new(
            vec![("Match".to_string(), 1.0), ("No Match".to_string(), 0.0)],
            0.0,
        );
        assert_eq!(mapping.lookup("Match"), 1.0);
        assert_eq!(mapping.lookup("No Match"), 0.0);
        assert_eq!(mapping.lookup("Unknown"), 0.0);
    }

    #[test]
    fn test_matched_pair_labels() {
        let mapping = ValueMapping::matched_pair("MMP", 0.5, 0.0);
        assert_eq!(
            mapping.entries(),
            &[("MMP".to_string(), 0.5), ("No MMP".to_string(), 0.0)]
        );
        assert_eq!(mapping.lookup("MMP"), 0.5);
        assert_eq!(mapping.lookup("No MMP"), 0.0);
        assert_eq!(mapping.lookup("something else"), 0.0);
    }

    #[test]
    fn test_apply_preserves_order() {
        let mapping = ValueMapping::matched_pair("MMP", 0.5, 0.1);
        let labels = ["No MMP", "MMP", "???", "MMP"];
        assert_eq!(mapping.apply(&labels), vec![0.1, 0.5, 0.1, 0.5]);
    }

    #[test]
    fn test_values_outside_unit_interval_pass_through() {
        let mapping = ValueMapping::new(vec![("hot".to_string(), 2.5)], -1.0);
        assert_eq!(mapping.lookup("hot"), 2.5);
        assert_eq!(mapping.lookup("cold"), -1.0);
    }
}
