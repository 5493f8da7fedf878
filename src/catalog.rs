//! Scoring-component catalog.
//!
//! Read-only table of the scoring components the config builder offers,
//! each with its canonical config key, its default transform kind, and the
//! conventional default thresholds. Components whose raw output is already
//! a usable score (alerts, substructure matches, reaction filters) carry no
//! default transform.

use crate::transform::mapping::ValueMapping;
use crate::transform::{DEFAULT_K, DEFAULT_K_COMMON, DEFAULT_K_SIDE, Transform, TransformKind};

#[derive(Debug, Clone, Copy)]
pub struct ComponentDef {
    pub name: &'static str,
    /// Key used in `[scoring.component.<key>]` tables; differs from the
    /// display name for a few components.
    pub config_key: &'static str,
    pub default_kind: Option<TransformKind>,
    pub low: f64,
    pub high: f64,
}

const SIGMOID_LOW: f64 = 50.0;
const SIGMOID_HIGH: f64 = 100.0;
const STEP_LOW: f64 = 0.0;
const STEP_HIGH: f64 = 5.0;

const fn sigmoid_comp(name: &'static str) -> ComponentDef {
    ComponentDef {
        name,
        config_key: name,
        default_kind: Some(TransformKind::Sigmoid),
        low: SIGMOID_LOW,
        high: SIGMOID_HIGH,
    }
}

const fn step_comp(name: &'static str) -> ComponentDef {
    ComponentDef {
        name,
        config_key: name,
        default_kind: Some(TransformKind::Step),
        low: STEP_LOW,
        high: STEP_HIGH,
    }
}

const fn raw_comp(name: &'static str, config_key: &'static str) -> ComponentDef {
    ComponentDef {
        name,
        config_key,
        default_kind: None,
        low: f64::NAN,
        high: f64::NAN,
    }
}

pub const COMPONENTS: &[ComponentDef] = &[
    // Basic molecular physical properties.
    sigmoid_comp("SlogP"),
    sigmoid_comp("MolecularWeight"),
    sigmoid_comp("TPSA"),
    sigmoid_comp("GraphLength"),
    step_comp("NumAtomStereoCenters"),
    step_comp("HBondAcceptors"),
    step_comp("HBondDonors"),
    step_comp("NumRotBond"),
    step_comp("Csp3"),
    step_comp("numsp"),
    step_comp("numsp2"),
    step_comp("numsp3"),
    step_comp("NumHeavyAtoms"),
    step_comp("NumHeteroAtoms"),
    step_comp("NumRings"),
    step_comp("NumAromaticRings"),
    step_comp("NumAliphaticRings"),
    sigmoid_comp("PMI"),
    sigmoid_comp("MolVolume"),
    // Similarity and cheminformatics components.
    raw_comp("CustomAlerts", "custom_alerts"),
    step_comp("GroupCount"),
    raw_comp("MatchingSubstructure", "MatchingSubstructure"),
    raw_comp("TanimotoSimilarity", "TanimotoDistance"),
    ComponentDef {
        name: "MMP",
        config_key: "MMP",
        default_kind: Some(TransformKind::ValueMapping),
        low: 0.0,
        high: 0.5,
    },
    sigmoid_comp("ROCSSimilarity"),
    // Physics/structure/ligand based components.
    sigmoid_comp("DockStream"),
    // QSAR/QSPR model-related components.
    sigmoid_comp("AutoQSAR"),
    sigmoid_comp("DeepQSAR"),
    ComponentDef {
        name: "pADME",
        config_key: "PADME",
        default_kind: Some(TransformKind::Sigmoid),
        low: SIGMOID_LOW,
        high: SIGMOID_HIGH,
    },
    // Drug-likeness, synthesizability and reactions.
    sigmoid_comp("QED"),
    sigmoid_comp("SAScore"),
    raw_comp("ReactionFilter", "ReactionFilter"),
    // Linker-specific physchem properties.
    sigmoid_comp("FragmentMolecularWeight"),
    sigmoid_comp("FragmentGraphLength"),
    step_comp("FragmentHBondAcceptors"),
    step_comp("FragmentHBondDonors"),
    step_comp("FragmentNumRotBond"),
    step_comp("Fragmentnumsp"),
    step_comp("Fragmentnumsp2"),
    step_comp("Fragmentnumsp3"),
    step_comp("FragmentNumRings"),
    step_comp("FragmentNumAromaticRings"),
    step_comp("FragmentNumAliphaticRings"),
];

pub fn find(name: &str) -> Option<&'static ComponentDef> {
    COMPONENTS.iter().find(|c| c.name == name)
}

/// The default transform a component starts out with, or `None` for
/// components that are scored raw. MMP's default is the two-entry value
/// mapping the config builder seeds (`high` as the match threshold, `low`
/// as the no-match threshold).
pub fn default_transform(name: &str) -> Option<Transform> {
    let def = find(name)?;
    let kind = def.default_kind?;
    Some(match kind {
        TransformKind::Sigmoid => Transform::Sigmoid {
            low: def.low,
            high: def.high,
            k: DEFAULT_K,
        },
        TransformKind::ReverseSigmoid => Transform::ReverseSigmoid {
            low: def.low,
            high: def.high,
            k: DEFAULT_K,
        },
        TransformKind::DoubleSigmoid => Transform::DoubleSigmoid {
            low: def.low,
            high: def.high,
            k_common: DEFAULT_K_COMMON,
            k_left: DEFAULT_K_SIDE,
            k_right: DEFAULT_K_SIDE,
        },
        TransformKind::Step => Transform::Step {
            low: def.low,
            high: def.high,
        },
        TransformKind::LeftStep => Transform::LeftStep { low: def.low },
        TransformKind::RightStep => Transform::RightStep { high: def.high },
        TransformKind::ValueMapping => {
            Transform::ValueMapping(ValueMapping::matched_pair(def.name, def.high, def.low))
        }
    })
}
