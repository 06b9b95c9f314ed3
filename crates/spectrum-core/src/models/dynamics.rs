use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::color::ColorType;
use super::scores::ColorMap;

/// Point-scale view of one persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PersonaLevel {
    /// 0–6 scale, two decimal places.
    pub values: ColorMap<f64>,
    /// `values` expressed as a share of the 6-point scale, 0–100.
    pub percentages: ColorMap<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PreferenceFlow {
    /// Spread between the strongest and weakest energy, 0–100.
    pub value: u32,
    pub top_color: ColorType,
    pub bottom_color: ColorType,
    /// Signed per-color flow in `[-100, 100]`; positive trends upward.
    pub color_flow: ColorMap<i32>,
}

/// Derived on demand from a score vector; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PersonaDynamics {
    pub conscious: PersonaLevel,
    pub less_conscious: PersonaLevel,
    pub preference_flow: PreferenceFlow,
}

/// Dynamics for both answer sets of a stored result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultDynamics {
    pub conscious: PersonaDynamics,
    /// Present only for dual-profile results.
    pub unconscious: Option<PersonaDynamics>,
}
