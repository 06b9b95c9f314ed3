use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::color::ColorType;
use super::personality::PersonalityType;
use super::scores::{ColorMap, ScoreVector};

/// How a second profile differs from a first one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProfileComparison {
    /// `b - a` per color, in percentage points.
    pub deltas: ColorMap<i64>,
    /// Sum of absolute deltas.
    pub distance: u64,
    pub largest_shift: ColorType,
    pub same_dominant: bool,
    pub same_personality: bool,
}

/// Aggregate view of a group of results, for dashboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TeamSummary {
    pub member_count: u32,
    pub average_scores: ScoreVector,
    pub dominant_colors: ColorMap<u32>,
    pub personality_types: BTreeMap<PersonalityType, u32>,
}
