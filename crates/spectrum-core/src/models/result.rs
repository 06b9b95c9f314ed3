use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::color::ColorType;
use super::personality::PersonalityType;
use super::scores::ScoreVector;

/// Everything the scoring engine derives from one submission.
///
/// Identity and timestamp are assigned by storage when the fields are
/// persisted, producing a [`QuizResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ResultFields {
    pub user_id: Option<Uuid>,
    pub scores: ScoreVector,
    pub unconscious_scores: Option<ScoreVector>,
    pub dominant_color: ColorType,
    pub secondary_color: ColorType,
    pub personality_type: PersonalityType,
}

/// A persisted quiz result. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuizResult {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub scores: ScoreVector,
    pub unconscious_scores: Option<ScoreVector>,
    pub dominant_color: ColorType,
    pub secondary_color: ColorType,
    pub personality_type: PersonalityType,
    pub created_at: jiff::Timestamp,
}

impl QuizResult {
    pub fn from_fields(id: Uuid, created_at: jiff::Timestamp, fields: ResultFields) -> Self {
        Self {
            id,
            user_id: fields.user_id,
            scores: fields.scores,
            unconscious_scores: fields.unconscious_scores,
            dominant_color: fields.dominant_color,
            secondary_color: fields.secondary_color,
            personality_type: fields.personality_type,
            created_at,
        }
    }
}
