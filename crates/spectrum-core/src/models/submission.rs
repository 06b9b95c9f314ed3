use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::color::ColorType;
use super::personality::PersonalityType;
use super::result::QuizResult;
use super::scores::ScoreVector;

/// An answer as it arrives over the wire, before validation.
///
/// Colors and ratings stay untyped here so that unknown values surface as
/// validation failures rather than deserialization errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmittedAnswer {
    pub question_id: u32,
    pub selected_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<RatingInput>,
}

/// Clients send ratings either as labels (`"L"`, `"3"`, `"M"`) or as bare
/// numbers for the intermediate values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum RatingInput {
    Label(String),
    Number(i64),
}

impl RatingInput {
    pub fn as_label(&self) -> String {
        match self {
            RatingInput::Label(s) => s.clone(),
            RatingInput::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmissionRequest {
    pub answers: Vec<SubmittedAnswer>,
    /// Second answer set for dual-profile assessments.
    #[serde(default)]
    pub unconscious_answers: Option<Vec<SubmittedAnswer>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub scores: ScoreVector,
    pub dominant_color: ColorType,
    pub secondary_color: ColorType,
    pub personality_type: PersonalityType,
}

impl From<&QuizResult> for SubmissionResponse {
    fn from(result: &QuizResult) -> Self {
        Self {
            id: result.id,
            scores: result.scores,
            dominant_color: result.dominant_color,
            secondary_color: result.secondary_color,
            personality_type: result.personality_type,
        }
    }
}
