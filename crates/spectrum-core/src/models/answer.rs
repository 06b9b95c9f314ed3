use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::color::ColorType;
use super::rating::RatingLabel;

/// One rated option of one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Answer {
    pub question_id: u32,
    pub color: ColorType,
    pub rating: RatingLabel,
}

impl Answer {
    pub fn new(question_id: u32, color: ColorType, rating: RatingLabel) -> Self {
        Self {
            question_id,
            color,
            rating,
        }
    }
}

/// A single-select answer from the legacy submission path: the respondent
/// picked one color for the question, nothing is rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Selection {
    pub question_id: u32,
    pub color: ColorType,
}
