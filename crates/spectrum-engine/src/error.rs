use thiserror::Error;

use spectrum_core::models::color::ColorType;
use spectrum_core::models::rating::RatingLabel;

/// Malformed or incomplete answer input. Always fixable by resubmitting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no answers submitted")]
    EmptyAnswers,

    #[error("question {question_id}: unknown color '{value}'")]
    UnknownColor { question_id: u32, value: String },

    #[error("question {question_id}: unknown rating '{value}' (expected L, 1-5 or M)")]
    UnknownRating { question_id: u32, value: String },

    #[error("question {question_id}: expected 4 rated colors, found {answered}")]
    IncompleteQuestion { question_id: u32, answered: usize },

    #[error("question {question_id}: color {color} rated more than once")]
    DuplicateColor { question_id: u32, color: ColorType },

    #[error("question {question_id}: rating {rating} used more than once")]
    DuplicateRating {
        question_id: u32,
        rating: RatingLabel,
    },

    #[error("question {question_id}: no color rated L")]
    MissingLeast { question_id: u32 },

    #[error("question {question_id}: no color rated M")]
    MissingMost { question_id: u32 },

    #[error("answers mix rated and single-select entries")]
    MixedAnswerModes,

    #[error("question {question_id}: answered more than once")]
    DuplicateSelection { question_id: u32 },

    #[error("question {question_id} does not exist")]
    UnknownQuestion { question_id: u32 },
}
