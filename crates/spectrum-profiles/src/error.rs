use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("duplicate question id: {0}")]
    DuplicateQuestion(u32),

    #[error("question {question_id} is malformed: {reason}")]
    MalformedQuestion { question_id: u32, reason: String },

    #[error("question bank is empty")]
    EmptyBank,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
