use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown color: {0}")]
    UnknownColor(String),

    #[error("unknown rating label: {0}")]
    UnknownRating(String),

    #[error("unknown personality type: {0}")]
    UnknownPersonality(String),
}
