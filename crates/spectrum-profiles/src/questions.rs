//! The question bank.
//!
//! Questions are immutable records addressed by integer id. A bank is built
//! once at startup (from the built-in set or a JSON file) and shared
//! read-only afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use spectrum_core::models::color::ColorType;

use crate::error::ProfileError;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionOption {
    pub text: String,
    pub color: ColorType,
}

/// One quiz question. Its four options cover each color exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn option_for(&self, color: ColorType) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.color == color)
    }

    fn validate(&self) -> Result<(), ProfileError> {
        if self.options.len() != ColorType::ALL.len() {
            return Err(ProfileError::MalformedQuestion {
                question_id: self.id,
                reason: format!("expected 4 options, found {}", self.options.len()),
            });
        }
        for color in ColorType::ALL {
            let count = self.options.iter().filter(|o| o.color == color).count();
            if count != 1 {
                return Err(ProfileError::MalformedQuestion {
                    question_id: self.id,
                    reason: format!("color {color} appears {count} times"),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
    by_id: HashMap<u32, usize>,
}

impl QuestionBank {
    /// Build a bank, rejecting duplicate ids and malformed option sets.
    pub fn new(questions: Vec<Question>) -> Result<Self, ProfileError> {
        if questions.is_empty() {
            return Err(ProfileError::EmptyBank);
        }

        let mut by_id = HashMap::with_capacity(questions.len());
        for (idx, question) in questions.iter().enumerate() {
            question.validate()?;
            if by_id.insert(question.id, idx).is_some() {
                return Err(ProfileError::DuplicateQuestion(question.id));
            }
        }

        Ok(Self { questions, by_id })
    }

    /// Parse a JSON array of questions.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// The question set shipped with the application.
    pub fn builtin() -> Self {
        let questions = BUILTIN
            .iter()
            .enumerate()
            .map(|(idx, (text, options))| Question {
                id: idx as u32 + 1,
                text: text.to_string(),
                options: ColorType::ALL
                    .into_iter()
                    .zip(options.iter())
                    .map(|(color, text)| QuestionOption {
                        text: text.to_string(),
                        color,
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        let by_id = questions
            .iter()
            .enumerate()
            .map(|(idx, q)| (q.id, idx))
            .collect();

        Self { questions, by_id }
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.by_id.get(&id).map(|&idx| &self.questions[idx])
    }

    pub fn contains(&self, id: u32) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

// Option texts are listed red, yellow, green, blue.
const BUILTIN: &[(&str, [&str; 4])] = &[
    (
        "When starting a new project, I tend to...",
        [
            "set the goal and get moving",
            "rally people around the idea",
            "check everyone is comfortable with the plan",
            "research the details before committing",
        ],
    ),
    (
        "In a meeting, I am most likely to...",
        [
            "push for a decision",
            "share ideas and get the energy up",
            "make sure quieter people are heard",
            "ask questions about the evidence",
        ],
    ),
    (
        "Under pressure, I...",
        [
            "take control",
            "talk it through with others",
            "keep calm and keep things steady",
            "retreat to analyse the problem",
        ],
    ),
    (
        "I prefer feedback that is...",
        [
            "direct and brief",
            "positive and encouraging",
            "kind and personal",
            "specific and well-reasoned",
        ],
    ),
    (
        "Colleagues would describe me as...",
        [
            "determined",
            "enthusiastic",
            "dependable",
            "precise",
        ],
    ),
    (
        "When a decision goes wrong, my first instinct is to...",
        [
            "fix it quickly and move on",
            "stay upbeat and rally the team",
            "check how everyone is feeling",
            "work out exactly what happened",
        ],
    ),
    (
        "My ideal working environment is...",
        [
            "fast-paced and challenging",
            "lively and social",
            "harmonious and supportive",
            "quiet and well organised",
        ],
    ),
    (
        "I am most frustrated by...",
        [
            "slow progress",
            "routine and isolation",
            "conflict and pressure",
            "sloppy work and guesswork",
        ],
    ),
];
