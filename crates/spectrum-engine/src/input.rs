use std::collections::HashSet;

use spectrum_core::models::answer::{Answer, Selection};
use spectrum_core::models::color::ColorType;
use spectrum_core::models::rating::RatingLabel;
use spectrum_core::models::submission::SubmittedAnswer;

use crate::error::ValidationError;

/// A typed answer set. Submissions are either fully rated or fully
/// single-select; the two modes never mix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSet {
    Rated(Vec<Answer>),
    Selected(Vec<Selection>),
}

impl AnswerSet {
    /// Type-check wire answers. Rejects empty input, unknown colors and
    /// labels, and mixed modes. Per-question rules are checked later by the
    /// aggregator.
    pub fn from_submitted(answers: &[SubmittedAnswer]) -> Result<Self, ValidationError> {
        let first = answers.first().ok_or(ValidationError::EmptyAnswers)?;

        if first.rating.is_some() {
            let rated = answers
                .iter()
                .map(|a| -> Result<Answer, ValidationError> {
                    let rating = a.rating.as_ref().ok_or(ValidationError::MixedAnswerModes)?;
                    let label = rating.as_label();
                    let rating = label.parse::<RatingLabel>().map_err(|_| {
                        ValidationError::UnknownRating {
                            question_id: a.question_id,
                            value: label,
                        }
                    })?;
                    Ok(Answer::new(a.question_id, parse_color(a)?, rating))
                })
                .collect::<Result<Vec<_>, ValidationError>>()?;
            Ok(AnswerSet::Rated(rated))
        } else {
            let mut seen = HashSet::new();
            let selected = answers
                .iter()
                .map(|a| -> Result<Selection, ValidationError> {
                    if a.rating.is_some() {
                        return Err(ValidationError::MixedAnswerModes);
                    }
                    let color = parse_color(a)?;
                    if !seen.insert(a.question_id) {
                        return Err(ValidationError::DuplicateSelection {
                            question_id: a.question_id,
                        });
                    }
                    Ok(Selection {
                        question_id: a.question_id,
                        color,
                    })
                })
                .collect::<Result<Vec<_>, ValidationError>>()?;
            Ok(AnswerSet::Selected(selected))
        }
    }

    pub fn question_ids(&self) -> impl Iterator<Item = u32> + '_ {
        let ids: Box<dyn Iterator<Item = u32> + '_> = match self {
            AnswerSet::Rated(answers) => Box::new(answers.iter().map(|a| a.question_id)),
            AnswerSet::Selected(selections) => Box::new(selections.iter().map(|s| s.question_id)),
        };
        ids
    }
}

fn parse_color(answer: &SubmittedAnswer) -> Result<ColorType, ValidationError> {
    answer
        .selected_color
        .parse()
        .map_err(|_| ValidationError::UnknownColor {
            question_id: answer.question_id,
            value: answer.selected_color.clone(),
        })
}
