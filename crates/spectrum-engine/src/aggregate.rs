//! Raw point totals and normalized percentages.

use std::collections::BTreeMap;

use spectrum_core::models::answer::{Answer, Selection};
use spectrum_core::models::color::ColorType;
use spectrum_core::models::rating::RatingLabel;
use spectrum_core::models::scores::ScoreVector;

use crate::error::ValidationError;

/// Output of one aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregation {
    /// Sum of rating weights (or selection counts) per color.
    pub raw: ScoreVector,
    /// `raw` scaled to percentages, each rounded independently. The sum may
    /// drift from 100 by up to three points.
    pub percentages: ScoreVector,
    /// All raw totals were zero; `percentages` is a copy of `raw`.
    pub degenerate: bool,
}

/// Aggregate rating-weighted answers.
///
/// Every question must carry exactly four answers, one per color, rated
/// with one `L`, one `M` and two distinct digits.
pub fn aggregate_ratings(answers: &[Answer]) -> Result<Aggregation, ValidationError> {
    if answers.is_empty() {
        return Err(ValidationError::EmptyAnswers);
    }

    let mut by_question: BTreeMap<u32, Vec<&Answer>> = BTreeMap::new();
    for answer in answers {
        by_question.entry(answer.question_id).or_default().push(answer);
    }
    for (&question_id, question_answers) in &by_question {
        validate_question(question_id, question_answers)?;
    }

    let mut raw = ScoreVector::default();
    for answer in answers {
        *raw.get_mut(answer.color) += answer.rating.weight();
    }

    Ok(finish(raw))
}

/// Aggregate single-select answers: each selection counts one point.
pub fn aggregate_selections(selections: &[Selection]) -> Result<Aggregation, ValidationError> {
    if selections.is_empty() {
        return Err(ValidationError::EmptyAnswers);
    }

    let mut raw = ScoreVector::default();
    for selection in selections {
        *raw.get_mut(selection.color) += 1;
    }

    Ok(finish(raw))
}

/// Scale raw totals to percentages of their sum.
///
/// Returns the raw values unchanged, flagged degenerate, when the sum is zero.
pub fn normalize(raw: &ScoreVector) -> (ScoreVector, bool) {
    let total = raw.total();
    if total == 0 {
        return (*raw, true);
    }
    (raw.map(|_, &v| percent_of(v, total)), false)
}

/// `round(part / total * 100)` with halves rounded up, in exact integer
/// arithmetic. `total` must be non-zero and at least `part`.
pub fn percent_of(part: u32, total: u64) -> u32 {
    let part = u64::from(part);
    ((part * 200 + total) / (total * 2)) as u32
}

fn finish(raw: ScoreVector) -> Aggregation {
    let (percentages, degenerate) = normalize(&raw);
    if degenerate {
        tracing::warn!("all raw color scores are zero; using raw values as percentages");
    }
    Aggregation {
        raw,
        percentages,
        degenerate,
    }
}

fn validate_question(question_id: u32, answers: &[&Answer]) -> Result<(), ValidationError> {
    if answers.len() != ColorType::ALL.len() {
        return Err(ValidationError::IncompleteQuestion {
            question_id,
            answered: answers.len(),
        });
    }

    let mut colors_seen = [false; 4];
    for answer in answers {
        let slot = &mut colors_seen[answer.color.priority()];
        if *slot {
            return Err(ValidationError::DuplicateColor {
                question_id,
                color: answer.color,
            });
        }
        *slot = true;
    }

    let mut ratings_seen = [false; RatingLabel::ALL.len()];
    for answer in answers {
        let slot = &mut ratings_seen[answer.rating.weight() as usize];
        if *slot {
            return Err(ValidationError::DuplicateRating {
                question_id,
                rating: answer.rating,
            });
        }
        *slot = true;
    }

    if !answers.iter().any(|a| a.rating == RatingLabel::Least) {
        return Err(ValidationError::MissingLeast { question_id });
    }
    if !answers.iter().any(|a| a.rating == RatingLabel::Most) {
        return Err(ValidationError::MissingMost { question_id });
    }

    Ok(())
}
