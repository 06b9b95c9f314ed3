use uuid::Uuid;

use spectrum_core::models::dynamics::ResultDynamics;
use spectrum_core::models::result::{QuizResult, ResultFields};
use spectrum_core::models::submission::{SubmissionRequest, SubmittedAnswer};
use spectrum_profiles::QuestionBank;

use crate::aggregate::{aggregate_ratings, aggregate_selections, Aggregation};
use crate::classify::classify;
use crate::dominance::resolve;
use crate::dynamics::persona_dynamics;
use crate::error::ValidationError;
use crate::input::AnswerSet;

/// Runs a submission through aggregation, dominance and classification.
///
/// With a question bank attached, every answered question id must exist in
/// it. Without one, ids are taken as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultAssembler<'a> {
    questions: Option<&'a QuestionBank>,
}

impl<'a> ResultAssembler<'a> {
    pub fn new() -> Self {
        Self { questions: None }
    }

    pub fn with_question_bank(questions: &'a QuestionBank) -> Self {
        Self {
            questions: Some(questions),
        }
    }

    /// Assemble the fields of a new result. Nothing partial is ever
    /// returned: any validation failure aborts the whole submission.
    pub fn assemble(
        &self,
        user_id: Option<Uuid>,
        answers: &[SubmittedAnswer],
        unconscious_answers: Option<&[SubmittedAnswer]>,
    ) -> Result<ResultFields, ValidationError> {
        let conscious = self.score(answers)?;
        let unconscious = unconscious_answers
            .map(|answers| self.score(answers))
            .transpose()?;

        let (dominant_color, secondary_color) = resolve(&conscious.percentages);
        let personality_type = classify(dominant_color, secondary_color);

        tracing::debug!(
            dominant = %dominant_color,
            secondary = %secondary_color,
            personality = %personality_type,
            dual_profile = unconscious.is_some(),
            "assembled result"
        );

        Ok(ResultFields {
            user_id,
            scores: conscious.percentages,
            unconscious_scores: unconscious.map(|u| u.percentages),
            dominant_color,
            secondary_color,
            personality_type,
        })
    }

    pub fn assemble_request(
        &self,
        user_id: Option<Uuid>,
        request: &SubmissionRequest,
    ) -> Result<ResultFields, ValidationError> {
        self.assemble(
            user_id,
            &request.answers,
            request.unconscious_answers.as_deref(),
        )
    }

    /// Validate and aggregate one answer set.
    pub fn score(&self, answers: &[SubmittedAnswer]) -> Result<Aggregation, ValidationError> {
        let set = AnswerSet::from_submitted(answers)?;

        if let Some(bank) = self.questions
            && let Some(question_id) = set.question_ids().find(|id| !bank.contains(*id))
        {
            return Err(ValidationError::UnknownQuestion { question_id });
        }

        match &set {
            AnswerSet::Rated(answers) => aggregate_ratings(answers),
            AnswerSet::Selected(selections) => aggregate_selections(selections),
        }
    }
}

/// Persona dynamics for a stored result's conscious and unconscious scores.
pub fn result_dynamics(result: &QuizResult) -> ResultDynamics {
    ResultDynamics {
        conscious: persona_dynamics(&result.scores),
        unconscious: result.unconscious_scores.as_ref().map(persona_dynamics),
    }
}
