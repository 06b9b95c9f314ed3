use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use spectrum_core::models::comparison::{ProfileComparison, TeamSummary};
use spectrum_core::models::dynamics::PersonaDynamics;
use spectrum_core::models::scores::ScoreVector;
use spectrum_engine::{persona_dynamics, summarize_team};
use spectrum_storage::ResultStore;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CompareRequest {
    pub a: ScoreVector,
    pub b: ScoreVector,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequest {
    pub user_ids: Vec<Uuid>,
}

pub async fn dynamics(
    Json(scores): Json<ScoreVector>,
) -> Result<Json<PersonaDynamics>, ApiError> {
    check_percentages("scores", &scores)?;
    Ok(Json(persona_dynamics(&scores)))
}

pub async fn compare(
    Json(req): Json<CompareRequest>,
) -> Result<Json<ProfileComparison>, ApiError> {
    check_percentages("a", &req.a)?;
    check_percentages("b", &req.b)?;
    Ok(Json(spectrum_engine::compare(&req.a, &req.b)))
}

/// Summarize the most recent result of each listed user. Users without
/// any result are skipped.
pub async fn team_summary<S: ResultStore + 'static>(
    State(state): State<AppState<S>>,
    Json(req): Json<TeamRequest>,
) -> Result<Json<TeamSummary>, ApiError> {
    let mut latest = Vec::with_capacity(req.user_ids.len());
    for user_id in req.user_ids {
        let results = state.store.results_by_user(Some(user_id)).await?;
        if let Some(result) = results.into_iter().last() {
            latest.push(result);
        }
    }

    Ok(Json(summarize_team(&latest)))
}

/// Client-supplied vectors must be percentages: no entry above 100.
fn check_percentages(field: &str, scores: &ScoreVector) -> Result<(), ApiError> {
    match scores.iter().find(|(_, v)| **v > 100) {
        Some((color, value)) => Err(ApiError::BadRequest(format!(
            "{field}: {color} is {value}, percentages must be between 0 and 100"
        ))),
        None => Ok(()),
    }
}
