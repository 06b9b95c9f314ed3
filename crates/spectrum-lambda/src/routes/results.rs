use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use uuid::Uuid;

use spectrum_core::models::dynamics::ResultDynamics;
use spectrum_core::models::result::QuizResult;
use spectrum_core::models::submission::{SubmissionRequest, SubmissionResponse};
use spectrum_engine::{result_dynamics, ResultAssembler};
use spectrum_export::render::render_default;
use spectrum_export::report::ReportContext;
use spectrum_storage::ResultStore;

use crate::error::ApiError;
use crate::middleware::owner::Owner;
use crate::state::AppState;

pub async fn submit<S: ResultStore + 'static>(
    State(state): State<AppState<S>>,
    Extension(owner): Extension<Owner>,
    Json(req): Json<SubmissionRequest>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let fields =
        ResultAssembler::with_question_bank(&state.questions).assemble_request(owner.0, &req)?;
    let result = state.store.create_result(fields).await?;

    tracing::info!(
        result_id = %result.id,
        personality = %result.personality_type,
        anonymous = owner.0.is_none(),
        "result submitted"
    );

    Ok(Json(SubmissionResponse::from(&result)))
}

pub async fn list_results<S: ResultStore + 'static>(
    State(state): State<AppState<S>>,
    Extension(owner): Extension<Owner>,
) -> Result<Json<Vec<QuizResult>>, ApiError> {
    let results = state.store.results_by_user(owner.0).await?;
    Ok(Json(results))
}

pub async fn get_result<S: ResultStore + 'static>(
    State(state): State<AppState<S>>,
    Extension(owner): Extension<Owner>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizResult>, ApiError> {
    let result = state.store.get_result(owner.0, id).await?;
    Ok(Json(result))
}

pub async fn delete_result<S: ResultStore + 'static>(
    State(state): State<AppState<S>>,
    Extension(owner): Extension<Owner>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_result(owner.0, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_dynamics<S: ResultStore + 'static>(
    State(state): State<AppState<S>>,
    Extension(owner): Extension<Owner>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResultDynamics>, ApiError> {
    let result = state.store.get_result(owner.0, id).await?;
    Ok(Json(result_dynamics(&result)))
}

pub async fn get_report<S: ResultStore + 'static>(
    State(state): State<AppState<S>>,
    Extension(owner): Extension<Owner>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.store.get_result(owner.0, id).await?;
    let report = render_default(&ReportContext::build(&result))?;
    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        report,
    ))
}
