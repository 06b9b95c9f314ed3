use axum::extract::{Path, State};
use axum::Json;

use spectrum_core::models::color::ColorType;
use spectrum_core::models::personality::PersonalityType;
use spectrum_profiles::{
    all_colors, all_personalities, color_profile, personality_profile, ColorProfile,
    PersonalityProfile, Question,
};
use spectrum_storage::ResultStore;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_colors() -> Json<&'static [ColorProfile]> {
    Json(all_colors())
}

pub async fn get_color(Path(color): Path<String>) -> Result<Json<ColorProfile>, ApiError> {
    let color: ColorType = color.parse()?;
    Ok(Json(color_profile(color).clone()))
}

pub async fn list_personalities() -> Json<&'static [PersonalityProfile]> {
    Json(all_personalities())
}

pub async fn get_personality(
    Path(personality): Path<String>,
) -> Result<Json<PersonalityProfile>, ApiError> {
    let personality_type: PersonalityType = personality.parse()?;
    Ok(Json(personality_profile(personality_type).clone()))
}

pub async fn list_questions<S: ResultStore + 'static>(
    State(state): State<AppState<S>>,
) -> Json<Vec<Question>> {
    Json(state.questions.questions().to_vec())
}
