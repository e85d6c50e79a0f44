//! Axum route handlers for the Settings API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{SettingsPatch, UserSettings};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RevealQuery {
    #[serde(default)]
    pub reveal_api_key: bool,
}

#[derive(Debug, Deserialize)]
pub struct AddTemplateRequest {
    pub template: String,
}

/// GET /api/v1/settings
///
/// The API key is masked unless `reveal_api_key=true`.
pub async fn handle_get_settings(
    State(state): State<AppState>,
    Query(query): Query<RevealQuery>,
) -> Json<UserSettings> {
    let settings = state.settings.get();
    if query.reveal_api_key {
        Json(settings)
    } else {
        Json(settings.masked())
    }
}

/// PATCH /api/v1/settings
pub async fn handle_save_settings(
    State(state): State<AppState>,
    Json(patch): Json<SettingsPatch>,
) -> Result<Json<UserSettings>, AppError> {
    let settings = state.settings.save(patch)?;
    Ok(Json(settings.masked()))
}

/// POST /api/v1/settings/linkedin-templates
pub async fn handle_add_linkedin_template(
    State(state): State<AppState>,
    Json(request): Json<AddTemplateRequest>,
) -> Result<Json<UserSettings>, AppError> {
    let settings = state.settings.add_linkedin_template(&request.template)?;
    Ok(Json(settings.masked()))
}

/// DELETE /api/v1/settings/linkedin-templates/:index
pub async fn handle_remove_linkedin_template(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<UserSettings>, AppError> {
    let settings = state.settings.remove_linkedin_template(index)?;
    Ok(Json(settings.masked()))
}
