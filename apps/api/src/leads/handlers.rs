use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::Lead;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct LeadListResponse {
    pub total: usize,
    pub matched: usize,
    pub leads: Vec<Lead>,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub total: usize,
}

/// GET /api/v1/leads?q=
pub async fn handle_list_leads(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<LeadListResponse> {
    let result = state.directory.search(&query.q).await;
    Json(LeadListResponse {
        total: result.total,
        matched: result.leads.len(),
        leads: result.leads,
    })
}

/// POST /api/v1/leads/refresh
pub async fn handle_refresh_leads(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, AppError> {
    let total = state.directory.refresh(state.lead_source.as_ref()).await?;
    Ok(Json(RefreshResponse { total }))
}
