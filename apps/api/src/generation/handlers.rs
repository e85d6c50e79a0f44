//! Axum route handlers for the Generation API.
//!
//! The workbench lock is held only to snapshot inputs and to store results,
//! never across the completion call.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::email::EmailDraft;
use crate::generation::generator::GenerationRequest;
use crate::generation::placeholders::{preview, TemplatePreview};
use crate::models::Lead;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LinkedInMessageResponse {
    pub message: String,
}

/// Snapshots the selection and notes. Notes are copied, so dictation can keep
/// appending while the call is in flight.
async fn snapshot_inputs(state: &AppState) -> (Option<Lead>, String) {
    let workbench = state.workbench.lock().await;
    (workbench.selected().cloned(), workbench.notes().snapshot())
}

/// POST /api/v1/generate/email
pub async fn handle_generate_email(
    State(state): State<AppState>,
) -> Result<Json<EmailDraft>, AppError> {
    let _guard = state
        .gate
        .try_acquire()
        .ok_or(AppError::GenerationInProgress)?;

    let (lead, notes) = snapshot_inputs(&state).await;
    let settings = state.settings.get();

    let draft = state
        .generator
        .generate_email(GenerationRequest {
            lead: lead.as_ref(),
            settings: &settings,
            notes: &notes,
        })
        .await?;

    if let Some(lead) = &lead {
        state
            .workbench
            .lock()
            .await
            .store_email_draft(lead, draft.clone());
    }

    Ok(Json(draft))
}

/// POST /api/v1/generate/linkedin
pub async fn handle_generate_linkedin(
    State(state): State<AppState>,
) -> Result<Json<LinkedInMessageResponse>, AppError> {
    let _guard = state
        .gate
        .try_acquire()
        .ok_or(AppError::GenerationInProgress)?;

    let (lead, notes) = snapshot_inputs(&state).await;
    let settings = state.settings.get();

    let message = state
        .generator
        .generate_linkedin_message(GenerationRequest {
            lead: lead.as_ref(),
            settings: &settings,
            notes: &notes,
        })
        .await?;

    if let Some(lead) = &lead {
        state
            .workbench
            .lock()
            .await
            .store_linkedin_message(lead, message.clone());
    }

    Ok(Json(LinkedInMessageResponse { message }))
}

/// POST /api/v1/generate/preview
///
/// Renders the templates with the selected lead's details locally. No model call.
pub async fn handle_preview(
    State(state): State<AppState>,
) -> Result<Json<TemplatePreview>, AppError> {
    let (lead, _) = snapshot_inputs(&state).await;
    let lead = lead.ok_or(AppError::NoLeadSelected)?;
    Ok(Json(preview(&lead, &state.settings.get())))
}
