//! Axum route handlers for selection, notes and drafts.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::email::EmailDraft;
use crate::generation::mailto::mailto_link;
use crate::models::lead::{non_blank, Lead};
use crate::state::AppState;
use crate::workbench::Drafts;

/// What the profile panel shows for the selected lead.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub full_name: String,
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub location: String,
    pub seniority: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub secondary_email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
}

impl From<&Lead> for ProfileView {
    fn from(lead: &Lead) -> Self {
        let owned = |v: &Option<String>| non_blank(v).map(str::to_string);
        Self {
            full_name: lead.full_name(),
            title: owned(&lead.title),
            company_name: owned(&lead.company_name),
            location: lead.location(),
            seniority: owned(&lead.seniority),
            department: owned(&lead.departments),
            email: owned(&lead.email),
            secondary_email: owned(&lead.secondary_email),
            phone: owned(&lead.phone),
            linkedin_url: owned(&lead.linkedin_url),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub lead: Lead,
    pub profile: ProfileView,
    /// False when the same lead was already selected.
    pub changed: bool,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NotesBody {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct DraftsResponse {
    #[serde(flatten)]
    pub drafts: Drafts,
    pub generating: bool,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LinkedInDraftBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MailtoResponse {
    pub href: String,
}

/// GET /api/v1/selection
pub async fn handle_get_selection(
    State(state): State<AppState>,
) -> Result<Json<SelectionResponse>, AppError> {
    let workbench = state.workbench.lock().await;
    let lead = workbench.selected().ok_or(AppError::NoLeadSelected)?;
    Ok(Json(SelectionResponse {
        profile: ProfileView::from(lead),
        lead: lead.clone(),
        changed: false,
    }))
}

/// POST /api/v1/selection
///
/// Body is the lead row as returned by `/api/v1/leads`.
pub async fn handle_select_lead(
    State(state): State<AppState>,
    Json(lead): Json<Lead>,
) -> Json<SelectionResponse> {
    let mut workbench = state.workbench.lock().await;
    let profile = ProfileView::from(&lead);
    let changed = workbench.select(lead.clone());
    Json(SelectionResponse {
        lead,
        profile,
        changed,
    })
}

/// DELETE /api/v1/selection
pub async fn handle_clear_selection(State(state): State<AppState>) -> StatusCode {
    state.workbench.lock().await.clear_selection();
    StatusCode::NO_CONTENT
}

/// GET /api/v1/notes
pub async fn handle_get_notes(State(state): State<AppState>) -> Json<NotesBody> {
    let workbench = state.workbench.lock().await;
    Json(NotesBody {
        text: workbench.notes().snapshot(),
    })
}

/// PUT /api/v1/notes
pub async fn handle_put_notes(
    State(state): State<AppState>,
    Json(body): Json<NotesBody>,
) -> Result<Json<NotesBody>, AppError> {
    let workbench = state.workbench.lock().await;
    if workbench.selected().is_none() {
        return Err(AppError::NoLeadSelected);
    }
    workbench.notes().replace(body.text);
    Ok(Json(NotesBody {
        text: workbench.notes().snapshot(),
    }))
}

/// GET /api/v1/drafts
pub async fn handle_get_drafts(State(state): State<AppState>) -> Json<DraftsResponse> {
    let workbench = state.workbench.lock().await;
    Json(DraftsResponse {
        drafts: workbench.drafts().clone(),
        generating: state.gate.is_busy(),
    })
}

/// PUT /api/v1/drafts/email
pub async fn handle_put_email_draft(
    State(state): State<AppState>,
    Json(draft): Json<EmailDraft>,
) -> Result<Json<EmailDraft>, AppError> {
    let mut workbench = state.workbench.lock().await;
    if workbench.selected().is_none() {
        return Err(AppError::NoLeadSelected);
    }
    workbench.drafts_mut().email = Some(draft.clone());
    Ok(Json(draft))
}

/// PUT /api/v1/drafts/linkedin
pub async fn handle_put_linkedin_draft(
    State(state): State<AppState>,
    Json(body): Json<LinkedInDraftBody>,
) -> Result<Json<LinkedInDraftBody>, AppError> {
    let mut workbench = state.workbench.lock().await;
    if workbench.selected().is_none() {
        return Err(AppError::NoLeadSelected);
    }
    workbench.drafts_mut().linkedin_message = Some(body.message.clone());
    Ok(Json(body))
}

/// GET /api/v1/drafts/email/mailto
pub async fn handle_email_mailto(
    State(state): State<AppState>,
) -> Result<Json<MailtoResponse>, AppError> {
    let workbench = state.workbench.lock().await;
    let lead = workbench.selected().ok_or(AppError::NoLeadSelected)?;
    let recipient = non_blank(&lead.email)
        .ok_or_else(|| AppError::Validation("selected lead has no email address".to_string()))?;
    let draft = workbench
        .drafts()
        .email
        .as_ref()
        .ok_or_else(|| AppError::NotFound("No email draft generated yet".to_string()))?;

    Ok(Json(MailtoResponse {
        href: mailto_link(recipient, &draft.subject, &draft.body),
    }))
}
