//! Axum route handlers for dictation control and the recognizer event relay.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::dictation::capture::{DictationSession, RecognitionEvent, RelayCapability};
use crate::dictation::state::DictationState;
use crate::errors::AppError;
use crate::state::AppState;
use crate::workbench::Workbench;

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    /// Whether the client found a speech recognizer to relay from.
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct DictationStatus {
    pub state: DictationState,
    pub session: Option<DictationSession>,
    pub notes: String,
}

impl DictationStatus {
    fn of(workbench: &Workbench) -> Self {
        Self {
            state: workbench.dictation().state(),
            session: workbench.dictation().session().cloned(),
            notes: workbench.notes().snapshot(),
        }
    }
}

/// GET /api/v1/dictation
pub async fn handle_dictation_status(State(state): State<AppState>) -> Json<DictationStatus> {
    let workbench = state.workbench.lock().await;
    Json(DictationStatus::of(&workbench))
}

/// POST /api/v1/dictation/start
///
/// Dictated text lands in the selected lead's notes, so a lead must be selected.
pub async fn handle_start_dictation(
    State(state): State<AppState>,
    Json(request): Json<StartRequest>,
) -> Result<Json<DictationStatus>, AppError> {
    let mut workbench = state.workbench.lock().await;
    if workbench.selected().is_none() {
        return Err(AppError::NoLeadSelected);
    }
    workbench
        .dictation_mut()
        .start(Box::new(RelayCapability::new(request.available)))?;
    Ok(Json(DictationStatus::of(&workbench)))
}

/// POST /api/v1/dictation/stop
pub async fn handle_stop_dictation(State(state): State<AppState>) -> Json<DictationStatus> {
    let mut workbench = state.workbench.lock().await;
    workbench.dictation_mut().stop();
    Json(DictationStatus::of(&workbench))
}

/// POST /api/v1/dictation/events
///
/// Relays one recognizer event. A host error comes back as an error response
/// after the session has been stopped.
pub async fn handle_dictation_event(
    State(state): State<AppState>,
    Json(event): Json<RecognitionEvent>,
) -> Result<Json<DictationStatus>, AppError> {
    let mut workbench = state.workbench.lock().await;
    workbench.dictation_mut().handle_event(event)?;
    Ok(Json(DictationStatus::of(&workbench)))
}
