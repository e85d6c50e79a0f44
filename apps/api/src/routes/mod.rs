pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::dictation::handlers as dictation;
use crate::generation::handlers as generation;
use crate::leads::handlers as leads;
use crate::settings::handlers as settings;
use crate::state::AppState;
use crate::workbench::handlers as workbench;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Lead directory
        .route("/api/v1/leads", get(leads::handle_list_leads))
        .route("/api/v1/leads/refresh", post(leads::handle_refresh_leads))
        // Selection, notes and drafts
        .route(
            "/api/v1/selection",
            get(workbench::handle_get_selection)
                .post(workbench::handle_select_lead)
                .delete(workbench::handle_clear_selection),
        )
        .route(
            "/api/v1/notes",
            get(workbench::handle_get_notes).put(workbench::handle_put_notes),
        )
        .route("/api/v1/drafts", get(workbench::handle_get_drafts))
        .route("/api/v1/drafts/email", put(workbench::handle_put_email_draft))
        .route(
            "/api/v1/drafts/email/mailto",
            get(workbench::handle_email_mailto),
        )
        .route(
            "/api/v1/drafts/linkedin",
            put(workbench::handle_put_linkedin_draft),
        )
        // Dictation
        .route("/api/v1/dictation", get(dictation::handle_dictation_status))
        .route(
            "/api/v1/dictation/start",
            post(dictation::handle_start_dictation),
        )
        .route("/api/v1/dictation/stop", post(dictation::handle_stop_dictation))
        .route(
            "/api/v1/dictation/events",
            post(dictation::handle_dictation_event),
        )
        // Settings
        .route(
            "/api/v1/settings",
            get(settings::handle_get_settings).patch(settings::handle_save_settings),
        )
        .route(
            "/api/v1/settings/linkedin-templates",
            post(settings::handle_add_linkedin_template),
        )
        .route(
            "/api/v1/settings/linkedin-templates/:index",
            delete(settings::handle_remove_linkedin_template),
        )
        // Generation
        .route("/api/v1/generate/email", post(generation::handle_generate_email))
        .route(
            "/api/v1/generate/linkedin",
            post(generation::handle_generate_linkedin),
        )
        .route("/api/v1/generate/preview", post(generation::handle_preview))
        .with_state(state)
}
