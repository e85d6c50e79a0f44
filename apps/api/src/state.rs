use std::sync::Arc;

use tokio::sync::Mutex;

use crate::generation::Generator;
use crate::leads::{LeadDirectory, LeadSource};
use crate::settings::SettingsStore;
use crate::workbench::{GenerationGate, Workbench};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable lead source. Default: PgLeadSource over the configured table.
    pub lead_source: Arc<dyn LeadSource>,
    pub directory: Arc<LeadDirectory>,
    pub settings: SettingsStore,
    pub generator: Generator,
    /// Single-tenant selection, notes, dictation and drafts.
    pub workbench: Arc<Mutex<Workbench>>,
    pub gate: Arc<GenerationGate>,
}

impl AppState {
    pub fn new(
        lead_source: Arc<dyn LeadSource>,
        settings: SettingsStore,
        generator: Generator,
    ) -> Self {
        Self {
            lead_source,
            directory: Arc::new(LeadDirectory::new()),
            settings,
            generator,
            workbench: Arc::new(Mutex::new(Workbench::new())),
            gate: Arc::new(GenerationGate::default()),
        }
    }
}
