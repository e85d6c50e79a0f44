//! The single-user workbench: selected lead, notes, dictation and drafts.
//!
//! Everything here is scoped to one lead selection. Selecting a different lead
//! clears notes and drafts and stops dictation.

pub mod handlers;

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tracing::info;

use crate::dictation::{DictationCapture, NotesBuffer};
use crate::generation::email::EmailDraft;
use crate::models::Lead;

/// Drafts generated for the current selection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Drafts {
    pub email: Option<EmailDraft>,
    pub linkedin_message: Option<String>,
}

pub struct Workbench {
    selected: Option<Lead>,
    notes: NotesBuffer,
    dictation: DictationCapture,
    drafts: Drafts,
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}

impl Workbench {
    pub fn new() -> Self {
        let notes = NotesBuffer::new();
        Self {
            selected: None,
            dictation: DictationCapture::new(notes.clone()),
            notes,
            drafts: Drafts::default(),
        }
    }

    pub fn selected(&self) -> Option<&Lead> {
        self.selected.as_ref()
    }

    /// Selects `lead`. Re-selecting the same lead keeps notes and drafts and
    /// refreshes the stored record; returns whether the selection changed.
    pub fn select(&mut self, lead: Lead) -> bool {
        let changed = !self.is_selected(&lead);
        if changed {
            info!("Selected lead {}", lead.full_name());
            self.reset_session();
        }
        self.selected = Some(lead);
        changed
    }

    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.reset_session();
        }
    }

    /// True when `lead` has the same identity as the current selection.
    pub fn is_selected(&self, lead: &Lead) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|current| current.same_identity(lead))
    }

    pub fn notes(&self) -> &NotesBuffer {
        &self.notes
    }

    pub fn dictation(&self) -> &DictationCapture {
        &self.dictation
    }

    pub fn dictation_mut(&mut self) -> &mut DictationCapture {
        &mut self.dictation
    }

    pub fn drafts(&self) -> &Drafts {
        &self.drafts
    }

    /// Stores `draft` if `lead` is still selected. A result for a lead the
    /// user has since moved away from is dropped.
    pub fn store_email_draft(&mut self, lead: &Lead, draft: EmailDraft) -> bool {
        if !self.is_selected(lead) {
            info!("Discarding email draft for deselected lead {}", lead.full_name());
            return false;
        }
        self.drafts.email = Some(draft);
        true
    }

    /// See [`Workbench::store_email_draft`].
    pub fn store_linkedin_message(&mut self, lead: &Lead, message: String) -> bool {
        if !self.is_selected(lead) {
            info!(
                "Discarding LinkedIn message for deselected lead {}",
                lead.full_name()
            );
            return false;
        }
        self.drafts.linkedin_message = Some(message);
        true
    }

    pub fn drafts_mut(&mut self) -> &mut Drafts {
        &mut self.drafts
    }

    fn reset_session(&mut self) {
        self.dictation.stop();
        self.notes.clear();
        self.drafts = Drafts::default();
    }
}

/// Lets one generation run at a time.
#[derive(Debug, Default)]
pub struct GenerationGate {
    in_flight: AtomicBool,
}

impl GenerationGate {
    /// Claims the gate, or returns `None` if a generation is already running.
    pub fn try_acquire(&self) -> Option<GateGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| GateGuard { gate: self })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Releases the gate when dropped, whether the generation succeeded or not.
pub struct GateGuard<'a> {
    gate: &'a GenerationGate,
}

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.store(false, Ordering::Release);
    }
}
