//! Dictation capture: turns a speech-to-text session into appended notes.
//!
//! The recognizer itself lives on the host (the user's browser). This side only
//! tracks the session state and folds the host's events into a `NotesBuffer`.

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::dictation::notes::NotesBuffer;
use crate::dictation::state::DictationState;
use crate::errors::AppError;

/// The host's speech-to-text capability.
pub trait SpeechCapability: Send {
    fn is_available(&self) -> bool;
    /// Opens a session. `continuous` keeps it listening across pauses.
    fn start(&mut self, continuous: bool) -> Result<(), String>;
    fn stop(&mut self);
}

/// Capability whose recognizer runs in the client, which relays its events.
/// The client declares availability when it asks to start.
#[derive(Debug)]
pub struct RelayCapability {
    available: bool,
}

impl RelayCapability {
    pub fn new(available: bool) -> Self {
        Self { available }
    }
}

impl SpeechCapability for RelayCapability {
    fn is_available(&self) -> bool {
        self.available
    }

    fn start(&mut self, continuous: bool) -> Result<(), String> {
        debug!(continuous, "Relay recognizer started by client");
        Ok(())
    }

    fn stop(&mut self) {
        debug!("Relay recognizer stopped");
    }
}

/// One event from the host recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecognitionEvent {
    Result { is_final: bool, transcript: String },
    Error { reason: String },
    /// The host closed the session on its own, e.g. after a silence timeout.
    End,
}

/// Bookkeeping for the active session.
#[derive(Debug, Clone, Serialize)]
pub struct DictationSession {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub utterances: usize,
}

impl DictationSession {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            utterances: 0,
        }
    }
}

pub struct DictationCapture {
    state: DictationState,
    notes: NotesBuffer,
    capability: Option<Box<dyn SpeechCapability>>,
    session: Option<DictationSession>,
}

impl DictationCapture {
    /// Creates an idle capture that appends into `notes`.
    pub fn new(notes: NotesBuffer) -> Self {
        Self {
            state: DictationState::Idle,
            notes,
            capability: None,
            session: None,
        }
    }

    pub fn state(&self) -> DictationState {
        self.state
    }

    pub fn session(&self) -> Option<&DictationSession> {
        self.session.as_ref()
    }

    /// Starts a continuous session on `capability`.
    ///
    /// Fails with `UnsupportedCapability` if the host has no recognizer and
    /// with `HostReportedError` if it refuses to start; both leave the capture
    /// idle. Starting while already recording does nothing.
    pub fn start(&mut self, mut capability: Box<dyn SpeechCapability>) -> Result<(), AppError> {
        if self.state == DictationState::Recording {
            debug!("Dictation already recording, ignoring start");
            return Ok(());
        }

        if !capability.is_available() {
            warn!("Speech recognition not available on host");
            return Err(AppError::UnsupportedCapability);
        }

        capability
            .start(true)
            .map_err(AppError::HostReportedError)?;

        self.transition(DictationState::Recording)?;
        let session = DictationSession::new();
        info!(session_id = %session.id, "Dictation session started");
        self.session = Some(session);
        self.capability = Some(capability);
        Ok(())
    }

    /// Stops the session. Safe from any state; a no-op when idle.
    pub fn stop(&mut self) {
        if self.state != DictationState::Recording {
            return;
        }

        self.release();
        self.state = DictationState::Idle;
    }

    /// Applies one host event.
    ///
    /// Final transcripts are appended to the notes, interim ones dropped. A
    /// host error stops the session and is returned as `HostReportedError`
    /// with the capture already back to idle. Events outside a session are
    /// ignored.
    pub fn handle_event(&mut self, event: RecognitionEvent) -> Result<(), AppError> {
        if self.state != DictationState::Recording {
            debug!(state = %self.state, "Ignoring recognition event outside a session");
            return Ok(());
        }

        match event {
            RecognitionEvent::Result {
                is_final: false, ..
            } => Ok(()),
            RecognitionEvent::Result {
                is_final: true,
                transcript,
            } => {
                if self.notes.append_utterance(&transcript) {
                    if let Some(session) = self.session.as_mut() {
                        session.utterances += 1;
                    }
                }
                Ok(())
            }
            RecognitionEvent::End => {
                info!("Dictation session ended by host");
                self.stop();
                Ok(())
            }
            RecognitionEvent::Error { reason } => {
                self.transition(DictationState::Error)?;
                self.release();
                self.transition(DictationState::Idle)?;
                Err(AppError::HostReportedError(reason))
            }
        }
    }

    fn release(&mut self) {
        if let Some(mut capability) = self.capability.take() {
            capability.stop();
        }
        if let Some(session) = self.session.take() {
            info!(
                session_id = %session.id,
                utterances = session.utterances,
                "Dictation session stopped"
            );
        }
    }

    fn transition(&mut self, target: DictationState) -> Result<(), AppError> {
        if !self.state.can_transition_to(&target) {
            return Err(AppError::Internal(anyhow!(
                "Invalid dictation transition: {} -> {}",
                self.state,
                target
            )));
        }
        debug!("Dictation state: {} -> {}", self.state, target);
        self.state = target;
        Ok(())
    }
}
