//! Dictation states and the transitions allowed between them.
//!
//! - Idle -> Recording (start)
//! - Recording -> Idle (stop, or the host ended the session)
//! - Recording -> Error (host reported a failure)
//! - Error -> Idle (always immediately after the error is signaled)

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DictationState {
    #[default]
    Idle,
    Recording,
    Error,
}

impl fmt::Display for DictationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictationState::Idle => write!(f, "Idle"),
            DictationState::Recording => write!(f, "Recording"),
            DictationState::Error => write!(f, "Error"),
        }
    }
}

impl DictationState {
    pub fn can_transition_to(&self, target: &DictationState) -> bool {
        matches!(
            (self, target),
            (DictationState::Idle, DictationState::Recording)
                | (DictationState::Recording, DictationState::Idle)
                | (DictationState::Recording, DictationState::Error)
                | (DictationState::Error, DictationState::Idle)
        )
    }
}
