// Dictation Capture: speech-to-text sessions feeding the notes buffer.
// The recognizer runs on the client; these modules track state and apply its events.

pub mod capture;
pub mod handlers;
pub mod notes;
pub mod state;

pub use capture::DictationCapture;
pub use notes::NotesBuffer;
