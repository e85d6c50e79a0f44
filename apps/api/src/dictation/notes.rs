use std::sync::{Arc, Mutex, MutexGuard};

/// Free-text notes for the selected lead, shared between manual edits and
/// dictation. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct NotesBuffer {
    text: Arc<Mutex<String>>,
}

impl NotesBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, String> {
        self.text.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Copy of the current text. Generation reads notes through this.
    pub fn snapshot(&self) -> String {
        self.lock().clone()
    }

    /// Replaces the whole buffer, as typing in the notes box does.
    pub fn replace(&self, text: String) {
        *self.lock() = text;
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Appends a dictated utterance, separated from existing text by exactly
    /// one space. Returns false if the utterance was blank.
    pub fn append_utterance(&self, utterance: &str) -> bool {
        let utterance = utterance.trim();
        if utterance.is_empty() {
            return false;
        }

        let mut text = self.lock();
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(utterance);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_to_empty_buffer() {
        let notes = NotesBuffer::new();
        notes.append_utterance("hello");
        notes.append_utterance("world");
        assert_eq!(notes.snapshot(), "hello world");
    }

    #[test]
    fn test_append_to_existing_text() {
        let notes = NotesBuffer::new();
        notes.replace("foo".into());
        notes.append_utterance("hello");
        assert_eq!(notes.snapshot(), "foo hello");
    }

    #[test]
    fn test_surrounding_whitespace_does_not_double_the_separator() {
        let notes = NotesBuffer::new();
        notes.append_utterance("hello");
        notes.append_utterance(" world ");
        assert_eq!(notes.snapshot(), "hello world");
    }

    #[test]
    fn test_blank_utterance_is_ignored() {
        let notes = NotesBuffer::new();
        notes.replace("foo".into());
        assert!(!notes.append_utterance("   "));
        assert_eq!(notes.snapshot(), "foo");
    }

    #[test]
    fn test_clones_share_the_buffer() {
        let notes = NotesBuffer::new();
        let handle = notes.clone();
        handle.append_utterance("add the blurb");
        assert_eq!(notes.snapshot(), "add the blurb");
        notes.clear();
        assert_eq!(handle.snapshot(), "");
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let notes = NotesBuffer::new();
        notes.replace("before".into());
        let snapshot = notes.snapshot();
        notes.append_utterance("after");
        assert_eq!(snapshot, "before");
    }
}
