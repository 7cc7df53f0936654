use crate::history::History;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

/// Debounce window between the last keystroke and autosave propagation.
pub const AUTOSAVE_DELAY: Duration = Duration::from_millis(500);

/// Length delta (in chars) beyond which incoming text is treated as a
/// wholesale external replacement rather than an echo of local typing.
pub const REPLACE_THRESHOLD: usize = 10;

/// Keyboard shortcuts the code surface understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditorKey {
    Save,
    Undo,
    Redo,
}

impl EditorKey {
    /// Map a key chord to an action: Ctrl+S save, Ctrl+Z undo,
    /// Ctrl+Shift+Z or Ctrl+Y redo.
    pub fn from_chord(key: char, ctrl: bool, shift: bool) -> Option<EditorKey> {
        if !ctrl {
            return None;
        }
        match key.to_ascii_lowercase() {
            's' => Some(EditorKey::Save),
            'z' if shift => Some(EditorKey::Redo),
            'z' => Some(EditorKey::Undo),
            'y' => Some(EditorKey::Redo),
            _ => None,
        }
    }
}

/// The editable code document: current text, bounded [`History`], dirty
/// flag, debounced autosave deadline, and cursor bookkeeping.
///
/// Owns no clock. Every timer-touching operation takes `now`, and the
/// owner polls [`CodeBuffer::poll_autosave`] from its tick. Methods that
/// yield `Some(text)` hand back content to propagate outward.
#[derive(Debug, Clone)]
pub struct CodeBuffer {
    text: String,
    history: History,
    dirty: bool,
    autosave_at: Option<Instant>,
    cursor: usize,
}

impl CodeBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        CodeBuffer {
            history: History::new(text.clone()),
            text,
            dirty: false,
            autosave_at: None,
            cursor: 0,
        }
    }

    /// Adopt a keystroke's worth of new text: record a history snapshot,
    /// mark dirty, and (re)arm the autosave deadline.
    pub fn edit(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.history.push(text.clone());
        self.text = text;
        self.dirty = true;
        self.autosave_at = Some(now + AUTOSAVE_DELAY);
        self.clamp_cursor();
    }

    /// Fire the autosave once its deadline has passed, yielding the text
    /// to propagate. Fires at most once per armed deadline.
    pub fn poll_autosave(&mut self, now: Instant) -> Option<String> {
        let due = self.autosave_at?;
        if now < due {
            return None;
        }
        self.autosave_at = None;
        self.dirty = false;
        debug!("autosave fired");
        Some(self.text.clone())
    }

    /// Immediate save. Cancels any pending autosave; yields nothing when
    /// the document is already clean.
    pub fn save(&mut self) -> Option<String> {
        self.autosave_at = None;
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(self.text.clone())
    }

    /// Step back in history. Cancels any pending autosave so debounced
    /// text cannot resurrect the undone state; the returned text should
    /// propagate immediately.
    pub fn undo(&mut self) -> Option<String> {
        let text = self.history.undo()?.to_string();
        self.adopt_history_entry(text.clone());
        Some(text)
    }

    /// Step forward in history, with the same propagation and autosave
    /// cancellation rules as [`CodeBuffer::undo`].
    pub fn redo(&mut self) -> Option<String> {
        let text = self.history.redo()?.to_string();
        self.adopt_history_entry(text.clone());
        Some(text)
    }

    fn adopt_history_entry(&mut self, text: String) {
        self.text = text;
        self.autosave_at = None;
        self.dirty = false;
        self.clamp_cursor();
    }

    /// Run a shortcut, yielding any text to propagate.
    pub fn apply_key(&mut self, key: EditorKey) -> Option<String> {
        match key {
            EditorKey::Save => self.save(),
            EditorKey::Undo => self.undo(),
            EditorKey::Redo => self.redo(),
        }
    }

    /// Absorb code arriving from outside the editor. A length delta within
    /// [`REPLACE_THRESHOLD`] chars is taken for the surface's own edit
    /// echoing back, and ignored. Anything larger is a wholesale
    /// replacement: adopt the text, collapse history to a single entry,
    /// drop the dirty flag and any pending autosave.
    pub fn reconcile_external(&mut self, code: &str) -> bool {
        let current = self.text.chars().count();
        let incoming = code.chars().count();
        if current.abs_diff(incoming) <= REPLACE_THRESHOLD {
            return false;
        }
        debug!(chars = incoming, "external replacement adopted");
        self.text = code.to_string();
        self.history.reset(code);
        self.dirty = false;
        self.autosave_at = None;
        self.clamp_cursor();
        true
    }

    /// Move the cursor, clamped to the text length (a char offset).
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.text.chars().count());
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 1-based (line, column) of the cursor, derived from the text prefix.
    pub fn cursor_position(&self) -> (usize, usize) {
        let mut line = 1;
        let mut column = 1;
        for ch in self.text.chars().take(self.cursor) {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    fn clamp_cursor(&mut self) {
        let len = self.text.chars().count();
        if self.cursor > len {
            self.cursor = len;
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn autosave_pending(&self) -> bool {
        self.autosave_at.is_some()
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
