//! # Snapshot History
//!
//! Bounded undo/redo over whole document texts.
//!
//! ## Design
//!
//! - Each entry is a full snapshot; the document is one string, so
//!   snapshots beat inverse operations on simplicity
//! - `entries[index]` is always the current text
//! - Pushing from the middle truncates the redo tail first
//! - Pushing past the cap evicts the oldest entry

/// Maximum number of snapshots kept.
pub const HISTORY_CAP: usize = 50;

/// Bounded snapshot history. Never empty: it always holds at least the
/// entry it was created with.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    index: usize,
    cap: usize,
}

impl History {
    /// Create a history seeded with the initial text, capped at
    /// [`HISTORY_CAP`] snapshots.
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_cap(initial, HISTORY_CAP)
    }

    /// Create a history with a custom cap (minimum 1).
    pub fn with_cap(initial: impl Into<String>, cap: usize) -> Self {
        History {
            entries: vec![initial.into()],
            index: 0,
            cap: cap.max(1),
        }
    }

    /// The entry at the current position.
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Record a new snapshot. Drops any redo tail, then evicts the oldest
    /// entry once past the cap. Returns false (and records nothing) when
    /// the text matches the current entry.
    pub fn push(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.entries[self.index] {
            return false;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(text);
        if self.entries.len() > self.cap {
            self.entries.remove(0);
        }
        self.index = self.entries.len() - 1;
        true
    }

    /// Step back one snapshot. `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Step forward one snapshot. `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&str> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }

    /// Collapse to a single entry, as when an external artifact replaces
    /// the document wholesale.
    pub fn reset(&mut self, text: impl Into<String>) {
        self.entries.clear();
        self.entries.push(text.into());
        self.index = 0;
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Number of snapshots held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the current entry.
    pub fn index(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_holds_the_seed() {
        let history = History::new("a");
        assert_eq!(history.current(), "a");
        assert_eq!(history.len(), 1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_push_undo_redo() {
        let mut history = History::new("a");
        assert!(history.push("b"));
        assert!(history.push("c"));

        assert_eq!(history.undo(), Some("b"));
        assert_eq!(history.undo(), Some("a"));
        assert_eq!(history.undo(), None);

        assert_eq!(history.redo(), Some("b"));
        assert_eq!(history.redo(), Some("c"));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn test_push_after_undo_drops_the_redo_tail() {
        let mut history = History::new("a");
        history.push("b");
        history.push("c");
        history.undo();

        history.push("d");
        assert_eq!(history.current(), "d");
        assert!(!history.can_redo());
        assert_eq!(history.undo(), Some("b"));
    }

    #[test]
    fn test_pushing_the_current_text_records_nothing() {
        let mut history = History::new("a");
        assert!(!history.push("a"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_cap_evicts_the_oldest_entry() {
        let mut history = History::with_cap("0", 3);
        history.push("1");
        history.push("2");
        history.push("3");

        assert_eq!(history.len(), 3);
        assert_eq!(history.undo(), Some("2"));
        assert_eq!(history.undo(), Some("1"));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn test_reset_collapses_to_a_single_entry() {
        let mut history = History::new("a");
        history.push("b");
        history.push("c");

        history.reset("fresh");
        assert_eq!(history.current(), "fresh");
        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
