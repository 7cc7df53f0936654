//! # Tandem Editor
//!
//! The code-surface state machine: document text, bounded undo history,
//! debounced autosave, cursor bookkeeping, and the keyboard shortcut
//! table.
//!
//! ## Design
//!
//! - No clock of its own: operations take `now: Instant` and the owner
//!   polls [`CodeBuffer::poll_autosave`] from its tick, so tests never
//!   sleep
//! - History is snapshot-based: whole texts, bounded, truncate-on-branch
//! - External replacements (a different artifact adopted wholesale) reset
//!   history instead of appending to it
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut buffer = CodeBuffer::new(initial_code);
//! buffer.edit(typed_text, Instant::now());
//! if let Some(text) = buffer.poll_autosave(Instant::now()) {
//!     propagate(text);
//! }
//! ```

mod buffer;
mod history;

pub use buffer::{CodeBuffer, EditorKey, AUTOSAVE_DELAY, REPLACE_THRESHOLD};
pub use history::{History, HISTORY_CAP};
