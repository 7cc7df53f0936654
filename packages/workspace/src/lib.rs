//! # Tandem Workspace
//!
//! The sync coordinator: one [`Workspace`] owns the authoritative code
//! string, the preview, the code surface, and the status indicator, and
//! funnels every change through a single adoption path.
//!
//! ## Design
//!
//! - Single-threaded, no async runtime: timers are deadlines polled by
//!   [`Workspace::tick`]
//! - Outbound notifications queue as [`WorkspaceEvent`]s until drained
//! - Re-entrancy is broken structurally: rendering never dispatches
//!   commits, and patching a value onto itself is a no-op

mod events;
mod sources;
mod status;
mod workspace;

pub use events::{EditOrigin, WorkspaceEvent};
pub use sources::{Design, Generated, ProjectRecord, TemplateRecord, Viewport};
pub use status::{StatusTracker, SyncStatus, STATUS_DECAY};
pub use workspace::Workspace;

// Re-export the pieces embedders need alongside the coordinator.
pub use tandem_catalog::TemplateKind;
pub use tandem_editor::EditorKey;
pub use tandem_patch::Commit;
