use crate::status::SyncStatus;
use serde::{Deserialize, Serialize};

/// Where a code change originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditOrigin {
    /// A committed preview gesture.
    Preview,
    /// Typing or history navigation in the code surface.
    Editor,
    /// A generated artifact, stored project, or starter template.
    External,
}

/// Event queued for the embedding surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkspaceEvent {
    /// The authoritative code changed.
    CodeChanged { code: String, origin: EditOrigin },
    /// The preview could not render the current code.
    RenderFailed { message: String },
    /// The sync indicator moved.
    StatusChanged { status: SyncStatus },
}
