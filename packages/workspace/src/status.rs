use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// How long the syncing indicator lingers after the last change.
pub const STATUS_DECAY: Duration = Duration::from_millis(300);

/// Sync state surfaced to the embedding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Synced,
    Syncing,
    Error,
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyncStatus::Synced => "synced",
            SyncStatus::Syncing => "syncing",
            SyncStatus::Error => "error",
        };
        write!(f, "{name}")
    }
}

/// Drives the indicator through change bursts and render failures.
///
/// Purely observational; nothing blocks on it. Mutators return true when
/// the visible status changed, so the owner knows to emit an event.
#[derive(Debug, Clone)]
pub struct StatusTracker {
    status: SyncStatus,
    decay_at: Option<Instant>,
}

impl StatusTracker {
    pub fn new() -> Self {
        StatusTracker {
            status: SyncStatus::Synced,
            decay_at: None,
        }
    }

    pub fn status(&self) -> SyncStatus {
        self.status
    }

    /// A change was adopted: show syncing and restart the decay window.
    /// Supersedes any earlier deadline and an error state alike.
    pub fn mark_syncing(&mut self, now: Instant) -> bool {
        self.decay_at = Some(now + STATUS_DECAY);
        let changed = self.status != SyncStatus::Syncing;
        self.status = SyncStatus::Syncing;
        changed
    }

    /// A render failed. Errors latch: no decay until a render succeeds.
    pub fn mark_error(&mut self) -> bool {
        self.decay_at = None;
        let changed = self.status != SyncStatus::Error;
        self.status = SyncStatus::Error;
        changed
    }

    /// A render succeeded; release a latched error.
    pub fn clear_error(&mut self) -> bool {
        if self.status != SyncStatus::Error {
            return false;
        }
        self.status = if self.decay_at.is_some() {
            SyncStatus::Syncing
        } else {
            SyncStatus::Synced
        };
        true
    }

    /// Fire the decay once due: syncing fades back to synced.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.decay_at {
            Some(due) if now >= due => {
                self.decay_at = None;
                if self.status == SyncStatus::Syncing {
                    self.status = SyncStatus::Synced;
                    return true;
                }
                false
            }
            _ => false,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
