use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptor for the artifact being edited, carried alongside its code.
/// Projects and templates arrive without a category; it stays empty until
/// a generation pipeline supplies one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub category: String,
    pub title: String,
    pub description: String,
    pub preview: String,
    pub generated_at: DateTime<Utc>,
}

/// A freshly generated artifact handed to the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generated {
    pub code: String,
    pub design: Design,
}

/// A stored project being reopened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub code: String,
    pub title: String,
    pub thumbnail: String,
    pub description: String,
}

/// A starter template chosen from the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub code: String,
    pub title: String,
}

/// Preview viewport presets. Display metadata only; nothing in the sync
/// loop depends on the frame size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    Desktop,
    Tablet,
    Mobile,
}

impl Viewport {
    /// Pixel dimensions of the preview frame; `None` means fill the
    /// available space.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            Viewport::Desktop => None,
            Viewport::Tablet => Some((768, 1024)),
            Viewport::Mobile => Some((375, 667)),
        }
    }
}
