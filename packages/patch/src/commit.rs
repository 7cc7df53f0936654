use serde::{Deserialize, Serialize};

/// Path segment separating a region path from a style property name.
pub const STYLE_MARKER: &str = ".style.";

/// A committed change to one editable region.
///
/// `path` addresses the region (`"hero.title"`), or a style property on it
/// (`"hero.primaryButton.style.backgroundColor"`). `old_value` is the text
/// the region showed when editing began, and is what text patching searches
/// for; style commits carry the previous property value there instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    pub path: String,
    pub new_value: String,
    pub old_value: String,
}

impl Commit {
    pub fn new(
        path: impl Into<String>,
        new_value: impl Into<String>,
        old_value: impl Into<String>,
    ) -> Self {
        Commit {
            path: path.into(),
            new_value: new_value.into(),
            old_value: old_value.into(),
        }
    }

    /// True when the path addresses a style property rather than region text.
    pub fn is_style(&self) -> bool {
        self.path.contains(STYLE_MARKER)
    }

    /// The style property name (the final path segment), for style commits.
    pub fn style_property(&self) -> Option<&str> {
        self.path.rsplit_once(STYLE_MARKER).map(|(_, property)| property)
    }
}
