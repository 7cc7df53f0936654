use crate::commit::{Commit, STYLE_MARKER};
use regex::{Captures, Regex};

/// A single source rewrite derived from a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Replace every occurrence of the old text with the new text.
    Text { old: String, new: String },
    /// Inject an inline style declaration on every class attribute.
    Style { property: String, value: String },
}

impl Edit {
    /// Classify a commit by its path. Paths carrying a `.style.` segment
    /// address a style property, named by the final path segment; everything
    /// else is a text change.
    pub fn from_commit(commit: &Commit) -> Edit {
        match commit.path.rsplit_once(STYLE_MARKER) {
            Some((_, property)) => Edit::Style {
                property: property.to_string(),
                value: commit.new_value.clone(),
            },
            None => Edit::Text {
                old: commit.old_value.clone(),
                new: commit.new_value.clone(),
            },
        }
    }

    /// Apply the rewrite to a source string.
    ///
    /// Text edits are literal global replacements. When the old text does
    /// not occur in the source (repeated-region defaults are interpolated
    /// in canonical code), the source comes back unchanged. Style edits
    /// append an inline style object after every class attribute.
    pub fn apply(&self, code: &str) -> String {
        match self {
            Edit::Text { old, new } => {
                if old.is_empty() {
                    // An empty needle would match between every character.
                    return code.to_string();
                }
                code.replace(old, new)
            }
            Edit::Style { property, value } => {
                if property.is_empty() {
                    return code.to_string();
                }
                let re = Regex::new(r#"className="([^"]*)""#).unwrap();
                re.replace_all(code, |caps: &Captures| {
                    format!(r#"className="{}" style={{{{{}: "{}"}}}}"#, &caps[1], property, value)
                })
                .into_owned()
            }
        }
    }
}

/// Rewrite `code` according to a committed region edit.
pub fn patch(code: &str, commit: &Commit) -> String {
    Edit::from_commit(commit).apply(code)
}
