use serde::Serialize;
use std::collections::HashMap;
use tandem_catalog::{Node, Tag};
use tandem_patch::{Commit, STYLE_MARKER};

/// Editing state of one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum RegionMode {
    Idle,
    /// Text editing. `buffer` is the in-flight value, `caret` a char offset
    /// into it, `entered_with` the display value when editing began (what
    /// Escape restores).
    EditingText {
        buffer: String,
        caret: usize,
        entered_with: String,
    },
    EditingStyle,
}

/// One editable leaf of the preview.
///
/// Holds the display value, the value captured at mount (what text commits
/// report as their old value), committed style values, and the interaction
/// state machine driven by UI gestures. One method per gesture; gestures
/// that do not apply in the current mode are ignored.
#[derive(Debug, Clone, Serialize)]
pub struct Region {
    path: String,
    tag: Tag,
    class: String,
    value: String,
    original: String,
    style_props: Vec<String>,
    styles: HashMap<String, String>,
    mode: RegionMode,
}

impl Region {
    pub fn new(path: impl Into<String>, tag: Tag, value: impl Into<String>) -> Self {
        let value = value.into();
        Region {
            path: path.into(),
            tag,
            class: String::new(),
            value: value.clone(),
            original: value,
            style_props: Vec::new(),
            styles: HashMap::new(),
            mode: RegionMode::Idle,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_style_props(mut self, props: &[&str]) -> Self {
        self.style_props = props.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Instantiate from a catalog node. Element nodes carry no editable
    /// surface and yield `None`.
    pub fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Region {
                path,
                tag,
                class,
                text,
                style_props,
            } => Some(Region {
                path: path.clone(),
                tag: *tag,
                class: class.clone(),
                value: text.clone(),
                original: text.clone(),
                style_props: style_props.clone(),
                styles: HashMap::new(),
                mode: RegionMode::Idle,
            }),
            Node::Element { .. } => None,
        }
    }

    /// Enter text editing with the caret at the end of the value. No-op
    /// while any editor is already open.
    pub fn click(&mut self) {
        if self.mode == RegionMode::Idle {
            self.mode = RegionMode::EditingText {
                buffer: self.value.clone(),
                caret: self.value.chars().count(),
                entered_with: self.value.clone(),
            };
        }
    }

    /// Open the style editor when the region declares style properties;
    /// otherwise fall back to plain text editing.
    pub fn shift_click(&mut self) {
        if self.mode != RegionMode::Idle {
            return;
        }
        if self.style_props.is_empty() {
            self.click();
        } else {
            self.mode = RegionMode::EditingStyle;
        }
    }

    /// Replace the in-edit buffer wholesale (the editable surface reports
    /// its entire text), keeping the caret where it was, clamped to the new
    /// length. Ignored outside text editing.
    pub fn input(&mut self, text: impl Into<String>) {
        if let RegionMode::EditingText { buffer, caret, .. } = &mut self.mode {
            *buffer = text.into();
            let len = buffer.chars().count();
            if *caret > len {
                *caret = len;
            }
        }
    }

    /// Move the caret, clamped to the buffer length.
    pub fn set_caret(&mut self, offset: usize) {
        if let RegionMode::EditingText { buffer, caret, .. } = &mut self.mode {
            *caret = offset.min(buffer.chars().count());
        }
    }

    /// Finish editing (Enter or blur). In text mode the buffer becomes the
    /// display value either way, and a commit is emitted only when it
    /// differs from the mount original. In style mode this closes the
    /// editor without emitting.
    pub fn commit(&mut self) -> Option<Commit> {
        match std::mem::replace(&mut self.mode, RegionMode::Idle) {
            RegionMode::EditingText { buffer, .. } => {
                let changed = buffer != self.original;
                self.value = buffer;
                changed.then(|| {
                    Commit::new(self.path.clone(), self.value.clone(), self.original.clone())
                })
            }
            RegionMode::EditingStyle | RegionMode::Idle => None,
        }
    }

    /// Abort editing (Escape): restore the value from when editing began
    /// and emit nothing.
    pub fn cancel(&mut self) {
        if let RegionMode::EditingText { entered_with, .. } =
            std::mem::replace(&mut self.mode, RegionMode::Idle)
        {
            self.value = entered_with;
        }
    }

    /// Commit one style property from the style editor. Only while the
    /// editor is open, only for a declared property, only for a non-empty
    /// value; rejected submissions leave the editor open. A successful
    /// submission records the value, exits style mode, and reports the
    /// previously committed value (empty on first set) as the old value.
    pub fn submit_style(&mut self, property: &str, value: &str) -> Option<Commit> {
        if self.mode != RegionMode::EditingStyle {
            return None;
        }
        if value.is_empty() || !self.style_props.iter().any(|p| p == property) {
            return None;
        }
        let previous = self
            .styles
            .insert(property.to_string(), value.to_string())
            .unwrap_or_default();
        self.mode = RegionMode::Idle;
        Some(Commit::new(
            format!("{}{}{}", self.path, STYLE_MARKER, property),
            value,
            previous,
        ))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// The currently displayed text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The text captured when the region was instantiated.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn style_props(&self) -> &[String] {
        &self.style_props
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn styles(&self) -> &HashMap<String, String> {
        &self.styles
    }

    pub fn mode(&self) -> &RegionMode {
        &self.mode
    }

    /// Caret position while text editing.
    pub fn caret(&self) -> Option<usize> {
        match &self.mode {
            RegionMode::EditingText { caret, .. } => Some(*caret),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading() -> Region {
        Region::new("hero.title", Tag::H1, "Welcome to Our Platform")
    }

    fn button() -> Region {
        Region::new("hero.primaryButton", Tag::Button, "Get Started")
            .with_style_props(&["backgroundColor", "color"])
    }

    #[test]
    fn test_click_starts_editing_with_caret_at_end() {
        let mut region = heading();
        region.click();
        assert_eq!(
            region.mode(),
            &RegionMode::EditingText {
                buffer: "Welcome to Our Platform".into(),
                caret: 23,
                entered_with: "Welcome to Our Platform".into(),
            }
        );
    }

    #[test]
    fn test_click_while_editing_keeps_buffer() {
        let mut region = heading();
        region.click();
        region.input("Hello");
        region.click();
        assert_eq!(region.caret(), Some(5));
        match region.mode() {
            RegionMode::EditingText { buffer, .. } => assert_eq!(buffer, "Hello"),
            other => panic!("unexpected mode {other:?}"),
        }
    }

    #[test]
    fn test_input_preserves_then_clamps_caret() {
        let mut region = heading();
        region.click();
        region.set_caret(3);
        region.input("Hello world");
        assert_eq!(region.caret(), Some(3));
        region.input("Hi");
        assert_eq!(region.caret(), Some(2));
    }

    #[test]
    fn test_caret_counts_chars_not_bytes() {
        let mut region = Region::new("card.title", Tag::H3, "café");
        region.click();
        assert_eq!(region.caret(), Some(4));
        region.set_caret(100);
        assert_eq!(region.caret(), Some(4));
    }

    #[test]
    fn test_commit_emits_only_on_change() {
        let mut region = heading();
        region.click();
        region.commit();
        assert_eq!(region.mode(), &RegionMode::Idle);

        region.click();
        region.input("Hello");
        let commit = region.commit().unwrap();
        assert_eq!(commit.path, "hero.title");
        assert_eq!(commit.new_value, "Hello");
        assert_eq!(commit.old_value, "Welcome to Our Platform");
        assert_eq!(region.value(), "Hello");
    }

    #[test]
    fn test_reverting_to_original_emits_nothing() {
        let mut region = heading();
        region.click();
        region.input("Hello");
        region.commit().unwrap();

        region.click();
        region.input("Welcome to Our Platform");
        assert!(region.commit().is_none());
        assert_eq!(region.value(), "Welcome to Our Platform");
    }

    #[test]
    fn test_cancel_restores_pre_edit_value() {
        let mut region = heading();
        region.click();
        region.input("Hello");
        region.commit();

        // Escape rolls back to the value editing started from, which by
        // now differs from the mount original.
        region.click();
        region.input("scratch");
        region.cancel();
        assert_eq!(region.value(), "Hello");
        assert_eq!(region.mode(), &RegionMode::Idle);
    }

    #[test]
    fn test_shift_click_without_props_edits_text() {
        let mut region = heading();
        region.shift_click();
        assert!(matches!(region.mode(), RegionMode::EditingText { .. }));
    }

    #[test]
    fn test_shift_click_opens_style_editor() {
        let mut region = button();
        region.shift_click();
        assert_eq!(region.mode(), &RegionMode::EditingStyle);
    }

    #[test]
    fn test_submit_style_records_and_reports_previous() {
        let mut region = button();
        region.shift_click();
        let commit = region.submit_style("backgroundColor", "#FF5733").unwrap();
        assert_eq!(commit.path, "hero.primaryButton.style.backgroundColor");
        assert_eq!(commit.new_value, "#FF5733");
        assert_eq!(commit.old_value, "");
        assert_eq!(region.mode(), &RegionMode::Idle);
        assert_eq!(region.style("backgroundColor"), Some("#FF5733"));

        region.shift_click();
        let second = region.submit_style("backgroundColor", "#3366FF").unwrap();
        assert_eq!(second.old_value, "#FF5733");
    }

    #[test]
    fn test_submit_style_rejections_leave_editor_open() {
        let mut region = button();
        assert!(region.submit_style("backgroundColor", "#FF5733").is_none());

        region.shift_click();
        assert!(region.submit_style("fontSize", "12px").is_none());
        assert!(region.submit_style("backgroundColor", "").is_none());
        assert_eq!(region.mode(), &RegionMode::EditingStyle);
    }

    #[test]
    fn test_from_node_instantiates_region_leaves_only() {
        let node = Node::region("card.price", Tag::Span, "$99")
            .with_class("text-2xl")
            .with_style_props(&["color"]);
        let region = Region::from_node(&node).unwrap();
        assert_eq!(region.path(), "card.price");
        assert_eq!(region.tag(), Tag::Span);
        assert_eq!(region.value(), "$99");
        assert_eq!(region.style_props(), ["color"]);

        assert!(Region::from_node(&Node::element("div")).is_none());
    }
}
