use crate::region::Region;
use crate::tree::{RegionTree, RenderError};
use serde::Serialize;
use tandem_catalog::{classify, find, TemplateKind};
use tandem_patch::{patch, Commit};
use tracing::{debug, warn};

/// What the preview currently shows.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderOutcome {
    /// Nothing to render yet, or no catalog entry for the classified kind.
    Empty,
    /// A live, editable region tree.
    Tree(RegionTree),
    /// The last render failed and the previous tree is gone.
    Failed(RenderError),
}

/// Classifier-driven renderer.
///
/// Owns the live region tree and keeps it stable across renders that stay
/// within one template kind, so region values, editing modes and carets
/// survive their own commit round trip. A kind change or an explicit
/// [`Preview::refresh`] rebuilds from template defaults and bumps the
/// generation counter, which is how embedders detect a remount.
#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    kind: Option<TemplateKind>,
    outcome: RenderOutcome,
    generation: u64,
}

impl Default for Preview {
    fn default() -> Self {
        Self::new()
    }
}

impl Preview {
    pub fn new() -> Self {
        Preview {
            kind: None,
            outcome: RenderOutcome::Empty,
            generation: 0,
        }
    }

    /// Classify `code` and bring the tree in line with it. Same-kind
    /// renders keep the live tree untouched.
    pub fn render(&mut self, code: &str) -> &RenderOutcome {
        let kind = classify(code);
        let same_kind = self.kind == Some(kind) && matches!(self.outcome, RenderOutcome::Tree(_));
        if !same_kind {
            self.rebuild(kind);
        }
        &self.outcome
    }

    /// Drop the live tree and instantiate afresh from the template, even
    /// within the same kind. No-op until something has rendered.
    pub fn refresh(&mut self) -> &RenderOutcome {
        if let Some(kind) = self.kind {
            self.rebuild(kind);
        }
        &self.outcome
    }

    fn rebuild(&mut self, kind: TemplateKind) {
        self.generation += 1;
        self.kind = Some(kind);
        self.outcome = match find(kind) {
            Some(template) => match RegionTree::from_template(template) {
                Ok(tree) => {
                    debug!(kind = %kind, regions = tree.len(), "preview rebuilt");
                    RenderOutcome::Tree(tree)
                }
                Err(err) => {
                    warn!(kind = %kind, error = %err, "render failed");
                    RenderOutcome::Failed(err)
                }
            },
            None => RenderOutcome::Empty,
        };
    }

    /// Turn a committed region edit into patched source. Edits apply to
    /// the template's canonical code, not to any accumulated session text,
    /// so successive preview commits do not stack in the emitted string.
    pub fn handle_edit(&self, commit: &Commit) -> Option<String> {
        let template = find(self.kind?)?;
        debug!(path = %commit.path, "applying region commit");
        Some(patch(template.code, commit))
    }

    pub fn outcome(&self) -> &RenderOutcome {
        &self.outcome
    }

    pub fn tree(&self) -> Option<&RegionTree> {
        match &self.outcome {
            RenderOutcome::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn tree_mut(&mut self) -> Option<&mut RegionTree> {
        match &mut self.outcome {
            RenderOutcome::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn region(&self, path: &str) -> Option<&Region> {
        self.tree().and_then(|tree| tree.region(path))
    }

    pub fn region_mut(&mut self, path: &str) -> Option<&mut Region> {
        self.tree_mut().and_then(|tree| tree.region_mut(path))
    }

    /// The kind of the last render, once anything has rendered.
    pub fn current_kind(&self) -> Option<TemplateKind> {
        self.kind
    }

    /// Bumps on every rebuild; unchanged across same-kind renders.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RegionMode;

    #[test]
    fn test_first_render_builds_tree() {
        let mut preview = Preview::new();
        preview.render("const metrics = [];");
        assert_eq!(preview.current_kind(), Some(TemplateKind::Dashboard));
        assert_eq!(preview.tree().unwrap().len(), 10);
        assert_eq!(preview.generation(), 1);
    }

    #[test]
    fn test_empty_code_renders_the_default_template() {
        let mut preview = Preview::new();
        preview.render("");
        assert_eq!(preview.current_kind(), Some(TemplateKind::LandingPage));
        assert!(preview.tree().is_some());
    }

    #[test]
    fn test_same_kind_render_keeps_the_live_tree() {
        let mut preview = Preview::new();
        preview.render("metric overview");

        let region = preview.region_mut("header.title").unwrap();
        region.click();
        region.input("Admin Panel");
        region.set_caret(5);

        preview.render("recent activity feed");
        let region = preview.region("header.title").unwrap();
        assert!(matches!(region.mode(), RegionMode::EditingText { .. }));
        assert_eq!(region.caret(), Some(5));
        assert_eq!(preview.generation(), 1);
    }

    #[test]
    fn test_kind_change_rebuilds_from_defaults() {
        let mut preview = Preview::new();
        preview.render("metric overview");
        let region = preview.region_mut("header.title").unwrap();
        region.click();
        region.input("Admin Panel");
        region.commit();

        preview.render("contact us");
        assert_eq!(preview.current_kind(), Some(TemplateKind::Form));
        assert_eq!(preview.generation(), 2);
        assert!(preview.region("header.title").is_none());
        assert_eq!(preview.region("form.title").unwrap().value(), "Contact Us");
    }

    #[test]
    fn test_refresh_rebuilds_within_the_same_kind() {
        let mut preview = Preview::new();
        preview.render("metric overview");
        let region = preview.region_mut("header.title").unwrap();
        region.click();
        region.input("Admin Panel");
        region.commit();
        assert_eq!(preview.region("header.title").unwrap().value(), "Admin Panel");

        preview.refresh();
        assert_eq!(preview.region("header.title").unwrap().value(), "Dashboard");
        assert_eq!(preview.generation(), 2);
    }

    #[test]
    fn test_refresh_before_any_render_is_a_no_op() {
        let mut preview = Preview::new();
        preview.refresh();
        assert_eq!(preview.generation(), 0);
        assert!(matches!(preview.outcome(), RenderOutcome::Empty));
    }

    #[test]
    fn test_handle_edit_patches_the_canonical_code() {
        let mut preview = Preview::new();
        preview.render("metric overview");

        let region = preview.region_mut("header.title").unwrap();
        region.click();
        region.input("Admin Panel");
        let commit = region.commit().unwrap();

        let patched = preview.handle_edit(&commit).unwrap();
        assert!(patched.contains("Admin Panel"));
        assert!(!patched.contains("Dashboard"));
    }

    #[test]
    fn test_handle_edit_before_any_render_is_none() {
        let preview = Preview::new();
        let commit = Commit::new("hero.title", "Hello", "Welcome to Our Platform");
        assert!(preview.handle_edit(&commit).is_none());
    }
}
