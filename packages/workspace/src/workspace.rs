use crate::events::{EditOrigin, WorkspaceEvent};
use crate::sources::{Design, Generated, ProjectRecord, TemplateRecord, Viewport};
use crate::status::{StatusTracker, SyncStatus};
use chrono::Utc;
use std::collections::VecDeque;
use std::time::Instant;
use tandem_editor::{CodeBuffer, EditorKey};
use tandem_patch::Commit;
use tandem_preview::{Preview, RenderOutcome};
use tracing::{debug, info, warn};

/// The sync coordinator.
///
/// Owns the authoritative code string and keeps the preview, the code
/// surface, and the status indicator agreeing on it. Every change funnels
/// through one adoption path regardless of origin: set the code, emit
/// [`WorkspaceEvent::CodeChanged`], mark syncing, reconcile the editor
/// buffer, re-render.
///
/// Single-threaded and synchronous. Timers are deadlines polled by
/// [`Workspace::tick`]; outbound notifications queue as events until
/// drained.
#[derive(Debug)]
pub struct Workspace {
    code: String,
    title: String,
    design: Option<Design>,
    viewport: Viewport,
    preview: Preview,
    buffer: CodeBuffer,
    status: StatusTracker,
    events: VecDeque<WorkspaceEvent>,
}

impl Workspace {
    /// An empty workspace: no artifact adopted, nothing rendered yet.
    pub fn new() -> Self {
        Workspace {
            code: String::new(),
            title: String::from("Untitled Project"),
            design: None,
            viewport: Viewport::Desktop,
            preview: Preview::new(),
            buffer: CodeBuffer::new(""),
            status: StatusTracker::new(),
            events: VecDeque::new(),
        }
    }

    /// Adopt a freshly generated artifact: design metadata plus code.
    pub fn adopt_generated(&mut self, generated: Generated, now: Instant) {
        info!(title = %generated.design.title, "generated artifact adopted");
        self.title = generated.design.title.clone();
        self.design = Some(generated.design);
        self.adopt(generated.code, EditOrigin::External, now);
    }

    /// Reopen a stored project. The record carries no category or
    /// generation time; the descriptor gets an empty category and the
    /// adoption time.
    pub fn load_project(&mut self, project: ProjectRecord, now: Instant) {
        info!(title = %project.title, "project loaded");
        self.title = project.title.clone();
        self.design = Some(Design {
            category: String::new(),
            title: project.title,
            description: project.description,
            preview: project.thumbnail,
            generated_at: Utc::now(),
        });
        self.adopt(project.code, EditOrigin::External, now);
    }

    /// Start from a gallery template.
    pub fn load_template(&mut self, template: TemplateRecord, now: Instant) {
        info!(title = %template.title, "template loaded");
        self.title = template.title.clone();
        self.design = Some(Design {
            category: String::new(),
            title: template.title,
            description: String::from("Template-based design"),
            preview: String::from("/placeholder.svg?height=400&width=600"),
            generated_at: Utc::now(),
        });
        self.adopt(template.code, EditOrigin::External, now);
    }

    /// Adopt code pushed from outside without artifact metadata.
    pub fn adopt_external(&mut self, code: impl Into<String>, now: Instant) {
        self.adopt(code.into(), EditOrigin::External, now);
    }

    /// Click a region: begin text editing.
    pub fn preview_click(&mut self, path: &str) {
        match self.preview.region_mut(path) {
            Some(region) => region.click(),
            None => warn!(%path, "gesture on unknown region"),
        }
    }

    /// Shift-click a region: open the style editor (or fall back to text
    /// editing on unstyled regions).
    pub fn preview_shift_click(&mut self, path: &str) {
        match self.preview.region_mut(path) {
            Some(region) => region.shift_click(),
            None => warn!(%path, "gesture on unknown region"),
        }
    }

    /// Replace a region's in-edit buffer.
    pub fn preview_input(&mut self, path: &str, text: &str) {
        match self.preview.region_mut(path) {
            Some(region) => region.input(text),
            None => warn!(%path, "gesture on unknown region"),
        }
    }

    /// Finish a region's text edit; a changed value patches the code.
    pub fn preview_commit(&mut self, path: &str, now: Instant) {
        let commit = match self.preview.region_mut(path) {
            Some(region) => region.commit(),
            None => {
                warn!(%path, "gesture on unknown region");
                None
            }
        };
        if let Some(commit) = commit {
            self.dispatch_commit(commit, now);
        }
    }

    /// Abort a region's text edit; nothing reaches the code.
    pub fn preview_cancel(&mut self, path: &str) {
        match self.preview.region_mut(path) {
            Some(region) => region.cancel(),
            None => warn!(%path, "gesture on unknown region"),
        }
    }

    /// Commit one style property from a region's style editor.
    pub fn preview_submit_style(&mut self, path: &str, property: &str, value: &str, now: Instant) {
        let commit = match self.preview.region_mut(path) {
            Some(region) => region.submit_style(property, value),
            None => {
                warn!(%path, "gesture on unknown region");
                None
            }
        };
        if let Some(commit) = commit {
            self.dispatch_commit(commit, now);
        }
    }

    fn dispatch_commit(&mut self, commit: Commit, now: Instant) {
        debug!(path = %commit.path, "region commit dispatched");
        if let Some(patched) = self.preview.handle_edit(&commit) {
            self.adopt(patched, EditOrigin::Preview, now);
        }
    }

    /// Live typing in the code surface. The text lands in the buffer and
    /// propagates on save, autosave, or history navigation.
    pub fn editor_type(&mut self, text: &str, now: Instant) {
        self.buffer.edit(text, now);
    }

    /// Immediate save from the code surface.
    pub fn editor_save(&mut self, now: Instant) {
        if let Some(text) = self.buffer.save() {
            self.adopt(text, EditOrigin::Editor, now);
        }
    }

    /// Undo in the code surface; the restored text propagates at once.
    pub fn editor_undo(&mut self, now: Instant) {
        if let Some(text) = self.buffer.undo() {
            self.adopt(text, EditOrigin::Editor, now);
        }
    }

    /// Redo in the code surface; the restored text propagates at once.
    pub fn editor_redo(&mut self, now: Instant) {
        if let Some(text) = self.buffer.redo() {
            self.adopt(text, EditOrigin::Editor, now);
        }
    }

    /// Run a keyboard shortcut against the code surface.
    pub fn editor_key(&mut self, key: EditorKey, now: Instant) {
        if let Some(text) = self.buffer.apply_key(key) {
            self.adopt(text, EditOrigin::Editor, now);
        }
    }

    /// Move the code-surface cursor (a char offset, clamped).
    pub fn editor_set_cursor(&mut self, offset: usize) {
        self.buffer.set_cursor(offset);
    }

    /// Pump the deadlines: fire a due autosave, decay the indicator.
    pub fn tick(&mut self, now: Instant) {
        if let Some(text) = self.buffer.poll_autosave(now) {
            self.adopt(text, EditOrigin::Editor, now);
        }
        if self.status.tick(now) {
            self.emit_status();
        }
    }

    /// Force a preview remount without touching the code.
    pub fn refresh(&mut self) {
        let failure = match self.preview.refresh() {
            RenderOutcome::Failed(err) => Some(err.to_string()),
            _ => None,
        };
        self.absorb_render(failure);
    }

    fn adopt(&mut self, code: String, origin: EditOrigin, now: Instant) {
        debug!(?origin, chars = code.chars().count(), "code adopted");
        self.code = code;
        self.events.push_back(WorkspaceEvent::CodeChanged {
            code: self.code.clone(),
            origin,
        });
        if self.status.mark_syncing(now) {
            self.emit_status();
        }
        if origin != EditOrigin::Editor {
            self.buffer.reconcile_external(&self.code);
        }
        let failure = match self.preview.render(&self.code) {
            RenderOutcome::Failed(err) => Some(err.to_string()),
            _ => None,
        };
        self.absorb_render(failure);
    }

    fn absorb_render(&mut self, failure: Option<String>) {
        match failure {
            Some(message) => {
                warn!(%message, "preview render failed");
                self.events.push_back(WorkspaceEvent::RenderFailed { message });
                if self.status.mark_error() {
                    self.emit_status();
                }
            }
            None => {
                if self.status.clear_error() {
                    self.emit_status();
                }
            }
        }
    }

    fn emit_status(&mut self) {
        self.events.push_back(WorkspaceEvent::StatusChanged {
            status: self.status.status(),
        });
    }

    /// The authoritative code string.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn status(&self) -> SyncStatus {
        self.status.status()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn design(&self) -> Option<&Design> {
        self.design.as_ref()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn buffer(&self) -> &CodeBuffer {
        &self.buffer
    }

    /// Take everything queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<WorkspaceEvent> {
        self.events.drain(..).collect()
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
