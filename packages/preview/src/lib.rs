//! # Tandem Preview
//!
//! The rendered, clickable face of a template: a tree of editable regions
//! instantiated from the catalog, and the renderer that keeps that tree in
//! step with the current code.
//!
//! ## Design
//!
//! - [`Region`] owns all per-region interaction: text editing with a caret
//!   that survives buffer updates, style editing, commit and cancel.
//! - [`RegionTree`] is the instantiated, path-addressable collection for
//!   one render.
//! - [`Preview`] classifies code into a template kind, keeps the live tree
//!   across renders that stay within one kind, and turns committed edits
//!   into patched source via `tandem-patch`.

mod region;
mod renderer;
mod tree;

pub use region::{Region, RegionMode};
pub use renderer::{Preview, RenderOutcome};
pub use tree::{RegionTree, RenderError};
