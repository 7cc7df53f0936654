//! # Tandem Code Patcher
//!
//! Rewrites template source code from committed preview edits. The preview
//! layer emits [`Commit`] values addressed by region path; this crate turns
//! each one into a concrete string rewrite and applies it.
//!
//! ## Design
//!
//! - Text commits are literal, global find/replace against the source. No
//!   parsing: canonical templates carry their region defaults verbatim, so
//!   replacement lands without an AST.
//! - Style commits (paths with a `.style.` segment) append an inline style
//!   object after every `className` attribute in the file.
//! - Patching is pure: same inputs, same output, no I/O.

mod commit;
mod edit;

pub use commit::{Commit, STYLE_MARKER};
pub use edit::{patch, Edit};
