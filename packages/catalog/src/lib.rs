//! # Tandem Template Catalog
//!
//! Fixed registry of renderable UI archetypes plus the keyword classifier
//! that picks one for an incoming code string.
//!
//! ## Design
//!
//! - **Closed catalog**: every renderable surface is one of four
//!   [`TemplateKind`]s. There is no general parser; the preview never
//!   renders arbitrary code, it renders the template the code classifies to.
//! - **Templates are constants**: each kind maps to a structural [`Node`]
//!   tree (static chrome plus editable [`Node::Region`] leaves) and one
//!   canonical source string. Both are process-wide constants, built once.
//! - **Classification is total**: [`classify`] always returns a kind;
//!   unrecognized or empty code falls back to the landing page.
//!
//! ```rust,ignore
//! use tandem_catalog::{classify, lookup};
//!
//! let kind = classify("export default function Dashboard() { ... }");
//! let template = lookup(kind);
//! println!("{} regions", template.tree.region_count());
//! ```

mod kind;
mod node;
mod template;

pub use kind::{classify, TemplateKind, UnknownKind};
pub use node::{Node, Tag};
pub use template::{catalog, find, lookup, Template};
