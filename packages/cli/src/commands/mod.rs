pub mod classify;
pub mod patch;
pub mod render;
pub mod replay;
pub mod templates;

pub use classify::{classify, ClassifyArgs};
pub use patch::{patch, PatchArgs};
pub use render::{render, RenderArgs};
pub use replay::{replay, ReplayArgs};
pub use templates::{templates, TemplatesArgs};
