pub mod pages;
pub mod renderer;

pub use pages::{PageView, RenderContext};
pub use renderer::{Document, DocumentRenderer};
