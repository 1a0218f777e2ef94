// file: src/presenter/mod.rs
// description: documents view and render tree exports
// reference: internal module structure

pub mod render;
pub mod view;

pub use render::{DocumentLink, Panel, RenderTree, render};
pub use view::DocumentsView;
