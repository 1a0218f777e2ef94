// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod badge;
pub mod document;
pub mod group_key;

pub use badge::FileBadge;
pub use document::{Document, DocumentRecord};
pub use group_key::{GroupKey, GroupingMode, KEY_SEPARATOR};
