// file: src/store/mod.rs
// description: document source module exports
// reference: internal module structure

pub mod loader;

pub use loader::{BucketedDocuments, DocumentStore};
