// file: src/exporter/mod.rs
// description: export module exports
// reference: internal module structure

pub mod json;
pub mod outline;

pub use json::{ExportManifest, JsonExporter};
pub use outline::outline;
