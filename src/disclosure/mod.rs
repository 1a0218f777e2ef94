// file: src/disclosure/mod.rs
// description: disclosure state module exports
// reference: internal module structure

pub mod state;

pub use state::{DisclosureKey, DisclosureState};
