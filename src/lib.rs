// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod disclosure;
pub mod error;
pub mod exporter;
pub mod grouping;
pub mod models;
pub mod presenter;
pub mod store;
pub mod utils;

pub use config::{Config, ExportConfig, Labels, PresenterConfig};
pub use disclosure::{DisclosureKey, DisclosureState};
pub use error::{PresenterError, Result};
pub use exporter::{ExportManifest, JsonExporter, outline};
pub use grouping::{CategoryGroup, DocumentTree, FlatGroup, OrderingRules, YearGroup};
pub use models::{Document, DocumentRecord, FileBadge, GroupKey, GroupingMode};
pub use presenter::{DocumentLink, DocumentsView, Panel, RenderTree};
pub use store::{BucketedDocuments, DocumentStore};
pub use utils::Validator;

/// File-type badge for a file name; `"PDF"` unless the extension says otherwise.
pub fn infer_type(file_name: &str) -> &'static str {
    FileBadge::infer(file_name).as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let view = DocumentsView::mount(
            Vec::new(),
            config.presenter.grouping_mode,
            config.labels.clone(),
            config.ordering_rules(),
        );
        assert!(view.render().is_empty());
    }

    #[test]
    fn test_infer_type() {
        assert_eq!(infer_type("a.docx"), "DOC");
        assert_eq!(infer_type("a"), "PDF");
        assert_eq!(infer_type(""), "PDF");
        assert_eq!(infer_type("a.ZIP"), "PDF");
    }
}
