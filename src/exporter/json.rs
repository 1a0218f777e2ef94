// file: src/exporter/json.rs
// description: json export of rendered document trees

use crate::error::{PresenterError, Result};
use crate::presenter::RenderTree;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const TREE_FILE: &str = "documents.json";
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportManifest {
    pub exported_at: String,
    pub grouping_mode: String,
    pub total_documents: usize,
    pub total_groups: usize,
    pub open_panels: Vec<String>,
    pub files: Vec<String>,
}

impl ExportManifest {
    fn new(tree: &RenderTree) -> Self {
        let open_panels = tree
            .panels
            .iter()
            .flat_map(|panel| std::iter::once(panel).chain(panel.children.iter()))
            .filter(|panel| panel.open)
            .map(|panel| panel.key.clone())
            .collect();

        Self {
            exported_at: Utc::now().to_rfc3339(),
            grouping_mode: tree.mode.to_string(),
            total_documents: tree.total_documents,
            total_groups: tree.panels.len(),
            open_panels,
            files: vec![TREE_FILE.to_string()],
        }
    }
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|e| PresenterError::FileOperation {
            path: output_dir.clone(),
            source: e,
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn render_json(tree: &RenderTree, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(tree)?
        } else {
            serde_json::to_string(tree)?
        };
        Ok(json)
    }

    /// Write the render tree and a manifest next to it.
    pub fn export(&self, tree: &RenderTree, pretty: bool) -> Result<ExportManifest> {
        info!("Starting JSON export to {:?}", self.output_dir);

        self.write(TREE_FILE, &Self::render_json(tree, pretty)?)?;

        let manifest = ExportManifest::new(tree);
        let manifest_json = if pretty {
            serde_json::to_string_pretty(&manifest)?
        } else {
            serde_json::to_string(&manifest)?
        };
        self.write(MANIFEST_FILE, &manifest_json)?;

        info!(
            "Export complete: {} documents in {} groups",
            manifest.total_documents, manifest.total_groups
        );
        Ok(manifest)
    }

    fn write(&self, file_name: &str, content: &str) -> Result<()> {
        let path = self.output_dir.join(file_name);
        fs::write(&path, content).map_err(|e| PresenterError::FileOperation { path, source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Labels;
    use crate::grouping::OrderingRules;
    use crate::models::{Document, GroupingMode};
    use crate::presenter::DocumentsView;
    use tempfile::tempdir;

    fn rendered() -> RenderTree {
        DocumentsView::mount(
            vec![
                (
                    "2024|rezultate".to_string(),
                    vec![Document::new("1", "Rezultat", "r.pdf", "/r.pdf")],
                ),
                (
                    "2024|anexe".to_string(),
                    vec![Document::new("2", "Anexa", "a.docx", "/a.docx")],
                ),
            ],
            GroupingMode::YearCategory,
            Labels::default(),
            OrderingRules::default(),
        )
        .render()
    }

    #[test]
    fn test_exporter_creation() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("nested/out"));
        assert!(exporter.is_ok());
        assert!(dir.path().join("nested/out").is_dir());
    }

    #[test]
    fn test_export_writes_tree_and_manifest() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();
        let manifest = exporter.export(&rendered(), true).unwrap();

        assert_eq!(manifest.total_documents, 2);
        assert_eq!(manifest.total_groups, 1);
        assert_eq!(manifest.grouping_mode, "year_category");
        assert_eq!(manifest.open_panels, vec!["2024", "2024|rezultate"]);

        let written = fs::read_to_string(dir.path().join(TREE_FILE)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(json["mode"], "year_category");
        assert_eq!(json["panels"][0]["children"][0]["key"], "2024|rezultate");
        assert_eq!(json["panels"][0]["children"][1]["documents"][0]["badge"], "DOC");
        assert!(dir.path().join(MANIFEST_FILE).is_file());
    }

    #[test]
    fn test_compact_string() {
        let json = JsonExporter::render_json(&rendered(), false).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"downloadLabel\":\"Descarcă\""));
    }
}
