// file: src/presenter/render.rs
// description: render tree of collapsible panels and download links
// reference: internal data structures

use crate::config::Labels;
use crate::disclosure::{DisclosureKey, DisclosureState};
use crate::grouping::{CategoryGroup, DocumentTree, OrderingRules};
use crate::models::{Document, FileBadge, GroupingMode};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLink {
    pub id: String,
    pub title: String,
    pub url: String,
    pub file_name: String,
    pub badge: FileBadge,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub download_label: String,
}

impl DocumentLink {
    fn new(document: &Document, labels: &Labels) -> Self {
        Self {
            id: document.id.clone(),
            title: document.title.clone(),
            url: document.file_url.clone(),
            file_name: document.file_name.clone(),
            badge: document.badge(),
            date: document.date,
            download_label: labels.download.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    /// Disclosure key in composite form.
    pub key: String,
    pub label: String,
    pub open: bool,
    pub document_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Panel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<DocumentLink>,
}

impl Panel {
    /// This panel or a descendant with the given composite key.
    pub fn find(&self, key: &str) -> Option<&Panel> {
        if self.key == key {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(key))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderTree {
    pub heading: String,
    pub mode: GroupingMode,
    pub total_documents: usize,
    pub panels: Vec<Panel>,
}

impl RenderTree {
    pub fn panel(&self, key: &str) -> Option<&Panel> {
        self.panels.iter().find_map(|panel| panel.find(key))
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Every link in display order.
    pub fn links(&self) -> Vec<&DocumentLink> {
        fn collect<'a>(panel: &'a Panel, out: &mut Vec<&'a DocumentLink>) {
            out.extend(panel.documents.iter());
            for child in &panel.children {
                collect(child, out);
            }
        }

        let mut out = Vec::with_capacity(self.total_documents);
        for panel in &self.panels {
            collect(panel, &mut out);
        }
        out
    }
}

/// Closed panels keep their content; hiding it is up to the page layer.
pub fn render(
    tree: &DocumentTree,
    state: &DisclosureState,
    labels: &Labels,
    rules: &OrderingRules,
) -> RenderTree {
    let panels = match tree {
        DocumentTree::Flat(groups) => groups
            .iter()
            .map(|group| {
                let label = if rules.is_ungrouped(&group.label) {
                    labels.other_documents.clone()
                } else {
                    group.label.clone()
                };
                Panel {
                    key: group.label.clone(),
                    label,
                    open: state.is_group_open(&group.label),
                    document_count: group.documents.len(),
                    children: Vec::new(),
                    documents: links(&group.documents, labels),
                }
            })
            .collect(),
        DocumentTree::YearCategory(years) => years
            .iter()
            .map(|year| Panel {
                key: year.year.clone(),
                label: year.year.clone(),
                open: state.is_group_open(&year.year),
                document_count: year.document_count(),
                children: year
                    .categories
                    .iter()
                    .map(|category| category_panel(&year.year, category, state, labels))
                    .collect(),
                documents: Vec::new(),
            })
            .collect(),
    };

    RenderTree {
        heading: labels.documents.clone(),
        mode: tree.mode(),
        total_documents: tree.total_documents(),
        panels,
    }
}

fn category_panel(
    year: &str,
    category: &CategoryGroup,
    state: &DisclosureState,
    labels: &Labels,
) -> Panel {
    let key = DisclosureKey::category(year, category.category.as_str());
    Panel {
        key: key.composite(),
        label: category.category.clone(),
        open: state.is_open(&key),
        document_count: category.documents.len(),
        children: Vec::new(),
        documents: links(&category.documents, labels),
    }
}

fn links(documents: &[Document], labels: &Labels) -> Vec<DocumentLink> {
    documents
        .iter()
        .map(|document| DocumentLink::new(document, labels))
        .collect()
}
