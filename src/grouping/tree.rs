// file: src/grouping/tree.rs
// description: ordered document tree derived from bucketed documents
// reference: internal data structures

use crate::grouping::order::OrderingRules;
use crate::models::{Document, GroupKey, GroupingMode};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatGroup {
    pub label: String,
    pub documents: Vec<Document>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub documents: Vec<Document>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearGroup {
    pub year: String,
    pub categories: Vec<CategoryGroup>,
}

impl YearGroup {
    pub fn document_count(&self) -> usize {
        self.categories.iter().map(|c| c.documents.len()).sum()
    }

    pub fn category(&self, name: &str) -> Option<&CategoryGroup> {
        self.categories.iter().find(|c| c.category == name)
    }
}

/// Documents grouped and sorted for display. Rebuilt from scratch whenever
/// the document list changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "groups", rename_all = "snake_case")]
pub enum DocumentTree {
    Flat(Vec<FlatGroup>),
    YearCategory(Vec<YearGroup>),
}

impl DocumentTree {
    /// Parse raw keys for `mode`, merge buckets that resolve to the same key
    /// and sort every level.
    pub fn build<I>(groups: I, mode: GroupingMode, rules: &OrderingRules) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Document>)>,
    {
        let keyed = groups
            .into_iter()
            .map(|(raw, documents)| (GroupKey::parse(&raw, mode, rules), documents));
        Self::from_keyed(keyed, mode, rules)
    }

    /// Same as [`DocumentTree::build`] for keys already parsed at the fetch boundary.
    pub fn from_keyed<I>(groups: I, mode: GroupingMode, rules: &OrderingRules) -> Self
    where
        I: IntoIterator<Item = (GroupKey, Vec<Document>)>,
    {
        let tree = match mode {
            GroupingMode::YearCategory => {
                DocumentTree::YearCategory(build_year_groups(groups, rules))
            }
            GroupingMode::Flat => DocumentTree::Flat(build_flat_groups(groups, rules)),
        };

        debug!(
            "Built {} document tree: {} groups, {} documents",
            mode,
            tree.group_count(),
            tree.total_documents()
        );
        tree
    }

    pub fn mode(&self) -> GroupingMode {
        match self {
            DocumentTree::Flat(_) => GroupingMode::Flat,
            DocumentTree::YearCategory(_) => GroupingMode::YearCategory,
        }
    }

    /// Number of top-level groups.
    pub fn group_count(&self) -> usize {
        match self {
            DocumentTree::Flat(groups) => groups.len(),
            DocumentTree::YearCategory(years) => years.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.group_count() == 0
    }

    pub fn total_documents(&self) -> usize {
        self.documents().count()
    }

    /// Top-level labels in display order.
    pub fn group_labels(&self) -> Vec<&str> {
        match self {
            DocumentTree::Flat(groups) => groups.iter().map(|g| g.label.as_str()).collect(),
            DocumentTree::YearCategory(years) => years.iter().map(|y| y.year.as_str()).collect(),
        }
    }

    pub fn first_group_label(&self) -> Option<&str> {
        self.group_labels().first().copied()
    }

    /// Every document in display order.
    pub fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_> {
        match self {
            DocumentTree::Flat(groups) => Box::new(groups.iter().flat_map(|g| g.documents.iter())),
            DocumentTree::YearCategory(years) => Box::new(
                years
                    .iter()
                    .flat_map(|y| y.categories.iter())
                    .flat_map(|c| c.documents.iter()),
            ),
        }
    }
}

fn build_flat_groups<I>(groups: I, rules: &OrderingRules) -> Vec<FlatGroup>
where
    I: IntoIterator<Item = (GroupKey, Vec<Document>)>,
{
    let mut out: Vec<FlatGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (key, documents) in groups {
        if documents.is_empty() {
            continue;
        }

        // a composite key reaching flat mode is kept whole as the label
        let label = key.raw();
        match index.get(&label) {
            Some(&i) => out[i].documents.extend(documents),
            None => {
                index.insert(label.clone(), out.len());
                out.push(FlatGroup { label, documents });
            }
        }
    }

    rules.sort_flat(&mut out, |g| g.label.as_str());
    out
}

fn build_year_groups<I>(groups: I, rules: &OrderingRules) -> Vec<YearGroup>
where
    I: IntoIterator<Item = (GroupKey, Vec<Document>)>,
{
    let mut years: Vec<YearGroup> = Vec::new();
    let mut year_index: HashMap<String, usize> = HashMap::new();

    for (key, documents) in groups {
        if documents.is_empty() {
            continue;
        }

        let (year, category) = match key {
            GroupKey::YearCategory { year, category } => (year, category),
            // flat labels fed to a hierarchical tree land in the fallback bucket
            GroupKey::Flat(_) => (
                rules.other_years_label.clone(),
                rules.pinned_last_category.clone(),
            ),
        };

        let yi = match year_index.get(&year) {
            Some(&i) => i,
            None => {
                year_index.insert(year.clone(), years.len());
                years.push(YearGroup {
                    year,
                    categories: Vec::new(),
                });
                years.len() - 1
            }
        };

        let categories = &mut years[yi].categories;
        match categories.iter_mut().find(|c| c.category == category) {
            Some(existing) => existing.documents.extend(documents),
            None => categories.push(CategoryGroup {
                category,
                documents,
            }),
        }
    }

    rules.sort_years(&mut years, |y| y.year.as_str());
    for year in &mut years {
        rules.sort_categories(&mut year.categories, |c| c.category.as_str());
    }
    years
}
