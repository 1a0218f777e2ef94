// file: src/disclosure/state.rs
// description: open/closed tracking for group and category panels
// reference: view-owned state mutated only through toggle

use crate::grouping::{DocumentTree, OrderingRules};
use crate::models::{GroupingMode, KEY_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Identifier of one collapsible panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisclosureKey {
    /// A year, or a flat group label.
    Group(String),
    /// A category panel nested under a year.
    Category { year: String, category: String },
}

impl DisclosureKey {
    pub fn group(label: impl Into<String>) -> Self {
        DisclosureKey::Group(label.into())
    }

    pub fn category(year: impl Into<String>, category: impl Into<String>) -> Self {
        DisclosureKey::Category {
            year: year.into(),
            category: category.into(),
        }
    }

    /// In year mode `year|category` names a category panel. Flat labels are
    /// always whole groups, separator included.
    pub fn parse(raw: &str, mode: GroupingMode) -> Self {
        if !mode.is_hierarchical() {
            return DisclosureKey::group(raw);
        }
        match raw.split_once(KEY_SEPARATOR) {
            Some((year, category)) => DisclosureKey::category(year, category),
            None => DisclosureKey::group(raw),
        }
    }

    pub fn composite(&self) -> String {
        match self {
            DisclosureKey::Group(label) => label.clone(),
            DisclosureKey::Category { year, category } => {
                format!("{}{}{}", year, KEY_SEPARATOR, category)
            }
        }
    }
}

impl fmt::Display for DisclosureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.composite())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureState {
    open_groups: BTreeSet<String>,
    open_categories: BTreeSet<(String, String)>,
}

impl DisclosureState {
    /// Everything closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default-open rule, computed once when a view mounts.
    ///
    /// Only the first top-level group starts open. Inside the first year the
    /// pinned-first category starts open alone when present, otherwise every
    /// category of that year does. Categories of other years start closed.
    pub fn initial(tree: &DocumentTree, rules: &OrderingRules) -> Self {
        let mut state = Self::new();

        match tree {
            DocumentTree::Flat(groups) => {
                if let Some(first) = groups.first() {
                    state.open_groups.insert(first.label.clone());
                }
            }
            DocumentTree::YearCategory(years) => {
                if let Some(first) = years.first() {
                    state.open_groups.insert(first.year.clone());

                    if first.category(&rules.pinned_first_category).is_some() {
                        state
                            .open_categories
                            .insert((first.year.clone(), rules.pinned_first_category.clone()));
                    } else {
                        for category in &first.categories {
                            state
                                .open_categories
                                .insert((first.year.clone(), category.category.clone()));
                        }
                    }
                }
            }
        }

        debug!(
            "Initial disclosure state: {} groups open, {} categories open",
            state.open_groups.len(),
            state.open_categories.len()
        );
        state
    }

    /// Flip one panel. Returns whether it is open afterwards.
    pub fn toggle(&mut self, key: &DisclosureKey) -> bool {
        match key {
            DisclosureKey::Group(label) => flip(&mut self.open_groups, label.clone()),
            DisclosureKey::Category { year, category } => {
                flip(&mut self.open_categories, (year.clone(), category.clone()))
            }
        }
    }

    pub fn is_open(&self, key: &DisclosureKey) -> bool {
        match key {
            DisclosureKey::Group(label) => self.is_group_open(label),
            DisclosureKey::Category { year, category } => self.is_category_open(year, category),
        }
    }

    pub fn is_group_open(&self, label: &str) -> bool {
        self.open_groups.contains(label)
    }

    /// Recorded state of the category panel, regardless of its year.
    pub fn is_category_open(&self, year: &str, category: &str) -> bool {
        self.open_categories
            .contains(&(year.to_string(), category.to_string()))
    }

    /// Whether the category panel is actually expanded on screen.
    pub fn is_category_visible(&self, year: &str, category: &str) -> bool {
        self.is_group_open(year) && self.is_category_open(year, category)
    }

    pub fn open_groups(&self) -> impl Iterator<Item = &str> {
        self.open_groups.iter().map(String::as_str)
    }

    pub fn open_categories(&self) -> impl Iterator<Item = DisclosureKey> + '_ {
        self.open_categories
            .iter()
            .map(|(year, category)| DisclosureKey::category(year.as_str(), category.as_str()))
    }

    /// All open keys, groups first.
    pub fn open_keys(&self) -> Vec<DisclosureKey> {
        self.open_groups()
            .map(DisclosureKey::group)
            .chain(self.open_categories())
            .collect()
    }
}

fn flip<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}
