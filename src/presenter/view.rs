// file: src/presenter/view.rs
// description: one mounted documents view owning its tree and disclosure state
// reference: internal module structure

use crate::config::Labels;
use crate::disclosure::{DisclosureKey, DisclosureState};
use crate::grouping::{DocumentTree, OrderingRules};
use crate::models::{Document, GroupingMode};
use crate::presenter::render::{RenderTree, render};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DocumentsView {
    mode: GroupingMode,
    labels: Labels,
    rules: OrderingRules,
    tree: DocumentTree,
    state: DisclosureState,
}

impl DocumentsView {
    /// Build the tree and compute the default-open state.
    pub fn mount<I>(groups: I, mode: GroupingMode, labels: Labels, rules: OrderingRules) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Document>)>,
    {
        let tree = DocumentTree::build(groups, mode, &rules);
        let state = DisclosureState::initial(&tree, &rules);

        Self {
            mode,
            labels,
            rules,
            tree,
            state,
        }
    }

    /// Rebuild the tree from a new document list. Recorded open/closed
    /// state is kept, the default-open rule is not re-applied.
    pub fn refresh<I>(&mut self, groups: I)
    where
        I: IntoIterator<Item = (String, Vec<Document>)>,
    {
        self.tree = DocumentTree::build(groups, self.mode, &self.rules);
        debug!("Refreshed documents view: {} groups", self.tree.group_count());
    }

    pub fn toggle(&mut self, key: &DisclosureKey) -> bool {
        let open = self.state.toggle(key);
        debug!("Toggled {} -> {}", key, if open { "open" } else { "closed" });
        open
    }

    /// Disclosure key for a raw panel identifier in this view's mode.
    pub fn key(&self, raw: &str) -> DisclosureKey {
        DisclosureKey::parse(raw, self.mode)
    }

    pub fn is_open(&self, key: &DisclosureKey) -> bool {
        self.state.is_open(key)
    }

    pub fn mode(&self) -> GroupingMode {
        self.mode
    }

    pub fn tree(&self) -> &DocumentTree {
        &self.tree
    }

    pub fn state(&self) -> &DisclosureState {
        &self.state
    }

    pub fn render(&self) -> RenderTree {
        render(&self.tree, &self.state, &self.labels, &self.rules)
    }
}
