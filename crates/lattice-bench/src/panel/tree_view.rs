//! Expansion state of a tree view.
//!
//! The hierarchy model knows nothing about expansion; each tree view keeps its
//! own set of expanded nodes and flattens the tree into visible rows from it.
//! The root row is shown and starts expanded.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use lattice_bench_core::ConnectionId;
use lattice_bench_core::logging::targets;

use crate::model::{DetachedNode, HierarchyModel, NodeId};

/// One row of the flattened tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow {
    /// The node, or `None` for the root.
    pub node: Option<NodeId>,
    /// Nesting level; the root is 0.
    pub depth: usize,
}

#[derive(Default)]
struct Expansion {
    root: bool,
    nodes: HashSet<NodeId>,
}

impl Expansion {
    fn is_expanded(&self, node: Option<NodeId>) -> bool {
        match node {
            None => self.root,
            Some(id) => self.nodes.contains(&id),
        }
    }

    fn forget(&mut self, detached: &DetachedNode) {
        self.nodes.remove(&detached.id);
        for child in &detached.children {
            self.forget(child);
        }
    }
}

/// Expansion state of one tree view over a shared [`HierarchyModel`].
///
/// Expanded ids of removed subtrees are dropped as soon as the model reports
/// the removal.
pub struct TreeViewState {
    model: Arc<HierarchyModel>,
    expansion: Arc<Mutex<Expansion>>,
    removal_connection: ConnectionId,
}

impl TreeViewState {
    pub fn new(model: Arc<HierarchyModel>) -> Self {
        let expansion = Arc::new(Mutex::new(Expansion {
            root: true,
            nodes: HashSet::new(),
        }));

        let tracked = expansion.clone();
        let removal_connection = model.tree_signals().nodes_removed.connect(move |removed| {
            let mut expansion = tracked.lock();
            for node in &removed.nodes {
                expansion.forget(node);
            }
        });

        Self {
            model,
            expansion,
            removal_connection,
        }
    }

    pub fn model(&self) -> &Arc<HierarchyModel> {
        &self.model
    }

    /// Flattens the expanded part of the tree, depth first.
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let expansion = self.expansion.lock();
        let mut rows = vec![VisibleRow { node: None, depth: 0 }];
        if expansion.root {
            self.push_children(&expansion, None, 1, &mut rows);
        }
        rows
    }

    fn push_children(
        &self,
        expansion: &Expansion,
        parent: Option<NodeId>,
        depth: usize,
        rows: &mut Vec<VisibleRow>,
    ) {
        for child in self.model.children_of(parent) {
            rows.push(VisibleRow { node: Some(child), depth });
            if expansion.nodes.contains(&child) {
                self.push_children(expansion, Some(child), depth + 1, rows);
            }
        }
    }

    /// Number of visible rows, the root included.
    pub fn row_count(&self) -> usize {
        self.visible_rows().len()
    }

    /// Label shown in visible row `row`.
    pub fn row_label(&self, row: usize) -> Option<String> {
        match self.visible_rows().get(row)?.node {
            None => Some(self.model.root_label().to_string()),
            Some(id) => self.model.node_label(id),
        }
    }

    pub fn is_expanded(&self, node: Option<NodeId>) -> bool {
        self.expansion.lock().is_expanded(node)
    }

    /// Expands the node shown in visible row `row`.
    ///
    /// Leaves and out-of-range rows are ignored.
    pub fn expand_row(&self, row: usize) {
        let Some(visible) = self.visible_rows().get(row).copied() else {
            return;
        };
        match visible.node {
            None => self.expansion.lock().root = true,
            Some(id) => {
                if !self.model.children_of(Some(id)).is_empty() {
                    self.expansion.lock().nodes.insert(id);
                }
            }
        }
    }

    /// Collapses the node shown in visible row `row`.
    pub fn collapse_row(&self, row: usize) {
        let Some(visible) = self.visible_rows().get(row).copied() else {
            return;
        };
        let mut expansion = self.expansion.lock();
        match visible.node {
            None => expansion.root = false,
            Some(id) => {
                expansion.nodes.remove(&id);
            }
        }
    }

    /// Expands the rows visible now, from the last one up.
    ///
    /// Going bottom up keeps the indices of the rows still to expand stable.
    /// Rows revealed by this call stay collapsed.
    pub fn expand_all_rows(&self) {
        self.expand_rows_from(0);
    }

    /// Expands visible rows `first..` from the last one up.
    pub fn expand_rows_from(&self, first: usize) {
        let count = self.row_count();
        tracing::trace!(target: targets::PANEL, first, count, "expanding tree rows");
        for row in (first..count).rev() {
            self.expand_row(row);
        }
    }

    /// Number of expanded nodes, the root excluded.
    pub fn expanded_len(&self) -> usize {
        self.expansion.lock().nodes.len()
    }
}

impl Drop for TreeViewState {
    fn drop(&mut self) {
        self.model
            .tree_signals()
            .nodes_removed
            .disconnect(self.removal_connection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RowLabelCache;

    fn tree(row_count: usize) -> TreeViewState {
        TreeViewState::new(Arc::new(HierarchyModel::new(
            row_count,
            RowLabelCache::shared(1000, 2),
        )))
    }

    #[test]
    fn test_initial_rows() {
        let view = tree(40);
        // root + two chunk nodes
        assert_eq!(view.row_count(), 3);
        assert_eq!(view.row_label(0).as_deref(), Some("JTree"));
        assert_eq!(view.row_label(1).as_deref(), Some("sample data"));
    }

    #[test]
    fn test_expand_all_expands_one_level() {
        let view = tree(40);
        view.expand_all_rows();
        // root, sample data + 3 categories, head + 19 leaves
        assert_eq!(view.row_count(), 1 + 1 + 3 + 1 + 19);

        view.expand_all_rows();
        // categories open: 4 + 4 + 4 items
        assert_eq!(view.row_count(), 25 + 12);
        assert_eq!(view.row_label(2).as_deref(), Some("colors"));
        assert_eq!(view.row_label(3).as_deref(), Some("blue"));
    }

    #[test]
    fn test_collapse_hides_children() {
        let view = tree(20);
        view.expand_row(1);
        assert_eq!(view.row_count(), 5);
        view.collapse_row(1);
        assert_eq!(view.row_count(), 2);
        view.collapse_row(0);
        assert_eq!(view.row_count(), 1);
    }

    #[test]
    fn test_removal_forgets_expanded_nodes() {
        let view = tree(60);
        view.expand_all_rows();
        view.expand_all_rows();
        assert!(view.expanded_len() > 2);

        view.model().set_row_count(20);
        // Only the sample data subtree remains expanded.
        assert_eq!(view.expanded_len(), 4);
    }

    #[test]
    fn test_drop_disconnects() {
        let model = Arc::new(HierarchyModel::new(20, RowLabelCache::shared(100, 0)));
        let view = TreeViewState::new(model.clone());
        assert_eq!(model.tree_signals().nodes_removed.connection_count(), 1);
        drop(view);
        assert_eq!(model.tree_signals().nodes_removed.connection_count(), 0);
    }
}
