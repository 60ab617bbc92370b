//! Chunked tree model with synthetic nodes.
//!
//! `HierarchyModel` backs the bench's tree views. Its extent is a row count in
//! units of 20: every 20 rows are one *chunk*, a single top-level node under
//! the root. Chunk 0 is a fixed subtree of categorized sample data; every later
//! chunk is a head node plus 19 leaves, labeled from their row number and the
//! shared label cache.
//!
//! Nodes live in an arena keyed by [`NodeId`]. The id doubles as the
//! `ModelIndex` internal id, so indices survive lookups without pointers.
//! Removing a chunk detaches its whole subtree and hands it, as owned
//! [`DetachedNode`]s, to the removal notification.

use std::collections::HashMap;

use parking_lot::RwLock;

use lattice_bench_core::logging::targets;
use lattice_bench_core::{PerfSpan, Signal};

use super::index::ModelIndex;
use super::label::SharedLabels;
use super::role::{ItemData, ItemRole};
use super::traits::{ItemFlags, ItemModel, ModelSignals};

/// Arena id of a tree node.
pub type NodeId = u64;

/// Rows per chunk; also the minimum row count.
pub const CHUNK_SIZE: usize = 20;

/// Label of the synthetic root node.
pub const ROOT_LABEL: &str = "JTree";

/// Label of the chunk 0 node.
pub const SAMPLE_DATA_LABEL: &str = "sample data";

const SAMPLE_CATEGORIES: &[(&str, &[&str])] = &[
    ("colors", &["blue", "violet", "red", "yellow"]),
    ("sports", &["basketball", "soccer", "football", "hockey"]),
    ("food", &["hot dogs", "pizza", "ravioli", "bananas"]),
];

const PIZZA_VARIETIES: &[&str] = &[
    "pizza aglio e olio",
    "pizza calabrese",
    "pizza infernale",
    "pizza margherita bianca",
    "pizza quattro stagioni",
];

/// A subtree that was removed from the model.
///
/// Removal notifications carry these so observers can reconcile node identity
/// after the nodes became unreachable from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetachedNode {
    /// The id the node had while attached.
    pub id: NodeId,
    /// The node's label.
    pub label: String,
    /// The node's former children, in order.
    pub children: Vec<DetachedNode>,
}

impl DetachedNode {
    /// Number of nodes in this subtree, including itself.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(DetachedNode::subtree_len).sum::<usize>()
    }
}

/// Payload of [`TreeSignals::nodes_inserted`].
#[derive(Debug, Clone)]
pub struct NodesInserted {
    /// The parent the nodes were inserted under (invalid = root).
    pub parent: ModelIndex,
    /// Child indices of the new nodes, ascending.
    pub indices: Vec<usize>,
}

/// Payload of [`TreeSignals::nodes_removed`].
#[derive(Debug)]
pub struct NodesRemoved {
    /// The parent the nodes were removed from (invalid = root).
    pub parent: ModelIndex,
    /// Former child indices of the removed nodes, ascending.
    pub indices: Vec<usize>,
    /// The removed subtrees, in their former order.
    pub nodes: Vec<DetachedNode>,
}

/// Tree observer protocol: batched node insertion and removal.
pub struct TreeSignals {
    /// Emitted once per growth with every appended child index.
    pub nodes_inserted: Signal<NodesInserted>,
    /// Emitted once per shrink with every removed child index and subtree.
    pub nodes_removed: Signal<NodesRemoved>,
}

impl Default for TreeSignals {
    fn default() -> Self {
        Self {
            nodes_inserted: Signal::new(),
            nodes_removed: Signal::new(),
        }
    }
}

struct TreeNode {
    label: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

struct TreeStorage {
    nodes: HashMap<NodeId, TreeNode>,
    root_children: Vec<NodeId>,
    row_count: usize,
    next_id: NodeId,
}

impl TreeStorage {
    fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            root_children: Vec::new(),
            row_count: 0,
            next_id: 1,
        }
    }

    fn add_node(&mut self, parent: Option<NodeId>, label: String) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(
            id,
            TreeNode {
                label,
                children: Vec::new(),
                parent,
            },
        );
        match parent {
            None => self.root_children.push(id),
            Some(parent_id) => {
                if let Some(parent) = self.nodes.get_mut(&parent_id) {
                    parent.children.push(id);
                }
            }
        }
        id
    }

    fn detach_subtree(&mut self, id: NodeId) -> Option<DetachedNode> {
        let node = self.nodes.remove(&id)?;
        let children = node
            .children
            .into_iter()
            .filter_map(|child| self.detach_subtree(child))
            .collect();
        Some(DetachedNode {
            id,
            label: node.label,
            children,
        })
    }

    fn children_of(&self, parent: Option<NodeId>) -> &[NodeId] {
        match parent {
            None => &self.root_children,
            Some(id) => self
                .nodes
                .get(&id)
                .map(|n| n.children.as_slice())
                .unwrap_or(&[]),
        }
    }

    fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    fn row_of(&self, id: NodeId) -> Option<usize> {
        self.children_of(self.parent_of(id))
            .iter()
            .position(|&child| child == id)
    }

    fn index_for(&self, id: NodeId, column: usize) -> Option<ModelIndex> {
        let row = self.row_of(id)?;
        let parent = match self.parent_of(id) {
            Some(pid) => self.index_for(pid, 0)?,
            None => ModelIndex::invalid(),
        };
        Some(ModelIndex::with_internal_id(row, column, parent, id))
    }
}

/// A tree whose extent grows and shrinks in chunks of [`CHUNK_SIZE`] rows.
pub struct HierarchyModel {
    storage: RwLock<TreeStorage>,
    labels: SharedLabels,
    tree_signals: TreeSignals,
    signals: ModelSignals,
}

impl HierarchyModel {
    /// Creates a tree sized for `row_count` rows (at least one chunk).
    pub fn new(row_count: usize, labels: SharedLabels) -> Self {
        let model = Self {
            storage: RwLock::new(TreeStorage::new()),
            labels,
            tree_signals: TreeSignals::default(),
            signals: ModelSignals::new(),
        };
        model.set_row_count(row_count);
        model
    }

    /// The tree-specific observer signals.
    pub fn tree_signals(&self) -> &TreeSignals {
        &self.tree_signals
    }

    /// The last requested extent, a multiple of [`CHUNK_SIZE`].
    pub fn row_count(&self) -> usize {
        self.storage.read().row_count
    }

    /// Number of top-level nodes (one per chunk).
    pub fn child_count(&self) -> usize {
        self.storage.read().root_children.len()
    }

    /// Label of the root node.
    pub fn root_label(&self) -> &'static str {
        ROOT_LABEL
    }

    /// Ids of the children of `parent` (`None` = root), in order.
    pub fn children_of(&self, parent: Option<NodeId>) -> Vec<NodeId> {
        self.storage.read().children_of(parent).to_vec()
    }

    /// Label of the node `id`, if it is attached.
    pub fn node_label(&self, id: NodeId) -> Option<String> {
        self.storage.read().nodes.get(&id).map(|n| n.label.clone())
    }

    /// Returns `true` if `id` is attached to the tree.
    pub fn contains(&self, id: NodeId) -> bool {
        self.storage.read().nodes.contains_key(&id)
    }

    /// Returns the model index of an attached node.
    pub fn index_of(&self, id: NodeId) -> Option<ModelIndex> {
        self.storage.read().index_for(id, 0)
    }

    /// Resizes the tree to cover `row_count` rows.
    ///
    /// The count is clamped up to [`CHUNK_SIZE`]. Growth appends whole chunks
    /// until the target is reached and emits one insertion for all of them;
    /// shrinking drops chunks from the tail while the extent exceeds the target
    /// and emits one removal carrying the detached subtrees.
    pub fn set_row_count(&self, row_count: usize) {
        let _span = PerfSpan::new("HierarchyModel::set_row_count");
        let target = row_count.max(CHUNK_SIZE);
        let (current, old_children) = {
            let storage = self.storage.read();
            (storage.row_count, storage.root_children.len())
        };

        if target > current {
            let added = (target - current).div_ceil(CHUNK_SIZE);
            tracing::debug!(target: targets::MODEL, current, requested = target, added, "tree grows");

            let first = old_children;
            let last = old_children + added - 1;
            self.signals
                .emit_rows_inserted(ModelIndex::invalid(), first, last, || {
                    self.append_chunks(added)
                });

            self.tree_signals.nodes_inserted.emit(NodesInserted {
                parent: ModelIndex::invalid(),
                indices: (first..=last).collect(),
            });
        } else if target < current {
            let mut removed = 0;
            let mut remaining = current;
            while remaining > target {
                remaining -= CHUNK_SIZE;
                removed += 1;
            }
            tracing::debug!(target: targets::MODEL, current, requested = target, removed, "tree shrinks");

            let new_children = old_children - removed;
            let nodes = self.signals.emit_rows_removed(
                ModelIndex::invalid(),
                new_children,
                old_children - 1,
                || self.remove_chunks(removed),
            );

            self.tree_signals.nodes_removed.emit(NodesRemoved {
                parent: ModelIndex::invalid(),
                indices: (new_children..old_children).collect(),
                nodes,
            });
        }
    }

    fn append_chunks(&self, count: usize) {
        let mut storage = self.storage.write();
        for _ in 0..count {
            let first_row = storage.row_count;
            self.build_chunk(&mut storage, first_row);
            storage.row_count += CHUNK_SIZE;
        }
    }

    fn remove_chunks(&self, count: usize) -> Vec<DetachedNode> {
        let mut storage = self.storage.write();
        let mut nodes = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(id) = storage.root_children.pop() else {
                break;
            };
            if let Some(node) = storage.detach_subtree(id) {
                nodes.push(node);
            }
            storage.row_count -= CHUNK_SIZE;
        }
        nodes.reverse();
        nodes
    }

    fn build_chunk(&self, storage: &mut TreeStorage, first_row: usize) {
        if first_row == 0 {
            let sample = storage.add_node(None, SAMPLE_DATA_LABEL.to_string());
            for (category, items) in SAMPLE_CATEGORIES {
                let category_id = storage.add_node(Some(sample), category.to_string());
                for item in *items {
                    let item_id = storage.add_node(Some(category_id), item.to_string());
                    if *item == "pizza" {
                        for variety in PIZZA_VARIETIES {
                            storage.add_node(Some(item_id), variety.to_string());
                        }
                    }
                }
            }
            return;
        }

        let mut labels = self.labels.lock();
        let head = storage.add_node(
            None,
            format!("item {}   {}", first_row, labels.label(first_row)),
        );
        for row in first_row + 1..first_row + CHUNK_SIZE {
            storage.add_node(Some(head), format!("item {}   {}", row, labels.label(row)));
        }
    }

    fn node_id(index: &ModelIndex) -> Option<NodeId> {
        index.is_valid().then(|| index.internal_id())
    }
}

impl ItemModel for HierarchyModel {
    fn row_count(&self, parent: &ModelIndex) -> usize {
        self.storage
            .read()
            .children_of(Self::node_id(parent))
            .len()
    }

    fn column_count(&self, _parent: &ModelIndex) -> usize {
        1
    }

    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
        let Some(id) = Self::node_id(index) else {
            return ItemData::None;
        };
        match role {
            ItemRole::Display | ItemRole::Edit => self.node_label(id).into(),
            _ => ItemData::None,
        }
    }

    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex {
        if column > 0 {
            return ModelIndex::invalid();
        }
        let storage = self.storage.read();
        match storage.children_of(Self::node_id(parent)).get(row) {
            Some(&child) => ModelIndex::with_internal_id(row, column, parent.clone(), child),
            None => ModelIndex::invalid(),
        }
    }

    fn parent(&self, index: &ModelIndex) -> ModelIndex {
        let Some(id) = Self::node_id(index) else {
            return ModelIndex::invalid();
        };
        let storage = self.storage.read();
        storage
            .parent_of(id)
            .and_then(|pid| storage.index_for(pid, 0))
            .unwrap_or_else(ModelIndex::invalid)
    }

    fn signals(&self) -> &ModelSignals {
        &self.signals
    }

    fn set_data(&self, index: &ModelIndex, value: ItemData, role: ItemRole) -> bool {
        if !matches!(role, ItemRole::Display | ItemRole::Edit) {
            return false;
        }
        let (Some(id), Some(label)) = (Self::node_id(index), value.into_string()) else {
            return false;
        };

        {
            let mut storage = self.storage.write();
            match storage.nodes.get_mut(&id) {
                Some(node) => node.label = label,
                None => return false,
            }
        }

        self.signals
            .emit_data_changed_single(index.clone(), vec![ItemRole::Display]);
        true
    }

    fn flags(&self, index: &ModelIndex) -> ItemFlags {
        match Self::node_id(index) {
            Some(id) if self.contains(id) => ItemFlags::editable(),
            _ => ItemFlags::disabled(),
        }
    }
}

static_assertions::assert_impl_all!(HierarchyModel: Send, Sync);
