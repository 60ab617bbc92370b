//! Model index for addressing items in list, tree and table models.
//!
//! A `ModelIndex` carries a row, a column, the parent index and a
//! model-specific internal id. Flat models (lists, tables) leave the internal
//! id at zero; the tree model stores the node's arena id in it.

use std::hash::{Hash, Hasher};

/// Represents a position within an `ItemModel`.
///
/// Indices are cheap snapshots. After a structural change (rows inserted or
/// removed) a previously obtained index may point at a different item or at
/// nothing at all; re-query the model instead of storing them.
#[derive(Clone)]
pub struct ModelIndex {
    row: usize,
    column: usize,
    parent: Option<Box<ModelIndex>>,
    internal_id: u64,
    valid: bool,
}

impl Default for ModelIndex {
    fn default() -> Self {
        Self::invalid()
    }
}

impl ModelIndex {
    /// Creates an invalid (null) model index.
    ///
    /// The invalid index doubles as the parent reference for top-level items,
    /// i.e. it stands for the model's root.
    #[inline]
    pub const fn invalid() -> Self {
        Self {
            row: 0,
            column: 0,
            parent: None,
            internal_id: 0,
            valid: false,
        }
    }

    /// Creates a new valid index with no internal id.
    #[inline]
    pub fn new(row: usize, column: usize, parent: ModelIndex) -> Self {
        Self::with_internal_id(row, column, parent, 0)
    }

    /// Creates a new valid index carrying a model-specific internal id.
    #[inline]
    pub fn with_internal_id(
        row: usize,
        column: usize,
        parent: ModelIndex,
        internal_id: u64,
    ) -> Self {
        Self {
            row,
            column,
            parent: if parent.is_valid() {
                Some(Box::new(parent))
            } else {
                None
            },
            internal_id,
            valid: true,
        }
    }

    /// Returns `true` if this is a valid index.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the row of this index within its parent.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this index within its parent.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the parent index, or an invalid index for top-level items.
    #[inline]
    pub fn parent(&self) -> ModelIndex {
        match &self.parent {
            Some(parent) => (**parent).clone(),
            None => ModelIndex::invalid(),
        }
    }

    /// Returns `true` if this index has a valid parent.
    #[inline]
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns the internal ID associated with this index.
    #[inline]
    pub fn internal_id(&self) -> u64 {
        self.internal_id
    }

    /// Returns the depth of this index. Top-level items have depth 0.
    pub fn depth(&self) -> usize {
        if !self.is_valid() {
            return 0;
        }
        let mut depth = 0;
        let mut current = self.parent();
        while current.is_valid() {
            depth += 1;
            current = current.parent();
        }
        depth
    }
}

impl std::fmt::Debug for ModelIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            f.debug_struct("ModelIndex")
                .field("row", &self.row)
                .field("column", &self.column)
                .field("depth", &self.depth())
                .field("internal_id", &self.internal_id)
                .finish()
        } else {
            write!(f, "ModelIndex(invalid)")
        }
    }
}

impl PartialEq for ModelIndex {
    fn eq(&self, other: &Self) -> bool {
        if !self.is_valid() && !other.is_valid() {
            return true;
        }
        if self.is_valid() != other.is_valid() {
            return false;
        }
        self.row == other.row
            && self.column == other.column
            && self.parent == other.parent
            && self.internal_id == other.internal_id
    }
}

impl Eq for ModelIndex {}

impl Hash for ModelIndex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.valid.hash(state);
        if self.valid {
            self.row.hash(state);
            self.column.hash(state);
            self.internal_id.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index() {
        let index = ModelIndex::invalid();
        assert!(!index.is_valid());
        assert_eq!(index.row(), 0);
        assert!(!index.has_parent());
    }

    #[test]
    fn test_flat_indices_compare_by_position() {
        let a = ModelIndex::new(3, 1, ModelIndex::invalid());
        let b = ModelIndex::new(3, 1, ModelIndex::invalid());
        let c = ModelIndex::new(3, 2, ModelIndex::invalid());
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, ModelIndex::invalid());
    }

    #[test]
    fn test_hierarchical_index() {
        let parent = ModelIndex::with_internal_id(0, 0, ModelIndex::invalid(), 7);
        let child = ModelIndex::with_internal_id(2, 0, parent.clone(), 9);

        assert!(child.has_parent());
        assert_eq!(child.parent(), parent);
        assert_eq!(child.depth(), 1);
        assert_eq!(child.internal_id(), 9);
    }
}
