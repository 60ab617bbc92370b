//! Core traits for the model layer.
//!
//! Every bench model implements [`ItemModel`] so a generic item view can
//! attach to it, and owns a [`ModelSignals`] set carrying the generic row and
//! data notifications. The model-specific observer protocols (list intervals,
//! tree node batches, table cells) live next to each model.

use lattice_bench_core::Signal;

use super::index::ModelIndex;
use super::role::{ItemData, ItemRole};

/// Flags indicating what operations are allowed on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemFlags {
    /// Item can be selected.
    pub selectable: bool,
    /// Item can be edited.
    pub editable: bool,
    /// Item can be dragged.
    pub drag_enabled: bool,
    /// Item can receive drops.
    pub drop_enabled: bool,
    /// Item has a checkbox.
    pub checkable: bool,
    /// Item is enabled (can interact).
    pub enabled: bool,
    /// Item should never have children.
    pub never_has_children: bool,
}

impl ItemFlags {
    /// Creates flags with all defaults (selectable and enabled only).
    pub fn new() -> Self {
        Self {
            selectable: true,
            enabled: true,
            ..Default::default()
        }
    }

    /// Creates flags for a disabled item.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Creates flags for an editable item.
    pub fn editable() -> Self {
        Self {
            selectable: true,
            editable: true,
            enabled: true,
            ..Default::default()
        }
    }

    /// Sets the editable flag.
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Sets the checkable flag.
    pub fn with_checkable(mut self, checkable: bool) -> Self {
        self.checkable = checkable;
        self
    }

    /// Sets the never-has-children flag.
    pub fn with_never_has_children(mut self, leaf: bool) -> Self {
        self.never_has_children = leaf;
        self
    }
}

/// The core trait for item models.
///
/// At minimum, implement `row_count`, `column_count`, `data`, `index`,
/// `parent` and `signals`. Editable models also override `set_data` and
/// `flags`.
pub trait ItemModel: Send + Sync {
    /// Returns the number of rows under the given parent.
    fn row_count(&self, parent: &ModelIndex) -> usize;

    /// Returns the number of columns for children of the given parent.
    fn column_count(&self, parent: &ModelIndex) -> usize;

    /// Returns the data stored under the given role for the item at index.
    ///
    /// Returns `ItemData::None` for invalid indices and unsupported roles.
    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData;

    /// Creates a model index for the given row and column under parent.
    ///
    /// Returns `ModelIndex::invalid()` if the position is out of bounds.
    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex;

    /// Returns the parent of the given index.
    fn parent(&self, index: &ModelIndex) -> ModelIndex;

    /// Returns the signals for this model.
    fn signals(&self) -> &ModelSignals;

    /// Sets the data for the given index and role.
    ///
    /// Returns `true` if the data was set. The default is read-only.
    fn set_data(&self, _index: &ModelIndex, _value: ItemData, _role: ItemRole) -> bool {
        false
    }

    /// Returns the flags for the item at the given index.
    fn flags(&self, _index: &ModelIndex) -> ItemFlags {
        ItemFlags::new()
    }

    /// Returns `true` if the item at parent has any children.
    fn has_children(&self, parent: &ModelIndex) -> bool {
        self.row_count(parent) > 0
    }

    /// Returns header data for the given section.
    fn header_data(&self, _section: usize, _orientation: Orientation, _role: ItemRole) -> ItemData {
        ItemData::None
    }

    /// Returns the display text for an item.
    fn display_text(&self, index: &ModelIndex) -> Option<String> {
        self.data(index, ItemRole::Display).into_string()
    }
}

/// Header orientation for `header_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Horizontal header (column headers).
    Horizontal,
    /// Vertical header (row headers).
    Vertical,
}

/// Collection of generic signals emitted by item models.
///
/// - **Before structural changes**: `rows_about_to_be_*`
/// - **After structural changes**: `rows_*`
/// - **Value changes**: `data_changed`
pub struct ModelSignals {
    /// Emitted just before rows are inserted.
    /// Args: (parent index, first row, last row)
    pub rows_about_to_be_inserted: Signal<(ModelIndex, usize, usize)>,

    /// Emitted after rows have been inserted.
    /// Args: (parent index, first row, last row)
    pub rows_inserted: Signal<(ModelIndex, usize, usize)>,

    /// Emitted just before rows are removed.
    /// Args: (parent index, first row, last row)
    pub rows_about_to_be_removed: Signal<(ModelIndex, usize, usize)>,

    /// Emitted after rows have been removed.
    /// Args: (parent index, first row, last row)
    pub rows_removed: Signal<(ModelIndex, usize, usize)>,

    /// Emitted when data in existing items changes.
    /// Args: (top-left index, bottom-right index, changed roles)
    pub data_changed: Signal<(ModelIndex, ModelIndex, Vec<ItemRole>)>,
}

impl Default for ModelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelSignals {
    /// Creates a new set of model signals.
    pub fn new() -> Self {
        Self {
            rows_about_to_be_inserted: Signal::new(),
            rows_inserted: Signal::new(),
            rows_about_to_be_removed: Signal::new(),
            rows_removed: Signal::new(),
            data_changed: Signal::new(),
        }
    }

    /// Emits signals for row insertion.
    ///
    /// Calls `insert_fn` between `rows_about_to_be_inserted` and `rows_inserted`.
    pub fn emit_rows_inserted<F, R>(
        &self,
        parent: ModelIndex,
        first: usize,
        last: usize,
        insert_fn: F,
    ) -> R
    where
        F: FnOnce() -> R,
    {
        self.rows_about_to_be_inserted
            .emit((parent.clone(), first, last));
        let result = insert_fn();
        self.rows_inserted.emit((parent, first, last));
        result
    }

    /// Emits signals for row removal.
    ///
    /// Calls `remove_fn` between `rows_about_to_be_removed` and `rows_removed`.
    pub fn emit_rows_removed<F, R>(
        &self,
        parent: ModelIndex,
        first: usize,
        last: usize,
        remove_fn: F,
    ) -> R
    where
        F: FnOnce() -> R,
    {
        self.rows_about_to_be_removed
            .emit((parent.clone(), first, last));
        let result = remove_fn();
        self.rows_removed.emit((parent, first, last));
        result
    }

    /// Emits the data_changed signal for a single item.
    pub fn emit_data_changed_single(&self, index: ModelIndex, roles: Vec<ItemRole>) {
        self.data_changed.emit((index.clone(), index, roles));
    }
}
