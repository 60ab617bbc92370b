//! Selection state for the bench views.
//!
//! The panel only needs to know whether a view has a selection (the stub
//! transfer handler refuses to export an empty one) and how the table selects,
//! so this model keeps an ordered set of indices plus the mode and behavior.

use std::collections::HashSet;

use lattice_bench_core::Signal;

use super::index::ModelIndex;

/// How many items can be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Nothing can be selected.
    NoSelection,
    /// At most one item.
    SingleSelection,
    /// Any number of items.
    #[default]
    ExtendedSelection,
}

/// What a click selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionBehavior {
    /// Single cells or items.
    #[default]
    SelectItems,
    /// Whole rows.
    SelectRows,
    /// Whole columns.
    SelectColumns,
}

impl SelectionBehavior {
    /// Maps a table's row/column selection toggles to a behavior.
    ///
    /// Returns `None` when neither is allowed.
    pub fn from_allowed(rows: bool, columns: bool) -> Option<Self> {
        match (rows, columns) {
            (true, true) => Some(SelectionBehavior::SelectItems),
            (true, false) => Some(SelectionBehavior::SelectRows),
            (false, true) => Some(SelectionBehavior::SelectColumns),
            (false, false) => None,
        }
    }
}

/// Flags for [`SelectionModel::select`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionFlags {
    /// Clear the selection first.
    pub clear: bool,
    /// Add the index.
    pub select: bool,
    /// Remove the index.
    pub deselect: bool,
    /// Flip the index.
    pub toggle: bool,
}

impl SelectionFlags {
    /// Add the index.
    pub const SELECT: Self = Self {
        clear: false,
        select: true,
        deselect: false,
        toggle: false,
    };

    /// Remove the index.
    pub const DESELECT: Self = Self {
        select: false,
        deselect: true,
        ..Self::SELECT
    };

    /// Flip the index.
    pub const TOGGLE: Self = Self {
        select: false,
        toggle: true,
        ..Self::SELECT
    };

    /// Replace the selection with the index.
    pub const CLEAR_AND_SELECT: Self = Self {
        clear: true,
        ..Self::SELECT
    };
}

/// Ordered selection of model indices.
///
/// `selection_changed` carries `(selected, deselected)`.
pub struct SelectionModel {
    mode: SelectionMode,
    behavior: SelectionBehavior,
    selected: Vec<ModelIndex>,
    lookup: HashSet<ModelIndex>,
    pub selection_changed: Signal<(Vec<ModelIndex>, Vec<ModelIndex>)>,
}

impl Default for SelectionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionModel {
    pub fn new() -> Self {
        Self {
            mode: SelectionMode::default(),
            behavior: SelectionBehavior::default(),
            selected: Vec::new(),
            lookup: HashSet::new(),
            selection_changed: Signal::new(),
        }
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.mode
    }

    /// Sets the mode. Switching to `NoSelection` clears the selection.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        if mode == SelectionMode::NoSelection {
            self.clear_selection();
        }
    }

    pub fn selection_behavior(&self) -> SelectionBehavior {
        self.behavior
    }

    pub fn set_selection_behavior(&mut self, behavior: SelectionBehavior) {
        self.behavior = behavior;
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn selected_indices(&self) -> &[ModelIndex] {
        &self.selected
    }

    pub fn is_selected(&self, index: &ModelIndex) -> bool {
        self.lookup.contains(index)
    }

    /// Sorted, de-duplicated rows of the selected indices.
    pub fn selected_rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.selected.iter().map(ModelIndex::row).collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }

    /// Applies a selection operation to `index`.
    pub fn select(&mut self, index: ModelIndex, flags: SelectionFlags) {
        if self.mode == SelectionMode::NoSelection {
            return;
        }

        let mut deselected = Vec::new();
        let mut selected = Vec::new();

        if flags.clear {
            deselected = std::mem::take(&mut self.selected);
            self.lookup.clear();
        }

        if index.is_valid() {
            let was_selected = self.lookup.contains(&index);
            let add = (flags.select && !was_selected) || (flags.toggle && !was_selected);
            let remove = (flags.deselect || flags.toggle) && was_selected;

            if add {
                self.insert(index.clone());
                selected.push(index);
            } else if remove {
                self.remove(&index);
                deselected.push(index);
            }
        }

        if self.mode == SelectionMode::SingleSelection && self.selected.len() > 1 {
            let keep = self.selected.split_off(self.selected.len() - 1);
            for dropped in std::mem::replace(&mut self.selected, keep) {
                self.lookup.remove(&dropped);
                deselected.push(dropped);
            }
        }

        deselected.retain(|idx| !self.lookup.contains(idx));
        if !selected.is_empty() || !deselected.is_empty() {
            self.selection_changed.emit((selected, deselected));
        }
    }

    /// Deselects every index for which `keep` returns `false`.
    ///
    /// Views call this after their model shrank.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&ModelIndex) -> bool,
    {
        let (kept, gone): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.selected).into_iter().partition(|idx| keep(idx));
        self.selected = kept;
        for idx in &gone {
            self.lookup.remove(idx);
        }
        if !gone.is_empty() {
            self.selection_changed.emit((Vec::new(), gone));
        }
    }

    /// Deselects everything.
    pub fn clear_selection(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        let deselected = std::mem::take(&mut self.selected);
        self.lookup.clear();
        self.selection_changed.emit((Vec::new(), deselected));
    }

    fn insert(&mut self, index: ModelIndex) {
        if self.lookup.insert(index.clone()) {
            self.selected.push(index);
        }
    }

    fn remove(&mut self, index: &ModelIndex) {
        if self.lookup.remove(index) {
            self.selected.retain(|idx| idx != index);
        }
    }
}
