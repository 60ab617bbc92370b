//! Resizable list model with synthetic items.
//!
//! `SequenceModel` backs the bench's list views. It stores nothing but its
//! size; item text is derived from the row number, with a memoized random
//! label appended past the first 20 rows.

use parking_lot::RwLock;

use lattice_bench_core::logging::targets;
use lattice_bench_core::{PerfSpan, Signal};

use super::index::ModelIndex;
use super::label::SharedLabels;
use super::role::{ItemData, ItemRole};
use super::traits::{ItemFlags, ItemModel, ModelSignals};

/// Rows below this index show a plain `"item N"` label.
pub const PLAIN_LABEL_ROWS: usize = 20;

/// List observer protocol: inclusive index intervals.
pub struct ListSignals {
    /// Emitted after rows `first..=last` were added.
    pub interval_added: Signal<(usize, usize)>,
    /// Emitted after rows `first..=last` were removed.
    pub interval_removed: Signal<(usize, usize)>,
}

impl Default for ListSignals {
    fn default() -> Self {
        Self {
            interval_added: Signal::new(),
            interval_removed: Signal::new(),
        }
    }
}

/// A list of `size` generated items.
pub struct SequenceModel {
    size: RwLock<usize>,
    labels: SharedLabels,
    list_signals: ListSignals,
    signals: ModelSignals,
}

impl SequenceModel {
    /// Creates a list with `size` items.
    pub fn new(size: usize, labels: SharedLabels) -> Self {
        let model = Self {
            size: RwLock::new(0),
            labels,
            list_signals: ListSignals::default(),
            signals: ModelSignals::new(),
        };
        model.set_size(size);
        model
    }

    /// Returns the number of items.
    pub fn size(&self) -> usize {
        *self.size.read()
    }

    /// Returns `true` if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The list-specific observer signals.
    pub fn list_signals(&self) -> &ListSignals {
        &self.list_signals
    }

    /// Resizes the list and notifies observers of the added or removed interval.
    pub fn set_size(&self, size: usize) {
        let _span = PerfSpan::new("SequenceModel::set_size");
        let old_size = self.size();

        if size > old_size {
            tracing::debug!(target: targets::MODEL, old_size, size, "list grows");
            self.signals
                .emit_rows_inserted(ModelIndex::invalid(), old_size, size - 1, || {
                    *self.size.write() = size;
                });
            self.list_signals.interval_added.emit((old_size, size - 1));
        } else if size < old_size {
            tracing::debug!(target: targets::MODEL, old_size, size, "list shrinks");
            self.signals
                .emit_rows_removed(ModelIndex::invalid(), size, old_size - 1, || {
                    *self.size.write() = size;
                });
            self.list_signals.interval_removed.emit((size, old_size - 1));
        }
    }

    /// Returns the item text at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size()`.
    pub fn element_at(&self, index: usize) -> String {
        let size = self.size();
        assert!(
            index < size,
            "list index out of bounds: the size is {size} but the index is {index}"
        );

        if index < PLAIN_LABEL_ROWS {
            format!("item {}", index + 1)
        } else {
            let label = self.labels.lock().label(index);
            format!("item {}   {}", index + 1, label)
        }
    }
}

impl ItemModel for SequenceModel {
    fn row_count(&self, parent: &ModelIndex) -> usize {
        if parent.is_valid() { 0 } else { self.size() }
    }

    fn column_count(&self, _parent: &ModelIndex) -> usize {
        1
    }

    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
        if !index.is_valid() || index.row() >= self.size() {
            return ItemData::None;
        }

        match role {
            ItemRole::Display | ItemRole::Edit => ItemData::from(self.element_at(index.row())),
            _ => ItemData::None,
        }
    }

    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex {
        if parent.is_valid() || column > 0 || row >= self.size() {
            return ModelIndex::invalid();
        }
        ModelIndex::new(row, column, ModelIndex::invalid())
    }

    fn parent(&self, _index: &ModelIndex) -> ModelIndex {
        ModelIndex::invalid()
    }

    fn signals(&self) -> &ModelSignals {
        &self.signals
    }

    fn flags(&self, index: &ModelIndex) -> ItemFlags {
        if !index.is_valid() || index.row() >= self.size() {
            return ItemFlags::disabled();
        }
        ItemFlags::new().with_never_has_children(true)
    }
}

static_assertions::assert_impl_all!(SequenceModel: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::label::RowLabelCache;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn model(size: usize) -> SequenceModel {
        SequenceModel::new(size, RowLabelCache::shared(1000, 3))
    }

    fn record_intervals(model: &SequenceModel) -> Arc<Mutex<Vec<(&'static str, usize, usize)>>> {
        let events = Arc::new(Mutex::new(Vec::new()));

        let added = events.clone();
        model
            .list_signals()
            .interval_added
            .connect(move |&(first, last)| added.lock().push(("added", first, last)));

        let removed = events.clone();
        model
            .list_signals()
            .interval_removed
            .connect(move |&(first, last)| removed.lock().push(("removed", first, last)));

        events
    }

    #[test]
    fn test_plain_labels_for_first_rows() {
        let model = model(20);
        assert_eq!(model.size(), 20);
        assert_eq!(model.element_at(0), "item 1");
        assert_eq!(model.element_at(19), "item 20");
    }

    #[test]
    fn test_grow_emits_single_interval() {
        let model = model(20);
        let events = record_intervals(&model);

        model.set_size(25);

        assert_eq!(*events.lock(), vec![("added", 20, 24)]);
        let label = model.element_at(22);
        assert!(label.starts_with("item 23   "), "unexpected label {label:?}");
        assert!(label.len() > "item 23   ".len());
        assert_eq!(model.element_at(22), label);
    }

    #[test]
    fn test_shrink_and_noop() {
        let model = model(30);
        let events = record_intervals(&model);

        model.set_size(30);
        model.set_size(12);
        model.set_size(0);

        assert_eq!(*events.lock(), vec![("removed", 12, 29), ("removed", 0, 11)]);
        assert!(model.is_empty());
    }

    #[test]
    fn test_labels_stable_across_resize_cycles() {
        let model = model(60);
        let before: Vec<String> = (0..40).map(|i| model.element_at(i)).collect();

        model.set_size(40);
        model.set_size(60);

        let after: Vec<String> = (0..40).map(|i| model.element_at(i)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_generic_row_signals() {
        let model = model(5);
        let events = Arc::new(Mutex::new(Vec::new()));

        let inserted = events.clone();
        model
            .signals()
            .rows_inserted
            .connect(move |(parent, first, last)| {
                inserted.lock().push((parent.is_valid(), *first, *last));
            });

        model.set_size(8);
        assert_eq!(*events.lock(), vec![(false, 5, 7)]);
    }

    #[test]
    fn test_item_model_access() {
        let model = model(3);
        let root = ModelIndex::invalid();

        assert_eq!(model.row_count(&root), 3);
        let index = model.index(2, 0, &root);
        assert_eq!(model.display_text(&index).as_deref(), Some("item 3"));
        assert!(!model.index(3, 0, &root).is_valid());
        assert!(!model.index(0, 1, &root).is_valid());
        assert!(model.flags(&index).never_has_children);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_element_out_of_range_panics() {
        let model = model(2);
        model.element_at(2);
    }
}
