//! Six-column table model with authored rows and sparse overflow rows.
//!
//! The first [`AUTHORED_ROWS`] rows hold fixed sample values. Rows past them
//! are virtual until written: reading one yields a synthesized `"item N"` in
//! column 0 and a generated label in column 1. The first write to an overflow
//! row materializes a full-width row of null cells, which then lives for the
//! lifetime of the model, whatever the row count does afterwards.

use std::collections::HashMap;

use parking_lot::RwLock;

use lattice_bench_core::logging::targets;
use lattice_bench_core::{PerfSpan, Signal};

use super::index::ModelIndex;
use super::label::SharedLabels;
use super::role::{CheckState, ItemData, ItemRole};
use super::traits::{ItemFlags, ItemModel, ModelSignals, Orientation};

/// Number of columns.
pub const COLUMN_COUNT: usize = 6;

/// Number of hand-authored rows.
pub const AUTHORED_ROWS: usize = 12;

/// Month names, used by the authored rows and the combo columns.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Declared value type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Any value.
    Any,
    /// Text.
    Text,
    /// Integer.
    Integer,
    /// Boolean, shown as a check box.
    Boolean,
}

/// Static description of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Header text.
    pub name: &'static str,
    /// Declared value type.
    pub column_type: ColumnType,
    /// Whether views may edit cells of this column.
    pub editable: bool,
}

/// The column table.
pub const COLUMNS: [Column; COLUMN_COUNT] = [
    Column {
        name: "Not editable",
        column_type: ColumnType::Any,
        editable: false,
    },
    Column {
        name: "Text",
        column_type: ColumnType::Any,
        editable: true,
    },
    Column {
        name: "Combo",
        column_type: ColumnType::Text,
        editable: true,
    },
    Column {
        name: "Combo Editable",
        column_type: ColumnType::Text,
        editable: true,
    },
    Column {
        name: "Integer",
        column_type: ColumnType::Integer,
        editable: true,
    },
    Column {
        name: "Boolean",
        column_type: ColumnType::Boolean,
        editable: true,
    },
];

/// Editor choices offered by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choices {
    /// Only values from the list.
    Fixed(&'static [&'static str]),
    /// Values from the list or free text.
    Editable(&'static [&'static str]),
}

impl Choices {
    /// The offered values.
    pub fn values(&self) -> &'static [&'static str] {
        match self {
            Choices::Fixed(values) | Choices::Editable(values) => *values,
        }
    }

    /// Returns `true` if free text is accepted besides the listed values.
    pub fn accepts_free_text(&self) -> bool {
        matches!(self, Choices::Editable(_))
    }
}

type Row = [ItemData; COLUMN_COUNT];

fn authored_rows() -> Vec<Row> {
    MONTHS
        .iter()
        .enumerate()
        .map(|(r, month)| {
            let mut row: Row = Default::default();
            row[0] = format!("item {}", r + 1).into();
            row[2] = (*month).into();
            match r {
                0 => {
                    row[1] = "item 1b".into();
                    row[3] = "July".into();
                    row[4] = 123.into();
                }
                1 => {
                    row[1] = "item 2b".into();
                    row[3] = "August".into();
                    row[4] = 456.into();
                    row[5] = true.into();
                }
                _ => {}
            }
            row
        })
        .collect()
}

/// Table observer protocol: inclusive row ranges and single cells.
pub struct TableSignals {
    /// Emitted after rows `first..=last` were added.
    pub rows_inserted: Signal<(usize, usize)>,
    /// Emitted after rows `first..=last` were removed.
    pub rows_deleted: Signal<(usize, usize)>,
    /// Emitted after the cell `(row, column)` was written.
    pub cell_updated: Signal<(usize, usize)>,
}

impl Default for TableSignals {
    fn default() -> Self {
        Self {
            rows_inserted: Signal::new(),
            rows_deleted: Signal::new(),
            cell_updated: Signal::new(),
        }
    }
}

struct TableState {
    row_count: usize,
    rows: Vec<Row>,
    overflow: HashMap<usize, Row>,
}

/// A six-column table of `row_count` rows.
pub struct TabularModel {
    state: RwLock<TableState>,
    labels: SharedLabels,
    table_signals: TableSignals,
    signals: ModelSignals,
}

impl TabularModel {
    /// Creates a table with `row_count` rows.
    pub fn new(row_count: usize, labels: SharedLabels) -> Self {
        let model = Self {
            state: RwLock::new(TableState {
                row_count: AUTHORED_ROWS,
                rows: authored_rows(),
                overflow: HashMap::new(),
            }),
            labels,
            table_signals: TableSignals::default(),
            signals: ModelSignals::new(),
        };
        model.set_row_count(row_count);
        model
    }

    /// The table-specific observer signals.
    pub fn table_signals(&self) -> &TableSignals {
        &self.table_signals
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.state.read().row_count
    }

    /// Number of overflow rows materialized so far.
    pub fn overflow_len(&self) -> usize {
        self.state.read().overflow.len()
    }

    /// Resizes the table. Cell contents are kept.
    pub fn set_row_count(&self, row_count: usize) {
        let _span = PerfSpan::new("TabularModel::set_row_count");
        let old = self.row_count();

        if row_count > old {
            tracing::debug!(target: targets::MODEL, old, row_count, "table grows");
            self.signals
                .emit_rows_inserted(ModelIndex::invalid(), old, row_count - 1, || {
                    self.state.write().row_count = row_count;
                });
            self.table_signals.rows_inserted.emit((old, row_count - 1));
        } else if row_count < old {
            tracing::debug!(target: targets::MODEL, old, row_count, "table shrinks");
            self.signals
                .emit_rows_removed(ModelIndex::invalid(), row_count, old - 1, || {
                    self.state.write().row_count = row_count;
                });
            self.table_signals.rows_deleted.emit((row_count, old - 1));
        }
    }

    /// Returns the value of a cell; `ItemData::None` is a null cell.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of range.
    pub fn value_at(&self, row: usize, column: usize) -> ItemData {
        check_column(column);
        let state = self.state.read();
        if row < AUTHORED_ROWS {
            return state.rows[row][column].clone();
        }

        let value = match state.overflow.get(&row) {
            Some(cells) => cells[column].clone(),
            None if column == 1 => self.labels.lock().label(row).into(),
            None => ItemData::None,
        };
        if column == 0 && value.is_none() {
            format!("item {}", row + 1).into()
        } else {
            value
        }
    }

    /// Writes a cell and emits `cell_updated`.
    ///
    /// Writing to an overflow row materializes it first. The column's
    /// editability is not checked; that is the view's business.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of range.
    pub fn set_value_at(&self, value: ItemData, row: usize, column: usize) {
        check_column(column);
        {
            let mut state = self.state.write();
            if row < AUTHORED_ROWS {
                state.rows[row][column] = value;
            } else {
                state.overflow.entry(row).or_default()[column] = value;
            }
        }

        tracing::trace!(target: targets::MODEL, row, column, "cell updated");
        self.table_signals.cell_updated.emit((row, column));
        let index = ModelIndex::new(row, column, ModelIndex::invalid());
        self.signals
            .emit_data_changed_single(index, vec![ItemRole::Display, ItemRole::Edit]);
    }

    /// Name of a column.
    pub fn column_name(&self, column: usize) -> &'static str {
        check_column(column);
        COLUMNS[column].name
    }

    /// Declared value type of a column.
    pub fn column_type(&self, column: usize) -> ColumnType {
        check_column(column);
        COLUMNS[column].column_type
    }

    /// Editability depends on the column alone.
    pub fn is_cell_editable(&self, _row: usize, column: usize) -> bool {
        check_column(column);
        COLUMNS[column].editable
    }

    /// Editor choices for a column, if it has any.
    pub fn choices(&self, column: usize) -> Option<Choices> {
        check_column(column);
        match column {
            2 => Some(Choices::Fixed(&MONTHS)),
            3 => Some(Choices::Editable(&MONTHS)),
            _ => None,
        }
    }
}

fn check_column(column: usize) {
    assert!(
        column < COLUMN_COUNT,
        "column index out of bounds: the column count is {COLUMN_COUNT} but the index is {column}"
    );
}

impl ItemModel for TabularModel {
    fn row_count(&self, parent: &ModelIndex) -> usize {
        if parent.is_valid() { 0 } else { TabularModel::row_count(self) }
    }

    fn column_count(&self, parent: &ModelIndex) -> usize {
        if parent.is_valid() { 0 } else { COLUMN_COUNT }
    }

    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
        if !index.is_valid()
            || index.row() >= TabularModel::row_count(self)
            || index.column() >= COLUMN_COUNT
        {
            return ItemData::None;
        }

        let value = self.value_at(index.row(), index.column());
        match role {
            ItemRole::Display | ItemRole::Edit => value,
            ItemRole::CheckState if COLUMNS[index.column()].column_type == ColumnType::Boolean => {
                CheckState::from(value.as_bool().unwrap_or(false)).into()
            }
            _ => ItemData::None,
        }
    }

    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex {
        if parent.is_valid() || column >= COLUMN_COUNT || row >= TabularModel::row_count(self) {
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

    fn set_data(&self, index: &ModelIndex, value: ItemData, role: ItemRole) -> bool {
        if !index.is_valid() || index.column() >= COLUMN_COUNT || !COLUMNS[index.column()].editable {
            return false;
        }
        let value = match (role, value) {
            (ItemRole::Edit | ItemRole::Display, value) => value,
            (ItemRole::CheckState, ItemData::CheckState(state)) => state.is_checked().into(),
            _ => return false,
        };
        self.set_value_at(value, index.row(), index.column());
        true
    }

    fn flags(&self, index: &ModelIndex) -> ItemFlags {
        if !index.is_valid() || index.column() >= COLUMN_COUNT {
            return ItemFlags::disabled();
        }
        let column = &COLUMNS[index.column()];
        ItemFlags::new()
            .with_editable(column.editable)
            .with_checkable(column.column_type == ColumnType::Boolean)
            .with_never_has_children(true)
    }

    fn header_data(&self, section: usize, orientation: Orientation, role: ItemRole) -> ItemData {
        match (orientation, role) {
            (Orientation::Horizontal, ItemRole::Display) if section < COLUMN_COUNT => {
                COLUMNS[section].name.into()
            }
            (Orientation::Vertical, ItemRole::Display) => (section as i64 + 1).into(),
            _ => ItemData::None,
        }
    }
}

static_assertions::assert_impl_all!(TabularModel: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::label::RowLabelCache;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn model(row_count: usize) -> TabularModel {
        TabularModel::new(row_count, RowLabelCache::shared(1000, 5))
    }

    #[test]
    fn test_authored_rows() {
        let model = model(12);
        assert_eq!(model.value_at(0, 0), ItemData::from("item 1"));
        assert_eq!(model.value_at(0, 1), ItemData::from("item 1b"));
        assert_eq!(model.value_at(0, 3), ItemData::from("July"));
        assert_eq!(model.value_at(0, 4), ItemData::from(123));
        assert!(model.value_at(0, 5).is_none());
        assert_eq!(model.value_at(1, 5), ItemData::from(true));
        assert_eq!(model.value_at(11, 2), ItemData::from("December"));
        assert!(model.value_at(11, 1).is_none());
    }

    #[test]
    fn test_virtual_overflow_rows() {
        let model = model(30);
        assert_eq!(model.value_at(15, 0), ItemData::from("item 16"));
        let label = model.value_at(15, 1);
        assert!(label.as_string().is_some_and(|s| !s.is_empty()));
        assert_eq!(model.value_at(15, 1), label);
        assert!(model.value_at(15, 4).is_none());
        assert_eq!(model.overflow_len(), 0);
    }

    #[test]
    fn test_write_materializes_overflow_row() {
        let model = model(30);
        model.set_value_at("hello".into(), 15, 1);

        assert_eq!(model.overflow_len(), 1);
        assert_eq!(model.value_at(15, 1), ItemData::from("hello"));
        // The materialized row is null-filled; column 0 is still synthesized.
        assert_eq!(model.value_at(15, 0), ItemData::from("item 16"));
        assert!(model.value_at(15, 2).is_none());
    }

    #[test]
    fn test_materialized_row_drops_generated_label() {
        let model = model(30);
        assert!(model.value_at(15, 1).is_some());

        model.set_value_at(42.into(), 15, 4);
        assert!(model.value_at(15, 1).is_none());
        assert_eq!(model.value_at(15, 4), ItemData::from(42));
    }

    #[test]
    fn test_overflow_rows_survive_shrink() {
        let model = model(30);
        model.set_value_at(7.into(), 20, 4);
        model.set_row_count(5);
        model.set_row_count(30);
        assert_eq!(model.value_at(20, 4), ItemData::from(7));
        assert_eq!(model.value_at(3, 2), ItemData::from("April"));
    }

    #[test]
    fn test_row_notifications() {
        let model = model(12);
        let events = Arc::new(Mutex::new(Vec::new()));

        let inserted = events.clone();
        model
            .table_signals()
            .rows_inserted
            .connect(move |&(a, b)| inserted.lock().push(("inserted", a, b)));
        let deleted = events.clone();
        model
            .table_signals()
            .rows_deleted
            .connect(move |&(a, b)| deleted.lock().push(("deleted", a, b)));
        let updated = events.clone();
        model
            .table_signals()
            .cell_updated
            .connect(move |&(r, c)| updated.lock().push(("updated", r, c)));

        model.set_row_count(20);
        model.set_row_count(20);
        model.set_row_count(5);
        model.set_value_at(ItemData::None, 2, 3);

        assert_eq!(
            *events.lock(),
            vec![("inserted", 12, 19), ("deleted", 5, 19), ("updated", 2, 3)]
        );
    }

    #[test]
    fn test_column_metadata() {
        let model = model(12);
        assert_eq!(model.column_name(3), "Combo Editable");
        assert_eq!(model.column_type(4), ColumnType::Integer);
        assert!(!model.is_cell_editable(0, 0));
        assert!(model.is_cell_editable(100, 5));

        let combo = model.choices(2).unwrap();
        assert!(!combo.accepts_free_text());
        assert_eq!(combo.values().len(), 12);
        assert!(model.choices(3).unwrap().accepts_free_text());
        assert!(model.choices(1).is_none());
    }

    #[test]
    fn test_item_model_editing() {
        let model = model(12);
        let root = ModelIndex::invalid();
        let locked = model.index(0, 0, &root);
        let flag = model.index(0, 5, &root);

        assert!(!model.set_data(&locked, "x".into(), ItemRole::Edit));
        assert!(model.set_data(&flag, CheckState::Checked.into(), ItemRole::CheckState));
        assert_eq!(model.value_at(0, 5), ItemData::from(true));
        assert_eq!(
            model.data(&flag, ItemRole::CheckState),
            ItemData::from(CheckState::Checked)
        );
        assert_eq!(
            model.header_data(1, Orientation::Horizontal, ItemRole::Display),
            ItemData::from("Text")
        );
    }

    #[test]
    #[should_panic(expected = "column index out of bounds")]
    fn test_bad_column_panics() {
        model(12).value_at(0, COLUMN_COUNT);
    }
}
