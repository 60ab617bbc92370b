//! Notifying data models for the component test panel.
//!
//! Three resizable models back the panel's views:
//!
//! - `SequenceModel`: a list of generated items
//! - `HierarchyModel`: a tree grown and shrunk in chunks of 20 rows
//! - `TabularModel`: a six-column table with authored and overflow rows
//!
//! Each one emits its own observer protocol (`ListSignals`, `TreeSignals`,
//! `TableSignals`) and also implements the generic `ItemModel` trait with its
//! `ModelSignals`, so any item view can attach to it.
//!
//! Generated labels come from one `RowLabelCache` shared by all models of a
//! panel.
//!
//! # Example
//!
//! ```no_run
//! use lattice_bench::model::{ItemModel, ModelIndex, RowLabelCache, SequenceModel};
//!
//! let labels = RowLabelCache::shared(1000, 42);
//! let model = SequenceModel::new(20, labels);
//!
//! model.list_signals().interval_added.connect(|(first, last)| {
//!     println!("rows {first}..={last} added");
//! });
//! model.set_size(25);
//!
//! let index = model.index(22, 0, &ModelIndex::invalid());
//! println!("{:?}", model.display_text(&index));
//! ```

mod hierarchy_model;
mod index;
mod label;
mod role;
pub mod selection;
mod sequence_model;
mod tabular_model;
mod traits;

pub use hierarchy_model::{
    CHUNK_SIZE, DetachedNode, HierarchyModel, NodeId, NodesInserted, NodesRemoved, ROOT_LABEL,
    SAMPLE_DATA_LABEL, TreeSignals,
};
pub use index::ModelIndex;
pub use label::{DEFAULT_LABEL_CAPACITY, DEFAULT_LABEL_SEED, RowLabelCache, SharedLabels};
pub use role::{CheckState, ItemData, ItemRole};
pub use selection::{SelectionBehavior, SelectionFlags, SelectionMode, SelectionModel};
pub use sequence_model::{ListSignals, PLAIN_LABEL_ROWS, SequenceModel};
pub use tabular_model::{
    AUTHORED_ROWS, COLUMN_COUNT, COLUMNS, Choices, Column, ColumnType, MONTHS, TableSignals,
    TabularModel,
};
pub use traits::{ItemFlags, ItemModel, ModelSignals, Orientation};
