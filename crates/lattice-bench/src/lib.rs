//! lattice-bench: notifying list, tree and table models and the component
//! test panel that drives them.
//!
//! The crate is split into three layers:
//!
//! - [`model`]: the resizable data models and the generic item model API
//! - [`transfer`]: drag-and-drop transfer handlers
//! - [`panel`]: the panel controller, view state and controls
//!
//! Configuration lives in [`config`]; signals, errors and logging come from
//! `lattice-bench-core`.
//!
//! # Example
//!
//! ```no_run
//! use lattice_bench::config::PanelConfig;
//! use lattice_bench::panel::ComponentsPanel;
//!
//! fn main() -> lattice_bench::Result<()> {
//!     let mut panel = ComponentsPanel::new(&PanelConfig::default())?;
//!     panel.set_tree_row_count(45);
//!     assert_eq!(panel.tree_model().child_count(), 3);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod model;
pub mod panel;
pub mod transfer;

pub use lattice_bench_core::{BenchError, Result};
pub use lattice_bench_core::{ConnectionGuard, ConnectionId, PerfSpan, Property, Signal};
