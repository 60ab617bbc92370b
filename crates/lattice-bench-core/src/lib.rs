//! Core systems for lattice-bench.
//!
//! This crate provides the foundational pieces the model and panel layers are
//! built on:
//!
//! - **Signal/Slot System**: Type-safe observer notifications ([`Signal`])
//! - **Property System**: Values with change detection ([`Property`])
//! - **Errors**: The recoverable error type for setup code ([`BenchError`])
//! - **Logging**: `tracing` targets, perf spans and subscriber setup ([`logging`])
//!
//! # Signal/Slot Example
//!
//! ```
//! use lattice_bench_core::Signal;
//!
//! let rows_inserted = Signal::<(usize, usize)>::new();
//! rows_inserted.connect(|(first, last)| {
//!     println!("rows {first}..={last} inserted");
//! });
//! rows_inserted.emit((20, 24));
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::{BenchError, Result};
pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
