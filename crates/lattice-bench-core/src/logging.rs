//! Logging facilities for lattice-bench.
//!
//! lattice-bench uses the `tracing` crate for instrumentation. Libraries only
//! emit events; binaries (the demo panel, test harnesses) install a subscriber
//! with [`init`]:
//!
//! ```ignore
//! lattice_bench_core::logging::init("lattice_bench=debug", true)?;
//! ```
//!
//! The `LATTICE_BENCH_LOG` environment variable, when set, takes precedence
//! over the directive passed to [`init`].

use tracing_subscriber::EnvFilter;

use crate::error::{BenchError, Result};

/// Environment variable that overrides the configured filter directive.
pub const LOG_ENV_VAR: &str = "LATTICE_BENCH_LOG";

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lattice_bench_core::signal";
    /// Model layer target.
    pub const MODEL: &str = "lattice_bench::model";
    /// Panel controller target.
    pub const PANEL: &str = "lattice_bench::panel";
    /// Drag and drop target.
    pub const TRANSFER: &str = "lattice_bench::transfer";
}

/// Install a global `fmt` subscriber filtered by `directive`.
///
/// Fails if the directive does not parse or a global subscriber is already set.
pub fn init(directive: &str, ansi: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directive)
            .map_err(|e| BenchError::Logging(format!("bad filter '{directive}': {e}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .try_init()
        .map_err(|e| BenchError::Logging(e.to_string()))
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time model mutations and panel control handlers.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "lattice_bench::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        let _span = PerfSpan::new("test_operation");
    }

    #[test]
    fn test_bad_directive_is_reported() {
        // Only meaningful when the override variable is absent.
        if std::env::var_os(LOG_ENV_VAR).is_none() {
            let err = init("lattice_bench=notalevel", false).unwrap_err();
            assert!(matches!(err, BenchError::Logging(_)));
        }
    }
}
