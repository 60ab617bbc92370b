//! Global subscriber installation.

use lattice_bench_core::BenchError;
use lattice_bench_core::logging;

#[test]
fn test_second_init_fails() {
    logging::init("lattice_bench=debug", false).unwrap();
    tracing::info!(target: logging::targets::SIGNAL, "subscriber installed");

    let err = logging::init("lattice_bench=debug", false).unwrap_err();
    assert!(matches!(err, BenchError::Logging(_)));
}
