//! Signal delivery across threads and scoped connections.

use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;

use lattice_bench_core::{Property, Signal};

#[test]
fn test_emit_from_another_thread() {
    let signal = Arc::new(Signal::<(usize, usize)>::new());
    let received = Arc::new(Mutex::new(Vec::new()));

    let recv = received.clone();
    signal.connect(move |&range| recv.lock().push(range));

    let emitter = signal.clone();
    thread::spawn(move || {
        emitter.emit((0, 9));
        emitter.emit((10, 19));
    })
    .join()
    .unwrap();

    assert_eq!(*received.lock(), vec![(0, 9), (10, 19)]);
}

#[test]
fn test_scoped_connection_lives_with_guard() {
    let signal = Arc::new(Signal::<String>::new());
    let received = Arc::new(Mutex::new(Vec::new()));

    {
        let recv = received.clone();
        let _guard = Signal::connect_scoped(&signal, move |text: &String| {
            recv.lock().push(text.clone());
        });
        signal.emit("inside".to_string());
    }
    signal.emit("outside".to_string());

    assert_eq!(*received.lock(), vec!["inside".to_string()]);
    assert_eq!(signal.connection_count(), 0);
}

#[test]
fn test_property_drives_signal_on_change_only() {
    let value = Property::new(20usize);
    let changed = Signal::<usize>::new();
    let count = Arc::new(Mutex::new(0));

    let recv = count.clone();
    changed.connect(move |_| *recv.lock() += 1);

    for next in [20, 40, 40, 60] {
        if value.set(next) {
            changed.emit(next);
        }
    }

    assert_eq!(*count.lock(), 2);
    assert_eq!(value.get(), 60);
}
