//! Model mutations are logged on the model target.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use lattice_bench::model::{HierarchyModel, RowLabelCache, SequenceModel};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(directive: &str, f: impl FnOnce()) -> String {
    let out = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(out.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    out.text()
}

#[test]
fn test_list_resize_logged_at_debug() {
    let model = SequenceModel::new(20, RowLabelCache::shared(100, 1));
    let log = capture("lattice_bench::model=debug", || {
        model.set_size(25);
        model.set_size(10);
    });

    assert!(log.contains("lattice_bench::model"), "{log}");
    assert!(log.contains("list grows"), "{log}");
    assert!(log.contains("list shrinks"), "{log}");
    assert!(log.contains("size=25"), "{log}");
}

#[test]
fn test_model_target_filtered_out() {
    let model = HierarchyModel::new(20, RowLabelCache::shared(100, 1));
    let log = capture("lattice_bench::model=warn", || {
        model.set_row_count(60);
    });

    assert!(log.is_empty(), "{log}");
}
