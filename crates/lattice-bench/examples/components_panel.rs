//! Scripted run of the component test panel.
//!
//! Builds a panel (from the TOML file given as the first argument, if any),
//! logs every model notification and walks through the controls the way a
//! tester would click them.
//!
//! ```text
//! cargo run -p lattice-bench --example components_panel -- panel.toml
//! LATTICE_BENCH_LOG=lattice_bench=trace cargo run -p lattice-bench --example components_panel
//! ```

use lattice_bench::Result;
use lattice_bench::config::PanelConfig;
use lattice_bench::model::{ItemModel, ModelIndex, SelectionFlags};
use lattice_bench::panel::{ComponentsPanel, SpinStep};
use lattice_bench::transfer::{DropAction, DropInfo, DropLocation};

const TARGET: &str = "components_panel";

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => PanelConfig::load(path)?,
        None => PanelConfig::default(),
    };
    config.logging.install()?;

    let mut panel = ComponentsPanel::new(&config)?;
    watch_models(&panel);

    // Row count spinners.
    panel.step_list_spinner(SpinStep::Up);
    panel.set_list_row_count(5);

    panel.step_tree_spinner(SpinStep::Up);
    let tree_rows = panel.set_tree_row_count(45);
    tracing::info!(
        target: TARGET,
        tree_rows,
        visible = panel.tree1().expansion.row_count(),
        "tree grown"
    );
    panel.set_tree_row_count(20);

    panel.set_table_row_count(30);
    panel
        .table_model()
        .set_value_at("edited".into(), 15, 1);
    tracing::info!(
        target: TARGET,
        value = ?panel.table_model().value_at(15, 1),
        synthesized = ?panel.table_model().value_at(15, 0),
        "overflow row"
    );

    // Table options.
    panel.set_show_horizontal_lines(true);
    panel.set_intercell_spacing(true);
    panel.set_red_grid_color(true);
    panel.set_column_selection_allowed(true);
    panel.set_header_corner_button(true);
    panel.click_header_corner_button();
    panel.theme_changed();
    tracing::info!(target: TARGET, grid = ?panel.table_grid(), "table grid");

    // Drag and drop with the stub handler.
    panel.set_drag_enabled(true);
    let list_model = panel.list_model().clone();
    panel
        .list1_mut()
        .selection_mut()
        .select(ModelIndex::new(1, 0, ModelIndex::invalid()), SelectionFlags::SELECT);
    if let Some(data) = panel.list1().start_drag(list_model.as_ref()) {
        let drop = DropInfo {
            data,
            location: DropLocation {
                index: list_model.index(0, 0, &ModelIndex::invalid()),
                insert: true,
            },
            action: DropAction::COPY,
        };
        let imported = panel.list1().drop_data(&drop);
        tracing::info!(target: TARGET, imported, "drop delivered");
    }
    panel.set_drag_enabled(false);

    Ok(())
}

fn watch_models(panel: &ComponentsPanel) {
    for (name, spinner) in [
        ("list", panel.list_spinner()),
        ("tree", panel.tree_spinner()),
        ("table", panel.table_spinner()),
    ] {
        spinner
            .value_changed
            .connect(move |value| tracing::info!(target: TARGET, spinner = name, value, "spinner changed"));
    }

    let list = panel.list_model().list_signals();
    list.interval_added
        .connect(|(first, last)| tracing::info!(target: TARGET, first, last, "list interval added"));
    list.interval_removed
        .connect(|(first, last)| tracing::info!(target: TARGET, first, last, "list interval removed"));

    let tree = panel.tree_model().tree_signals();
    tree.nodes_inserted
        .connect(|e| tracing::info!(target: TARGET, indices = ?e.indices, "tree nodes inserted"));
    tree.nodes_removed.connect(|e| {
        let nodes: usize = e.nodes.iter().map(|n| n.subtree_len()).sum();
        tracing::info!(target: TARGET, indices = ?e.indices, nodes, "tree nodes removed");
    });

    let table = panel.table_model().table_signals();
    table
        .rows_inserted
        .connect(|(first, last)| tracing::info!(target: TARGET, first, last, "table rows inserted"));
    table
        .rows_deleted
        .connect(|(first, last)| tracing::info!(target: TARGET, first, last, "table rows deleted"));
    table
        .cell_updated
        .connect(|(row, column)| tracing::info!(target: TARGET, row, column, "table cell updated"));
}
