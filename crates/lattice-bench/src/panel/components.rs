//! The component test panel controller.
//!
//! [`ComponentsPanel`] owns the three shared models, the views showing them and
//! the option controls. Each control handler updates the control's state,
//! mutates the model or views, and leaves the views consistent again before
//! it returns (tree views re-expand what a growth revealed).

use std::sync::Arc;

use lattice_bench_core::logging::targets;
use lattice_bench_core::{PerfSpan, Result};

use crate::config::PanelConfig;
use crate::model::{
    CHUNK_SIZE, HierarchyModel, RowLabelCache, SelectionBehavior, SelectionMode, SequenceModel,
    SharedLabels, TabularModel,
};
use crate::transfer::StubTransferHandler;

use super::spinner::{SpinStep, SpinnerState};
use super::tree_view::TreeViewState;
use super::view::{DropMode, GridColor, TableGrid, ViewKind, ViewState};

/// Checkbox states of the table options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableToggles {
    pub show_horizontal_lines: bool,
    pub show_vertical_lines: bool,
    pub intercell_spacing: bool,
    pub red_grid_color: bool,
    pub row_selection: bool,
    pub column_selection: bool,
    pub header_corner_button: bool,
}

impl Default for TableToggles {
    fn default() -> Self {
        Self {
            show_horizontal_lines: false,
            show_vertical_lines: false,
            intercell_spacing: false,
            red_grid_color: false,
            row_selection: true,
            column_selection: false,
            header_corner_button: false,
        }
    }
}

/// A tree view: its generic view state plus its expansion state.
pub struct TreePane {
    pub view: ViewState,
    pub expansion: TreeViewState,
}

impl TreePane {
    fn new(name: &'static str, model: Arc<HierarchyModel>) -> Self {
        Self {
            view: ViewState::new(name, ViewKind::Tree),
            expansion: TreeViewState::new(model),
        }
    }
}

/// Text shown when the header corner button is clicked.
pub const HEADER_BUTTON_MESSAGE: &str = "hello";

/// The panel: models, views and controls.
///
/// `list1`, `tree1` and `table1` are the primary views; `list2` and `tree2`
/// share the models but are disabled and keep the default transfer handler.
pub struct ComponentsPanel {
    labels: SharedLabels,
    list_model: Arc<SequenceModel>,
    tree_model: Arc<HierarchyModel>,
    table_model: Arc<TabularModel>,

    list1: ViewState,
    list2: ViewState,
    tree1: TreePane,
    tree2: TreePane,
    table1: ViewState,
    table_grid: TableGrid,

    list_spinner: SpinnerState,
    tree_spinner: SpinnerState,
    table_spinner: SpinnerState,
    toggles: TableToggles,
    drag_enabled: bool,
}

impl ComponentsPanel {
    /// Builds a panel from a validated configuration.
    pub fn new(config: &PanelConfig) -> Result<Self> {
        config.validate()?;

        let labels = RowLabelCache::shared(config.labels.capacity, config.labels.seed);
        let steps = config.spinners;
        let list_spinner = SpinnerState::new(config.list_rows, 0, None, steps.list_step);
        let tree_spinner =
            SpinnerState::new(round_up_to_chunk(config.tree_rows), CHUNK_SIZE, None, steps.tree_step);
        let table_spinner = SpinnerState::new(config.table_rows, 0, None, steps.table_step);

        let list_model = Arc::new(SequenceModel::new(list_spinner.value(), labels.clone()));
        let tree_model = Arc::new(HierarchyModel::new(tree_spinner.value(), labels.clone()));
        let table_model = Arc::new(TabularModel::new(table_spinner.value(), labels.clone()));

        let list2 = ViewState::new("list2", ViewKind::List);
        list2.set_enabled(false);
        let tree2 = TreePane::new("tree2", tree_model.clone());
        tree2.view.set_enabled(false);

        let mut panel = Self {
            labels,
            list1: ViewState::new("list1", ViewKind::List),
            list2,
            tree1: TreePane::new("tree1", tree_model.clone()),
            tree2,
            table1: ViewState::new("table1", ViewKind::Table),
            table_grid: TableGrid::default(),
            list_model,
            tree_model,
            table_model,
            list_spinner,
            tree_spinner,
            table_spinner,
            toggles: TableToggles::default(),
            drag_enabled: false,
        };

        panel.tree1.expansion.expand_all_rows();
        panel.tree2.expansion.expand_all_rows();
        panel.apply_table_selection();
        panel.refresh_table_grid();

        tracing::info!(
            target: targets::PANEL,
            list_rows = panel.list_model.size(),
            tree_rows = panel.tree_model.row_count(),
            table_rows = panel.table_model.row_count(),
            "components panel ready"
        );
        Ok(panel)
    }

    pub fn labels(&self) -> &SharedLabels {
        &self.labels
    }

    pub fn list_model(&self) -> &Arc<SequenceModel> {
        &self.list_model
    }

    pub fn tree_model(&self) -> &Arc<HierarchyModel> {
        &self.tree_model
    }

    pub fn table_model(&self) -> &Arc<TabularModel> {
        &self.table_model
    }

    pub fn list1(&self) -> &ViewState {
        &self.list1
    }

    pub fn list1_mut(&mut self) -> &mut ViewState {
        &mut self.list1
    }

    pub fn list2(&self) -> &ViewState {
        &self.list2
    }

    pub fn tree1(&self) -> &TreePane {
        &self.tree1
    }

    pub fn tree1_mut(&mut self) -> &mut TreePane {
        &mut self.tree1
    }

    pub fn tree2(&self) -> &TreePane {
        &self.tree2
    }

    pub fn table1(&self) -> &ViewState {
        &self.table1
    }

    pub fn table1_mut(&mut self) -> &mut ViewState {
        &mut self.table1
    }

    pub fn table_grid(&self) -> &TableGrid {
        &self.table_grid
    }

    pub fn toggles(&self) -> &TableToggles {
        &self.toggles
    }

    pub fn is_drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    pub fn list_spinner(&self) -> &SpinnerState {
        &self.list_spinner
    }

    pub fn tree_spinner(&self) -> &SpinnerState {
        &self.tree_spinner
    }

    pub fn table_spinner(&self) -> &SpinnerState {
        &self.table_spinner
    }

    // =========================================================================
    // Row counts
    // =========================================================================

    /// Resizes the list. Returns the size after clamping.
    pub fn set_list_row_count(&mut self, count: usize) -> usize {
        let _span = PerfSpan::new("ComponentsPanel::set_list_row_count");
        let count = self.list_spinner.set_value(count);
        self.list_model.set_size(count);
        for view in [&mut self.list1, &mut self.list2] {
            view.selection_mut().retain(|index| index.row() < count);
        }
        count
    }

    /// Resizes the tree to `count` rounded up to whole chunks.
    ///
    /// The spinner takes the rounded value. Rows a growth reveals in either
    /// tree view are expanded one level, bottom up. Returns the rounded count.
    pub fn set_tree_row_count(&mut self, count: usize) -> usize {
        let _span = PerfSpan::new("ComponentsPanel::set_tree_row_count");
        let rounded = round_up_to_chunk(count);
        if rounded != count {
            tracing::debug!(target: targets::PANEL, count, rounded, "tree row count rounded");
        }
        let rounded = self.tree_spinner.set_value(rounded);

        let old_rows = [self.tree1.expansion.row_count(), self.tree2.expansion.row_count()];
        self.tree_model.set_row_count(rounded);

        for (pane, old) in [&mut self.tree1, &mut self.tree2].into_iter().zip(old_rows) {
            pane.expansion.expand_rows_from(old);
            let model = &self.tree_model;
            pane.view
                .selection_mut()
                .retain(|index| model.contains(index.internal_id()));
        }
        rounded
    }

    /// Clicks an arrow of the list spinner and resizes the list to match.
    pub fn step_list_spinner(&mut self, step: SpinStep) -> usize {
        let target = self.list_spinner.stepped(step);
        self.set_list_row_count(target)
    }

    /// Clicks an arrow of the tree spinner and resizes the tree to match.
    pub fn step_tree_spinner(&mut self, step: SpinStep) -> usize {
        let target = self.tree_spinner.stepped(step);
        self.set_tree_row_count(target)
    }

    /// Clicks an arrow of the table spinner and resizes the table to match.
    pub fn step_table_spinner(&mut self, step: SpinStep) -> usize {
        let target = self.table_spinner.stepped(step);
        self.set_table_row_count(target)
    }

    /// Resizes the table. Returns the row count after clamping.
    pub fn set_table_row_count(&mut self, count: usize) -> usize {
        let _span = PerfSpan::new("ComponentsPanel::set_table_row_count");
        let count = self.table_spinner.set_value(count);
        self.table_model.set_row_count(count);
        self.table1
            .selection_mut()
            .retain(|index| index.row() < count);
        count
    }

    // =========================================================================
    // Drag and drop
    // =========================================================================

    /// Turns drag-and-drop testing on or off.
    ///
    /// Every view gets the drag flag. The primary views also switch drop mode
    /// and swap their transfer handler for the stub one (or back).
    pub fn set_drag_enabled(&mut self, enabled: bool) {
        tracing::info!(target: targets::PANEL, enabled, "drag and drop");
        self.drag_enabled = enabled;

        for view in [
            &self.list1,
            &self.list2,
            &self.tree1.view,
            &self.tree2.view,
            &self.table1,
        ] {
            view.set_drag_enabled(enabled);
        }

        let drop_mode = if enabled {
            DropMode::OnOrInsert
        } else {
            DropMode::UseSelection
        };
        for view in [&mut self.list1, &mut self.tree1.view, &mut self.table1] {
            view.set_drop_mode(drop_mode);
            if enabled {
                view.install_transfer_handler(Arc::new(StubTransferHandler));
            } else {
                view.restore_transfer_handler();
            }
        }
    }

    // =========================================================================
    // Table options
    // =========================================================================

    pub fn set_show_horizontal_lines(&mut self, show: bool) {
        self.toggles.show_horizontal_lines = show;
        self.table_grid.show_horizontal_lines = show;
    }

    pub fn set_show_vertical_lines(&mut self, show: bool) {
        self.toggles.show_vertical_lines = show;
        self.table_grid.show_vertical_lines = show;
    }

    /// One pixel between cells when on, none when off.
    pub fn set_intercell_spacing(&mut self, spacing: bool) {
        self.toggles.intercell_spacing = spacing;
        self.table_grid.intercell_spacing = spacing_for(spacing);
    }

    pub fn set_red_grid_color(&mut self, red: bool) {
        self.toggles.red_grid_color = red;
        self.table_grid.grid_color = if red { GridColor::Red } else { GridColor::Theme };
    }

    pub fn set_row_selection_allowed(&mut self, allowed: bool) {
        self.toggles.row_selection = allowed;
        self.table_grid.row_selection_allowed = allowed;
        self.apply_table_selection();
    }

    pub fn set_column_selection_allowed(&mut self, allowed: bool) {
        self.toggles.column_selection = allowed;
        self.table_grid.column_selection_allowed = allowed;
        self.apply_table_selection();
    }

    pub fn set_header_corner_button(&mut self, show: bool) {
        self.toggles.header_corner_button = show;
        self.table_grid.header_corner_button = show;
    }

    /// Clicks the header corner button; `None` if it is not shown.
    pub fn click_header_corner_button(&self) -> Option<&'static str> {
        if !self.table_grid.header_corner_button {
            return None;
        }
        tracing::info!(target: targets::PANEL, message = HEADER_BUTTON_MESSAGE, "header button");
        Some(HEADER_BUTTON_MESSAGE)
    }

    /// Re-applies the line and spacing toggles to the table.
    pub fn refresh_table_grid(&mut self) {
        let toggles = self.toggles;
        self.set_show_horizontal_lines(toggles.show_horizontal_lines);
        self.set_show_vertical_lines(toggles.show_vertical_lines);
        self.set_intercell_spacing(toggles.intercell_spacing);
    }

    /// A theme change resets the table's grid; the toggles are re-applied.
    pub fn theme_changed(&mut self) {
        tracing::debug!(target: targets::PANEL, "theme changed");
        self.table_grid.reset_to_theme();
        self.refresh_table_grid();
    }

    fn apply_table_selection(&mut self) {
        let toggles = self.toggles;
        self.table_grid.row_selection_allowed = toggles.row_selection;
        self.table_grid.column_selection_allowed = toggles.column_selection;

        let selection = self.table1.selection_mut();
        match SelectionBehavior::from_allowed(toggles.row_selection, toggles.column_selection) {
            Some(behavior) => {
                selection.set_selection_mode(SelectionMode::ExtendedSelection);
                selection.set_selection_behavior(behavior);
            }
            None => selection.set_selection_mode(SelectionMode::NoSelection),
        }
    }
}

fn round_up_to_chunk(count: usize) -> usize {
    count.div_ceil(CHUNK_SIZE).max(1) * CHUNK_SIZE
}

fn spacing_for(on: bool) -> (u32, u32) {
    if on { (1, 1) } else { (0, 0) }
}
