//! Per-view state the panel toggles drive.
//!
//! A [`ViewState`] stands in for one list, tree or table view: whether it is
//! enabled, its drag and drop settings, its selection and the transfer handler
//! it currently uses. Table views additionally carry a [`TableGrid`].

use std::fmt;
use std::sync::Arc;

use lattice_bench_core::Property;
use lattice_bench_core::logging::targets;

use crate::model::{ItemModel, SelectionModel};
use crate::transfer::{DefaultTransferHandler, DropInfo, TransferData, TransferHandler, TransferSource};

/// Kind of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    List,
    Tree,
    Table,
}

/// How a view reports the drop location while dragging over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropMode {
    /// Track the drop location through the selection.
    #[default]
    UseSelection,
    /// Drop onto existing items.
    On,
    /// Drop between items.
    Insert,
    /// Drop onto or between items.
    OnOrInsert,
}

/// State of one view.
pub struct ViewState {
    name: &'static str,
    kind: ViewKind,
    enabled: Property<bool>,
    drag_enabled: Property<bool>,
    drop_mode: Property<DropMode>,
    selection: SelectionModel,
    handler: Arc<dyn TransferHandler>,
    stashed_handler: Option<Arc<dyn TransferHandler>>,
}

impl ViewState {
    /// Creates an enabled view with the default transfer handler.
    pub fn new(name: &'static str, kind: ViewKind) -> Self {
        Self {
            name,
            kind,
            enabled: Property::new(true),
            drag_enabled: Property::new(false),
            drop_mode: Property::new(DropMode::default()),
            selection: SelectionModel::new(),
            handler: Arc::new(DefaultTransferHandler),
            stashed_handler: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    pub fn drag_enabled(&self) -> bool {
        self.drag_enabled.get()
    }

    pub fn set_drag_enabled(&self, enabled: bool) {
        if self.drag_enabled.set(enabled) {
            tracing::trace!(target: targets::PANEL, view = self.name, enabled, "drag enabled");
        }
    }

    pub fn drop_mode(&self) -> DropMode {
        self.drop_mode.get()
    }

    pub fn set_drop_mode(&self, mode: DropMode) {
        if self.drop_mode.set(mode) {
            tracing::trace!(target: targets::PANEL, view = self.name, ?mode, "drop mode");
        }
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionModel {
        &mut self.selection
    }

    pub fn transfer_handler(&self) -> &Arc<dyn TransferHandler> {
        &self.handler
    }

    /// Replaces the transfer handler and returns the previous one.
    pub fn set_transfer_handler(&mut self, handler: Arc<dyn TransferHandler>) -> Arc<dyn TransferHandler> {
        std::mem::replace(&mut self.handler, handler)
    }

    /// Installs `handler`, keeping the current one for [`restore_transfer_handler`].
    ///
    /// A second install keeps the first stashed handler.
    ///
    /// [`restore_transfer_handler`]: Self::restore_transfer_handler
    pub fn install_transfer_handler(&mut self, handler: Arc<dyn TransferHandler>) {
        let previous = self.set_transfer_handler(handler);
        if self.stashed_handler.is_none() {
            self.stashed_handler = Some(previous);
        }
    }

    /// Puts back the handler stashed by the last install, if any.
    pub fn restore_transfer_handler(&mut self) {
        if let Some(previous) = self.stashed_handler.take() {
            self.handler = previous;
        }
    }

    /// Starts a drag from this view over `model`.
    ///
    /// Returns `None` when dragging is off or the handler exports nothing.
    pub fn start_drag(&self, model: &dyn ItemModel) -> Option<TransferData> {
        if !self.drag_enabled() || !self.is_enabled() {
            return None;
        }
        let source = TransferSource {
            model,
            selection: &self.selection,
        };
        let data = self.handler.create_transferable(&source);
        tracing::debug!(
            target: targets::TRANSFER,
            view = self.name,
            handler = self.handler.name(),
            exported = data.is_some(),
            "drag started"
        );
        data
    }

    /// Delivers a drop to this view. Returns `true` if it was imported.
    pub fn drop_data(&self, drop: &DropInfo) -> bool {
        self.is_enabled() && self.handler.can_import(&drop.data) && self.handler.import_data(drop)
    }
}

impl fmt::Debug for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewState")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("enabled", &self.is_enabled())
            .field("drag_enabled", &self.drag_enabled())
            .field("drop_mode", &self.drop_mode())
            .field("handler", &self.handler.name())
            .finish()
    }
}

/// Grid line color of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridColor {
    /// Whatever the current theme uses.
    #[default]
    Theme,
    Red,
}

/// Grid and selection settings applied to a table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableGrid {
    pub show_horizontal_lines: bool,
    pub show_vertical_lines: bool,
    /// Horizontal and vertical gap between cells.
    pub intercell_spacing: (u32, u32),
    pub grid_color: GridColor,
    pub row_selection_allowed: bool,
    pub column_selection_allowed: bool,
    /// A button in the header's trailing corner.
    pub header_corner_button: bool,
}

impl TableGrid {
    /// Settings a theme installs on a fresh table.
    pub const THEME_DEFAULTS: Self = Self {
        show_horizontal_lines: true,
        show_vertical_lines: true,
        intercell_spacing: (1, 1),
        grid_color: GridColor::Theme,
        row_selection_allowed: true,
        column_selection_allowed: false,
        header_corner_button: false,
    };

    /// Resets what a theme change resets: lines and spacing.
    pub fn reset_to_theme(&mut self) {
        self.show_horizontal_lines = Self::THEME_DEFAULTS.show_horizontal_lines;
        self.show_vertical_lines = Self::THEME_DEFAULTS.show_vertical_lines;
        self.intercell_spacing = Self::THEME_DEFAULTS.intercell_spacing;
    }
}

impl Default for TableGrid {
    fn default() -> Self {
        Self::THEME_DEFAULTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModelIndex, RowLabelCache, SelectionFlags, SequenceModel};
    use crate::transfer::StubTransferHandler;

    #[test]
    fn test_install_and_restore_handler() {
        let mut view = ViewState::new("list1", ViewKind::List);
        assert_eq!(view.transfer_handler().name(), "default");

        view.install_transfer_handler(Arc::new(StubTransferHandler));
        view.install_transfer_handler(Arc::new(StubTransferHandler));
        assert_eq!(view.transfer_handler().name(), "stub");

        view.restore_transfer_handler();
        assert_eq!(view.transfer_handler().name(), "default");
        view.restore_transfer_handler();
        assert_eq!(view.transfer_handler().name(), "default");
    }

    #[test]
    fn test_start_drag_needs_drag_enabled() {
        let model = SequenceModel::new(4, RowLabelCache::shared(10, 0));
        let mut view = ViewState::new("list1", ViewKind::List);
        view.selection_mut()
            .select(ModelIndex::new(1, 0, ModelIndex::invalid()), SelectionFlags::SELECT);

        assert!(view.start_drag(&model).is_none());
        view.set_drag_enabled(true);
        let data = view.start_drag(&model).unwrap();
        assert_eq!(data.text().as_deref(), Some("item 2"));

        view.set_enabled(false);
        assert!(view.start_drag(&model).is_none());
    }

    #[test]
    fn test_theme_reset_keeps_selection_settings() {
        let mut grid = TableGrid {
            show_horizontal_lines: false,
            intercell_spacing: (0, 0),
            row_selection_allowed: false,
            ..TableGrid::default()
        };
        grid.reset_to_theme();
        assert!(grid.show_horizontal_lines);
        assert_eq!(grid.intercell_spacing, (1, 1));
        assert!(!grid.row_selection_allowed);
    }
}
