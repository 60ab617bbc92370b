//! Control wiring of the component test panel.
//!
//! The panel never draws. It keeps the state a real panel would show (spinner
//! values, view options, tree expansion, transfer handlers) and routes each
//! control change to the models.

mod components;
mod spinner;
mod tree_view;
mod view;

pub use components::{ComponentsPanel, HEADER_BUTTON_MESSAGE, TableToggles, TreePane};
pub use spinner::{SpinStep, SpinnerState};
pub use tree_view::{TreeViewState, VisibleRow};
pub use view::{DropMode, GridColor, TableGrid, ViewKind, ViewState};
