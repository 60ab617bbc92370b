//! Drag-and-drop transfer handlers for the bench views.
//!
//! A view asks its [`TransferHandler`] what to export when a drag starts and
//! whether to accept a drop. Views start with [`DefaultTransferHandler`],
//! which exports the selected items' text. While the panel's drag toggle is on,
//! the primary views swap in [`StubTransferHandler`], which exports a fixed
//! payload and logs drops without performing them.
//!
//! Nothing here moves real data between applications; `TransferData` is an
//! in-process bag of MIME-typed bytes.

use std::collections::HashMap;
use std::fmt;

use lattice_bench_core::logging::targets;

use crate::model::{ItemModel, ModelIndex, SelectionModel};

/// MIME types understood by the handlers.
pub mod mime {
    /// Plain text.
    pub const TEXT_PLAIN: &str = "text/plain";
}

/// Actions a drag source supports or a drop performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DropAction(u8);

impl DropAction {
    /// No action.
    pub const NONE: Self = Self(0);
    /// Copy the data.
    pub const COPY: Self = Self(1 << 0);
    /// Move the data; the source deletes the original.
    pub const MOVE: Self = Self(1 << 1);
    /// Copy or move.
    pub const COPY_OR_MOVE: Self = Self(Self::COPY.0 | Self::MOVE.0);

    pub fn can_copy(self) -> bool {
        self.contains(Self::COPY)
    }

    pub fn can_move(self) -> bool {
        self.contains(Self::MOVE)
    }

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for DropAction {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Data carried by a drag, keyed by MIME type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferData {
    data: HashMap<String, Vec<u8>>,
}

impl TransferData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates data with a plain-text representation.
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut data = Self::default();
        data.set_text(text);
        data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn has_format(&self, mime_type: &str) -> bool {
        self.data.contains_key(mime_type)
    }

    pub fn set_data(&mut self, mime_type: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.data.insert(mime_type.into(), data.into());
    }

    pub fn has_text(&self) -> bool {
        self.has_format(mime::TEXT_PLAIN)
    }

    /// The plain-text representation, if present and valid UTF-8.
    pub fn text(&self) -> Option<String> {
        self.data
            .get(mime::TEXT_PLAIN)
            .and_then(|bytes| String::from_utf8(bytes.clone()).ok())
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.set_data(mime::TEXT_PLAIN, text.into().into_bytes());
    }
}

/// Where a drop lands in the target view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropLocation {
    /// The item under the pointer, or the parent for an insertion.
    pub index: ModelIndex,
    /// Insert before `index` instead of dropping on it.
    pub insert: bool,
}

impl fmt::Display for DropLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.insert { "insert" } else { "on" };
        if self.index.is_valid() {
            write!(
                f,
                "{kind} row={} column={} depth={}",
                self.index.row(),
                self.index.column(),
                self.index.depth()
            )
        } else {
            write!(f, "{kind} root")
        }
    }
}

/// A drop delivered to a handler.
#[derive(Debug, Clone)]
pub struct DropInfo {
    pub data: TransferData,
    pub location: DropLocation,
    pub action: DropAction,
}

/// What a handler sees of the view a drag starts from.
pub struct TransferSource<'a> {
    pub model: &'a dyn ItemModel,
    pub selection: &'a SelectionModel,
}

/// Export and import policy of a view.
pub trait TransferHandler: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Builds the payload for a drag starting at `source`.
    ///
    /// `None` means nothing is dragged.
    fn create_transferable(&self, source: &TransferSource<'_>) -> Option<TransferData>;

    /// Actions the view supports as a drag source.
    fn source_actions(&self) -> DropAction;

    /// Returns `true` if `data` could be dropped here.
    fn can_import(&self, data: &TransferData) -> bool;

    /// Performs a drop. Returns `true` if the data was imported.
    fn import_data(&self, drop: &DropInfo) -> bool;
}

/// Exports the selected items' text, one per line; accepts no drops.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTransferHandler;

impl TransferHandler for DefaultTransferHandler {
    fn name(&self) -> &'static str {
        "default"
    }

    fn create_transferable(&self, source: &TransferSource<'_>) -> Option<TransferData> {
        let lines: Vec<String> = source
            .selection
            .selected_indices()
            .iter()
            .filter_map(|index| source.model.display_text(index))
            .collect();
        if lines.is_empty() {
            return None;
        }
        Some(TransferData::from_text(lines.join("\n")))
    }

    fn source_actions(&self) -> DropAction {
        DropAction::COPY
    }

    fn can_import(&self, _data: &TransferData) -> bool {
        false
    }

    fn import_data(&self, _drop: &DropInfo) -> bool {
        false
    }
}

/// Exports `"dummy"` for any non-empty selection and logs drops.
///
/// Installed while drag-and-drop testing is on, so drags and drop feedback can
/// be exercised without the models being modified.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubTransferHandler;

/// Payload exported by [`StubTransferHandler`].
pub const STUB_PAYLOAD: &str = "dummy";

impl TransferHandler for StubTransferHandler {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn create_transferable(&self, source: &TransferSource<'_>) -> Option<TransferData> {
        if !source.selection.has_selection() {
            return None;
        }
        Some(TransferData::from_text(STUB_PAYLOAD))
    }

    fn source_actions(&self) -> DropAction {
        DropAction::COPY
    }

    fn can_import(&self, data: &TransferData) -> bool {
        data.has_text()
    }

    fn import_data(&self, drop: &DropInfo) -> bool {
        tracing::info!(target: targets::TRANSFER, location = %drop.location, "drop");
        false
    }
}
