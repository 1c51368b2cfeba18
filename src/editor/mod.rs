//! The board editor - owner of one board and all of its transient interaction state.
//!
//! Split across files the same way the input handlers are:
//!
//! - `state` - Sub-structs for edit session, text style and cursor hint
//! - `lifecycle` - Construction, surface layout, save placeholder
//! - `items` - Add, upload and delete flows
//! - `editing` - Edit mode
//! - `exporting` - Export with user-facing notifications
//!
//! Pointer and keyboard handlers live in `crate::input` as further
//! `impl BoardEditor` blocks.

mod editing;
mod exporting;
mod items;
mod lifecycle;
mod state;

pub use state::{CursorMode, EditSession, TextStyle};

use crate::board::Board;
use crate::constants::{Z_BASE, Z_DRAGGING, Z_SELECTED};
use crate::geometry::{Point, Size};
use crate::input::InputState;
use crate::notifications::ToastManager;
use crate::settings::Settings;
use crate::types::{BoardItem, ItemId};
use crate::upload::UploadDialog;

pub struct BoardEditor {
    pub(crate) board: Board,
    pub(crate) settings: Settings,
    /// On-screen top-left of the surface
    pub(crate) surface_origin: Point,
    /// Known once the host has laid the surface out
    pub(crate) surface_size: Option<Size>,
    pub(crate) selected: Option<ItemId>,
    pub(crate) input_state: InputState,
    pub(crate) cursor_mode: CursorMode,
    pub(crate) edit: Option<EditSession>,
    pub(crate) pending_delete: Option<ItemId>,
    pub(crate) text_style: TextStyle,
    pub(crate) toasts: ToastManager,
    pub(crate) upload_dialog: UploadDialog,
}

impl BoardEditor {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn items(&self) -> &[BoardItem] {
        self.board.items()
    }

    pub fn item(&self, id: ItemId) -> Option<&BoardItem> {
        self.board.get_item(id)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn selected_item(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn is_dragging(&self) -> bool {
        self.input_state.is_dragging()
    }

    pub fn dragging_item(&self) -> Option<ItemId> {
        self.input_state.dragged_item_id()
    }

    pub fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    pub fn pending_delete(&self) -> Option<ItemId> {
        self.pending_delete
    }

    pub fn text_style(&self) -> &TextStyle {
        &self.text_style
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastManager {
        &mut self.toasts
    }

    pub fn upload_dialog(&self) -> &UploadDialog {
        &self.upload_dialog
    }

    pub fn upload_dialog_mut(&mut self) -> &mut UploadDialog {
        &mut self.upload_dialog
    }

    /// Select an item, or clear the selection with `None`. Unknown ids clear it.
    pub fn select(&mut self, id: Option<ItemId>) {
        self.selected = id.filter(|id| self.board.get_item(*id).is_some());
    }

    /// Stacking layer computed at render time: dragged above selected above the rest.
    pub fn z_index(&self, id: ItemId) -> u32 {
        if self.input_state.dragged_item_id() == Some(id) {
            Z_DRAGGING
        } else if self.selected == Some(id) {
            Z_SELECTED
        } else {
            Z_BASE
        }
    }

    /// Items bottom-to-top: by layer, then insertion order within a layer.
    pub fn render_order(&self) -> Vec<&BoardItem> {
        let mut ordered: Vec<&BoardItem> = self.board.items().iter().collect();
        ordered.sort_by_key(|item| self.z_index(item.id));
        ordered
    }

    /// Topmost item under a surface point.
    pub fn hit_test(&self, surface_pos: Point) -> Option<ItemId> {
        self.board
            .query_items_at_point(surface_pos)
            .into_iter()
            .enumerate()
            .max_by_key(|(paint_idx, id)| (self.z_index(*id), *paint_idx))
            .map(|(_, id)| id)
    }

    /// Bounds used to clamp drags, when clamping is enabled and the surface is known.
    pub(crate) fn drag_bounds(&self) -> Option<Size> {
        if self.settings.clamp_to_surface {
            self.surface_size
        } else {
            None
        }
    }
}
