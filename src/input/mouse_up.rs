//! Pointer-up handling and the implicit ways a drag can end.

use super::events::{InputOutcome, PointerEvent};
use super::state::DragEndReason;
use crate::editor::BoardEditor;
use crate::geometry::{constrain_to_parent, snap_to_grid};
use crate::profile_scope;
use tracing::debug;

impl BoardEditor {
    /// Ends the drag wherever the release happens, inside the surface or not.
    pub fn handle_pointer_up(&mut self, _event: PointerEvent) -> InputOutcome {
        profile_scope!("handle_pointer_up");
        self.finish_drag(DragEndReason::PointerUp)
    }

    pub fn handle_focus_lost(&mut self) -> InputOutcome {
        self.finish_drag(DragEndReason::FocusLost)
    }

    pub fn handle_pointer_capture_lost(&mut self) -> InputOutcome {
        self.finish_drag(DragEndReason::CaptureLost)
    }

    /// Abort the drag and put the item back where it started.
    pub fn cancel_drag(&mut self) -> InputOutcome {
        let Some(end) = self.input_state.end_drag(DragEndReason::Cancelled) else {
            return InputOutcome::Ignored;
        };
        let item_id = end.session.item_id();
        self.board.move_item(item_id, end.session.origin());
        debug!(item_id, "drag cancelled");
        InputOutcome::DragEnded(item_id)
    }

    fn finish_drag(&mut self, reason: DragEndReason) -> InputOutcome {
        let Some(end) = self.input_state.end_drag(reason) else {
            return InputOutcome::Ignored;
        };
        let item_id = end.session.item_id();

        if reason == DragEndReason::PointerUp && self.settings.snap_on_release {
            if let Some(item) = self.board.get_item(item_id) {
                let mut snapped = snap_to_grid(item.position, self.settings.grid_size);
                if let Some(bounds) = self.drag_bounds() {
                    snapped = constrain_to_parent(snapped, item.size, bounds);
                }
                self.board.move_item(item_id, snapped);
            }
        }

        debug!(item_id, ?reason, moves = end.session.moves(), "drag ended");
        InputOutcome::DragEnded(item_id)
    }
}
