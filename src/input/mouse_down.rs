//! Pointer-down handling - hit testing, selection, drag and edit start.
//!
//! Hit testing goes through the board's R-tree, then picks the topmost
//! candidate by render layer.

use super::coords::CoordinateConverter;
use super::events::{InputOutcome, PointerButton, PointerEvent, PressRegion};
use crate::editor::BoardEditor;
use crate::profile_scope;
use tracing::{debug, warn};

impl BoardEditor {
    pub fn handle_pointer_down(&mut self, event: PointerEvent) -> InputOutcome {
        profile_scope!("handle_pointer_down");

        if event.button != PointerButton::Primary {
            return InputOutcome::Ignored;
        }

        let surface_pos = CoordinateConverter::screen_to_surface(event.position, self.surface_origin);
        let Some(item_id) = self.hit_test(surface_pos) else {
            // Background click
            if self.selected.take().is_some() {
                debug!("selection cleared");
                return InputOutcome::SelectionCleared;
            }
            return InputOutcome::Ignored;
        };

        if event.region == PressRegion::Control {
            return InputOutcome::Ignored;
        }

        if event.modifiers.is_edit() {
            return match self.begin_edit(item_id) {
                Ok(()) => InputOutcome::EditStarted(item_id),
                Err(e) => {
                    debug!(item_id, error = %e, "edit modifier press ignored");
                    InputOutcome::Ignored
                }
            };
        }

        let Some(position) = self.board.get_item(item_id).map(|item| item.position) else {
            warn!(item_id, "hit item missing from board");
            return InputOutcome::Ignored;
        };
        let offset = surface_pos - position;

        self.selected = Some(item_id);
        self.input_state.start_dragging(item_id, offset, position);
        debug!(item_id, ?offset, "drag started");
        InputOutcome::DragStarted(item_id)
    }
}
